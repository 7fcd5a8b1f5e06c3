use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use connect_n::config::{AppConfig, Launch, LaunchArgs};
use connect_n::game::GameState;
use connect_n::persistence::SaveFile;
use connect_n::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play connect-N in the terminal.
#[derive(Parser)]
#[command(name = "connect_n", about = "Connect Four on any board size", disable_help_flag = true)]
struct Cli {
    /// The width of the game board
    #[arg(short, long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// The height of the game board
    #[arg(short = 'h', long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Sets width and height
    #[arg(short, long, allow_negative_numbers = true)]
    square: Option<i64>,

    /// The connect length to win
    #[arg(short, long, allow_negative_numbers = true)]
    connect: Option<i64>,

    /// Load previous game
    #[arg(short, long)]
    load: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl From<&Cli> for LaunchArgs {
    fn from(cli: &Cli) -> Self {
        LaunchArgs {
            width: cli.width,
            height: cli.height,
            square: cli.square,
            connect: cli.connect,
            load: cli.load,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(log_file) = &config.log_file {
        connect_n::logging::init_log_file(log_file)
            .with_context(|| format!("opening log file {}", log_file.display()))?;
    }

    let launch = LaunchArgs::from(&cli).resolve(&config.game)?;

    let save_file = SaveFile::new(&config.save_file);
    save_file.ensure_exists()?;

    let game_state = match launch {
        Launch::New {
            columns,
            rows,
            win_length,
        } => GameState::new(columns, rows, win_length),
        Launch::Resume => save_file.load()?,
    };
    tracing::info!(
        columns = game_state.board().columns(),
        rows = game_state.board().rows(),
        win_length = game_state.win_length(),
        "starting game"
    );
    tracing::debug!("board:\n{}", game_state.board());

    run(App::new(game_state, save_file)).context("terminal error")
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
