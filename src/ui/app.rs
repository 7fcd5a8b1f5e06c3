use crate::command::Command;
use crate::error::{DecodeError, StoreError};
use crate::game::{GameState, Outcome};
use crate::persistence::SaveFile;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    save_file: SaveFile,
    selected_column: usize,
    input: String,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game_state: GameState, save_file: SaveFile) -> Self {
        let selected_column = game_state.board().columns() / 2; // Start in middle
        App {
            game_state,
            save_file,
            selected_column,
            input: String::new(),
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Run whatever is on the command line. An empty line drops a piece in
    /// the selected column.
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        if line.trim().is_empty() && !self.awaiting_rematch() {
            self.apply(Command::Drop(self.selected_column as isize));
            return;
        }

        match Command::parse(&line) {
            Ok(command) => self.apply(command),
            Err(e) => {
                self.message = Some(format!("Previous command '{}' was invalid ({e}), please try again", line.trim()));
            }
        }
    }

    fn awaiting_rematch(&self) -> bool {
        self.game_state.is_over() || self.game_state.is_stalemate()
    }

    pub fn apply(&mut self, command: Command) {
        self.message = None;

        if self.awaiting_rematch() {
            match command {
                Command::Yes | Command::Restart => self.restart(),
                Command::No | Command::Quit => self.should_quit = true,
                _ => self.message = Some("Invalid entry, please enter 'y' or 'n'".to_string()),
            }
            return;
        }

        match command {
            Command::Quit => self.should_quit = true,
            Command::Save => self.save(),
            Command::Load => self.load(),
            Command::Restart => self.restart(),
            Command::Drop(column) => self.drop_piece(column),
            Command::Yes | Command::No => {
                self.message = Some("Nothing to answer yet, enter a column number".to_string());
            }
        }
    }

    /// Drop piece in the given column
    fn drop_piece(&mut self, column: isize) {
        match self.game_state.place(column) {
            Ok(Outcome::Won(player)) => {
                let how = self
                    .game_state
                    .winning_axis()
                    .map(|axis| format!(" {}", axis.name()))
                    .unwrap_or_default();
                self.message = Some(format!("Player ( {} ) wins{how}!", player.mark()));
            }
            Ok(Outcome::InProgress) => {
                self.selected_column = column as usize;
                if self.game_state.is_stalemate() {
                    self.message = Some("The board is full, nobody wins.".to_string());
                }
            }
            Err(e) => {
                self.message = Some(format!(
                    "Column {} is invalid: {e}, please try again",
                    column + 1
                ));
            }
        }
    }

    fn restart(&mut self) {
        self.game_state = self.game_state.reset();
        self.selected_column = self.game_state.board().columns() / 2;
        self.message = Some("New game started!".to_string());
        tracing::info!("game reset");
    }

    fn save(&mut self) {
        self.message = Some(match self.save_file.save(&self.game_state) {
            Ok(()) => "The current game state was saved".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                format!("Could not save: {e}")
            }
        });
    }

    fn load(&mut self) {
        self.message = Some(match self.save_file.load() {
            Ok(state) => {
                self.game_state = state;
                tracing::debug!("loaded board:\n{}", self.game_state.board());
                let columns = self.game_state.board().columns();
                self.selected_column = self.selected_column.min(columns - 1);
                "The last saved game state was loaded".to_string()
            }
            Err(StoreError::Decode(DecodeError::Empty)) => "There was no game save to load".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "load failed");
                format!("Could not load: {e}")
            }
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.input,
        );
    }
}
