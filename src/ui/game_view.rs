use super::board_widget::{board_lines, player_color};
use crate::game::{GameState, Outcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    input: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Command line
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_input(frame, game_state, input, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: ratatui::layout::Rect) {
    let player = game_state.active_player();
    let board = game_state.board();
    let rules = format!(
        "{}x{}  |  Connect {}",
        board.columns(),
        board.rows(),
        game_state.win_length()
    );

    let status = match game_state.outcome() {
        Outcome::Won(winner) => format!("Player ( {} ) Wins!!  |  {}", winner.mark(), rules),
        Outcome::InProgress if game_state.is_stalemate() => format!("Board full  |  {}", rules),
        Outcome::InProgress => format!("Current Player: ( {} )  |  {}", player.mark(), rules),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect N"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let highlight = game_state.last_move().map(|m| m.position);
    let lines = board_lines(game_state.board(), selected_column, highlight);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_input(frame: &mut Frame, game_state: &GameState, input: &str, area: ratatui::layout::Rect) {
    let prompt = if game_state.is_over() || game_state.is_stalemate() {
        "Play again? (y/n) : "
    } else {
        "Command: "
    };
    let line = Line::from(vec![
        Span::styled(prompt, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(input.to_string()),
        Span::styled("_", Style::default().fg(Color::Cyan)),
    ]);

    let widget = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→: Select column  |  Enter: Drop / run command  |  Esc: Quit");
    let line2 = Line::from("Commands: <column number>  save  load  restart  quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
