use crate::game::{Board, Cell, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::First => Color::Red,
        Player::Second => Color::Yellow,
    }
}

/// Column numbers written top to bottom, one digit per line, so wide
/// boards keep one character per column. `labels[line][col]`.
pub fn column_labels(columns: usize) -> Vec<Vec<char>> {
    let numbers: Vec<Vec<char>> = (1..=columns)
        .map(|n| n.to_string().chars().collect())
        .collect();
    let depth = numbers.iter().map(Vec::len).max().unwrap_or(0);

    (0..depth)
        .map(|line| {
            numbers
                .iter()
                .map(|digits| digits.get(line).copied().unwrap_or(' '))
                .collect()
        })
        .collect()
}

/// The framed board, top row first, with a selector above it and the
/// column numbers below. The piece at `highlight` is drawn bold.
pub fn board_lines(board: &Board, selected_column: usize, highlight: Option<usize>) -> Vec<Line<'static>> {
    let columns = board.columns();
    let mut lines = Vec::with_capacity(board.rows() + 6);

    // Selection indicator
    let mut indicator = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..columns {
        if col == selected_column {
            indicator.push(Span::styled(" ▼ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator.push(Span::raw("   "));
        }
    }
    indicator.push(Span::raw("  "));
    lines.push(Line::from(indicator));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..columns {
            let position = board.index(row, col);
            let span = match board.cell(position) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Owned(player) => {
                    let mut style = Style::default().fg(player_color(player));
                    if highlight == Some(position) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(format!(" {} ", player.mark()), style)
                }
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    for digits in column_labels(columns) {
        let mut spans = vec![Span::raw("   ")];
        for (col, digit) in digits.into_iter().enumerate() {
            let text = format!(" {digit} ");
            if col == selected_column {
                spans.push(Span::styled(
                    text,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw(text));
            }
        }
        spans.push(Span::raw("  "));
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_column_labels_single_digit() {
        let labels = column_labels(3);
        assert_eq!(labels, vec![vec!['1', '2', '3']]);
    }

    #[test]
    fn test_column_labels_stack_digits() {
        let labels = column_labels(11);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0][8], '9');
        assert_eq!(labels[1][8], ' ');
        assert_eq!((labels[0][9], labels[1][9]), ('1', '0'));
        assert_eq!((labels[0][10], labels[1][10]), ('1', '1'));
    }

    #[test]
    fn test_board_lines_layout() {
        let mut board = Board::new(2, 2);
        board.drop_piece(1, Player::First).unwrap();
        let lines = board_lines(&board, 1, None);

        // indicator, top rule, 2 rows, bottom rule, 1 label line
        assert_eq!(lines.len(), 6);
        assert_eq!(text(&lines[1]), "  ╔═══════╗");
        assert_eq!(text(&lines[2]), "  ║ .  .  ║");
        assert_eq!(text(&lines[3]), "  ║ .  X  ║");
        assert_eq!(text(&lines[5]), "    1  2   ");
        assert!(text(&lines[0]).contains('▼'));
    }
}
