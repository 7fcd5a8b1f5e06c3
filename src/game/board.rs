use std::fmt;

use super::player::Player;
use crate::error::InvalidMove;

/// Default board width.
pub const DEFAULT_COLUMNS: usize = 7;
/// Default board height.
pub const DEFAULT_ROWS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Owned(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A `columns × rows` grid stored row-major.
///
/// `index = row * columns + col`, with row 0 at the bottom. Pieces settle
/// toward row 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: usize, rows: usize) -> Self {
        Board {
            columns,
            rows,
            cells: vec![Cell::Empty; columns * rows],
        }
    }

    /// Rebuild a board from a flat cell sequence. Returns `None` if the
    /// length does not match the dimensions.
    pub fn from_cells(columns: usize, rows: usize, cells: Vec<Cell>) -> Option<Self> {
        let expected = columns.checked_mul(rows)?;
        if cells.len() != expected {
            return None;
        }
        Some(Board { columns, rows, cells })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    pub fn row_of(&self, position: usize) -> usize {
        position / self.columns
    }

    pub fn col_of(&self, position: usize) -> usize {
        position % self.columns
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn cell(&self, position: usize) -> Cell {
        self.cells[position]
    }

    pub fn column_is_in_range(&self, col: isize) -> bool {
        col >= 0 && (col as usize) < self.columns
    }

    /// True if the top row of `col` is still empty. `col` must be in range.
    pub fn column_has_space(&self, col: usize) -> bool {
        self.rows > 0 && self.get(self.rows - 1, col).is_empty()
    }

    /// Find where a piece dropped into `col` would settle.
    pub fn landing_position(&self, col: usize) -> Result<usize, InvalidMove> {
        if col >= self.columns {
            return Err(InvalidMove::OutOfRange);
        }
        (0..self.rows)
            .map(|row| self.index(row, col))
            .find(|&position| self.cells[position].is_empty())
            .ok_or(InvalidMove::ColumnFull)
    }

    pub fn set(&mut self, position: usize, player: Player) {
        self.cells[position] = player.to_cell();
    }

    /// Drop a piece in a column, returns the position where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, InvalidMove> {
        let position = self.landing_position(col)?;
        self.set(position, player);
        Ok(position)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| !self.column_has_space(col))
    }

    /// First column with a piece resting above an empty cell, if any.
    pub fn floating_column(&self) -> Option<usize> {
        (0..self.columns).find(|&col| {
            let mut seen_empty = false;
            (0..self.rows).any(|row| {
                let empty = self.get(row, col).is_empty();
                let floating = seen_empty && !empty;
                seen_empty |= empty;
                floating
            })
        })
    }
}

impl fmt::Display for Board {
    /// Plain grid, top row first: `|X| |O|` between `-` rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.columns * 2 + 1);
        writeln!(f, "{rule}")?;
        for row in (0..self.rows).rev() {
            write!(f, "|")?;
            for col in 0..self.columns {
                let mark = self.get(row, col).owner().map_or(' ', Player::mark);
                write!(f, "{mark}|")?;
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(DEFAULT_COLUMNS, DEFAULT_ROWS);
        assert_eq!(board.len(), 49);
        assert!(board.is_empty());
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLUMNS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new(7, 6);

        let pos = board.drop_piece(3, Player::First).unwrap();
        assert_eq!(pos, 3); // Bottom row
        assert_eq!(board.get(0, 3), Cell::Owned(Player::First));

        let pos = board.drop_piece(3, Player::Second).unwrap();
        assert_eq!(pos, 10); // Stacked on top
        assert_eq!(board.row_of(pos), 1);
        assert_eq!(board.col_of(pos), 3);
    }

    #[test]
    fn test_landing_position_is_lowest_empty_row() {
        let mut board = Board::new(4, 5);
        for expected_row in 0..5 {
            let pos = board.landing_position(2).unwrap();
            assert_eq!(board.row_of(pos), expected_row);
            assert_eq!(board.col_of(pos), 2);
            board.set(pos, Player::Second);
        }
        assert_eq!(board.landing_position(2), Err(InvalidMove::ColumnFull));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(7, 6);
        for _ in 0..6 {
            board.drop_piece(0, Player::First).unwrap();
        }

        assert!(!board.column_has_space(0));
        assert!(board.column_has_space(1));
        let before = board.clone();
        assert_eq!(board.drop_piece(0, Player::Second), Err(InvalidMove::ColumnFull));
        assert_eq!(board, before);
    }

    #[test]
    fn test_column_range() {
        let board = Board::new(7, 6);
        assert!(board.column_is_in_range(0));
        assert!(board.column_is_in_range(6));
        assert!(!board.column_is_in_range(7));
        assert!(!board.column_is_in_range(-1));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3, 2);
        for col in 0..3 {
            for _ in 0..2 {
                board.drop_piece(col, Player::First).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert!(Board::from_cells(3, 3, vec![Cell::Empty; 8]).is_none());
        assert!(Board::from_cells(3, 3, vec![Cell::Empty; 9]).is_some());
    }

    #[test]
    fn test_floating_column() {
        let mut board = Board::new(3, 3);
        board.drop_piece(0, Player::First).unwrap();
        board.drop_piece(0, Player::Second).unwrap();
        board.drop_piece(2, Player::First).unwrap();
        assert_eq!(board.floating_column(), None);

        let cells = vec![
            Cell::Owned(Player::First),
            Cell::Empty,
            Cell::Empty,
            Cell::Owned(Player::First),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Owned(Player::Second),
            Cell::Empty,
        ];
        let board = Board::from_cells(3, 3, cells).unwrap();
        assert_eq!(board.floating_column(), Some(1));
    }

    #[test]
    fn test_display_top_row_first() {
        let mut board = Board::new(2, 2);
        board.drop_piece(0, Player::First).unwrap();
        board.drop_piece(0, Player::Second).unwrap();
        board.drop_piece(1, Player::First).unwrap();
        assert_eq!(board.to_string(), "-----\n|O| |\n-----\n|X|X|\n-----\n");
    }
}
