//! Win detection around the most recently placed piece.

use super::board::{Board, Cell};
use super::player::Player;

/// One of the four lines a run can lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Bottom-left to top-right.
    Ascending,
    /// Top-left to bottom-right.
    Descending,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::Ascending,
        Axis::Descending,
    ];

    /// Walk directions as `(dcol, drow)`.
    ///
    /// Vertical only looks down: nothing can sit above the piece just placed.
    fn directions(self) -> &'static [(isize, isize)] {
        match self {
            Axis::Vertical => &[(0, -1)],
            Axis::Horizontal => &[(-1, 0), (1, 0)],
            Axis::Ascending => &[(-1, -1), (1, 1)],
            Axis::Descending => &[(-1, 1), (1, -1)],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Vertical => "vertically",
            Axis::Horizontal => "horizontally",
            Axis::Ascending | Axis::Descending => "diagonally",
        }
    }
}

/// Count `player`'s consecutive cells from `position` along one direction,
/// including `position` itself.
///
/// The index and the column are tracked together so a walk stops at the
/// left or right edge instead of wrapping onto a neighbouring row.
fn run_length(board: &Board, position: usize, player: Player, (dcol, drow): (isize, isize)) -> usize {
    let columns = board.columns() as isize;
    let len = board.len() as isize;
    let step = drow * columns + dcol;
    let target = Cell::Owned(player);

    let mut pos = position as isize;
    let mut col = board.col_of(position) as isize;
    let mut found = 0;
    while pos >= 0 && pos < len && col >= 0 && col < columns && board.cell(pos as usize) == target {
        found += 1;
        pos += step;
        col += dcol;
    }
    found
}

/// Length of the run through `position` on `axis`.
pub fn axis_count(board: &Board, position: usize, player: Player, axis: Axis) -> usize {
    let directions = axis.directions();
    let total: usize = directions
        .iter()
        .map(|&dir| run_length(board, position, player, dir))
        .sum();
    // Both walks of a two-way axis include the origin.
    total.saturating_sub(directions.len() - 1)
}

/// The first axis on which the piece at `position` completes a run of at
/// least `win_length`.
pub fn winning_axis(board: &Board, position: usize, player: Player, win_length: usize) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|&axis| axis_count(board, position, player, axis) >= win_length)
}

pub fn evaluate(board: &Board, position: usize, player: Player, win_length: usize) -> bool {
    winning_axis(board, position, player, win_length).is_some()
}
