use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;
use super::win;
use crate::error::InvalidMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Won(Player),
}

/// Where the most recent piece landed and whose it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub position: usize,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    win_length: usize,
    active_player: Player,
    last_move: Option<LastMove>,
    outcome: Outcome,
}

impl GameState {
    /// Create a fresh game. Dimensions and win length are assumed to be
    /// validated by the caller.
    pub fn new(columns: usize, rows: usize, win_length: usize) -> Self {
        GameState {
            board: Board::new(columns, rows),
            win_length,
            active_player: Player::First,
            last_move: None,
            outcome: Outcome::InProgress,
        }
    }

    /// Reassemble a state from decoded parts.
    pub(crate) fn from_parts(
        board: Board,
        win_length: usize,
        active_player: Player,
        last_move: Option<LastMove>,
        outcome: Outcome,
    ) -> Self {
        GameState {
            board,
            win_length,
            active_player,
            last_move,
            outcome,
        }
    }

    /// Player whose turn it is, or the winner once the game is over.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// No column has room left and nobody has won.
    pub fn is_stalemate(&self) -> bool {
        !self.is_over() && self.board.is_full()
    }

    /// Drop the active player's piece into `column`.
    ///
    /// Either commits the whole move or returns an error with nothing
    /// changed. The active player only flips when the move does not win.
    pub fn place(&mut self, column: isize) -> Result<Outcome, InvalidMove> {
        if !self.board.column_is_in_range(column) {
            return Err(InvalidMove::OutOfRange);
        }
        let column = column as usize;
        if !self.board.column_has_space(column) {
            return Err(InvalidMove::ColumnFull);
        }
        if self.is_over() {
            return Err(InvalidMove::GameOver);
        }

        let player = self.active_player;
        let position = self.board.drop_piece(column, player)?;
        self.last_move = Some(LastMove { position, player });
        tracing::debug!(column, position, player = player.name(), "piece placed");

        if let Some(axis) = win::winning_axis(&self.board, position, player, self.win_length) {
            tracing::info!(player = player.name(), axis = ?axis, "game won");
            self.outcome = Outcome::Won(player);
        } else {
            self.active_player = player.next();
        }
        Ok(self.outcome)
    }

    /// A fresh game with the same dimensions and win length.
    pub fn reset(&self) -> GameState {
        GameState::new(self.board.columns(), self.board.rows(), self.win_length)
    }

    /// The axis the winning piece completed, if the game has been won.
    pub fn winning_axis(&self) -> Option<win::Axis> {
        let Outcome::Won(player) = self.outcome else {
            return None;
        };
        let last = self.last_move?;
        win::winning_axis(&self.board, last.position, player, self.win_length)
    }
}
