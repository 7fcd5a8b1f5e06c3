//! Core connect-N game logic: board representation, player types, win
//! detection and the game state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameState, LastMove, Outcome};
pub use win::Axis;

/// Default run length needed to win.
pub const DEFAULT_WIN_LENGTH: usize = 4;
