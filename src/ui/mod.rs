//! Terminal UI: the board, a message bar and a command prompt.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
