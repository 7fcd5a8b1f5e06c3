//! # Connect N
//!
//! Connect Four generalised to any board size and run length, played in the
//! terminal. The engine is pure and synchronous; the terminal UI built with
//! Ratatui sits on top of it and owns the single live game.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win detection, state machine
//! - [`persistence`]: Snapshot codec and the save file
//! - [`command`]: Parsing prompt text into commands
//! - [`ui`]: Terminal UI: game view and input handling
//! - [`config`]: Launch arguments and TOML configuration
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Structured error types

pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod persistence;
pub mod ui;
