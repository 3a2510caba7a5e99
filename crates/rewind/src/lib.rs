//! Rewind - terminal tic-tac-toe with a time-travelling move history.
//!
//! The game rules and history live in [`rewind_tictactoe`]; this crate is
//! the rendering side: an interactive terminal UI, a script replayer, and
//! the configuration and logging around them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use replay::{Replay, ReplayError};
