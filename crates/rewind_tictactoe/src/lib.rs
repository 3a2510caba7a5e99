//! Pure tic-tac-toe logic with a rewindable move history.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 snapshots of [`Square`]s
//! - **Rules**: stateless win and draw evaluation over one snapshot
//! - **History**: snapshots plus a cursor; rewinding then moving drops
//!   the abandoned future
//! - **Session**: [`GameSession`] consumes [`Command`]s and returns
//!   [`Transition`]s, exposing a [`GameView`] for rendering
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Command, GameSession, GameStatus, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.apply(Command::MoveAt(Position::Center));
//! session.apply(Command::JumpTo(0));
//! assert_eq!(session.history().len(), 2);
//! assert_eq!(session.history().to_move(), Player::X);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
mod history;
pub mod invariants;
mod kani_support;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Command, Rejection, Transition};
pub use game::{GameSession, GameStatus};
pub use history::{CorruptHistory, GameHistory};
pub use position::{Direction, Position};
pub use rules::{check_winner, is_draw, is_full, winning_line};
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryEntry};
