//! Commands accepted by a game session and what became of them.
//!
//! Every user interaction is a [`Command`]. The session answers each one
//! with a [`Transition`] describing the effect, so a renderer never has to
//! inspect state before and after to learn what happened.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A user interaction, decoupled from any event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Place the current player's mark at a position.
    MoveAt(Position),
    /// Move the history cursor to a snapshot index.
    JumpTo(usize),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::MoveAt(pos) => write!(f, "move at {}", pos.label()),
            Command::JumpTo(index) => write!(f, "jump to {}", index),
        }
    }
}

/// Why a move was turned away.
///
/// Rejections are ordinary outcomes of clicking around, not errors: the
/// session ignores the move and leaves history and cursor as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game already won by {}", _0)]
    GameWon(Player),
}

/// Effect of applying a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// A mark was placed and recorded as a new snapshot.
    Moved {
        /// Player whose mark was placed.
        player: Player,
        /// Where it was placed.
        position: Position,
        /// Winner on the new snapshot, if the move completed a line.
        winner: Option<Player>,
    },
    /// The cursor moved.
    Jumped {
        /// Cursor before the jump.
        from: usize,
        /// Cursor after the jump.
        to: usize,
    },
    /// The move was ignored.
    Rejected(Rejection),
}

impl Transition {
    /// Whether history or cursor changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Transition::Rejected(_))
    }
}
