//! Board snapshot history with a movable cursor.
//!
//! The history is an ordered list of immutable [`Board`] snapshots. Index 0
//! is always the empty board and index `i` is the board after move `i`.
//! The cursor selects the snapshot being displayed and played from.
//!
//! Rewinding only moves the cursor. Recording a move from a rewound cursor
//! drops every snapshot after it before appending, so the history stays
//! strictly linear and an abandoned future cannot be redone.

use super::contracts::HistoryIntact;
use super::types::{Board, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots plus the cursor into them.
///
/// Deserialized histories are checked against the history invariants, so
/// a stored session can never carry an empty history or a dangling cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    snapshots: Vec<Board>,
    cursor: usize,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    cursor: usize,
}

/// A deserialized history that breaks one or more invariants.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Corrupt history: {}", violations.join("; "))]
pub struct CorruptHistory {
    /// Descriptions of the violated invariants.
    pub violations: Vec<String>,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = CorruptHistory;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            cursor: raw.cursor,
        };
        HistoryIntact::check(&history).map_err(|violations| CorruptHistory {
            violations: violations.into_iter().map(|v| v.description).collect(),
        })?;
        Ok(history)
    }
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Records `next` as the successor of the snapshot at the cursor.
    ///
    /// Snapshots after the cursor are discarded, `next` is appended and the
    /// cursor moves onto it. Legality of the move is the caller's concern.
    #[instrument(skip(self, next), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn record_move(&mut self, next: Board) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Dropping rewound future");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;
        debug!(cursor = self.cursor, "Move recorded");
    }

    /// Moves the cursor to `index` without touching stored snapshots.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a stored snapshot. Callers only offer
    /// indices taken from this history, so an out-of-range index is a bug.
    #[instrument(skip(self), fields(from = self.cursor))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.snapshots.len(),
            "jump_to({index}) out of range for history of length {}",
            self.snapshots.len()
        );
        self.cursor = index;
        debug!(cursor = index, "Cursor moved");
    }

    /// Snapshot at the cursor and the player to move from it.
    pub fn current(&self) -> (Board, Player) {
        (self.board(), self.to_move())
    }

    /// Snapshot at the cursor.
    pub fn board(&self) -> Board {
        self.snapshots[self.cursor]
    }

    /// Player to move at the cursor.
    ///
    /// Derived from cursor parity: X moves on even cursors, O on odd ones.
    /// This is the only place the turn is computed.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.cursor + 1)
    }

    /// Cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of stored snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All stored snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Builds a history from raw parts without validation.
    #[cfg(any(test, kani))]
    pub(crate) fn from_parts(snapshots: Vec<Board>, cursor: usize) -> Self {
        Self { snapshots, cursor }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
