//! Render-ready projection of a game session.

use super::game::GameStatus;
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Snapshot of everything a renderer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the cursor.
    pub board: Board,
    /// Status at the cursor.
    pub status: GameStatus,
    /// Player to move at the cursor (meaningful while in progress).
    pub to_move: Player,
    /// "Winner: X" or "Next player: O".
    pub status_text: String,
    /// Board full with no winner. Not reflected in `status_text`.
    pub is_draw: bool,
    /// One selectable entry per stored snapshot.
    pub history: Vec<HistoryEntry>,
}

/// A selectable history item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Snapshot index to jump to.
    pub index: usize,
    /// Button label.
    pub label: String,
    /// Whether this is the snapshot at the cursor.
    pub is_current: bool,
}

impl HistoryEntry {
    /// Creates the entry for snapshot `index`.
    pub fn new(index: usize, is_current: bool) -> Self {
        Self {
            index,
            label: Self::label_for(index),
            is_current,
        }
    }

    /// Label for snapshot `index`.
    pub fn label_for(index: usize) -> String {
        match index {
            0 => "Go to game start".to_string(),
            m => format!("Go to move #{}", m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(HistoryEntry::label_for(0), "Go to game start");
        assert_eq!(HistoryEntry::label_for(1), "Go to move #1");
        assert_eq!(HistoryEntry::label_for(7), "Go to move #7");
    }
}
