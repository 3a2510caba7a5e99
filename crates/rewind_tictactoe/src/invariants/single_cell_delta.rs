//! Snapshot chain invariant: each move fills exactly one empty square.

use super::Invariant;
use crate::{Board, GameHistory, Square};

/// Invariant: snapshot 0 is empty and each later snapshot differs from its
/// predecessor in exactly one square, which was empty before.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();

        if snapshots.first() != Some(&Board::new()) {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let changed = pair[0].diff(&pair[1]);
            changed.len() == 1 && pair[0].get(changed[0]) == Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square of its predecessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_chain_of_single_moves_holds() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::TopLeft, Player::O);
        let history = GameHistory::from_parts(vec![Board::new(), first, second], 2);
        assert!(SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_nonempty_start_violates() {
        let start = Board::new().with_mark(Position::Center, Player::X);
        let history = GameHistory::from_parts(vec![start], 0);
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let history = GameHistory::from_parts(vec![Board::new(), Board::new()], 1);
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let overwritten = Board::new().with_mark(Position::Center, Player::O);
        let history = GameHistory::from_parts(vec![Board::new(), first, overwritten], 2);
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }
}
