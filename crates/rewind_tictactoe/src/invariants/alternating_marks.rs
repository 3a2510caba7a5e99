//! Alternating marks invariant: X, O, X, O, ... by snapshot index.

use super::Invariant;
use crate::{GameHistory, Player, Square};

/// Invariant: the square filled by snapshot `i` holds the mark of
/// [`Player::for_ply(i)`](Player::for_ply).
///
/// Together with the cursor-parity turn this keeps the displayed turn and
/// the marks on the board in agreement after any jump.
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let expected = Square::Occupied(Player::for_ply(i + 1));
                pair[0]
                    .diff(&pair[1])
                    .iter()
                    .all(|pos| pair[1].get(*pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
