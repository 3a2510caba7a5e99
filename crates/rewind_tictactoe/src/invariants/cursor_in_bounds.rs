//! Cursor invariant: the cursor always selects a stored snapshot.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `0 <= cursor < len` and the history is never empty.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.cursor() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Cursor selects a stored snapshot"
    }
}
