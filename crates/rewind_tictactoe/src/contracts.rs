//! Pre- and postconditions for session commands.
//!
//! Preconditions decide whether a move may be recorded. Postconditions
//! verify the history invariants after a command has been applied.

use super::action::Rejection;
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules::check_winner;
use super::{Board, Position};
use tracing::{instrument, warn};

/// Precondition: The square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the square at `pos` on `board`.
    #[instrument(skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), Rejection> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

/// Precondition: No line may be complete on the board being played from.
pub struct NoWinner;

impl NoWinner {
    /// Checks `board` for a completed line.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), Rejection> {
        match check_winner(board) {
            Some(winner) => Err(Rejection::GameWon(winner)),
            None => Ok(()),
        }
    }
}

/// Composite precondition: A move is legal if nobody has won yet and the
/// square is empty.
///
/// The win check comes first so a finished game reports
/// [`Rejection::GameWon`] even for an occupied square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move at `pos` on `board`.
    #[instrument(skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), Rejection> {
        NoWinner::check(board)?;
        SquareIsEmpty::check(pos, board)?;
        Ok(())
    }
}

/// Postcondition: All history invariants hold.
pub struct HistoryIntact;

impl HistoryIntact {
    /// Checks every history invariant, logging any violation.
    #[instrument(skip(history), fields(len = history.len(), cursor = history.cursor()))]
    pub fn check(history: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        HistoryInvariants::check_all(history).inspect_err(|violations| {
            for violation in violations {
                warn!(%violation, "History invariant violated");
            }
        })
    }
}

/// Asserts that all history invariants hold (debug builds only).
#[instrument(skip(history))]
pub fn assert_invariants(history: &GameHistory) {
    debug_assert!(
        HistoryIntact::check(history).is_ok(),
        "History invariants violated"
    );
}
