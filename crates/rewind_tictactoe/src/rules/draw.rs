//! Draw detection for tic-tac-toe.
//!
//! [`check_winner`](super::check_winner) reports `None` for both an
//! unfinished game and a draw. Callers that want to tell the two apart
//! use these helpers.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
