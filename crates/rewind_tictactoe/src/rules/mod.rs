//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They hold no state and
//! know nothing about history, so any snapshot can be evaluated.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
