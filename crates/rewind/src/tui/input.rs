//! Key decoding for board navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Direction, Position};

/// Arrow key to board direction.
pub fn direction(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Digit key `1`-`9` to the position it labels on the board.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Position::from_index(digit - 1)
        }
        _ => None,
    }
}
