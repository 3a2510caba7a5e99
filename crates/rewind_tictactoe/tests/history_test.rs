//! Tests for the snapshot history and its cursor.

use rewind_tictactoe::{Board, GameHistory, Player, Position};

fn play_all(history: &mut GameHistory, positions: &[Position]) {
    for pos in positions {
        let (board, player) = history.current();
        history.record_move(board.with_mark(*pos, player));
    }
}

#[test]
fn test_record_after_jump_is_append_only_relative_to_cursor() {
    let moves = [
        Position::Center,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::MiddleLeft,
    ];

    for k in 0..=moves.len() {
        let mut history = GameHistory::new();
        play_all(&mut history, &moves);
        let before = history.snapshots().to_vec();

        history.jump_to(k);
        let next = history.board().with_mark(Position::BottomRight, history.to_move());
        history.record_move(next);

        assert_eq!(history.len(), k + 2, "jump_to({k})");
        assert_eq!(&history.snapshots()[..=k], &before[..=k]);
        assert_eq!(history.snapshots()[k + 1], next);
        assert_eq!(history.cursor(), k + 1);
    }
}

#[test]
fn test_turn_follows_cursor_parity() {
    let mut history = GameHistory::new();
    play_all(
        &mut history,
        &[
            Position::Center,
            Position::TopLeft,
            Position::TopRight,
            Position::BottomLeft,
        ],
    );

    for c in 0..history.len() {
        history.jump_to(c);
        let expected = if c % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(history.to_move(), expected, "cursor {c}");
        assert_eq!(history.current().1, expected);
    }
}

#[test]
fn test_jump_changes_only_cursor() {
    let mut history = GameHistory::new();
    play_all(&mut history, &[Position::Center, Position::TopLeft]);
    let snapshots = history.snapshots().to_vec();

    history.jump_to(1);
    assert_eq!(history.snapshots(), snapshots.as_slice());
    assert_eq!(history.board(), Board::new().with_mark(Position::Center, Player::X));
}

#[test]
fn test_jump_to_current_is_harmless() {
    let mut history = GameHistory::new();
    play_all(&mut history, &[Position::Center]);
    let before = history.clone();
    history.jump_to(1);
    assert_eq!(history, before);
}

#[test]
#[should_panic]
fn test_jump_past_end_fails_fast() {
    let mut history = GameHistory::new();
    play_all(&mut history, &[Position::Center]);
    history.jump_to(2);
}
