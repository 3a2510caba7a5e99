//! End-to-end game scenarios through the session's command interface.

use rewind_tictactoe::{
    Command, GameSession, GameStatus, Player, Position, Rejection, Transition, check_winner,
};

fn moves(indices: &[usize]) -> Vec<Command> {
    indices
        .iter()
        .map(|i| Command::MoveAt(Position::from_index(*i).expect("valid index")))
        .collect()
}

#[test]
fn test_column_win_blocks_further_moves() {
    let mut session: GameSession = moves(&[0, 1, 3, 4, 6]).into_iter().collect();

    assert_eq!(check_winner(&session.history().board()), Some(Player::X));
    assert_eq!(session.status(), GameStatus::Won(Player::X));

    let before = session.clone();
    let transition = session.apply(Command::MoveAt(Position::TopRight));
    assert_eq!(transition, Transition::Rejected(Rejection::GameWon(Player::X)));
    assert_eq!(session, before);
}

#[test]
fn test_winning_move_reports_winner() {
    let mut session: GameSession = moves(&[0, 1, 3, 4]).into_iter().collect();
    let transition = session.apply(Command::MoveAt(Position::BottomLeft));
    assert_eq!(
        transition,
        Transition::Moved {
            player: Player::X,
            position: Position::BottomLeft,
            winner: Some(Player::X),
        }
    );
}

#[test]
fn test_full_board_without_line_has_no_winner() {
    // X O X / X O O / O X X
    let session: GameSession = moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).into_iter().collect();

    assert_eq!(session.history().len(), 10);
    assert_eq!(check_winner(&session.history().board()), None);
    assert_eq!(session.status(), GameStatus::InProgress);

    let view = session.view();
    assert!(view.is_draw);
    // Draw is not part of the status line.
    assert_eq!(view.status_text, "Next player: O");
}

#[test]
fn test_branching_discards_old_future() {
    let mut session: GameSession = moves(&[4, 0, 8, 2]).into_iter().collect();
    assert_eq!(session.history().len(), 5);

    session.apply(Command::JumpTo(1));
    // Move 2 was O at TopLeft; branch with O at BottomCenter.
    let transition = session.apply(Command::MoveAt(Position::BottomCenter));
    assert!(transition.is_applied());

    let history = session.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    assert!(history.board().is_empty(Position::TopLeft));
    assert!(history.board().is_empty(Position::BottomRight));
    assert_eq!(history.to_move(), Player::X);
}

#[test]
fn test_jump_back_from_win_reopens_play() {
    let mut session: GameSession = moves(&[0, 1, 3, 4, 6]).into_iter().collect();

    session.apply(Command::JumpTo(4));
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.status_text(), "Next player: X");

    // X now plays elsewhere; the old winning snapshot is gone.
    session.apply(Command::MoveAt(Position::TopRight));
    assert_eq!(session.history().len(), 6);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.status_text(), "Next player: O");
}

#[test]
fn test_rejected_moves_leave_history_untouched() {
    let mut session: GameSession = moves(&[4]).into_iter().collect();
    let before = session.clone();

    assert!(!session.apply(Command::MoveAt(Position::Center)).is_applied());
    assert_eq!(session, before);
}

#[test]
fn test_view_lists_history_entries() {
    let mut session: GameSession = moves(&[4, 0]).into_iter().collect();
    session.apply(Command::JumpTo(1));

    let view = session.view();
    let labels: Vec<&str> = view.history.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);

    let current: Vec<usize> = view
        .history
        .iter()
        .filter(|e| e.is_current)
        .map(|e| e.index)
        .collect();
    assert_eq!(current, [1]);
    assert_eq!(view.to_move, Player::O);
    assert_eq!(view.status_text, "Next player: O");
}
