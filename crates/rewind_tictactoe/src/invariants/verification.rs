//! Kani proof harnesses for the history and win evaluation.

#[cfg(kani)]
mod proofs {
    use crate::invariants::{HistoryInvariants, InvariantSet};
    use crate::{Board, Command, GameSession, Player, Position, Square, check_winner};

    /// Fewer than five marks of a reachable board never complete a line.
    #[kani::proof]
    fn verify_no_early_winner() {
        let board: Board = kani::any();
        let count = |player| {
            board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(player))
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));
        kani::assume(x == o || x == o + 1);
        kani::assume(board.occupied() < 5);
        assert!(check_winner(&board).is_none());
    }

    /// Any two commands keep every history invariant.
    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_commands_preserve_invariants() {
        let mut session = GameSession::new();
        for _ in 0..2 {
            let index: usize = kani::any();
            kani::assume(index < 9);
            let command = if kani::any() {
                Command::MoveAt(Position::ALL[index])
            } else {
                kani::assume(index < session.history().len());
                Command::JumpTo(index)
            };
            session.apply(command);
        }
        assert!(HistoryInvariants::check_all(session.history()).is_ok());
    }
}
