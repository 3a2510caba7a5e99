//! Game session: one history, one transition function.

use super::action::{Command, Transition};
use super::contracts::{LegalMove, assert_invariants};
use super::history::GameHistory;
use super::rules::check_winner;
use super::view::{GameView, HistoryEntry};
use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status of the board at the cursor.
///
/// Derived from the current snapshot on every call, never stored, so
/// jumping back from a won position re-opens play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line is complete; moves are accepted.
    InProgress,
    /// A line is complete; moves are rejected.
    Won(Player),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress => None,
        }
    }
}

/// State of one game of tic-tac-toe.
///
/// Owned by whoever drives the game; every interaction goes through
/// [`GameSession::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    history: GameHistory,
}

impl GameSession {
    /// Creates a session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
        }
    }

    /// Returns the history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Status of the snapshot at the cursor.
    pub fn status(&self) -> GameStatus {
        match check_winner(&self.history.board()) {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress,
        }
    }

    /// Applies a command and reports its effect.
    ///
    /// Illegal moves come back as [`Transition::Rejected`] with history
    /// and cursor untouched.
    ///
    /// # Panics
    ///
    /// Panics on [`Command::JumpTo`] with an index outside the history.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn apply(&mut self, command: Command) -> Transition {
        let transition = match command {
            Command::MoveAt(position) => self.place(position),
            Command::JumpTo(index) => self.jump(index),
        };

        if transition.is_applied() {
            assert_invariants(&self.history);
        }
        transition
    }

    fn place(&mut self, position: Position) -> Transition {
        let (board, player) = self.history.current();

        if let Err(rejection) = LegalMove::check(position, &board) {
            debug!(%rejection, "Move rejected");
            return Transition::Rejected(rejection);
        }

        self.history.record_move(board.with_mark(position, player));
        let winner = check_winner(&self.history.board());
        if let Some(winner) = winner {
            info!(%winner, "Game won");
        }

        Transition::Moved {
            player,
            position,
            winner,
        }
    }

    fn jump(&mut self, index: usize) -> Transition {
        let from = self.history.cursor();
        self.history.jump_to(index);
        Transition::Jumped { from, to: index }
    }

    /// Status line for the current snapshot.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::Won(winner) => format!("Winner: {}", winner),
            GameStatus::InProgress => format!("Next player: {}", self.history.to_move()),
        }
    }

    /// Everything a renderer needs after an interaction.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let cursor = self.history.cursor();
        let history = (0..self.history.len())
            .map(|index| HistoryEntry::new(index, index == cursor))
            .collect();

        GameView {
            board: self.history.board(),
            status: self.status(),
            to_move: self.history.to_move(),
            status_text: self.status_text(),
            is_draw: super::rules::is_draw(&self.history.board()),
            history,
        }
    }
}

/// Convenience for driving a session from a known list of commands.
///
/// Each command goes through [`GameSession::apply`] and its [`Transition`]
/// is discarded; call `apply` directly when the outcome matters.
///
/// # Panics
///
/// Panics on [`Command::JumpTo`] with an index outside the history.
impl Extend<Command> for GameSession {
    fn extend<T: IntoIterator<Item = Command>>(&mut self, commands: T) {
        for command in commands {
            self.apply(command);
        }
    }
}

/// Builds a session by extending a fresh one.
///
/// # Panics
///
/// Panics on [`Command::JumpTo`] with an index outside the history.
impl FromIterator<Command> for GameSession {
    fn from_iter<T: IntoIterator<Item = Command>>(commands: T) -> Self {
        let mut session = Self::new();
        session.extend(commands);
        session
    }
}
