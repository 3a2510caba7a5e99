//! Application state and key handling.
//!
//! Key presses become [`Command`]s for the session; everything else here
//! is UI-local state (board cursor, focus, history selection).

use super::input;
use crossterm::event::KeyCode;
use rewind_tictactoe::{Command, GameSession, Position, Rejection, Transition};
use tracing::{debug, info, instrument};

/// Panel receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    last_rejection: Option<Rejection>,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            last_rejection: None,
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Reason the last move was ignored, cleared by the next accepted one.
    pub fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press, applying any resulting command.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Transition> {
        let command = self.command_for(key)?;
        let transition = self.session.apply(command);
        debug!(?transition, "Command applied");

        match transition {
            Transition::Rejected(rejection) => self.last_rejection = Some(rejection),
            _ => {
                self.last_rejection = None;
                self.selected = self.session.history().cursor();
            }
        }
        Some(transition)
    }

    /// Updates UI-local state for `key` and returns the session command it
    /// stands for, if any.
    fn command_for(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
                return None;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected = self.session.history().cursor();
                return None;
            }
            _ => {}
        }

        if let Some(pos) = input::digit_position(key) {
            self.cursor = pos;
            return Some(Command::MoveAt(pos));
        }

        match self.focus {
            Focus::Board => self.board_key(key),
            Focus::History => self.history_key(key),
        }
    }

    fn board_key(&mut self, key: KeyCode) -> Option<Command> {
        if let Some(direction) = input::direction(key) {
            self.cursor = self.cursor.step(direction);
            return None;
        }
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::MoveAt(self.cursor)),
            _ => None,
        }
    }

    fn history_key(&mut self, key: KeyCode) -> Option<Command> {
        let last = self.session.history().len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => return Some(Command::JumpTo(self.selected)),
            _ => {}
        }
        None
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
