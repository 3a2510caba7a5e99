//! Non-interactive replay of a command script.
//!
//! Scripts are JSON arrays of [`Command`]s. They are user input, so jump
//! targets are validated here instead of reaching the session's fail-fast
//! contract.
//!
//! `demos/branching.json` plays four moves, rewinds to move 1 and branches:
//!
//! ```text
//! rewind replay demos/branching.json
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use rewind_tictactoe::{Command, GameSession, GameView, Transition};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Result of running a script.
#[derive(Debug, Clone, Getters, new)]
pub struct Replay {
    /// Session after the last command.
    session: GameSession,
    /// Effect of each command, in order.
    transitions: Vec<Transition>,
}

impl Replay {
    /// Number of commands that were ignored.
    pub fn rejected(&self) -> usize {
        self.transitions.iter().filter(|t| !t.is_applied()).count()
    }
}

/// Reads a command script from disk.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<Command>, ReplayError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ReplayError::new(format!("Failed to read script: {}", e)))?;
    let commands: Vec<Command> = serde_json::from_str(&content)
        .map_err(|e| ReplayError::new(format!("Failed to parse script: {}", e)))?;
    debug!(count = commands.len(), "Script loaded");
    Ok(commands)
}

/// Applies `commands` to a fresh session.
#[instrument(skip(commands), fields(count = commands.len()))]
pub fn run_script(commands: &[Command]) -> Result<Replay, ReplayError> {
    let mut session = GameSession::new();
    let mut transitions = Vec::with_capacity(commands.len());

    for (step, command) in commands.iter().enumerate() {
        if let Command::JumpTo(index) = command {
            let len = session.history().len();
            if *index >= len {
                warn!(step, index, len, "Jump target outside history");
                return Err(ReplayError::new(format!(
                    "Step {}: cannot jump to {} with {} snapshots",
                    step, index, len
                )));
            }
        }
        transitions.push(session.apply(*command));
    }

    let replay = Replay::new(session, transitions);
    info!(rejected = replay.rejected(), "Script applied");
    Ok(replay)
}

/// Formats a view as plain text.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(&view.board.display());
    out.push_str("\n\n");
    out.push_str(&view.status_text);
    if view.is_draw {
        out.push_str(" (draw)");
    }
    out.push('\n');
    for entry in &view.history {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.index, entry.label));
    }
    out
}

/// Loads, applies and prints a script.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn run(path: impl AsRef<Path>, json: bool) -> anyhow::Result<()> {
    let commands = load_script(path)?;
    let replay = run_script(&commands)?;
    let view = replay.session().view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }

    debug!(occupied = view.board.occupied(), "Replay printed");
    Ok(())
}

/// Replay error.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
