//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travelling move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe where any past move can be revisited", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a JSON command script and print the final view
    Replay {
        /// JSON array of commands, e.g. [{"move_at":"Center"},{"jump_to":0}]
        script: PathBuf,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
    }

    #[test]
    fn test_replay_arguments() {
        let cli =
            Cli::try_parse_from(["rewind", "replay", "game.json", "--json", "-c", "alt.toml"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                script: PathBuf::from("game.json"),
                json: true,
            })
        );
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }
}
