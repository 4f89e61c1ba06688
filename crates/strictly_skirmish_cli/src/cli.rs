//! Command-line interface for the skirmish driver.

use clap::{Parser, Subcommand};

/// Strictly Skirmish - 5x5 capture game in the terminal
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Play a 5x5 skirmish from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game, reading commands from stdin
    Play {
        /// Path to the driver config (optional)
        #[arg(short, long, default_value = "skirmish.toml")]
        config: std::path::PathBuf,

        /// Print the game state as JSON after every command
        #[arg(long)]
        json: bool,
    },

    /// Replay a saved JSON snapshot and print its board and log
    Replay {
        /// Path to a snapshot written by the `state` command
        snapshot: std::path::PathBuf,
    },
}
