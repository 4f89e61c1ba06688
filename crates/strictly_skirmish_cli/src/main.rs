//! Strictly Skirmish - terminal driver
//!
//! Plays a 5x5 skirmish over stdin/stdout.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_skirmish::{GameInProgress, GameState};
use strictly_skirmish_cli::{Cli, Command, Session, SkirmishConfig, render};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, json } => run_play(config, json),
        Command::Replay { snapshot } => run_replay(snapshot),
    }
}

/// Installs the tracing subscriber on stderr so stdout carries only game output.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
fn run_play(config_path: std::path::PathBuf, json: bool) -> Result<()> {
    let config = SkirmishConfig::load_or_default(&config_path)?;
    init_tracing(config.log_filter());

    info!(config = %config_path.display(), json, "Starting skirmish");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(config, json).run(stdin.lock(), stdout.lock())
}

/// Rebuild a saved game from its log and print where it stands
#[instrument(fields(snapshot = %path.display()))]
fn run_replay(path: std::path::PathBuf) -> Result<()> {
    init_tracing("info");

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let saved: GameState = serde_json::from_str(&content).context("Failed to parse snapshot")?;

    let replayed: GameState = match &saved {
        GameState::Combat(game) => {
            GameInProgress::replay(*game.opening(), game.log().entries())?.into()
        }
        other => other.clone(),
    };
    if replayed.board() != saved.board() {
        anyhow::bail!("Snapshot board does not match its move log");
    }

    println!("{}", render::frame(&replayed, None));
    println!("{}", render::history(replayed.log()));
    info!(moves = replayed.log().len(), "Replay complete");
    Ok(())
}
