//! Interactive play session: parses lines, drives the engine, prints frames.
//!
//! The session holds no rules of its own. Every command maps onto one engine
//! operation and the reply is rendered from the resulting snapshot.

use crate::command::{LineCommand, USAGE};
use crate::config::SkirmishConfig;
use crate::render;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_skirmish::{Phase, Skirmish};
use tracing::{debug, info, instrument};

/// One game played over a line-oriented stream.
#[derive(Debug)]
pub struct Session {
    game: Skirmish,
    config: SkirmishConfig,
    json: bool,
}

impl Session {
    /// Creates a session over a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: SkirmishConfig, json: bool) -> Self {
        Self {
            game: Skirmish::new(),
            config,
            json,
        }
    }

    /// The engine being driven.
    pub fn game(&self) -> &Skirmish {
        &self.game
    }

    /// Handles one input line.
    ///
    /// Returns the reply to print, or `None` when the player quits. Rule
    /// violations and unparseable lines are part of the reply, not errors.
    ///
    /// # Errors
    ///
    /// Only if the state cannot be serialized.
    #[instrument(skip(self))]
    pub fn handle(&mut self, line: &str) -> Result<Option<String>> {
        let command = match line.parse::<LineCommand>() {
            Ok(command) => command,
            Err(e) => return Ok(Some(format!("{e}\n{USAGE}"))),
        };
        debug!(?command, "Parsed command");

        let reply = match command {
            LineCommand::Quit => return Ok(None),
            LineCommand::Help => USAGE.to_string(),
            LineCommand::Moves => render::moves(&self.game.enumerate_moves()),
            LineCommand::Log => render::history(self.game.log()),
            LineCommand::State => serde_json::to_string_pretty(self.game.state())?,
            LineCommand::Start => {
                self.game.start();
                self.frame()?
            }
            LineCommand::Reset => {
                if !self.game.reset() {
                    return Ok(Some("Reset is only available once a player has won.".to_string()));
                }
                self.frame()?
            }
            LineCommand::Click(pos) => {
                // A rejected click is rendered from `Skirmish::error` in the frame.
                if let Err(violation) = self.game.select_or_toggle(pos) {
                    debug!(%violation, "Click rejected");
                }
                self.after_action(self.game.selection().is_some())?
            }
            LineCommand::Move(direction) => {
                let moved = match self.game.apply_labelled(direction) {
                    Ok(()) => true,
                    Err(violation) => {
                        debug!(%violation, "Move rejected");
                        false
                    }
                };
                self.after_action(false)? + &self.history_if(moved && !self.json)
            }
        };
        Ok(Some(reply))
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// I/O failures on either stream.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}\n{}", self.frame()?, USAGE)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match self.handle(&line)? {
                Some(reply) => writeln!(output, "{reply}")?,
                None => break,
            }
            output.flush()?;
        }

        info!(moves = self.game.log().len(), "Session ended");
        Ok(())
    }

    fn frame(&self) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string(self.game.state())?)
        } else {
            Ok(render::frame(self.game.state(), self.game.error()))
        }
    }

    fn after_action(&self, list_moves: bool) -> Result<String> {
        let mut out = self.frame()?;
        let combat = self.game.phase() == Phase::Combat && !self.game.state().is_over();
        if list_moves && combat && *self.config.show_moves() && !self.json {
            out.push('\n');
            out.push_str(&render::moves(&self.game.enumerate_moves()));
        }
        Ok(out)
    }

    fn history_if(&self, show: bool) -> String {
        if show && *self.config.show_history() {
            format!("\n{}", render::history(self.game.log()))
        } else {
            String::new()
        }
    }
}
