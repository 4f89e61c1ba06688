//! Line commands typed at the `play` prompt.

use derive_more::{Display, Error};
use std::str::FromStr;
use strictly_skirmish::{Direction, Position};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCommand {
    /// `click R C`: click the square at row `R`, column `C`.
    Click(Position),
    /// `move LABEL`: move the selected piece by a labelled move.
    Move(Direction),
    /// `start`: begin combat, or start over after a win.
    Start,
    /// `reset`: start over after a win.
    Reset,
    /// `moves`: list the selected piece's legal moves.
    Moves,
    /// `log`: print the move log.
    Log,
    /// `state`: print the game state as JSON.
    State,
    /// `help`: list commands.
    Help,
    /// `quit`: leave the game.
    Quit,
}

/// Usage text printed by `help` and after a bad line.
pub const USAGE: &str =
    "Commands: click R C | move LABEL | start | reset | moves | log | state | help | quit";

/// A line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised command '{}': {}", line, reason)]
pub struct ParseCommandError {
    /// The offending line, trimmed.
    pub line: String,
    /// What was wrong with it.
    pub reason: String,
}

impl ParseCommandError {
    fn new(line: &str, reason: impl Into<String>) -> Self {
        Self {
            line: line.trim().to_string(),
            reason: reason.into(),
        }
    }
}

impl FromStr for LineCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ParseCommandError::new(line, "empty line"));
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_lowercase().as_str(), args.as_slice()) {
            ("click" | "c", [row, col]) => {
                let row: usize = row
                    .parse()
                    .map_err(|_| ParseCommandError::new(line, "row must be a number"))?;
                let col: usize = col
                    .parse()
                    .map_err(|_| ParseCommandError::new(line, "column must be a number"))?;
                let pos = Position::new(row, col)
                    .map_err(|_| ParseCommandError::new(line, "square is off the board"))?;
                LineCommand::Click(pos)
            }
            ("click" | "c", _) => {
                return Err(ParseCommandError::new(line, "expected 'click ROW COL'"));
            }
            ("move" | "m", [label]) => Direction::from_label(label)
                .map(LineCommand::Move)
                .ok_or_else(|| ParseCommandError::new(line, "unknown move label"))?,
            ("move" | "m", _) => {
                return Err(ParseCommandError::new(line, "expected 'move LABEL'"));
            }
            ("start", []) => LineCommand::Start,
            ("reset", []) => LineCommand::Reset,
            ("moves", []) => LineCommand::Moves,
            ("log", []) => LineCommand::Log,
            ("state", []) => LineCommand::State,
            ("help" | "?", []) => LineCommand::Help,
            ("quit" | "q" | "exit", []) => LineCommand::Quit,
            _ => return Err(ParseCommandError::new(line, "see 'help'")),
        };
        Ok(command)
    }
}
