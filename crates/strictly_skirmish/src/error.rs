//! Error types for the skirmish engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A gameplay rule the player broke.
///
/// Every violation is recoverable: the game state stays as it was (apart
/// from the selection rules documented on each operation) and the violation
/// becomes the current error shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum RuleViolation {
    /// An empty square was clicked with nothing selected, or a move was
    /// requested without a selected piece.
    #[display("No character selected.")]
    NoCharacterSelected,

    /// The clicked piece belongs to the player who is not moving.
    #[display("It is not your turn.")]
    NotYourTurn,

    /// Setup swap across rows, onto an empty square, or between owners.
    #[display("Invalid swap. Try again.")]
    InvalidSwap,

    /// The destination holds one of the mover's own pieces.
    #[display("Invalid move: Cannot attack a friendly character.")]
    FriendlyFire,

    /// The piece cannot move that way.
    #[display("Invalid move: The move is not valid for this character.")]
    IllegalGeometry,

    /// The destination lies off the board.
    #[display("Invalid move: Out of bounds.")]
    OutOfBounds,

    /// A combat move was requested before the game started.
    #[display("The game has not started yet.")]
    NotStarted,

    /// A postcondition failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RuleViolation {}

/// A coordinate outside the 5x5 board reached the engine.
///
/// This is a programming error in the caller and is kept apart from
/// [`RuleViolation::OutOfBounds`], which covers a destination a player chose.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Coordinate ({}, {}) is off the board at {}:{}", row, col, file, line)]
pub struct CoordinateError {
    /// Requested row.
    pub row: i64,
    /// Requested column.
    pub col: i64,
    /// Line number where the coordinate was built.
    pub line: u32,
    /// Source file where the coordinate was built.
    pub file: &'static str,
}

impl CoordinateError {
    /// Creates a new coordinate error with caller location tracking.
    #[track_caller]
    pub fn new(row: i64, col: i64) -> Self {
        let loc = std::panic::Location::caller();
        tracing::warn!(row, col, file = loc.file(), line = loc.line(), "Off-board coordinate");
        Self {
            row,
            col,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
