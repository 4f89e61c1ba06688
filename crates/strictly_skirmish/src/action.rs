//! First-class action types.
//!
//! Actions are the player's intent. They are validated and applied as pure
//! transitions from one game snapshot to the next.

use crate::catalog::Direction;
use crate::types::{Owner, Position, Target};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A combat move: a player sending the piece at `from` toward `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub mover: Owner,
    /// Square of the moving piece.
    pub from: Position,
    /// Requested destination, possibly off the board.
    pub to: Target,
    /// Direction label the player picked.
    pub direction: Direction,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mover: Owner, from: Position, to: Target, direction: Direction) -> Self {
        Self {
            mover,
            from,
            to,
            direction,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} {} -> {}", self.mover, self.direction, self.from, self.to)
    }
}

/// Anything the collaborator can ask the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A click on a square: select, deselect, swap, or move depending on
    /// phase and current selection.
    Select(Position),
    /// Setup-phase swap of the selected piece with the piece on `target`.
    Swap(Position),
    /// Combat move of the selected piece.
    Move {
        /// Requested destination.
        to: Target,
        /// Direction label of the chosen move.
        direction: Direction,
    },
    /// Start the game, or start over once it has been won.
    Start,
    /// Start over once the game has been won.
    Reset,
}
