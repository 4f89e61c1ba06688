//! Phase and selection types.

use crate::types::{Occupant, Position};
use serde::{Deserialize, Serialize};

/// Which stage the game is in.
///
/// A won game stays in `Combat`; the winner is reported separately.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Players rearrange their home rows.
    Setup,
    /// Players alternate moves.
    Combat,
}

/// The currently selected square and what stood there when it was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Selected square.
    pub position: Position,
    /// Occupant at selection time.
    pub occupant: Occupant,
}

impl Selection {
    /// Creates a new selection.
    pub fn new(position: Position, occupant: Occupant) -> Self {
        Self { position, occupant }
    }

    /// True when `pos` is the selected square.
    pub fn is_at(&self, pos: Position) -> bool {
        self.position == pos
    }
}
