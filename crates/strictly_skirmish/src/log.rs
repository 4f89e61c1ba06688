//! Append-only record of executed combat moves.

use crate::capture::Capture;
use crate::catalog::Direction;
use crate::types::{Occupant, Owner, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One executed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct MoveRecord {
    /// Player who moved.
    mover: Owner,
    /// Piece that moved.
    occupant: Occupant,
    /// Direction label the move used.
    direction: Direction,
    /// Origin square.
    from: Position,
    /// Destination square.
    to: Position,
    /// Pieces the move removed.
    captures: Vec<Capture>,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} moved {} using move {}",
            self.mover, self.occupant, self.direction
        )
    }
}

/// Chronological move log, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    entries: Vec<MoveRecord>,
}

impl MoveLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub(crate) fn push(&mut self, entry: MoveRecord) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[MoveRecord] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&MoveRecord> {
        self.entries.last()
    }

    /// Display lines, e.g. `"A moved A-P1 using move B"`.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
