//! Move legality and enumeration of legal destinations.

use crate::capture::path_blocked;
use crate::catalog::Direction;
use crate::types::{Board, Owner, PieceKind, Position, Target};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A destination the selected piece may move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalMove {
    /// Label shown on the move button.
    pub direction: Direction,
    /// Destination square.
    pub to: Position,
}

impl std::fmt::Display for LegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.direction, self.to)
    }
}

/// Checks geometry only: in bounds and shaped right for `kind`.
///
/// Bounds come first, so an off-board destination is illegal whatever its
/// shape.
#[instrument]
pub fn is_legal_move(kind: PieceKind, from: Position, to: Target) -> bool {
    if !to.in_bounds() {
        return false;
    }
    let (dr, dc) = from.delta_to(to);
    kind.permits(dr, dc)
}

/// Every in-bounds destination `kind` at `from` can reach for `owner`.
///
/// Destinations holding one of `owner`'s pieces are left out, as are charges
/// whose path square holds one. The order follows the direction labels:
/// `F B L R`, `2F 2B 2L 2R`, `FL FR BL BR`.
#[instrument(skip(board))]
pub fn legal_destinations(
    kind: PieceKind,
    from: Position,
    owner: Owner,
    board: &Board,
) -> Vec<LegalMove> {
    kind.geometry()
        .directions()
        .iter()
        .filter_map(|&direction| {
            let (dr, dc) = direction.delta();
            let to = from.offset(dr, dc)?;
            if board.get(to).owner() == Some(owner) {
                return None;
            }
            if path_blocked(board, kind, from, to, owner) {
                return None;
            }
            Some(LegalMove { direction, to })
        })
        .collect()
}
