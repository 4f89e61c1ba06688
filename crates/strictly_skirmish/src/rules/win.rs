//! Win detection.

use crate::types::{Board, Owner};
use tracing::instrument;

/// Checks if a side has been wiped out.
///
/// Returns `Some(B)` when no `A` piece remains and `Some(A)` when no `B`
/// piece remains. A board with neither side cannot arise from play; it
/// reports `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Owner> {
    let a = board.count(Owner::A);
    let b = board.count(Owner::B);
    match (a, b) {
        (0, 0) => None,
        (0, _) => Some(Owner::B),
        (_, 0) => Some(Owner::A),
        _ => None,
    }
}
