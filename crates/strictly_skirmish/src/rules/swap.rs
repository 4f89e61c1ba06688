//! Setup-phase rearrangement.

use crate::error::RuleViolation;
use crate::phases::Selection;
use crate::types::{Board, Position, Square};
use tracing::instrument;

/// Checks that the selected piece may trade places with the piece on
/// `target`: same row, target occupied, same owner.
#[instrument(skip(board))]
pub fn check_swap(
    board: &Board,
    selection: &Selection,
    target: Position,
) -> Result<(), RuleViolation> {
    let same_row = selection.position.row() == target.row();
    let same_owner = board
        .occupant(target)
        .is_some_and(|o| o.belongs_to(selection.occupant.owner));

    if same_row && same_owner && !selection.is_at(target) {
        Ok(())
    } else {
        Err(RuleViolation::InvalidSwap)
    }
}

/// Returns a copy of `board` with the occupants of `a` and `b` exchanged.
pub fn swap(board: &Board, a: Position, b: Position) -> Board {
    let (sa, sb): (Square, Square) = (board.get(a), board.get(b));
    board.with(a, sb).with(b, sa)
}
