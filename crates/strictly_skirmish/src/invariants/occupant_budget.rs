//! Occupant budget invariant: no side ever gains pieces.

use super::super::{GameInProgress, Owner, BOARD_SIZE};
use super::Invariant;

/// Invariant: each side has at most five pieces, and never more than it
/// started combat with.
pub struct OccupantBudgetInvariant;

impl Invariant<GameInProgress> for OccupantBudgetInvariant {
    fn holds(game: &GameInProgress) -> bool {
        [Owner::A, Owner::B].into_iter().all(|owner| {
            let now = game.board().count(owner);
            now <= BOARD_SIZE && now <= game.opening().count(owner)
        })
    }

    fn description() -> &'static str {
        "Each side has at most five pieces and never gains any"
    }
}
