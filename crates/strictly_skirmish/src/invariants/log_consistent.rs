//! Log consistency invariant: the log explains the board.

use super::super::capture::resolve;
use super::super::{Board, GameInProgress};
use super::Invariant;

/// Invariant: replaying the log over the opening arrangement reproduces the
/// current board.
///
/// Each entry's piece must stand on its origin when replayed, and the
/// captures it records must be the ones the replay produces.
pub struct LogConsistentInvariant;

impl Invariant<GameInProgress> for LogConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut board: Board = *game.opening();

        for entry in game.log() {
            if board.occupant(*entry.from()) != Some(*entry.occupant()) {
                return false;
            }
            let resolution = resolve(&board, *entry.from(), *entry.to());
            if resolution.captures != *entry.captures() {
                return false;
            }
            board = resolution.board;
        }

        board == *game.board()
    }

    fn description() -> &'static str {
        "Replaying the move log reproduces the board"
    }
}
