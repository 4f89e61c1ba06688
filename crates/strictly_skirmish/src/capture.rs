//! Capture resolution.
//!
//! Single-step pieces capture only by landing on a hostile occupant. The
//! charging hero (`H1`) also tramples the one square it passes over: an
//! opposing occupant there is removed whether or not the destination was
//! occupied.

use crate::types::{Board, Occupant, Owner, PieceKind, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A piece removed from the board by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// Square the captured piece stood on.
    pub at: Position,
    /// The captured piece.
    pub occupant: Occupant,
}

/// Board after a move, with everything the move captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The new board.
    pub board: Board,
    /// Captures in the order they happened (path first, then destination).
    pub captures: Vec<Capture>,
}

/// The square an `H1` charge passes over, if `from -> to` is a charge.
pub fn intermediate(kind: PieceKind, from: Position, to: Position) -> Option<Position> {
    if kind.geometry() != crate::catalog::Geometry::OrthogonalCharge {
        return None;
    }
    let (dr, dc) = from.delta_to(to.into());
    if !kind.permits(dr, dc) {
        return None;
    }
    from.offset(dr.signum(), dc.signum())
}

/// True when a friendly occupant stands on the charge path.
pub fn path_blocked(
    board: &Board,
    kind: PieceKind,
    from: Position,
    to: Position,
    mover: Owner,
) -> bool {
    intermediate(kind, from, to)
        .and_then(|mid| board.occupant(mid))
        .is_some_and(|o| o.belongs_to(mover))
}

/// Clears an opposing occupant from the charge path.
///
/// Legality is not re-checked here; a friendly occupant on the path is left
/// in place, and the validator is expected to have refused such a move.
#[instrument(skip(board))]
pub fn resolve_path_capture(
    board: &Board,
    kind: PieceKind,
    from: Position,
    to: Position,
    mover: Owner,
) -> (Board, Option<Capture>) {
    let Some(mid) = intermediate(kind, from, to) else {
        return (*board, None);
    };
    match board.occupant(mid) {
        Some(occupant) if !occupant.belongs_to(mover) => {
            debug!(%mid, %occupant, "Trampled on charge path");
            (
                board.with(mid, Square::Empty),
                Some(Capture { at: mid, occupant }),
            )
        }
        _ => (*board, None),
    }
}

/// Applies a validated move to a copy of `board`.
///
/// Runs path capture, displaces any hostile occupant at the destination,
/// moves the piece, and clears the origin.
#[instrument(skip(board))]
pub fn resolve(board: &Board, from: Position, to: Position) -> Resolution {
    let Some(piece) = board.occupant(from) else {
        return Resolution {
            board: *board,
            captures: Vec::new(),
        };
    };

    let (mut next, trampled) = resolve_path_capture(board, piece.kind, from, to, piece.owner);
    let mut captures: Vec<Capture> = trampled.into_iter().collect();

    if let Some(occupant) = next.occupant(to).filter(|o| !o.belongs_to(piece.owner)) {
        debug!(%to, %occupant, "Captured at destination");
        captures.push(Capture { at: to, occupant });
    }

    next.set(to, Square::Occupied(piece));
    next.set(from, Square::Empty);

    Resolution {
        board: next,
        captures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn piece(owner: Owner, kind: PieceKind) -> Square {
        Square::Occupied(Occupant::new(owner, kind))
    }

    #[test]
    fn test_intermediate_only_for_charge() {
        assert_eq!(intermediate(PieceKind::H1, pos(2, 2), pos(0, 2)), Some(pos(1, 2)));
        assert_eq!(intermediate(PieceKind::H1, pos(2, 2), pos(2, 4)), Some(pos(2, 3)));
        assert_eq!(intermediate(PieceKind::P1, pos(2, 2), pos(1, 2)), None);
        assert_eq!(intermediate(PieceKind::H2, pos(2, 2), pos(1, 1)), None);
    }

    #[test]
    fn test_charge_tramples_enemy_on_path() {
        let board = Board::new()
            .with(pos(2, 2), piece(Owner::A, PieceKind::H1))
            .with(pos(3, 2), piece(Owner::B, PieceKind::P1));

        let res = resolve(&board, pos(2, 2), pos(4, 2));
        assert!(res.board.is_empty(pos(3, 2)));
        assert!(res.board.is_empty(pos(2, 2)));
        assert_eq!(
            res.board.occupant(pos(4, 2)),
            Some(Occupant::new(Owner::A, PieceKind::H1))
        );
        assert_eq!(res.captures.len(), 1);
        assert_eq!(res.captures[0].at, pos(3, 2));
    }

    #[test]
    fn test_charge_captures_path_and_destination() {
        let board = Board::new()
            .with(pos(0, 0), piece(Owner::A, PieceKind::H1))
            .with(pos(0, 1), piece(Owner::B, PieceKind::P2))
            .with(pos(0, 2), piece(Owner::B, PieceKind::P3));

        let res = resolve(&board, pos(0, 0), pos(0, 2));
        assert_eq!(res.captures.len(), 2);
        assert_eq!(res.board.count(Owner::B), 0);
        assert_eq!(res.board.total(), 1);
    }

    #[test]
    fn test_friendly_on_path_is_left_alone() {
        let board = Board::new()
            .with(pos(2, 2), piece(Owner::A, PieceKind::H1))
            .with(pos(2, 1), piece(Owner::A, PieceKind::P1));

        let (after, captured) =
            resolve_path_capture(&board, PieceKind::H1, pos(2, 2), pos(2, 0), Owner::A);
        assert_eq!(captured, None);
        assert_eq!(after, board);
    }

    #[test]
    fn test_step_capture_at_destination() {
        let board = Board::new()
            .with(pos(1, 1), piece(Owner::B, PieceKind::H2))
            .with(pos(0, 0), piece(Owner::A, PieceKind::P1));

        let res = resolve(&board, pos(1, 1), pos(0, 0));
        assert_eq!(res.board.count(Owner::A), 0);
        assert_eq!(res.captures, vec![Capture {
            at: pos(0, 0),
            occupant: Occupant::new(Owner::A, PieceKind::P1),
        }]);
    }

    #[test]
    fn test_resolve_does_not_touch_input() {
        let board = Board::opening();
        let _ = resolve(&board, pos(0, 0), pos(1, 0));
        assert_eq!(board, Board::opening());
    }
}
