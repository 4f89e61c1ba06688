//! Contract-based validation for combat moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} move {Q}`.

use crate::action::Move;
use crate::capture::path_blocked;
use crate::error::RuleViolation;
use crate::invariants::{InvariantSet, SkirmishInvariants};
use crate::typestate::GameInProgress;
use crate::types::{Owner, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RuleViolation>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RuleViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the origin holds a piece of the player to move.
pub struct MoversPiece;

impl MoversPiece {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), RuleViolation> {
        let Some(piece) = game.board().occupant(mov.from) else {
            return Err(RuleViolation::NoCharacterSelected);
        };
        if piece.owner != game.to_move() || mov.mover != game.to_move() {
            return Err(RuleViolation::NotYourTurn);
        }
        Ok(())
    }
}

/// Precondition: the destination lies on the board.
pub struct DestinationInBounds;

impl DestinationInBounds {
    #[instrument(skip(_game))]
    pub fn check(mov: &Move, _game: &GameInProgress) -> Result<(), RuleViolation> {
        mov.to
            .to_position()
            .map(|_| ())
            .ok_or(RuleViolation::OutOfBounds)
    }
}

/// Precondition: the destination does not hold one of the mover's pieces.
pub struct NoFriendlyFire;

impl NoFriendlyFire {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), RuleViolation> {
        let friendly = destination(mov)
            .and_then(|to| game.board().get(to).owner())
            .is_some_and(|owner| owner == mov.mover);
        if friendly {
            Err(RuleViolation::FriendlyFire)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the piece's geometry allows the move and the direction
/// label names that same move.
pub struct GeometryAllows;

impl GeometryAllows {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), RuleViolation> {
        let kind = game
            .board()
            .occupant(mov.from)
            .map(|o| o.kind)
            .ok_or(RuleViolation::NoCharacterSelected)?;
        if !mov.to.in_bounds() {
            return Err(RuleViolation::OutOfBounds);
        }

        let delta = mov.from.delta_to(mov.to);
        let shaped = crate::validator::is_legal_move(kind, mov.from, mov.to);
        let labelled =
            mov.direction.delta() == delta && mov.direction.geometry() == kind.geometry();
        if shaped && labelled {
            Ok(())
        } else {
            Err(RuleViolation::IllegalGeometry)
        }
    }
}

/// Precondition: a charge does not pass over one of the mover's pieces.
pub struct PathClear;

impl PathClear {
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), RuleViolation> {
        let (Some(to), Some(piece)) = (destination(mov), game.board().occupant(mov.from)) else {
            return Ok(());
        };
        if path_blocked(game.board(), piece.kind, mov.from, to, mov.mover) {
            Err(RuleViolation::IllegalGeometry)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: every move precondition, in reporting order.
pub struct MovePermitted;

impl MovePermitted {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), RuleViolation> {
        MoversPiece::check(mov, game)?;
        DestinationInBounds::check(mov, game)?;
        NoFriendlyFire::check(mov, game)?;
        GeometryAllows::check(mov, game)?;
        PathClear::check(mov, game)?;
        Ok(())
    }
}

fn destination(mov: &Move) -> Option<Position> {
    mov.to.to_position()
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for combat moves.
///
/// Preconditions:
/// - Origin holds the mover's piece
/// - Destination on the board and not friendly
/// - Geometry and direction label agree
/// - Charge path clear of friendly pieces
///
/// Postconditions:
/// - No side gains pieces, at most two are captured
/// - Players still alternate
/// - Log still explains the board
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), RuleViolation> {
        MovePermitted::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), RuleViolation> {
        let gained = [Owner::A, Owner::B]
            .into_iter()
            .any(|owner| after.board().count(owner) > before.board().count(owner));
        let lost = before.board().total().saturating_sub(after.board().total());
        if gained || lost > 2 {
            warn!(gained, lost, "Occupant count moved the wrong way");
            return Err(RuleViolation::InvariantViolation(
                "Postcondition failed: occupant count must only shrink, by at most two".to_string(),
            ));
        }

        SkirmishInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            RuleViolation::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
