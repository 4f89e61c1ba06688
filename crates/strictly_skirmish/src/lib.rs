//! Strictly Skirmish - rule engine for a 5x5 two-player capture game.
//!
//! Each player fields three pawns and two heroes. Players first rearrange
//! their home rows, then alternate moves until one side has no pieces left.
//!
//! # Architecture
//!
//! - **Board**: [`Board`], a `Copy` 5x5 grid of [`Square`]s
//! - **Piece catalog**: [`Geometry`] and [`Direction`] per [`PieceKind`]
//! - **Move validator**: [`is_legal_move`] and [`legal_destinations`]
//! - **Capture resolver**: [`resolve`], with path capture for `H1`
//! - **Turn controller**: [`GameSetup`] → [`GameInProgress`] → [`GameFinished`],
//!   wrapped by the [`GameState`] snapshot and the [`Skirmish`] façade
//! - **Move log**: [`MoveLog`] of [`MoveRecord`]s
//!
//! # Example
//!
//! ```
//! use strictly_skirmish::{Direction, Owner, Position, Skirmish, Target};
//!
//! let mut game = Skirmish::new();
//! game.start();
//! game.select_or_toggle(Position::new(0, 0)?)?;
//! game.apply_move(Target::new(1, 0), Direction::Back)?;
//!
//! assert_eq!(game.mover(), Owner::B);
//! assert_eq!(game.log().lines(), vec!["A moved A-P1 using move B"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod capture;
mod catalog;
mod contracts;
mod engine;
mod error;
mod invariants;
mod log;
mod phases;
mod rules;
mod types;
mod typestate;
mod validator;

pub use action::{Action, Move};
pub use capture::{Capture, Resolution, intermediate, path_blocked, resolve, resolve_path_capture};
pub use catalog::{Direction, Geometry};
pub use contracts::{
    Contract, DestinationInBounds, GeometryAllows, MoveContract, MovePermitted, MoversPiece,
    NoFriendlyFire, PathClear,
};
pub use engine::{GameState, Skirmish};
pub use error::{CoordinateError, RuleViolation};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, LogConsistentInvariant,
    OccupantBudgetInvariant, SkirmishInvariants,
};
pub use log::{MoveLog, MoveRecord};
pub use phases::{Phase, Selection};
pub use rules::{check_swap, check_winner, swap};
pub use types::{BOARD_SIZE, Board, Occupant, Owner, PieceKind, Position, Square, Target};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use validator::{LegalMove, is_legal_move, legal_destinations};
