//! Core domain types for the skirmish board.

use crate::error::CoordinateError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 5;

/// One of the two players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Owner {
    /// Player A (moves first, starts on row 0).
    A,
    /// Player B (starts on row 4).
    B,
}

impl Owner {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Owner::A => Owner::B,
            Owner::B => Owner::A,
        }
    }

    /// Row this player's pieces occupy on a fresh board.
    pub fn home_row(self) -> usize {
        match self {
            Owner::A => 0,
            Owner::B => BOARD_SIZE - 1,
        }
    }
}

/// The five piece types each player fields.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum PieceKind {
    /// First pawn.
    P1,
    /// Second pawn.
    P2,
    /// Third pawn.
    P3,
    /// Hero that charges two squares in a straight line.
    H1,
    /// Hero that steps one square diagonally.
    H2,
}

impl PieceKind {
    /// Starting order of a home row, column 0 first.
    pub const OPENING_ROW: [PieceKind; BOARD_SIZE] = [
        PieceKind::P1,
        PieceKind::P2,
        PieceKind::P3,
        PieceKind::H1,
        PieceKind::H2,
    ];

    /// True for the three pawns, which share their geometry.
    pub fn is_pawn(self) -> bool {
        matches!(self, PieceKind::P1 | PieceKind::P2 | PieceKind::P3)
    }
}

/// A piece standing on the board.
///
/// Displays as `"A-P1"`; the string form exists only for presentation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}-{}", owner, kind)]
pub struct Occupant {
    /// Player that owns the piece.
    pub owner: Owner,
    /// Kind of piece.
    pub kind: PieceKind,
}

impl Occupant {
    /// Creates a new occupant.
    pub fn new(owner: Owner, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// True when the occupant belongs to `owner`.
    pub fn belongs_to(&self, owner: Owner) -> bool {
        self.owner == owner
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nothing stands here.
    #[default]
    Empty,
    /// A piece stands here.
    Occupied(Occupant),
}

impl Square {
    /// Returns the occupant, if any.
    pub fn occupant(self) -> Option<Occupant> {
        match self {
            Square::Empty => None,
            Square::Occupied(occupant) => Some(occupant),
        }
    }

    /// Returns the owner of the occupant, if any.
    pub fn owner(self) -> Option<Owner> {
        self.occupant().map(|o| o.owner)
    }
}

/// A square address guaranteed to lie on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, failing when either axis falls outside `[0, 5)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] for an off-board coordinate. This is a
    /// caller contract violation, not a gameplay rule violation.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Result<Self, CoordinateError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(CoordinateError::new(
                i64::try_from(row).unwrap_or(i64::MAX),
                i64::try_from(col).unwrap_or(i64::MAX),
            ))
        }
    }

    /// Row index, 0 at the top.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, 0 at the left.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Position reached by adding a signed delta, if it stays on the board.
    pub fn offset(self, row_delta: i8, col_delta: i8) -> Option<Self> {
        Target::from(self).offset(row_delta, col_delta).to_position()
    }

    /// Signed delta from `self` to `to`, saturating at the `i8` range.
    ///
    /// A saturated delta is never a legal move shape.
    pub fn delta_to(self, to: Target) -> (i8, i8) {
        let from = Target::from(self);
        (to.row.saturating_sub(from.row), to.col.saturating_sub(from.col))
    }

    /// Every position on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

/// A destination chosen by a player, which may lie off the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Target {
    /// Signed row.
    pub row: i8,
    /// Signed column.
    pub col: i8,
}

impl Target {
    /// Creates a target.
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True when the target lies within `[0, 5) x [0, 5)`.
    pub fn in_bounds(&self) -> bool {
        let size = BOARD_SIZE as i8;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Converts to a board position when in bounds.
    pub fn to_position(self) -> Option<Position> {
        if self.in_bounds() {
            Some(Position {
                row: self.row as usize,
                col: self.col as usize,
            })
        } else {
            None
        }
    }

    /// Target shifted by a signed delta.
    pub fn offset(self, row_delta: i8, col_delta: i8) -> Self {
        Self {
            row: self.row.saturating_add(row_delta),
            col: self.col.saturating_add(col_delta),
        }
    }
}

impl From<Position> for Target {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row as i8,
            col: pos.col as i8,
        }
    }
}

/// The 5x5 board.
///
/// `Board` is `Copy`: every transition derives a new board from the prior
/// one, so a snapshot held by a reader never changes underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the starting board: `A` on row 0 and `B` on row 4, each in
    /// `P1 P2 P3 H1 H2` order.
    #[instrument]
    pub fn opening() -> Self {
        let mut board = Self::new();
        for owner in [Owner::A, Owner::B] {
            let row = owner.home_row();
            for (col, kind) in PieceKind::OPENING_ROW.into_iter().enumerate() {
                board.squares[row][col] = Square::Occupied(Occupant::new(owner, kind));
            }
        }
        board
    }

    /// Gets the square at a position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row][pos.col]
    }

    /// Sets the square at a position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.row][pos.col] = square;
    }

    /// Returns a copy of this board with one square replaced.
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.set(pos, square);
        self
    }

    /// Returns the occupant at a position, if any.
    pub fn occupant(&self, pos: Position) -> Option<Occupant> {
        self.get(pos).occupant()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Rows of squares, top row first.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Every occupied square with its occupant, row-major.
    pub fn occupants(&self) -> impl Iterator<Item = (Position, Occupant)> + '_ {
        Position::all().filter_map(|pos| self.occupant(pos).map(|o| (pos, o)))
    }

    /// Number of pieces `owner` has on the board.
    pub fn count(&self, owner: Owner) -> usize {
        self.occupants().filter(|(_, o)| o.belongs_to(owner)).count()
    }

    /// Total number of pieces on the board.
    pub fn total(&self) -> usize {
        self.occupants().count()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => " .. ".to_string(),
                        Square::Occupied(o) => o.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
