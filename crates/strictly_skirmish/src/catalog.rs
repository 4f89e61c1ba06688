//! Piece catalog: movement geometry and direction labels.
//!
//! Geometry is a predicate over the signed `(row_delta, col_delta)` of a
//! move. "Forward" is always toward row 0, whichever side is moving.

use crate::types::PieceKind;
use serde::{Deserialize, Serialize};

/// Movement geometry shared by one or more piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Geometry {
    /// One orthogonal step (pawns).
    OrthogonalStep,
    /// Exactly two orthogonal steps in a straight line (`H1`).
    OrthogonalCharge,
    /// One diagonal step (`H2`).
    DiagonalStep,
}

impl Geometry {
    /// Checks whether a signed delta is a legal move for this geometry.
    ///
    /// The zero delta is never legal.
    pub fn permits(self, row_delta: i8, col_delta: i8) -> bool {
        let (dr, dc) = (row_delta.unsigned_abs(), col_delta.unsigned_abs());
        match self {
            Geometry::OrthogonalStep => (dr == 1 && dc == 0) || (dr == 0 && dc == 1),
            Geometry::OrthogonalCharge => (dr == 2 && dc == 0) || (dr == 0 && dc == 2),
            Geometry::DiagonalStep => dr == 1 && dc == 1,
        }
    }

    /// Directions this geometry can move in, in enumeration order.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Geometry::OrthogonalStep => &[
                Direction::Forward,
                Direction::Back,
                Direction::Left,
                Direction::Right,
            ],
            Geometry::OrthogonalCharge => &[
                Direction::ChargeForward,
                Direction::ChargeBack,
                Direction::ChargeLeft,
                Direction::ChargeRight,
            ],
            Geometry::DiagonalStep => &[
                Direction::ForwardLeft,
                Direction::ForwardRight,
                Direction::BackLeft,
                Direction::BackRight,
            ],
        }
    }
}

impl PieceKind {
    /// Geometry rule for this piece kind.
    pub fn geometry(self) -> Geometry {
        match self {
            PieceKind::P1 | PieceKind::P2 | PieceKind::P3 => Geometry::OrthogonalStep,
            PieceKind::H1 => Geometry::OrthogonalCharge,
            PieceKind::H2 => Geometry::DiagonalStep,
        }
    }

    /// Checks whether a signed delta is legal for this piece kind.
    pub fn permits(self, row_delta: i8, col_delta: i8) -> bool {
        self.geometry().permits(row_delta, col_delta)
    }
}

/// Relative direction of a move, named by its short label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum Direction {
    /// `F`: one step up.
    #[strum(serialize = "F")]
    Forward,
    /// `B`: one step down.
    #[strum(serialize = "B")]
    Back,
    /// `L`: one step left.
    #[strum(serialize = "L")]
    Left,
    /// `R`: one step right.
    #[strum(serialize = "R")]
    Right,
    /// `2F`: two steps up.
    #[strum(serialize = "2F")]
    ChargeForward,
    /// `2B`: two steps down.
    #[strum(serialize = "2B")]
    ChargeBack,
    /// `2L`: two steps left.
    #[strum(serialize = "2L")]
    ChargeLeft,
    /// `2R`: two steps right.
    #[strum(serialize = "2R")]
    ChargeRight,
    /// `FL`: one diagonal step up and left.
    #[strum(serialize = "FL")]
    ForwardLeft,
    /// `FR`: one diagonal step up and right.
    #[strum(serialize = "FR")]
    ForwardRight,
    /// `BL`: one diagonal step down and left.
    #[strum(serialize = "BL")]
    BackLeft,
    /// `BR`: one diagonal step down and right.
    #[strum(serialize = "BR")]
    BackRight,
}

impl Direction {
    /// Short label shown to the player.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "F",
            Direction::Back => "B",
            Direction::Left => "L",
            Direction::Right => "R",
            Direction::ChargeForward => "2F",
            Direction::ChargeBack => "2B",
            Direction::ChargeLeft => "2L",
            Direction::ChargeRight => "2R",
            Direction::ForwardLeft => "FL",
            Direction::ForwardRight => "FR",
            Direction::BackLeft => "BL",
            Direction::BackRight => "BR",
        }
    }

    /// Parses a label such as `"2L"`.
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().to_uppercase().parse().ok()
    }

    /// Signed `(row_delta, col_delta)` of this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Forward => (-1, 0),
            Direction::Back => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::ChargeForward => (-2, 0),
            Direction::ChargeBack => (2, 0),
            Direction::ChargeLeft => (0, -2),
            Direction::ChargeRight => (0, 2),
            Direction::ForwardLeft => (-1, -1),
            Direction::ForwardRight => (-1, 1),
            Direction::BackLeft => (1, -1),
            Direction::BackRight => (1, 1),
        }
    }

    /// Geometry family the label belongs to.
    pub fn geometry(self) -> Geometry {
        match self {
            Direction::Forward | Direction::Back | Direction::Left | Direction::Right => {
                Geometry::OrthogonalStep
            }
            Direction::ChargeForward
            | Direction::ChargeBack
            | Direction::ChargeLeft
            | Direction::ChargeRight => Geometry::OrthogonalCharge,
            Direction::ForwardLeft
            | Direction::ForwardRight
            | Direction::BackLeft
            | Direction::BackRight => Geometry::DiagonalStep,
        }
    }

    /// Direction a piece of `kind` takes to cover `delta`, if any.
    pub fn for_delta(kind: PieceKind, row_delta: i8, col_delta: i8) -> Option<Self> {
        kind.geometry()
            .directions()
            .iter()
            .copied()
            .find(|d| d.delta() == (row_delta, col_delta))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
