//! Game rules for skirmish.
//!
//! Pure functions over a board. Rules are kept apart from the phase types so
//! the contract and invariant checks can reuse them.

pub mod swap;
pub mod win;

pub use swap::{check_swap, swap};
pub use win::check_winner;
