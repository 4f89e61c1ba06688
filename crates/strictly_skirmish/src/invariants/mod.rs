//! First-class invariants for skirmish.
//!
//! Invariants are properties that must hold for every in-progress game.
//! They back the move postcondition and can be tested on their own.

/// A property every in-progress game must satisfy.
pub trait Invariant<S> {
    /// True when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// What the property promises, shown when it breaks.
    fn description() -> &'static str;
}

/// A broken invariant, named by its description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the broken invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation for `description`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked as one unit.
pub trait InvariantSet<S> {
    /// Checks every member against `state`.
    ///
    /// Collects all violations rather than stopping at the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod log_consistent;
pub mod occupant_budget;

pub use alternating_turn::AlternatingTurnInvariant;
pub use log_consistent::LogConsistentInvariant;
pub use occupant_budget::OccupantBudgetInvariant;

/// All skirmish invariants as a composable set.
pub type SkirmishInvariants = (
    OccupantBudgetInvariant,
    AlternatingTurnInvariant,
    LogConsistentInvariant,
);
