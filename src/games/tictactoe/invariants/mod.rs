//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and checked by the engine.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose at the type level.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod mark_balance;
pub mod terminal_consistent;

pub use mark_balance::MarkBalanceInvariant;
pub use terminal_consistent::TerminalConsistentInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (MarkBalanceInvariant, TerminalConsistentInvariant);
