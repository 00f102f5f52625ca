//! Checkable properties of a [`GameState`](super::GameState).
//!
//! The engine runs [`TicTacToeInvariants`] under `debug_assert!` after
//! every applied move.

pub mod history_consistent;
pub mod mark_balance;
pub mod monotonic_board;
pub mod status_consistent;

pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// A property of `S` that every reachable state satisfies.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A failed [`Invariant`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// The violated invariant's description.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps an invariant's description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked as a group. Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Reports every invariant in the set that `state` fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
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
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every tic-tac-toe invariant.
pub type TicTacToeInvariants = (
    MarkBalanceInvariant,
    MonotonicBoardInvariant,
    HistoryConsistentInvariant,
    StatusConsistentInvariant,
);
