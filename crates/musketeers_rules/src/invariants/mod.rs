//! Board invariants checked after every move.
//!
//! Each invariant measures one quantity on the board and reports what it
//! found when the quantity is out of range.

use derive_more::{Display, Error};

/// A property every reachable state satisfies.
pub trait Invariant<S> {
    /// Checks the state, reporting the offending measurement on failure.
    fn check(state: &S) -> Result<(), InvariantViolation>;
}

/// A broken invariant and the count that broke it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{rule} (found {found})")]
pub struct InvariantViolation {
    /// The rule that no longer holds.
    pub rule: &'static str,
    /// What was counted instead.
    pub found: usize,
}

/// Several invariants checked as one.
pub trait InvariantSet<S> {
    /// Every violation, in declaration order.
    fn violations(state: &S) -> Vec<InvariantViolation>;

    /// Fails with the first violation, if any.
    fn check_all(state: &S) -> Result<(), InvariantViolation> {
        match Self::violations(state).into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn violations(state: &S) -> Vec<InvariantViolation> {
                [$($inv::check(state)),+]
                    .into_iter()
                    .filter_map(Result::err)
                    .collect()
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

pub mod piece_counts;

pub use piece_counts::{EnemyLimitInvariant, MusketeerCountInvariant};

/// Everything that must hold after a move.
pub type BoardInvariants = (MusketeerCountInvariant, EnemyLimitInvariant);
