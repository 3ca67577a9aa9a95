//! Sparse signed distributions of units over positions.

use std::collections::BTreeMap;
use std::fmt;

use crate::position::{Move, Position};

/// Immutable sparse map from position to a non-zero signed quantity.
///
/// The same type serves two views of a problem: the *imbalance* view, where
/// the solved state is empty, and the *holdings* view, where every value is
/// the number of units actually sitting at a position. `apply` conserves the
/// total in both.
///
/// Zero entries are never stored, so two states are equal exactly when they
/// describe the same distribution.
///
/// # Example
///
/// ```
/// use moveforge_core::{ConservationState, Move};
///
/// let state = ConservationState::from_entries([(0, 1), (1, -1)]);
/// let next = state.apply(Move::new(0, 1));
/// assert!(next.is_solved());
/// assert_eq!(state.nonzero_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConservationState {
    balances: BTreeMap<Position, i64>,
}

impl ConservationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from `(position, quantity)` pairs.
    ///
    /// Quantities at the same position accumulate and zero results are
    /// dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = (Position, i64)>) -> Self {
        let mut state = Self::default();
        for (position, quantity) in entries {
            state.adjust(position, quantity);
        }
        state
    }

    /// Returns the state after `mv`, without checking feasibility.
    pub fn apply(&self, mv: Move) -> Self {
        let mut next = self.clone();
        let magnitude = mv.magnitude();
        next.adjust(mv.from(), -magnitude);
        next.adjust(mv.to(), magnitude);
        next
    }

    fn adjust(&mut self, position: Position, delta: i64) {
        if delta == 0 {
            return;
        }
        let value = self.balances.entry(position).or_insert(0);
        *value += delta;
        if *value == 0 {
            self.balances.remove(&position);
        }
    }

    /// Quantity at `position`, zero when absent.
    pub fn balance(&self, position: Position) -> i64 {
        self.balances.get(&position).copied().unwrap_or(0)
    }

    pub fn is_solved(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn nonzero_count(&self) -> usize {
        self.balances.len()
    }

    /// Smallest position holding a non-zero quantity.
    pub fn min_position(&self) -> Option<Position> {
        self.balances.keys().next().copied()
    }

    /// Sum of all quantities.
    pub fn total(&self) -> i64 {
        self.balances.values().sum()
    }

    /// Entries in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, i64)> + '_ {
        self.balances.iter().map(|(&p, &v)| (p, v))
    }

    /// Returns true if `mv` takes no more units than its source holds.
    pub fn can_apply(&self, mv: Move) -> bool {
        self.balance(mv.from()) >= mv.magnitude()
    }
}

impl fmt::Display for ConservationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (position, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", position, value)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
