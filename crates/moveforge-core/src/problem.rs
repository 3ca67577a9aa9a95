//! Problem instances: `n` units that must travel from position 0 to the sink.

use std::fmt;

use crate::error::{MoveForgeError, Result};
use crate::position::{Move, Position};
use crate::sequence::MoveSequence;
use crate::state::ConservationState;

/// The source position of every problem.
pub const SOURCE: Position = 0;

/// A validated `(n, distance)` instance.
///
/// `n` units start at [`SOURCE`] and must all end on the sink at `distance`.
/// In the imbalance view the initial state is `{0: n, distance: -n}` and the
/// terminal state is empty.
///
/// # Example
///
/// ```
/// use moveforge_core::{Move, MoveSequence, Problem};
///
/// let problem = Problem::new(2, 1).unwrap();
/// assert_eq!(problem.target_moment(), 2);
///
/// let solution = MoveSequence::from(vec![Move::new(0, 1), Move::new(0, 1)]);
/// assert!(problem.replay(&solution).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Problem {
    n: i64,
    distance: i64,
}

impl Problem {
    /// Creates a problem, rejecting negative sizes and non-positive distances.
    pub fn new(n: i64, distance: i64) -> Result<Self> {
        if n < 0 {
            return Err(MoveForgeError::InvalidProblem(format!(
                "unit count must be non-negative, got {}",
                n
            )));
        }
        if distance < 1 {
            return Err(MoveForgeError::InvalidProblem(format!(
                "distance must be at least 1, got {}",
                distance
            )));
        }
        // Positions explored by the searches stay within a few multiples of
        // n + distance; reject anything whose moment cannot be represented.
        let span = n
            .checked_add(distance)
            .and_then(|s| s.checked_mul(4))
            .and_then(|s| s.checked_mul(s));
        if n.checked_mul(distance).is_none() || span.is_none() {
            return Err(MoveForgeError::Overflow(format!(
                "n = {} and distance = {} exceed the supported range",
                n, distance
            )));
        }
        Ok(Self { n, distance })
    }

    pub fn n(&self) -> i64 {
        self.n
    }

    pub fn distance(&self) -> i64 {
        self.distance
    }

    pub fn source(&self) -> Position {
        SOURCE
    }

    pub fn sink(&self) -> Position {
        SOURCE + self.distance
    }

    /// Required first-moment change, `n · distance`.
    pub fn target_moment(&self) -> i64 {
        self.n * self.distance
    }

    /// Imbalance view: `{0: n, distance: -n}`.
    pub fn initial_state(&self) -> ConservationState {
        ConservationState::from_entries([(self.source(), self.n), (self.sink(), -self.n)])
    }

    /// Holdings view: all units on the source.
    pub fn holdings(&self) -> ConservationState {
        ConservationState::from_entries([(self.source(), self.n)])
    }

    /// Holdings view of the goal: all units on the sink.
    pub fn goal_holdings(&self) -> ConservationState {
        ConservationState::from_entries([(self.sink(), self.n)])
    }

    /// Checks that `sequence` executes legally in order and ends on the goal.
    pub fn replay(&self, sequence: &MoveSequence) -> Result<()> {
        self.replay_states(sequence).map(|_| ())
    }

    /// Holdings after each move, starting with the initial holdings.
    ///
    /// Fails at the first move whose source holds fewer units than the move
    /// carries, or if the last state is not the goal.
    pub fn replay_states(&self, sequence: &MoveSequence) -> Result<Vec<ConservationState>> {
        let mut states = Vec::with_capacity(sequence.len() + 1);
        let mut holdings = self.holdings();
        for (step, &mv) in sequence.iter().enumerate() {
            if !holdings.can_apply(mv) {
                return Err(MoveForgeError::IllegalMove {
                    step,
                    mv,
                    available: holdings.balance(mv.from()),
                });
            }
            let next = holdings.apply(mv);
            states.push(holdings);
            holdings = next;
        }
        if holdings != self.goal_holdings() {
            return Err(MoveForgeError::Unbalanced {
                moves: sequence.len(),
            });
        }
        states.push(holdings);
        Ok(states)
    }

    /// Returns true if `mv` could appear in a solution of this problem at all.
    pub fn admits(&self, mv: Move) -> bool {
        mv.magnitude() <= self.n
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} units over distance {}", self.n, self.distance)
    }
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod tests;
