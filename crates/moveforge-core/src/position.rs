//! Positions on the line and the moves between them.

use std::fmt;

use crate::error::{MoveForgeError, Result};

/// Integer coordinate on the line.
pub type Position = i64;

/// A transfer of units between two distinct positions.
///
/// The number of units carried always equals the distance travelled, so a
/// move stores only its endpoints and derives the magnitude on demand.
/// Moves order by `from`, then by `to`.
///
/// # Example
///
/// ```
/// use moveforge_core::Move;
///
/// let mv = Move::new(0, 3);
/// assert_eq!(mv.magnitude(), 3);
/// assert!(mv.is_rightward());
/// assert_eq!(mv.signed_moment(), 9);
/// assert_eq!(Move::new(2, 1).signed_moment(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    from: Position,
    to: Position,
}

impl Move {
    /// Creates a move from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from == to`. Use [`Move::try_new`] for untrusted input.
    pub fn new(from: Position, to: Position) -> Self {
        assert_ne!(from, to, "a move needs two distinct endpoints");
        Self { from, to }
    }

    /// Creates a move, rejecting coincident endpoints.
    pub fn try_new(from: Position, to: Position) -> Result<Self> {
        if from == to {
            return Err(MoveForgeError::DegenerateMove(from));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> Position {
        self.to
    }

    /// Units carried, equal to the distance travelled.
    pub fn magnitude(&self) -> i64 {
        (self.from - self.to).abs()
    }

    pub fn is_rightward(&self) -> bool {
        self.to > self.from
    }

    /// Contribution to the first moment of the distribution: `+m²` rightward,
    /// `-m²` leftward.
    pub fn signed_moment(&self) -> i64 {
        let m = self.magnitude();
        if self.is_rightward() {
            m * m
        } else {
            -(m * m)
        }
    }

    /// Returns the endpoint opposite `position`, if `position` is an endpoint.
    pub fn partner_of(&self, position: Position) -> Option<Position> {
        if position == self.from {
            Some(self.to)
        } else if position == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    /// Returns true if either endpoint is `position`.
    pub fn touches(&self, position: Position) -> bool {
        self.from == position || self.to == position
    }

    /// Reflects the move about `distance / 2` and reverses its direction.
    ///
    /// Mirroring every move of a sequence and reversing the sequence order
    /// maps a solution for `(n, distance)` onto another solution for the
    /// same problem.
    pub fn mirrored(&self, distance: i64) -> Self {
        Self {
            from: distance - self.to,
            to: distance - self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}({})", self.from, self.to, self.magnitude())
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
