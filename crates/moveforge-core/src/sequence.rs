//! Ordered move sequences and their magnitude signatures.

use std::fmt;

use smallvec::SmallVec;

use crate::position::{Move, Position};

/// Magnitudes of a sequence sorted in non-increasing order.
///
/// Two sequences with the same signature move the same amounts, possibly
/// between different positions or in a different order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature(SmallVec<[i64; 8]>);

impl Signature {
    /// Builds a signature from magnitudes in any order.
    pub fn from_magnitudes(magnitudes: impl IntoIterator<Item = i64>) -> Self {
        let mut values: SmallVec<[i64; 8]> = magnitudes.into_iter().collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        Self(values)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of squared magnitudes.
    pub fn sum_of_squares(&self) -> i64 {
        self.0.iter().map(|m| m * m).sum()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0.as_slice())
    }
}

/// An ordered list of moves.
///
/// # Example
///
/// ```
/// use moveforge_core::{Move, MoveSequence};
///
/// let seq = MoveSequence::from(vec![Move::new(0, 2), Move::new(2, 1), Move::new(0, 1)]);
/// assert_eq!(seq.signature().as_slice(), &[2, 1, 1]);
/// assert_eq!(seq.signed_moment(), 4);
/// assert_eq!(seq.sum_of_squares(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<Move> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    /// Returns a copy with `mv` appended.
    pub fn with(&self, mv: Move) -> Self {
        let mut moves = Vec::with_capacity(self.0.len() + 1);
        moves.extend_from_slice(&self.0);
        moves.push(mv);
        Self(moves)
    }

    /// Returns a copy with `mv` inserted at the front.
    pub fn prefixed(&self, mv: Move) -> Self {
        let mut moves = Vec::with_capacity(self.0.len() + 1);
        moves.push(mv);
        moves.extend_from_slice(&self.0);
        Self(moves)
    }

    pub fn signature(&self) -> Signature {
        Signature::from_magnitudes(self.0.iter().map(Move::magnitude))
    }

    /// The moves in ascending order, identifying the sequence up to reordering.
    pub fn canonical(&self) -> Vec<Move> {
        let mut moves = self.0.clone();
        moves.sort_unstable();
        moves
    }

    /// Reflects every move about `distance / 2` and reverses the order.
    pub fn mirrored(&self, distance: i64) -> Self {
        Self(self.0.iter().rev().map(|mv| mv.mirrored(distance)).collect())
    }

    pub fn sum_of_squares(&self) -> i64 {
        self.0.iter().map(|mv| mv.magnitude() * mv.magnitude()).sum()
    }

    /// Net change of the first moment: `Σ ±m²`, positive for rightward moves.
    pub fn signed_moment(&self) -> i64 {
        self.0.iter().map(Move::signed_moment).sum()
    }

    pub fn is_forward_only(&self) -> bool {
        self.0.iter().all(Move::is_rightward)
    }

    /// Intermediate landing positions, farthest from the origin first.
    ///
    /// Destinations equal to `source` or `sink` are skipped, and each
    /// position is reported once.
    pub fn stations(&self, source: Position, sink: Position) -> Vec<Position> {
        let mut stations: Vec<Position> = Vec::new();
        for mv in &self.0 {
            let to = mv.to();
            if to != source && to != sink && !stations.contains(&to) {
                stations.push(to);
            }
        }
        stations.sort_by_key(|p| std::cmp::Reverse(p.abs()));
        stations
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", mv)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
