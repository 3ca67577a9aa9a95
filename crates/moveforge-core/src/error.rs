//! Error types for MoveForge

use thiserror::Error;

use crate::position::{Move, Position};

/// Main error type for MoveForge core operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveForgeError {
    /// A move whose endpoints coincide
    #[error("Degenerate move: {0} -> {0}")]
    DegenerateMove(Position),

    /// Problem parameters outside the supported domain
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    /// Arithmetic on positions or quantities left the `i64` range
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// A replayed move took more units than its source held
    #[error("Illegal move {mv} at step {step}: source holds {available}")]
    IllegalMove {
        step: usize,
        mv: Move,
        available: i64,
    },

    /// A replayed sequence finished away from the goal distribution
    #[error("Sequence ends unbalanced after {moves} moves")]
    Unbalanced { moves: usize },
}

/// Result type alias for MoveForge core operations
pub type Result<T> = std::result::Result<T, MoveForgeError>;
