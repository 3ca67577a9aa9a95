//! Solver errors.

use moveforge_config::Strategy;
use moveforge_core::MoveForgeError;
use thiserror::Error;

/// Reasons a solve run ends without a minimal solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Problem(#[from] MoveForgeError),

    #[error("{strategy} strategy does not support distance {distance}")]
    UnsupportedDistance { strategy: Strategy, distance: i64 },

    #[error("no solution for {n} within {ceiling} moves")]
    Unsolved { n: i64, ceiling: u32 },

    #[error("time limit reached while solving {n} in {k} moves")]
    TimeLimit { n: i64, k: u32 },
}
