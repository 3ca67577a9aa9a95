//! Move count ceiling.

use super::Termination;
use crate::error::SolveError;
use crate::scope::SolveScope;

/// Terminates once the driver would try more than `limit` moves.
///
/// # Example
///
/// ```
/// use moveforge_solver::termination::MoveCountTermination;
///
/// // Give up on anything needing more than 12 moves
/// let term = MoveCountTermination::new(12);
/// assert_eq!(term.limit(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct MoveCountTermination {
    limit: u32,
}

impl MoveCountTermination {
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Termination for MoveCountTermination {
    fn is_terminated(&self, scope: &SolveScope) -> bool {
        scope.current_k() > self.limit
    }

    fn cause(&self, n: i64, _scope: &SolveScope) -> SolveError {
        SolveError::Unsolved {
            n,
            ceiling: self.limit,
        }
    }
}
