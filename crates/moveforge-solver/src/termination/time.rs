//! Time-based termination.

use std::time::Duration;

use super::Termination;
use crate::error::SolveError;
use crate::scope::SolveScope;

/// Terminates after a time limit.
///
/// The driver checks it between move counts; searches running past the
/// limit are interrupted through the scope's deadline.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use moveforge_solver::termination::TimeTermination;
///
/// // Terminate after 30 seconds
/// let term = TimeTermination::new(Duration::from_secs(30));
///
/// // Or use convenience constructors
/// let term = TimeTermination::seconds(30);
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &SolveScope) -> bool {
        scope.elapsed() >= self.limit
    }

    fn cause(&self, n: i64, scope: &SolveScope) -> SolveError {
        SolveError::TimeLimit {
            n,
            k: scope.current_k(),
        }
    }
}
