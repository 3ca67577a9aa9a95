//! Termination conditions for the driver loop.

mod move_count;
mod time;

use std::fmt::Debug;

use crate::error::SolveError;
use crate::scope::SolveScope;

pub use move_count::MoveCountTermination;
pub use time::TimeTermination;

/// Decides when the driver should stop trying larger move counts.
pub trait Termination: Send + Debug {
    /// Returns true if solving should terminate before the current move count.
    fn is_terminated(&self, scope: &SolveScope) -> bool;

    /// The error reported when this condition stops a solve of size `n`.
    fn cause(&self, n: i64, scope: &SolveScope) -> SolveError;
}
