//! Search engine for MoveForge.
//!
//! Finds the minimum number of moves that carry `n` units from position 0
//! to the sink, and lists the minimal solutions.
//!
//! - [`generator`]: magnitude multisets by the sum-of-squares identity
//! - [`search`]: symmetry-breaking searches over states
//! - [`reorder`]: legal execution orders for unordered moves
//! - [`memo`]: reduction table reusing solutions of neighbouring sizes
//! - [`Solver`]: the driver loop over increasing move counts

pub mod error;
pub mod event;
pub mod generator;
pub mod memo;
pub mod reorder;
pub mod scope;
pub mod search;
pub mod solver;
pub mod stats;
pub mod strategy;
pub mod termination;

pub use error::SolveError;
pub use event::{
    CountingProgressListener, LoggingProgressListener, ProgressListener, ProgressReport,
    ProgressSupport,
};
pub use generator::MagnitudeMultisets;
pub use memo::{MemoEntry, ReductionTable, TableSettings};
pub use moveforge_config::{PruningMode, SolverConfig, Strategy};
pub use reorder::reorder;
pub use scope::{SearchMonitor, SolveScope};
pub use search::{realize, BaseSearch, ResolvedSet};
pub use solver::{solve, SolveOutcome, Solver};
pub use stats::SearchStats;
pub use strategy::{LevelSearch, MultisetSearch};
pub use termination::{MoveCountTermination, Termination, TimeTermination};
