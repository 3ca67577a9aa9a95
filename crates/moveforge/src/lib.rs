//! MoveForge - minimum-move search for units on a line
//!
//! `n` units sit at position 0 and must all reach position `distance`. A
//! move carries as many units as the distance it travels. MoveForge finds
//! the least number of moves that does it, together with every minimal
//! solution in a legal execution order.
//!
//! # Example
//!
//! ```rust
//! use moveforge::prelude::*;
//!
//! let outcome = solve(3, 1).unwrap();
//! assert_eq!(outcome.moves, 3);
//! assert!(outcome.solutions.iter().all(|s| s.signed_moment() == 3));
//! ```

// Core types
pub use moveforge_core::{
    ConservationState, Move, MoveForgeError, MoveSequence, Position, Problem, Signature, SOURCE,
};

// Configuration
pub use moveforge_config::{
    ConfigError, ProgressConfig, PruningMode, SolverConfig, Strategy, TerminationConfig,
};

// Solver
pub use moveforge_solver::event::{
    CountingProgressListener, LoggingProgressListener, ProgressListener, ProgressReport,
};
pub use moveforge_solver::{solve, SearchStats, SolveError, SolveOutcome, Solver};

/// Colored console output, enabled with the `console` feature.
#[cfg(feature = "console")]
pub use moveforge_console as console;

mod runner;
pub use runner::{run_solver, sweep, symmetry, SymmetryReport};

pub mod prelude {
    pub use super::{
        solve, Move, MoveSequence, Problem, PruningMode, Signature, SolveError, SolveOutcome,
        Solver, SolverConfig, Strategy,
    };
    pub use super::{run_solver, sweep, symmetry};
}
