//! Core types for MoveForge.
//!
//! A problem places `n` units on position 0 and asks for the fewest moves
//! that bring all of them to the sink at `distance`. A move carries exactly
//! as many units as the distance it travels, and its source must hold that
//! many units when the move is executed.
//!
//! - [`Move`]: transfer between two distinct positions
//! - [`MoveSequence`] / [`Signature`]: ordered solutions and their magnitude multisets
//! - [`ConservationState`]: sparse signed distribution of units
//! - [`Problem`]: validated `(n, distance)` instance with replay checking

pub mod error;
pub mod position;
pub mod problem;
pub mod sequence;
pub mod state;

pub use error::{MoveForgeError, Result};
pub use position::{Move, Position};
pub use problem::{Problem, SOURCE};
pub use sequence::{MoveSequence, Signature};
pub use state::ConservationState;
