//! Shared test fixtures for MoveForge crates.
//!
//! This crate provides reference solvers and assertions for testing.
//! It does NOT depend on `moveforge-solver`, so the solver can use it as a
//! dev-dependency.
//!
//! - [`brute_force`] - exhaustive exact-k search used as a baseline
//! - [`assertions`] - replay and identity checks for returned sequences
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! moveforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use moveforge_test::brute_force::minimal_solutions;
//! use moveforge_test::assertions::assert_realizable;
//! ```

pub mod assertions;
pub mod brute_force;

pub use assertions::{assert_moment_identity, assert_realizable};
pub use brute_force::{minimal_solutions, BruteForceResult};
