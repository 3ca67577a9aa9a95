//! Solver entry points that hide all internal wiring.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use moveforge_config::{ConfigError, SolverConfig, Strategy};
use moveforge_core::Signature;
use moveforge_solver::{SolveError, SolveOutcome, Solver};
use tracing::{info, warn};

/// Configuration file picked up by [`run_solver`].
const CONFIG_FILE: &str = "moveforge.toml";

fn load_config() -> SolverConfig {
    match SolverConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => SolverConfig::default(),
        Err(err) => {
            warn!(event = "config_ignored", file = CONFIG_FILE, error = %err);
            SolverConfig::default()
        }
    }
}

/// Solves `n` units with the settings in `moveforge.toml`, or the defaults
/// when there is no such file.
///
/// With the `console` feature the colored console is installed first.
pub fn run_solver(n: i64) -> Result<SolveOutcome, SolveError> {
    #[cfg(feature = "console")]
    moveforge_console::init();

    Solver::new(load_config()).solve(n)
}

/// Solves every size in `sizes` with one solver, so cached results carry
/// over from one size to the next. Stops at the first failure.
///
/// # Example
///
/// ```
/// use moveforge::{sweep, SolverConfig};
///
/// let outcomes = sweep(SolverConfig::default(), 1..=3).unwrap();
/// let moves: Vec<u32> = outcomes.iter().map(|o| o.moves).collect();
/// assert_eq!(moves, vec![1, 2, 3]);
/// ```
pub fn sweep(
    config: SolverConfig,
    sizes: RangeInclusive<i64>,
) -> Result<Vec<SolveOutcome>, SolveError> {
    let mut solver = Solver::new(config);
    let mut outcomes = Vec::new();
    for n in sizes {
        outcomes.push(solver.solve(n)?);
    }
    Ok(outcomes)
}

/// Forward solutions of `n` units over `n + 1`, next to those of `n + 1`
/// units over `n`.
///
/// Both problems share the target moment `n · (n + 1)`, so the generator
/// offers them the same magnitude multisets. Only realizability differs.
#[derive(Debug, Clone)]
pub struct SymmetryReport {
    pub n: i64,
    /// `n` units over distance `n + 1`.
    pub narrow: SolveOutcome,
    /// `n + 1` units over distance `n`.
    pub wide: SolveOutcome,
}

impl SymmetryReport {
    /// Signatures found only for the narrow problem, then only for the wide one.
    pub fn differences(&self) -> (BTreeSet<Signature>, BTreeSet<Signature>) {
        let narrow = self.narrow.signatures();
        let wide = self.wide.signatures();
        (
            narrow.difference(&wide).cloned().collect(),
            wide.difference(&narrow).cloned().collect(),
        )
    }

    pub fn agrees(&self) -> bool {
        self.narrow.moves == self.wide.moves
            && self.narrow.signatures() == self.wide.signatures()
    }
}

/// Runs the multiset strategy on both sides of [`SymmetryReport`].
///
/// Everything in `config` except the strategy and distance applies to both
/// runs.
pub fn symmetry(config: SolverConfig, n: i64) -> Result<SymmetryReport, SolveError> {
    let config = config.with_strategy(Strategy::Multiset);
    let narrow = Solver::new(config.clone().with_distance(n + 1)).solve(n)?;
    let wide = Solver::new(config.with_distance(n)).solve(n + 1)?;

    let report = SymmetryReport { n, narrow, wide };
    info!(
        event = "symmetry",
        n = n,
        narrow_moves = report.narrow.moves as u64,
        wide_moves = report.wide.moves as u64,
        agrees = report.agrees(),
    );
    Ok(report)
}
