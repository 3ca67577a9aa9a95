//! The driver loop: try increasing move counts until one has solutions.

use std::collections::BTreeSet;
use std::rc::Rc;
use std::sync::Arc;

use moveforge_config::{SolverConfig, Strategy};
use moveforge_core::{MoveSequence, Problem, Signature};
use tracing::info;

use crate::error::SolveError;
use crate::event::{ProgressListener, ProgressSupport};
use crate::memo::{ReductionTable, TableSettings};
use crate::scope::SolveScope;
use crate::stats::SearchStats;
use crate::strategy::{LevelSearch, MultisetSearch};
use crate::termination::{MoveCountTermination, Termination, TimeTermination};

/// Minimal solutions of one problem.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// The solved problem.
    pub problem: Problem,
    /// Strategy that produced the solutions.
    pub strategy: Strategy,
    /// Minimum number of moves.
    pub moves: u32,
    /// Legally ordered solutions with `moves` moves each.
    pub solutions: Vec<MoveSequence>,
    /// Counters for the whole run.
    pub stats: SearchStats,
}

impl SolveOutcome {
    pub fn n(&self) -> i64 {
        self.problem.n()
    }

    /// Distinct signatures of the solutions.
    pub fn signatures(&self) -> BTreeSet<Signature> {
        self.solutions.iter().map(MoveSequence::signature).collect()
    }

    /// One solution per signature, in discovery order.
    pub fn distinct_by_signature(&self) -> Vec<&MoveSequence> {
        let mut seen = BTreeSet::new();
        self.solutions
            .iter()
            .filter(|s| seen.insert(s.signature()))
            .collect()
    }
}

/// Searches for minimum-move solutions.
///
/// A solver keeps its level search between calls, so the reduction table
/// built while solving one size is reused for the next.
///
/// # Example
///
/// ```
/// use moveforge_config::SolverConfig;
/// use moveforge_solver::Solver;
///
/// let mut solver = Solver::new(SolverConfig::default());
/// let outcome = solver.solve(1).unwrap();
/// assert_eq!(outcome.moves, 1);
/// assert_eq!(outcome.solutions[0].to_string(), "[0->1(1)]");
/// ```
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    search: Box<dyn LevelSearch>,
    events: ProgressSupport,
    terminations: Vec<Box<dyn Termination>>,
}

impl Solver {
    /// Creates a solver with the level search and terminations `config` asks for.
    pub fn new(config: SolverConfig) -> Self {
        let search: Box<dyn LevelSearch> = match config.effective_strategy() {
            Strategy::Multiset => Box::new(MultisetSearch::new(config.first_only)),
            _ => Box::new(ReductionTable::new(TableSettings {
                pruning: config.pruning,
                first_only: config.first_only,
            })),
        };

        let mut terminations: Vec<Box<dyn Termination>> = Vec::new();
        if let Some(limit) = config.move_count_limit() {
            terminations.push(Box::new(MoveCountTermination::new(limit)));
        }
        if let Some(limit) = config.time_limit() {
            terminations.push(Box::new(TimeTermination::new(limit)));
        }

        Self {
            config,
            search,
            events: ProgressSupport::new(),
            terminations,
        }
    }

    /// Registers a progress listener.
    pub fn with_listener(mut self, listener: Arc<dyn ProgressListener>) -> Self {
        self.events.add_listener(listener);
        self
    }

    /// Adds a termination condition.
    pub fn with_termination(mut self, termination: Box<dyn Termination>) -> Self {
        self.terminations.push(termination);
        self
    }

    /// Replaces the level search.
    pub fn with_search(mut self, search: Box<dyn LevelSearch>) -> Self {
        self.search = search;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn strategy(&self) -> Strategy {
        self.search.strategy()
    }

    fn scope(&self) -> SolveScope {
        let scope = SolveScope::new(self.events.clone(), self.config.progress.interval());
        match self.config.time_limit() {
            Some(limit) => scope.with_time_limit(limit),
            None => scope,
        }
    }

    /// Finds the minimum move count for `n` units and every minimal solution
    /// the strategy produces, trying `start_k, start_k + 1, …` in turn.
    pub fn solve(&mut self, n: i64) -> Result<SolveOutcome, SolveError> {
        let problem = Problem::new(n, self.config.distance)?;
        let strategy = self.search.strategy();
        let mut scope = self.scope();

        info!(
            event = "solve_start",
            n = n,
            distance = problem.distance(),
            strategy = %strategy,
            pruning = %self.config.pruning,
            first_only = self.config.first_only,
        );
        self.events.fire_solving_started(&problem);

        let mut k = self.config.start_k;
        let result = loop {
            scope.set_current_k(k);
            if let Some(termination) = self.terminations.iter().find(|t| t.is_terminated(&scope)) {
                break Err(termination.cause(n, &scope));
            }

            let solutions = match self.search.solutions_at(&problem, k, &mut scope) {
                Ok(solutions) => solutions,
                Err(err) => break Err(err),
            };
            if let Some(first) = solutions.first() {
                break Ok((first.len() as u32, solutions));
            }

            info!(event = "level_failed", n = n, k = k as u64);
            k = match k.checked_add(1) {
                Some(next) => next,
                None => break Err(SolveError::Unsolved { n, ceiling: k }),
            };
        };

        let stats = scope.stats().clone();
        match result {
            Ok((moves, solutions)) => {
                info!(
                    event = "solve_end",
                    n = n,
                    moves = moves as u64,
                    solutions = solutions.len() as u64,
                    nodes = stats.nodes_expanded,
                    duration_ms = stats.elapsed().as_millis() as u64,
                );
                self.events.fire_solving_ended(&problem, Some(moves));
                Ok(SolveOutcome {
                    problem,
                    strategy,
                    moves,
                    solutions: solutions.to_vec(),
                    stats,
                })
            }
            Err(err) => {
                info!(
                    event = "solve_end",
                    n = n,
                    error = %err,
                    nodes = stats.nodes_expanded,
                    duration_ms = stats.elapsed().as_millis() as u64,
                );
                self.events.fire_solving_ended(&problem, None);
                Err(err)
            }
        }
    }

    /// Lists the solutions of `n` units at exactly one move count.
    ///
    /// With the reduction strategy this returns the cached minimal
    /// solutions whenever `k` is at or above the minimum.
    pub fn solutions_at(&mut self, n: i64, k: u32) -> Result<Rc<[MoveSequence]>, SolveError> {
        let problem = Problem::new(n, self.config.distance)?;
        let mut scope = self.scope();
        scope.set_current_k(k);
        self.search.solutions_at(&problem, k, &mut scope)
    }
}

/// Solves `n` units over distance 1 with default settings, starting at
/// `start_k` moves.
///
/// # Example
///
/// ```
/// let outcome = moveforge_solver::solve(2, 1).unwrap();
/// assert_eq!(outcome.moves, 2);
/// ```
pub fn solve(n: i64, start_k: u32) -> Result<SolveOutcome, SolveError> {
    Solver::new(SolverConfig::default().with_start_k(start_k)).solve(n)
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
