//! Level searches: everything needed to answer "all minimal solutions of
//! size `n` with exactly `k` moves".

use std::fmt::Debug;
use std::rc::Rc;

use moveforge_config::Strategy;
use moveforge_core::{Move, MoveSequence, Problem};
use tracing::debug;

use crate::error::SolveError;
use crate::generator::MagnitudeMultisets;
use crate::reorder::reorder;
use crate::scope::SolveScope;
use crate::search::realize;

/// A search that lists the solutions of one `(problem, k)` level.
///
/// Implementations return an empty slice when no solution with `k` moves
/// exists. Returned sequences are legally ordered.
pub trait LevelSearch: Debug {
    /// The strategy this search implements.
    fn strategy(&self) -> Strategy;

    /// Lists solutions of `problem` with `k` moves.
    fn solutions_at(
        &mut self,
        problem: &Problem,
        k: u32,
        scope: &mut SolveScope,
    ) -> Result<Rc<[MoveSequence]>, SolveError>;
}

/// Orders a candidate, recording the outcome and reporting rejections.
pub(crate) fn admit(
    problem: &Problem,
    k: u32,
    candidate: &[Move],
    scope: &mut SolveScope,
) -> Option<MoveSequence> {
    let ordered = reorder(&problem.holdings(), &problem.goal_holdings(), candidate);
    scope.stats_mut().record_candidate(ordered.is_some());
    if ordered.is_none() {
        debug!(
            event = "candidate_rejected",
            n = problem.n(),
            k = k as u64,
            moves = candidate.len() as u64,
        );
        scope.events().fire_candidate_rejected(problem.n(), k, candidate);
    }
    ordered
}

pub(crate) fn record_level(scope: &mut SolveScope, n: i64, k: u32, solutions: usize) {
    scope.stats_mut().record_level();
    scope.events().fire_level_finished(n, k, solutions);
    debug!(
        event = "level_end",
        n = n,
        k = k as u64,
        solutions = solutions as u64,
    );
}

/// Forward-only search driven by the sum-of-squares identity.
///
/// Each magnitude multiset with `Σ m² = n · distance` is realized by
/// [`realize`] and then confirmed by the reorderer. Works for any distance,
/// but only finds solutions whose moves all point toward the sink.
#[derive(Debug, Clone, Default)]
pub struct MultisetSearch {
    first_only: bool,
}

impl MultisetSearch {
    pub fn new(first_only: bool) -> Self {
        Self { first_only }
    }
}

impl LevelSearch for MultisetSearch {
    fn strategy(&self) -> Strategy {
        Strategy::Multiset
    }

    fn solutions_at(
        &mut self,
        problem: &Problem,
        k: u32,
        scope: &mut SolveScope,
    ) -> Result<Rc<[MoveSequence]>, SolveError> {
        if problem.n() == 0 {
            return Ok(Rc::from(vec![MoveSequence::new()]));
        }

        let monitor = scope.monitor(problem.n(), k);
        let multisets = MagnitudeMultisets::new(
            problem.target_moment(),
            problem.n().min(problem.distance()),
            k as usize,
        )
        .with_asymmetry_cap(problem.n().max(problem.distance()));

        let mut found = Vec::new();
        for magnitudes in multisets {
            if monitor.is_expired() {
                return Err(SolveError::TimeLimit { n: problem.n(), k });
            }
            scope.stats_mut().record_multiset();
            let Some(candidate) = realize(problem, &magnitudes) else {
                continue;
            };
            if let Some(ordered) = admit(problem, k, candidate.moves(), scope) {
                found.push(ordered);
                if self.first_only {
                    break;
                }
            }
        }

        record_level(scope, problem.n(), k, found.len());
        Ok(Rc::from(found))
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
