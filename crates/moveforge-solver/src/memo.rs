//! Memoized reduction table for distance 1.
//!
//! A solution for `n` units can start by moving one unit straight to the
//! sink, leaving the problem for `n - 1`, or by pulling one unit back from
//! the sink, leaving the problem for `n + 1`. The table caches the minimal
//! solutions of every size it has seen and composes them into candidates
//! for neighbouring sizes, alongside a fresh base/blacklist search.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use moveforge_config::{PruningMode, Strategy};
use moveforge_core::{Move, MoveSequence, Problem};

use crate::error::SolveError;
use crate::scope::SolveScope;
use crate::search::BaseSearch;
use crate::strategy::{admit, record_level, LevelSearch};

/// Settings a cached result depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TableSettings {
    pub pruning: PruningMode,
    pub first_only: bool,
}

/// What the table knows about one problem size.
///
/// `max_tried` only grows, and `can_solve` is set once, at the first level
/// that produced solutions.
#[derive(Debug, Clone)]
pub struct MemoEntry {
    max_tried: Option<u32>,
    can_solve: Option<u32>,
    solutions: Rc<[MoveSequence]>,
}

impl Default for MemoEntry {
    fn default() -> Self {
        Self {
            max_tried: None,
            can_solve: None,
            solutions: Rc::from(Vec::new()),
        }
    }
}

impl MemoEntry {
    /// Largest move count fully explored.
    pub fn max_tried(&self) -> Option<u32> {
        self.max_tried
    }

    /// Minimum move count, once known.
    pub fn can_solve(&self) -> Option<u32> {
        self.can_solve
    }

    /// Minimal solutions, empty until `can_solve` is known.
    pub fn solutions(&self) -> &[MoveSequence] {
        &self.solutions
    }
}

/// Cache of minimal solutions keyed by problem size.
///
/// # Example
///
/// ```
/// use moveforge_solver::event::ProgressSupport;
/// use moveforge_solver::memo::{ReductionTable, TableSettings};
/// use moveforge_solver::scope::SolveScope;
/// use std::time::Duration;
///
/// let mut scope = SolveScope::new(ProgressSupport::new(), Duration::from_secs(300));
/// let mut table = ReductionTable::new(TableSettings::default());
///
/// assert!(table.get_solutions(2, 1, &mut scope).unwrap().is_empty());
/// let solutions = table.get_solutions(2, 2, &mut scope).unwrap();
/// assert_eq!(solutions[0].to_string(), "[0->1(1), 0->1(1)]");
/// assert_eq!(table.entry(2).unwrap().can_solve(), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct ReductionTable {
    settings: TableSettings,
    entries: HashMap<i64, MemoEntry>,
}

impl ReductionTable {
    pub fn new(settings: TableSettings) -> Self {
        Self {
            settings,
            entries: HashMap::new(),
        }
    }

    pub fn settings(&self) -> TableSettings {
        self.settings
    }

    /// Switches to `settings`, dropping every entry if they differ.
    pub fn rescope(&mut self, settings: TableSettings) {
        if settings != self.settings {
            self.entries.clear();
            self.settings = settings;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entry(&self, n: i64) -> Option<&MemoEntry> {
        self.entries.get(&n)
    }

    /// Number of problem sizes with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Minimal solutions for `n` units, provided they need at most `k` moves.
    ///
    /// Returns an empty slice if `k` is below the minimum. Levels above the
    /// last one explored are searched in increasing order, so the first
    /// non-empty level recorded is the minimum.
    pub fn get_solutions(
        &mut self,
        n: i64,
        k: u32,
        scope: &mut SolveScope,
    ) -> Result<Rc<[MoveSequence]>, SolveError> {
        if n == 0 {
            return Ok(Rc::from(vec![MoveSequence::new()]));
        }

        let entry = self.entries.entry(n).or_default();
        if let Some(minimum) = entry.can_solve {
            scope.stats_mut().record_memo_hit();
            return Ok(if k < minimum {
                Rc::from(Vec::new())
            } else {
                entry.solutions.clone()
            });
        }
        let first = match entry.max_tried {
            Some(tried) if k <= tried => {
                scope.stats_mut().record_memo_hit();
                return Ok(Rc::from(Vec::new()));
            }
            Some(tried) => tried + 1,
            None => 0,
        };

        for level in first..=k {
            let found = self.search_level(n, level, scope)?;
            record_level(scope, n, level, found.len());

            let entry = self.entries.entry(n).or_default();
            entry.max_tried = Some(level);
            if !found.is_empty() {
                entry.can_solve = Some(level);
                entry.solutions = Rc::from(found);
                return Ok(entry.solutions.clone());
            }
        }
        Ok(Rc::from(Vec::new()))
    }

    fn search_level(
        &mut self,
        n: i64,
        level: u32,
        scope: &mut SolveScope,
    ) -> Result<Vec<MoveSequence>, SolveError> {
        if level == 0 {
            return Ok(Vec::new());
        }
        let problem = Problem::new(n, 1)?;
        let tail_len = (level - 1) as usize;
        let mut level_set = LevelSet::new(problem, level, self.settings.first_only);

        let smaller = self.get_solutions(n - 1, level - 1, scope)?;
        for tail in smaller.iter().filter(|s| s.len() == tail_len) {
            if level_set.consider(tail.prefixed(Move::new(0, 1)), scope) {
                return Ok(level_set.found);
            }
        }

        let larger = self.get_solutions(n + 1, level - 1, scope)?;
        for tail in larger
            .iter()
            .filter(|s| s.len() == tail_len && s.iter().all(|&mv| problem.admits(mv)))
        {
            if level_set.consider(tail.prefixed(Move::new(1, 0)), scope) {
                return Ok(level_set.found);
            }
        }

        let mut search = BaseSearch::new(problem, level, self.settings.pruning)
            .with_monitor(scope.monitor(n, level));
        for candidate in search.by_ref() {
            if level_set.consider(candidate, scope) {
                break;
            }
        }
        scope.stats_mut().record_nodes(search.nodes_expanded());
        if search.is_interrupted() {
            return Err(SolveError::TimeLimit { n, k: level });
        }
        Ok(level_set.found)
    }
}

impl LevelSearch for ReductionTable {
    fn strategy(&self) -> Strategy {
        Strategy::Reduction
    }

    fn solutions_at(
        &mut self,
        problem: &Problem,
        k: u32,
        scope: &mut SolveScope,
    ) -> Result<Rc<[MoveSequence]>, SolveError> {
        if problem.distance() != 1 {
            return Err(SolveError::UnsupportedDistance {
                strategy: Strategy::Reduction,
                distance: problem.distance(),
            });
        }
        self.get_solutions(problem.n(), k, scope)
    }
}

/// Deduplicated, legally ordered solutions collected for one level.
struct LevelSet {
    problem: Problem,
    level: u32,
    first_only: bool,
    seen: HashSet<Vec<Move>>,
    found: Vec<MoveSequence>,
}

impl LevelSet {
    fn new(problem: Problem, level: u32, first_only: bool) -> Self {
        Self {
            problem,
            level,
            first_only,
            seen: HashSet::new(),
            found: Vec::new(),
        }
    }

    /// Adds `candidate` if it is new and realizable; returns true when the
    /// level is complete.
    fn consider(&mut self, candidate: MoveSequence, scope: &mut SolveScope) -> bool {
        if candidate.len() != self.level as usize || !self.seen.insert(candidate.canonical()) {
            return false;
        }
        if let Some(ordered) = admit(&self.problem, self.level, candidate.moves(), scope) {
            self.found.push(ordered);
            return self.first_only;
        }
        false
    }
}

#[cfg(test)]
#[path = "memo_tests.rs"]
mod tests;
