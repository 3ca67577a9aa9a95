//! Search statistics.

use std::time::{Duration, Instant};

/// Aggregate counters for one solve run.
///
/// # Example
///
/// ```
/// use moveforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_level();
/// stats.record_nodes(40);
/// stats.record_candidate(true);
/// stats.record_candidate(false);
///
/// assert_eq!(stats.levels_searched, 1);
/// assert_eq!(stats.nodes_expanded, 40);
/// assert_eq!(stats.candidates_evaluated, 2);
/// assert_eq!(stats.candidates_rejected, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// `(n, k)` levels fully explored, including those served by smaller sizes.
    pub levels_searched: u64,
    /// Nodes popped by base/blacklist searches.
    pub nodes_expanded: u64,
    /// Magnitude multisets produced by the generator.
    pub multisets_generated: u64,
    /// Candidates handed to the reorderer.
    pub candidates_evaluated: u64,
    /// Candidates with no legal execution order.
    pub candidates_rejected: u64,
    /// Reduction table lookups answered from cache.
    pub memo_hits: u64,
}

impl SearchStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_level(&mut self) {
        self.levels_searched += 1;
    }

    pub fn record_nodes(&mut self, count: u64) {
        self.nodes_expanded += count;
    }

    pub fn record_multiset(&mut self) {
        self.multisets_generated += 1;
    }

    /// Records a candidate and whether it could be ordered legally.
    pub fn record_candidate(&mut self, realizable: bool) {
        self.candidates_evaluated += 1;
        if !realizable {
            self.candidates_rejected += 1;
        }
    }

    pub fn record_memo_hit(&mut self) {
        self.memo_hits += 1;
    }

    /// Returns the node expansion rate.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_expanded as f64 / secs
        } else {
            0.0
        }
    }
}
