//! Per-run solver state shared by every level search.

use std::time::{Duration, Instant};

use moveforge_core::Move;
use tracing::debug;

use crate::event::{ProgressReport, ProgressSupport};
use crate::stats::SearchStats;

/// Nodes between two clock reads in a running search.
const CHECK_EVERY: u64 = 1024;

/// Mutable context for one call to [`Solver::solve`](crate::Solver::solve).
#[derive(Debug)]
pub struct SolveScope {
    start_time: Instant,
    current_k: u32,
    stats: SearchStats,
    events: ProgressSupport,
    progress_interval: Duration,
    deadline: Option<Instant>,
}

impl SolveScope {
    pub fn new(events: ProgressSupport, progress_interval: Duration) -> Self {
        let mut stats = SearchStats::default();
        stats.start();
        Self {
            start_time: Instant::now(),
            current_k: 0,
            stats,
            events,
            progress_interval,
            deadline: None,
        }
    }

    /// Interrupts running searches once `limit` has elapsed.
    ///
    /// A limit too large to represent as an instant means no deadline.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.deadline = self.start_time.checked_add(limit);
        self
    }

    /// The instant past which searches are interrupted, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Move count the driver is currently trying.
    pub fn current_k(&self) -> u32 {
        self.current_k
    }

    pub fn set_current_k(&mut self, k: u32) {
        self.current_k = k;
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    pub fn events(&self) -> &ProgressSupport {
        &self.events
    }

    /// Creates a monitor for a search over `(n, k)`.
    pub fn monitor(&self, n: i64, k: u32) -> SearchMonitor {
        SearchMonitor {
            events: self.events.clone(),
            n,
            k,
            start_time: self.start_time,
            interval: self.progress_interval,
            next_report: Instant::now().checked_add(self.progress_interval),
            deadline: self.deadline,
        }
    }
}

/// Throttled progress reporting and deadline checks for one search.
#[derive(Debug, Clone)]
pub struct SearchMonitor {
    events: ProgressSupport,
    n: i64,
    k: u32,
    start_time: Instant,
    interval: Duration,
    next_report: Option<Instant>,
    deadline: Option<Instant>,
}

impl SearchMonitor {
    /// Called for every expanded node; returns false once the deadline passed.
    pub fn on_node(&mut self, nodes_expanded: u64, prefix: &[Move]) -> bool {
        if nodes_expanded % CHECK_EVERY != 0 {
            return true;
        }
        let now = Instant::now();
        if self.deadline.is_some_and(|d| now >= d) {
            return false;
        }
        if self.next_report.is_some_and(|t| now >= t) {
            self.next_report = now.checked_add(self.interval);
            let report = ProgressReport {
                n: self.n,
                k: self.k,
                prefix,
                nodes_expanded,
                elapsed: now - self.start_time,
            };
            debug!(
                event = "progress",
                n = self.n,
                k = self.k,
                nodes = nodes_expanded,
                depth = prefix.len() as u64,
            );
            self.events.fire_progress(&report);
        }
        true
    }

    /// Deadline check for searches that do not expand nodes.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
