//! Progress events for long-running searches.
//!
//! Listeners registered with a [`ProgressSupport`] are notified when solving
//! starts and ends, when a move count has been fully explored, when a
//! running search reaches its reporting interval, and when a numerically
//! valid candidate turns out to have no legal execution order.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use moveforge_solver::event::{CountingProgressListener, ProgressSupport};
//!
//! let counter = Arc::new(CountingProgressListener::new());
//! let mut support = ProgressSupport::new();
//! support.add_listener(counter.clone());
//!
//! support.fire_level_finished(3, 2, 0);
//! assert_eq!(counter.level_finished_count(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moveforge_core::{Move, Problem};

/// Snapshot of a running search, handed to [`ProgressListener::on_progress`].
#[derive(Debug, Clone, Copy)]
pub struct ProgressReport<'a> {
    /// Problem size being searched.
    pub n: i64,
    /// Move count being searched.
    pub k: u32,
    /// Moves applied on the branch currently being explored.
    pub prefix: &'a [Move],
    /// Nodes expanded so far by this search.
    pub nodes_expanded: u64,
    /// Time since solving started.
    pub elapsed: Duration,
}

/// Listener for solver progress.
///
/// Every method has an empty default, so implementations override only the
/// events they care about.
pub trait ProgressListener: Send + Sync + Debug {
    /// Called before the first move count is tried.
    fn on_solving_started(&self, _problem: &Problem) {}

    /// Called after all candidates with `k` moves for size `n` were examined.
    fn on_level_finished(&self, _n: i64, _k: u32, _solutions: usize) {}

    /// Called at most once per reporting interval from inside a search.
    fn on_progress(&self, _report: &ProgressReport<'_>) {}

    /// Called when a candidate balances numerically but cannot be ordered
    /// legally.
    fn on_candidate_rejected(&self, _n: i64, _k: u32, _candidate: &[Move]) {}

    /// Called when solving stops; `moves` is `None` when no solution was found.
    fn on_solving_ended(&self, _problem: &Problem, _moves: Option<u32>) {}
}

/// Central broadcaster for progress events.
///
/// All listener methods are called synchronously in registration order.
#[derive(Clone, Default)]
pub struct ProgressSupport {
    listeners: Vec<Arc<dyn ProgressListener>>,
}

impl ProgressSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn ProgressListener>) {
        self.listeners.push(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn fire_solving_started(&self, problem: &Problem) {
        for listener in &self.listeners {
            listener.on_solving_started(problem);
        }
    }

    pub fn fire_level_finished(&self, n: i64, k: u32, solutions: usize) {
        for listener in &self.listeners {
            listener.on_level_finished(n, k, solutions);
        }
    }

    pub fn fire_progress(&self, report: &ProgressReport<'_>) {
        for listener in &self.listeners {
            listener.on_progress(report);
        }
    }

    pub fn fire_candidate_rejected(&self, n: i64, k: u32, candidate: &[Move]) {
        for listener in &self.listeners {
            listener.on_candidate_rejected(n, k, candidate);
        }
    }

    pub fn fire_solving_ended(&self, problem: &Problem, moves: Option<u32>) {
        for listener in &self.listeners {
            listener.on_solving_ended(problem, moves);
        }
    }
}

impl Debug for ProgressSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A logging listener that prints events to stdout.
#[derive(Debug, Clone, Default)]
pub struct LoggingProgressListener {
    prefix: String,
}

impl LoggingProgressListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ProgressListener for LoggingProgressListener {
    fn on_solving_started(&self, problem: &Problem) {
        println!("{}[Event] Solving {}", self.prefix, problem);
    }

    fn on_level_finished(&self, n: i64, k: u32, solutions: usize) {
        if solutions == 0 {
            println!("{}[Event] can't solve {} in {} moves", self.prefix, n, k);
        } else {
            println!(
                "{}[Event] can solve {} in {} moves ({} solutions)",
                self.prefix, n, k, solutions
            );
        }
    }

    fn on_progress(&self, report: &ProgressReport<'_>) {
        let prefix: Vec<String> = report.prefix.iter().map(Move::to_string).collect();
        println!(
            "{}[Event] processing {} in {} moves: [{}] after {} nodes, t={:.1}s",
            self.prefix,
            report.n,
            report.k,
            prefix.join(", "),
            report.nodes_expanded,
            report.elapsed.as_secs_f64()
        );
    }

    fn on_candidate_rejected(&self, n: i64, k: u32, candidate: &[Move]) {
        let moves: Vec<String> = candidate.iter().map(Move::to_string).collect();
        println!(
            "{}[Event] INVALID solution for {} in {}: [{}]",
            self.prefix,
            n,
            k,
            moves.join(", ")
        );
    }

    fn on_solving_ended(&self, problem: &Problem, moves: Option<u32>) {
        match moves {
            Some(k) => println!("{}[Event] {} solved in {} moves", self.prefix, problem, k),
            None => println!("{}[Event] {} unsolved", self.prefix, problem),
        }
    }
}

/// A counting listener that tracks event occurrences.
///
/// Useful for testing and statistics collection.
#[derive(Debug, Default)]
pub struct CountingProgressListener {
    solving_started_count: AtomicUsize,
    level_finished_count: AtomicUsize,
    progress_count: AtomicUsize,
    candidate_rejected_count: AtomicUsize,
    solving_ended_count: AtomicUsize,
}

impl CountingProgressListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solving_started_count(&self) -> usize {
        self.solving_started_count.load(Ordering::SeqCst)
    }

    pub fn level_finished_count(&self) -> usize {
        self.level_finished_count.load(Ordering::SeqCst)
    }

    pub fn progress_count(&self) -> usize {
        self.progress_count.load(Ordering::SeqCst)
    }

    pub fn candidate_rejected_count(&self) -> usize {
        self.candidate_rejected_count.load(Ordering::SeqCst)
    }

    pub fn solving_ended_count(&self) -> usize {
        self.solving_ended_count.load(Ordering::SeqCst)
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.solving_started_count.store(0, Ordering::SeqCst);
        self.level_finished_count.store(0, Ordering::SeqCst);
        self.progress_count.store(0, Ordering::SeqCst);
        self.candidate_rejected_count.store(0, Ordering::SeqCst);
        self.solving_ended_count.store(0, Ordering::SeqCst);
    }
}

impl ProgressListener for CountingProgressListener {
    fn on_solving_started(&self, _problem: &Problem) {
        self.solving_started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_level_finished(&self, _n: i64, _k: u32, _solutions: usize) {
        self.level_finished_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_progress(&self, _report: &ProgressReport<'_>) {
        self.progress_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_candidate_rejected(&self, _n: i64, _k: u32, _candidate: &[Move]) {
        self.candidate_rejected_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_solving_ended(&self, _problem: &Problem, _moves: Option<u32>) {
        self.solving_ended_count.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
