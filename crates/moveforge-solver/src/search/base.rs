//! Base/blacklist search over imbalance states.

use std::ops::RangeInclusive;

use moveforge_config::PruningMode;
use moveforge_core::{ConservationState, Move, MoveSequence, Position, Problem};

use super::resolved::ResolvedSet;
use crate::scope::SearchMonitor;

#[derive(Debug)]
struct SearchNode {
    state: ConservationState,
    moves_left: u32,
    prefix: MoveSequence,
    resolved: ResolvedSet,
}

/// Partner ranges around the current base.
#[derive(Debug, Clone, Copy)]
struct PartnerRanges {
    pruning: PruningMode,
    n: i64,
    source: Position,
    sink: Position,
}

impl PartnerRanges {
    fn opening(&self, base: Position) -> RangeInclusive<Position> {
        match self.pruning {
            PruningMode::Strict => (base - self.n)..=(base + self.n),
            PruningMode::Lenient => (self.sink + 1)..=(base + self.n),
        }
    }

    fn same_base(&self, base: Position, target: Position) -> RangeInclusive<Position> {
        match self.pruning {
            PruningMode::Strict => (target + 1)..=(base + self.n),
            PruningMode::Lenient => (target + 1)..=(self.n + self.sink).min(base + self.n),
        }
    }

    fn next_base(&self, base: Position) -> RangeInclusive<Position> {
        match self.pruning {
            PruningMode::Strict => (base - self.n)..=(base + self.n),
            PruningMode::Lenient => {
                (self.sink + 1).max(base - self.n)..=(self.n + self.sink).min(base + self.n)
            }
        }
    }

    // strict mode never re-pairs the source with the sink directly
    fn skips(&self, base: Position, partner: Position) -> bool {
        self.pruning == PruningMode::Strict && base == self.source && partner == self.sink
    }
}

/// Lazily enumerates sequences of exactly `k` moves that balance a state.
///
/// The search commits to a *base* position, drains it by pairing it with
/// partners in ascending order, and then marks it resolved: later moves
/// never touch a resolved position except the current base. Each partner is
/// tried with the base as source and then as destination, and the last move
/// may be repeated. Once the remaining non-zero positions can only be
/// cleared pairwise, an endgame emits the forced balancing moves.
///
/// Results are numerically balanced but may still be unrealizable; callers
/// pass them through [`reorder`](crate::reorder::reorder).
///
/// # Example
///
/// ```
/// use moveforge_config::PruningMode;
/// use moveforge_core::{Move, MoveSequence, Problem};
/// use moveforge_solver::search::BaseSearch;
///
/// let problem = Problem::new(1, 1).unwrap();
/// let found: Vec<MoveSequence> = BaseSearch::new(problem, 1, PruningMode::Strict).collect();
/// assert_eq!(found, vec![MoveSequence::from(vec![Move::new(0, 1)])]);
/// ```
#[derive(Debug)]
pub struct BaseSearch {
    ranges: PartnerRanges,
    stack: Vec<SearchNode>,
    nodes_expanded: u64,
    monitor: Option<SearchMonitor>,
    interrupted: bool,
}

impl BaseSearch {
    /// Searches from the problem's initial imbalance.
    pub fn new(problem: Problem, moves: u32, pruning: PruningMode) -> Self {
        Self::from_state(problem, problem.initial_state(), moves, pruning)
    }

    /// Searches from an arbitrary imbalance state.
    pub fn from_state(
        problem: Problem,
        state: ConservationState,
        moves: u32,
        pruning: PruningMode,
    ) -> Self {
        Self {
            ranges: PartnerRanges {
                pruning,
                n: problem.n(),
                source: problem.source(),
                sink: problem.sink(),
            },
            stack: vec![SearchNode {
                state,
                moves_left: moves,
                prefix: MoveSequence::new(),
                resolved: ResolvedSet::new(),
            }],
            nodes_expanded: 0,
            monitor: None,
            interrupted: false,
        }
    }

    pub fn with_monitor(mut self, monitor: SearchMonitor) -> Self {
        self.monitor = Some(monitor);
        self
    }

    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Returns true if the monitor's deadline cut the search short.
    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    fn expand(&mut self, node: SearchNode) {
        let mut children: Vec<(Move, ResolvedSet)> = Vec::new();

        match node.resolved.base() {
            None => {
                let Some(base) = node.state.min_position() else {
                    return;
                };
                let resolved = node.resolved.with(base);
                for partner in self.ranges.opening(base) {
                    if partner == base || partner == self.ranges.sink {
                        continue;
                    }
                    children.push((Move::new(base, partner), resolved.clone()));
                    children.push((Move::new(partner, base), resolved.clone()));
                }
            }
            Some(base) => {
                let Some(last) = node.prefix.last() else {
                    return;
                };
                let Some(target) = last.partner_of(base) else {
                    return;
                };

                children.push((last, node.resolved.clone()));

                for partner in self.ranges.same_base(base, target) {
                    if node.resolved.contains(partner) || self.ranges.skips(base, partner) {
                        continue;
                    }
                    children.push((Move::new(base, partner), node.resolved.clone()));
                    children.push((Move::new(partner, base), node.resolved.clone()));
                }

                if node.state.balance(base) == 0 {
                    if let Some(next_base) = node.state.min_position() {
                        let resolved = node.resolved.with(next_base);
                        for partner in self.ranges.next_base(next_base) {
                            if resolved.contains(partner) {
                                continue;
                            }
                            children.push((Move::new(next_base, partner), resolved.clone()));
                            children.push((Move::new(partner, next_base), resolved.clone()));
                        }
                    }
                }
            }
        }

        for (mv, resolved) in children.into_iter().rev() {
            self.stack.push(SearchNode {
                state: node.state.apply(mv),
                moves_left: node.moves_left - 1,
                prefix: node.prefix.with(mv),
                resolved,
            });
        }
    }
}

impl Iterator for BaseSearch {
    type Item = MoveSequence;

    fn next(&mut self) -> Option<MoveSequence> {
        while let Some(node) = self.stack.pop() {
            self.nodes_expanded += 1;
            if let Some(monitor) = self.monitor.as_mut() {
                if !monitor.on_node(self.nodes_expanded, node.prefix.moves()) {
                    self.stack.clear();
                    self.interrupted = true;
                    return None;
                }
            }

            let slack = 2 * i64::from(node.moves_left) - node.state.nonzero_count() as i64;
            if slack < 0 {
                continue;
            }
            if slack == 0 {
                if let Some(sequence) = endgame(&node.state, &node.prefix) {
                    return Some(sequence);
                }
                continue;
            }
            // exactly k moves are required
            if node.state.is_solved() {
                continue;
            }
            self.expand(node);
        }
        None
    }
}

/// Clears `state` pairwise from the left, or fails if the pairs don't cancel.
///
/// With exactly two non-zero positions per remaining move, the smallest
/// position `p` holding `v` can only be balanced by the position `|v|` to its
/// right, which must hold `-v`.
fn endgame(state: &ConservationState, prefix: &MoveSequence) -> Option<MoveSequence> {
    let mut state = state.clone();
    let mut moves = prefix.moves().to_vec();
    while let Some(position) = state.min_position() {
        let value = state.balance(position);
        let partner = position + value.abs();
        if state.balance(partner) + value != 0 {
            return None;
        }
        let mv = if value > 0 {
            Move::new(position, partner)
        } else {
            Move::new(partner, position)
        };
        state = state.apply(mv);
        moves.push(mv);
    }
    Some(moves.into())
}
