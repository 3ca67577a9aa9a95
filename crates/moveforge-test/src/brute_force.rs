//! Exhaustive baseline solver.
//!
//! Tries every legal move from every occupied position, in both directions,
//! within a bounded window around the source and sink. Exponential, so only
//! usable for very small problems.

use std::collections::BTreeSet;

use moveforge_core::{ConservationState, Move, MoveSequence, Problem, Signature};

/// Every solution with the minimum number of moves.
#[derive(Debug, Clone)]
pub struct BruteForceResult {
    pub moves: u32,
    pub solutions: Vec<MoveSequence>,
}

impl BruteForceResult {
    pub fn signatures(&self) -> BTreeSet<Signature> {
        self.solutions.iter().map(MoveSequence::signature).collect()
    }
}

/// Finds the minimum move count up to `max_moves` and all solutions of that
/// length. Returns `None` if nothing solves the problem within `max_moves`.
///
/// # Example
///
/// ```
/// use moveforge_core::Problem;
/// use moveforge_test::brute_force::minimal_solutions;
///
/// let result = minimal_solutions(&Problem::new(1, 2).unwrap(), 3).unwrap();
/// assert_eq!(result.moves, 2);
/// assert_eq!(result.solutions.len(), 1);
/// ```
pub fn minimal_solutions(problem: &Problem, max_moves: u32) -> Option<BruteForceResult> {
    let reach = 2 * (problem.n() + problem.distance());
    let window = (problem.source() - reach, problem.sink() + reach);
    let goal = problem.goal_holdings();

    for k in 0..=max_moves {
        let mut solutions = Vec::new();
        let mut prefix = Vec::with_capacity(k as usize);
        explore(&problem.holdings(), &goal, k, window, &mut prefix, &mut solutions);
        if !solutions.is_empty() {
            return Some(BruteForceResult {
                moves: k,
                solutions,
            });
        }
    }
    None
}

fn explore(
    holdings: &ConservationState,
    goal: &ConservationState,
    moves_left: u32,
    window: (i64, i64),
    prefix: &mut Vec<Move>,
    solutions: &mut Vec<MoveSequence>,
) {
    if moves_left == 0 {
        if holdings == goal {
            solutions.push(MoveSequence::from(prefix.clone()));
        }
        return;
    }
    let occupied: Vec<(i64, i64)> = holdings.iter().filter(|&(_, units)| units > 0).collect();
    for (from, units) in occupied {
        let lo = (from - units).max(window.0);
        let hi = (from + units).min(window.1);
        for to in lo..=hi {
            if to == from {
                continue;
            }
            let mv = Move::new(from, to);
            prefix.push(mv);
            explore(&holdings.apply(mv), goal, moves_left - 1, window, prefix, solutions);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_problem_needs_no_moves() {
        let result = minimal_solutions(&Problem::new(0, 3).unwrap(), 2).unwrap();
        assert_eq!(result.moves, 0);
        assert_eq!(result.solutions, vec![MoveSequence::new()]);
    }

    #[test]
    fn test_two_units_over_one() {
        let result = minimal_solutions(&Problem::new(2, 1).unwrap(), 3).unwrap();
        assert_eq!(result.moves, 2);
        let expected: BTreeSet<Signature> =
            [Signature::from_magnitudes([1, 1])].into_iter().collect();
        assert_eq!(result.signatures(), expected);
    }

    #[test]
    fn test_gives_up_past_limit() {
        assert!(minimal_solutions(&Problem::new(3, 1).unwrap(), 2).is_none());
    }
}
