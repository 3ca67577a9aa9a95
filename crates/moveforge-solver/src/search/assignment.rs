//! Realizing a magnitude multiset with forward moves.

use moveforge_core::{ConservationState, Move, MoveSequence, Problem};

/// Finds rightward moves with exactly the given magnitudes that balance the
/// problem's initial state.
///
/// Every move leaves the smallest non-zero position, so the search never
/// has to choose a source. Magnitudes are tried largest first, and a base
/// that is not yet drained may only send magnitudes no larger than the last
/// one it sent. The first complete assignment wins.
///
/// # Example
///
/// ```
/// use moveforge_core::{Move, MoveSequence, Problem};
/// use moveforge_solver::search::realize;
///
/// let problem = Problem::new(1, 2).unwrap();
/// assert_eq!(
///     realize(&problem, &[1, 1]),
///     Some(MoveSequence::from(vec![Move::new(0, 1), Move::new(1, 2)]))
/// );
/// assert_eq!(realize(&problem, &[2]), None);
/// ```
pub fn realize(problem: &Problem, magnitudes: &[i64]) -> Option<MoveSequence> {
    let mut remaining = magnitudes.to_vec();
    remaining.sort_unstable_by(|a, b| b.cmp(a));
    let mut moves = Vec::with_capacity(remaining.len());
    let found = assign(
        problem,
        &problem.initial_state(),
        &mut remaining,
        &mut moves,
        problem.n(),
    );
    found.then(|| moves.into())
}

fn assign(
    problem: &Problem,
    state: &ConservationState,
    remaining: &mut Vec<i64>,
    moves: &mut Vec<Move>,
    ceiling: i64,
) -> bool {
    // k moves can balance at most k + 1 positions
    if remaining.len() + 1 < state.nonzero_count() {
        return false;
    }
    if remaining.is_empty() {
        return state.is_solved();
    }
    let Some(from) = state.min_position() else {
        return false;
    };
    let sink = problem.sink();
    let available = state.balance(from);

    if remaining.len() == 1 {
        let magnitude = remaining[0];
        if from + magnitude == sink && available == magnitude {
            moves.push(Move::new(from, sink));
            return true;
        }
        return false;
    }

    let mut index = 0;
    while index < remaining.len() {
        let magnitude = remaining[index];
        // skip duplicates; `remaining` is sorted descending
        let next_distinct = remaining[index..]
            .iter()
            .position(|&m| m != magnitude)
            .map_or(remaining.len(), |offset| index + offset);

        if magnitude <= sink - from && magnitude <= available && magnitude <= ceiling {
            let mv = Move::new(from, from + magnitude);
            let next = state.apply(mv);
            let next_ceiling = if next.balance(from) != 0 {
                magnitude
            } else {
                problem.n()
            };

            remaining.remove(index);
            moves.push(mv);
            if assign(problem, &next, remaining, moves, next_ceiling) {
                return true;
            }
            moves.pop();
            remaining.insert(index, magnitude);
        }
        index = next_distinct;
    }
    false
}
