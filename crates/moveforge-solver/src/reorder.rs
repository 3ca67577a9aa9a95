//! Feasibility reordering of unordered move multisets.

use moveforge_core::{ConservationState, Move, MoveSequence};

/// Finds an order in which every move of `moves` is legal, starting from
/// `initial` holdings and ending on `goal`.
///
/// A move is legal when its source holds at least as many units as the move
/// carries. Permutations are explored depth-first over the sorted moves;
/// identical moves are interchangeable, so only the first unused copy is
/// tried at each depth. Returns `None` if no order works, which means the
/// multiset balances numerically but cannot be executed.
///
/// # Example
///
/// ```
/// use moveforge_core::{ConservationState, Move, MoveSequence};
/// use moveforge_solver::reorder::reorder;
///
/// let holdings = ConservationState::from_entries([(0, 1)]);
/// let goal = ConservationState::from_entries([(2, 1)]);
/// let order = reorder(&holdings, &goal, &[Move::new(1, 2), Move::new(0, 1)]);
/// assert_eq!(order, Some(MoveSequence::from(vec![Move::new(0, 1), Move::new(1, 2)])));
/// ```
pub fn reorder(
    initial: &ConservationState,
    goal: &ConservationState,
    moves: &[Move],
) -> Option<MoveSequence> {
    let mut sorted = moves.to_vec();
    sorted.sort_unstable();
    let mut used = vec![false; sorted.len()];
    let mut order = Vec::with_capacity(sorted.len());
    place(initial, goal, &sorted, &mut used, &mut order).then(|| order.into())
}

fn place(
    state: &ConservationState,
    goal: &ConservationState,
    moves: &[Move],
    used: &mut [bool],
    order: &mut Vec<Move>,
) -> bool {
    if order.len() == moves.len() {
        return state == goal;
    }
    let mut previous: Option<Move> = None;
    for index in 0..moves.len() {
        if used[index] {
            continue;
        }
        let mv = moves[index];
        if previous == Some(mv) {
            continue;
        }
        previous = Some(mv);
        if !state.can_apply(mv) {
            continue;
        }

        used[index] = true;
        order.push(mv);
        if place(&state.apply(mv), goal, moves, used, order) {
            return true;
        }
        order.pop();
        used[index] = false;
    }
    false
}

#[cfg(test)]
#[path = "reorder_tests.rs"]
mod tests;
