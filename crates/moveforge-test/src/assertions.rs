//! Assertions on returned solutions.

use moveforge_core::{MoveSequence, Problem};

/// Panics unless `sequence` executes legally in order and ends on the goal.
pub fn assert_realizable(problem: &Problem, sequence: &MoveSequence) {
    if let Err(err) = problem.replay(sequence) {
        panic!("{} is not a solution of {}: {}", sequence, problem, err);
    }
}

/// Panics unless the signed moment of `sequence` equals `n · distance`, and,
/// for forward-only sequences, the plain sum of squares does too.
pub fn assert_moment_identity(problem: &Problem, sequence: &MoveSequence) {
    assert_eq!(
        sequence.signed_moment(),
        problem.target_moment(),
        "signed moment of {} for {}",
        sequence,
        problem
    );
    if sequence.is_forward_only() {
        assert_eq!(
            sequence.sum_of_squares(),
            problem.target_moment(),
            "sum of squares of {} for {}",
            sequence,
            problem
        );
    }
}
