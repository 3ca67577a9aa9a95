//! Properties every returned solution must satisfy, checked through the
//! public facade.

use moveforge::prelude::*;
use moveforge_solver::reorder;
use moveforge_test::brute_force::minimal_solutions;
use moveforge_test::{assert_moment_identity, assert_realizable};

fn reduction_outcomes(max_n: i64) -> Vec<SolveOutcome> {
    sweep(SolverConfig::default(), 1..=max_n).unwrap()
}

fn multiset_outcomes() -> Vec<SolveOutcome> {
    let mut outcomes = Vec::new();
    for distance in 2..=3 {
        let config = SolverConfig::default().with_distance(distance);
        outcomes.extend(sweep(config, 1..=4).unwrap());
    }
    outcomes
}

#[test]
fn test_states_conserve_units() {
    for outcome in reduction_outcomes(5).iter().chain(&multiset_outcomes()) {
        let problem = &outcome.problem;
        for solution in &outcome.solutions {
            let states = problem.replay_states(solution).unwrap();
            assert_eq!(states.len(), solution.len() + 1);
            for state in &states {
                assert_eq!(state.total(), problem.n());
                assert!(state.iter().all(|(_, units)| units > 0));
            }
            assert_eq!(states.last(), Some(&problem.goal_holdings()));
        }
    }
}

#[test]
fn test_moment_identity() {
    for outcome in reduction_outcomes(5).iter().chain(&multiset_outcomes()) {
        for solution in &outcome.solutions {
            assert_moment_identity(&outcome.problem, solution);
        }
    }
}

#[test]
fn test_multiset_solutions_point_forward() {
    for outcome in multiset_outcomes() {
        assert_eq!(outcome.strategy, Strategy::Multiset);
        for solution in &outcome.solutions {
            assert!(solution.is_forward_only(), "{}", solution);
            assert_eq!(solution.sum_of_squares(), outcome.problem.target_moment());
        }
    }
}

#[test]
fn test_reorder_recovers_scrambled_solutions() {
    for outcome in reduction_outcomes(4) {
        let problem = &outcome.problem;
        for solution in &outcome.solutions {
            let scrambled: Vec<Move> = solution.iter().rev().copied().collect();
            let ordered = reorder(&problem.holdings(), &problem.goal_holdings(), &scrambled)
                .expect("solution has a legal order");
            assert_eq!(ordered.canonical(), solution.canonical());
            assert_realizable(problem, &ordered);
        }
    }
}

#[test]
fn test_mirrored_solutions_replay() {
    for outcome in reduction_outcomes(5).iter().chain(&multiset_outcomes()) {
        let distance = outcome.problem.distance();
        for solution in &outcome.solutions {
            let mirrored = solution.mirrored(distance);
            assert_eq!(mirrored.signature(), solution.signature());
            assert_realizable(&outcome.problem, &mirrored);
        }
    }
}

#[test]
fn test_minimum_matches_brute_force() {
    for outcome in reduction_outcomes(3) {
        let expected = minimal_solutions(&outcome.problem, 4).unwrap();
        assert_eq!(outcome.moves, expected.moves, "n = {}", outcome.n());
        assert_eq!(outcome.signatures(), expected.signatures(), "n = {}", outcome.n());
    }
}

#[test]
fn test_forward_search_never_beats_exhaustive() {
    let config = SolverConfig::default().with_distance(2);
    for outcome in sweep(config, 1..=2).unwrap() {
        let expected = minimal_solutions(&outcome.problem, 4).unwrap();
        assert!(outcome.moves >= expected.moves, "n = {}", outcome.n());
    }
}

#[test]
fn test_empty_problem() {
    for distance in 1..=4 {
        let outcome = Solver::new(SolverConfig::default().with_distance(distance))
            .solve(0)
            .unwrap();
        assert_eq!(outcome.moves, 0);
        assert_eq!(outcome.solutions, vec![MoveSequence::new()]);
    }
}

#[test]
fn test_symmetric_pairs() {
    for n in 1..=2 {
        let report = symmetry(SolverConfig::default(), n).unwrap();
        assert!(report.agrees(), "n = {}", n);
        let (only_narrow, only_wide) = report.differences();
        assert!(only_narrow.is_empty() && only_wide.is_empty());
        assert_eq!(report.narrow.problem.target_moment(), report.wide.problem.target_moment());
    }
}

#[test]
fn test_symmetry_needs_positive_size() {
    assert!(matches!(
        symmetry(SolverConfig::default(), 0),
        Err(SolveError::Problem(_))
    ));
}
