//! Tests for the multiset level search.

use std::time::Duration;

use super::*;
use crate::event::ProgressSupport;
use moveforge_core::Signature;
use moveforge_test::{assert_moment_identity, assert_realizable};

fn scope() -> SolveScope {
    SolveScope::new(ProgressSupport::new(), Duration::from_secs(300))
}

fn seq(moves: &[(i64, i64)]) -> MoveSequence {
    moves.iter().map(|&(from, to)| Move::new(from, to)).collect()
}

#[test]
fn test_no_units_need_no_moves() {
    let mut search = MultisetSearch::default();
    let problem = Problem::new(0, 3).unwrap();
    let found = search.solutions_at(&problem, 4, &mut scope()).unwrap();
    assert_eq!(&*found, &[MoveSequence::new()]);
}

#[test]
fn test_single_unit_over_two() {
    let mut search = MultisetSearch::default();
    let problem = Problem::new(1, 2).unwrap();
    let mut scope = scope();

    assert!(search.solutions_at(&problem, 1, &mut scope).unwrap().is_empty());
    let found = search.solutions_at(&problem, 2, &mut scope).unwrap();
    assert_eq!(&*found, &[seq(&[(0, 1), (1, 2)])]);
    assert_eq!(scope.stats().levels_searched, 2);
}

#[test]
fn test_two_units_over_three() {
    let mut search = MultisetSearch::default();
    let problem = Problem::new(2, 3).unwrap();
    let mut scope = scope();

    assert!(search.solutions_at(&problem, 2, &mut scope).unwrap().is_empty());
    let found = search.solutions_at(&problem, 3, &mut scope).unwrap();
    assert_eq!(&*found, &[seq(&[(0, 2), (2, 3), (2, 3)])]);
    assert_eq!(found[0].signature(), Signature::from_magnitudes([2, 1, 1]));
    assert_eq!(scope.stats().multisets_generated, 1);
}

#[test]
fn test_solutions_are_forward_and_realizable() {
    let mut search = MultisetSearch::default();
    for (n, distance, k) in [(1, 3, 3), (2, 2, 2), (3, 2, 3), (2, 3, 3)] {
        let problem = Problem::new(n, distance).unwrap();
        let found = search.solutions_at(&problem, k, &mut scope()).unwrap();
        for solution in found.iter() {
            assert_eq!(solution.len(), k as usize);
            assert!(solution.is_forward_only());
            assert_realizable(&problem, solution);
            assert_moment_identity(&problem, solution);
        }
    }
}

#[test]
fn test_first_only_keeps_first() {
    let problem = Problem::new(2, 3).unwrap();
    let all = MultisetSearch::new(false)
        .solutions_at(&problem, 3, &mut scope())
        .unwrap();
    let first = MultisetSearch::new(true)
        .solutions_at(&problem, 3, &mut scope())
        .unwrap();
    assert_eq!(&*first, &all[..1]);
}

#[test]
fn test_expired_deadline() {
    let mut search = MultisetSearch::default();
    let problem = Problem::new(2, 3).unwrap();
    let mut scope = scope().with_time_limit(Duration::ZERO);

    let err = search.solutions_at(&problem, 3, &mut scope).unwrap_err();
    assert_eq!(err, SolveError::TimeLimit { n: 2, k: 3 });
}

#[test]
fn test_reports_strategy() {
    assert_eq!(MultisetSearch::default().strategy(), Strategy::Multiset);
}
