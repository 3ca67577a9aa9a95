//! Tests for the reduction table.

use std::time::Duration;

use super::*;
use crate::event::ProgressSupport;
use moveforge_core::Signature;
use moveforge_test::brute_force::minimal_solutions;
use moveforge_test::{assert_moment_identity, assert_realizable};

fn scope() -> SolveScope {
    SolveScope::new(ProgressSupport::new(), Duration::from_secs(300))
}

fn seq(moves: &[(i64, i64)]) -> MoveSequence {
    moves.iter().map(|&(from, to)| Move::new(from, to)).collect()
}

#[test]
fn test_zero_units() {
    let mut table = ReductionTable::default();
    let found = table.get_solutions(0, 0, &mut scope()).unwrap();
    assert_eq!(&*found, &[MoveSequence::new()]);
    assert!(table.is_empty());
}

#[test]
fn test_level_zero_is_empty() {
    let mut table = ReductionTable::default();
    assert!(table.get_solutions(1, 0, &mut scope()).unwrap().is_empty());
    assert_eq!(table.entry(1).unwrap().max_tried(), Some(0));
    assert_eq!(table.entry(1).unwrap().can_solve(), None);
}

#[test]
fn test_small_sizes() {
    let mut table = ReductionTable::default();
    let mut scope = scope();

    let one = table.get_solutions(1, 1, &mut scope).unwrap();
    assert_eq!(&*one, &[seq(&[(0, 1)])]);

    assert!(table.get_solutions(2, 1, &mut scope).unwrap().is_empty());
    let two = table.get_solutions(2, 2, &mut scope).unwrap();
    assert_eq!(&*two, &[seq(&[(0, 1), (0, 1)])]);
}

#[test]
fn test_answers_are_monotonic() {
    let mut table = ReductionTable::default();
    let mut scope = scope();

    let found = table.get_solutions(3, 5, &mut scope).unwrap();
    assert_eq!(&*found, &[seq(&[(0, 1), (0, 1), (0, 1)])]);

    let entry = table.entry(3).unwrap();
    assert_eq!(entry.can_solve(), Some(3));
    assert_eq!(entry.max_tried(), Some(3));

    assert!(table.get_solutions(3, 1, &mut scope).unwrap().is_empty());
    assert!(table.get_solutions(3, 2, &mut scope).unwrap().is_empty());
    assert_eq!(table.get_solutions(3, 3, &mut scope).unwrap(), found);
    assert_eq!(table.get_solutions(3, 9, &mut scope).unwrap(), found);
    assert!(scope.stats().memo_hits >= 4);

    let mut fresh = ReductionTable::default();
    let again = fresh.get_solutions(3, 3, &mut self::scope()).unwrap();
    assert_eq!(again, found);
}

#[test]
fn test_failed_levels_are_remembered() {
    let mut table = ReductionTable::default();
    let mut scope = scope();

    assert!(table.get_solutions(3, 2, &mut scope).unwrap().is_empty());
    assert_eq!(table.entry(3).unwrap().max_tried(), Some(2));
    let levels = scope.stats().levels_searched;

    assert!(table.get_solutions(3, 1, &mut scope).unwrap().is_empty());
    assert_eq!(scope.stats().levels_searched, levels);
}

#[test]
fn test_matches_brute_force() {
    for pruning in [PruningMode::Strict, PruningMode::Lenient] {
        let mut table = ReductionTable::new(TableSettings {
            pruning,
            first_only: false,
        });
        for n in 1..=3 {
            let problem = Problem::new(n, 1).unwrap();
            let expected = minimal_solutions(&problem, 4).unwrap();
            let found = table.get_solutions(n, 4, &mut scope()).unwrap();

            assert_eq!(table.entry(n).unwrap().can_solve(), Some(expected.moves));
            let signatures: std::collections::BTreeSet<_> =
                found.iter().map(MoveSequence::signature).collect();
            assert_eq!(signatures, expected.signatures(), "n = {}", n);
            for solution in found.iter() {
                assert_realizable(&problem, solution);
                assert_moment_identity(&problem, solution);
            }
        }
    }
}

#[test]
fn test_six_units_need_base_search() {
    // the 0 -> 1 composition only reaches six moves here
    let problem = Problem::new(6, 1).unwrap();
    let expected = minimal_solutions(&problem, 5).unwrap();
    assert_eq!(expected.moves, 5);
    assert_eq!(
        expected.signatures(),
        [
            Signature::from_magnitudes([3, 3, 2, 2, 2]),
            Signature::from_magnitudes([4, 3, 3, 2, 2]),
        ]
        .into_iter()
        .collect()
    );

    for pruning in [PruningMode::Strict, PruningMode::Lenient] {
        let mut table = ReductionTable::new(TableSettings {
            pruning,
            first_only: false,
        });
        let found = table.get_solutions(6, 6, &mut scope()).unwrap();

        assert_eq!(table.entry(6).unwrap().can_solve(), Some(5), "{}", pruning);
        let signatures: std::collections::BTreeSet<_> =
            found.iter().map(MoveSequence::signature).collect();
        assert_eq!(signatures, expected.signatures(), "{}", pruning);
        for solution in found.iter() {
            assert!(solution.iter().all(|&mv| problem.admits(mv)), "{}", solution);
            assert_realizable(&problem, solution);
            assert_moment_identity(&problem, solution);
        }
    }
}

#[test]
fn test_first_only_stops_early() {
    let mut table = ReductionTable::new(TableSettings {
        pruning: PruningMode::Lenient,
        first_only: true,
    });
    for n in 1..=4 {
        let found = table.get_solutions(n, 6, &mut scope()).unwrap();
        assert_eq!(found.len(), 1, "n = {}", n);
        assert_realizable(&Problem::new(n, 1).unwrap(), &found[0]);
    }
}

#[test]
fn test_rescope_drops_entries() {
    let mut table = ReductionTable::default();
    table.get_solutions(2, 2, &mut scope()).unwrap();
    assert!(!table.is_empty());

    table.rescope(TableSettings::default());
    assert!(!table.is_empty());

    let strict = TableSettings {
        pruning: PruningMode::Strict,
        first_only: false,
    };
    table.rescope(strict);
    assert!(table.is_empty());
    assert_eq!(table.settings(), strict);
}

#[test]
fn test_other_distances_unsupported() {
    let mut table = ReductionTable::default();
    let problem = Problem::new(2, 3).unwrap();
    let err = table.solutions_at(&problem, 3, &mut scope()).unwrap_err();
    assert_eq!(
        err,
        SolveError::UnsupportedDistance {
            strategy: Strategy::Reduction,
            distance: 3,
        }
    );
}

#[test]
fn test_expired_deadline_keeps_level_open() {
    let mut table = ReductionTable::default();
    let mut scope = scope().with_time_limit(Duration::ZERO);

    // n = 1 is solved by composition before the base search can time out
    assert_eq!(table.get_solutions(1, 1, &mut scope).unwrap().len(), 1);
    assert_eq!(table.entry(1).unwrap().can_solve(), Some(1));
}
