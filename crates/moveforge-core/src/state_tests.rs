//! Tests for conservation states.

use super::*;

#[test]
fn test_zero_entries_are_dropped() {
    let state = ConservationState::from_entries([(0, 2), (3, 0), (0, -2), (5, 1)]);
    assert_eq!(state.nonzero_count(), 1);
    assert_eq!(state.balance(0), 0);
    assert_eq!(state.balance(5), 1);
}

#[test]
fn test_apply_transfers_magnitude() {
    let state = ConservationState::from_entries([(0, 3), (2, -3)]);
    let next = state.apply(Move::new(0, 2));

    assert_eq!(next.balance(0), 1);
    assert_eq!(next.balance(2), -1);
    // the original is untouched
    assert_eq!(state.balance(0), 3);
}

#[test]
fn test_apply_preserves_total() {
    let mut state = ConservationState::from_entries([(0, 4), (1, -4)]);
    let moves = [Move::new(0, 2), Move::new(2, -1), Move::new(-1, 1), Move::new(0, 1)];
    for mv in moves {
        state = state.apply(mv);
        assert_eq!(state.total(), 0);
        assert!(state.iter().all(|(_, v)| v != 0));
    }
}

#[test]
fn test_leftward_move() {
    let state = ConservationState::from_entries([(0, 1), (1, -1)]);
    let next = state.apply(Move::new(1, 0));
    assert_eq!(next, ConservationState::from_entries([(0, 2), (1, -2)]));
}

#[test]
fn test_structural_equality_ignores_history() {
    let a = ConservationState::from_entries([(0, 2), (1, -2)])
        .apply(Move::new(0, 1))
        .apply(Move::new(0, 1));
    let b = ConservationState::new();
    assert_eq!(a, b);
    assert!(a.is_solved());
}

#[test]
fn test_min_position_and_can_apply() {
    let state = ConservationState::from_entries([(4, 1), (-2, 3)]);
    assert_eq!(state.min_position(), Some(-2));
    assert!(state.can_apply(Move::new(-2, 1)));
    assert!(!state.can_apply(Move::new(-2, 2)));
    assert!(!state.can_apply(Move::new(3, 4)));
    assert_eq!(ConservationState::new().min_position(), None);
}

#[test]
fn test_display() {
    let state = ConservationState::from_entries([(1, -2), (0, 2)]);
    assert_eq!(state.to_string(), "{0: 2, 1: -2}");
}
