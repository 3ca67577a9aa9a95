//! Tests for moves.

use super::*;

#[test]
fn test_magnitude_is_distance() {
    assert_eq!(Move::new(0, 1).magnitude(), 1);
    assert_eq!(Move::new(5, -2).magnitude(), 7);
    assert_eq!(Move::new(-3, -1).magnitude(), 2);
}

#[test]
fn test_try_new_rejects_degenerate() {
    assert_eq!(Move::try_new(4, 4), Err(MoveForgeError::DegenerateMove(4)));
    assert!(Move::try_new(4, 5).is_ok());
}

#[test]
#[should_panic(expected = "distinct endpoints")]
fn test_new_panics_on_degenerate() {
    let _ = Move::new(2, 2);
}

#[test]
fn test_ordering_by_from_then_to() {
    let mut moves = vec![Move::new(1, 0), Move::new(0, 2), Move::new(0, 1), Move::new(-1, 3)];
    moves.sort();
    assert_eq!(
        moves,
        vec![Move::new(-1, 3), Move::new(0, 1), Move::new(0, 2), Move::new(1, 0)]
    );
}

#[test]
fn test_partner_of() {
    let mv = Move::new(3, 7);
    assert_eq!(mv.partner_of(3), Some(7));
    assert_eq!(mv.partner_of(7), Some(3));
    assert_eq!(mv.partner_of(5), None);
    assert!(mv.touches(7));
    assert!(!mv.touches(0));
}

#[test]
fn test_mirror_keeps_direction_and_magnitude() {
    let mv = Move::new(0, 3);
    let mirrored = mv.mirrored(5);
    assert_eq!(mirrored, Move::new(2, 5));
    assert_eq!(mirrored.magnitude(), mv.magnitude());
    assert_eq!(mirrored.is_rightward(), mv.is_rightward());
    assert_eq!(mirrored.mirrored(5), mv);
}

#[test]
fn test_display() {
    assert_eq!(Move::new(0, -2).to_string(), "0->-2(2)");
}
