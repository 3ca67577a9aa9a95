//! Tests for the magnitude multiset generator.

use super::*;

fn collect(target: i64, max: i64, count: usize) -> Vec<Vec<i64>> {
    MagnitudeMultisets::new(target, max, count).collect()
}

#[test]
fn test_isqrt() {
    assert_eq!(isqrt(-4), 0);
    assert_eq!(isqrt(0), 0);
    assert_eq!(isqrt(1), 1);
    assert_eq!(isqrt(3), 1);
    assert_eq!(isqrt(4), 2);
    assert_eq!(isqrt(99), 9);
    assert_eq!(isqrt(1 << 62), 1 << 31);
}

#[test]
fn test_two_magnitudes() {
    assert_eq!(collect(10, 3, 2), vec![vec![3, 1]]);
    assert_eq!(collect(50, 7, 2), vec![vec![7, 1], vec![5, 5]]);
    assert_eq!(collect(50, 6, 2), vec![vec![5, 5]]);
}

#[test]
fn test_equal_magnitudes() {
    assert_eq!(collect(12, 3, 3), vec![vec![2, 2, 2]]);
    assert_eq!(collect(4, 1, 4), vec![vec![1, 1, 1, 1]]);
}

#[test]
fn test_single_magnitude() {
    assert_eq!(collect(9, 3, 1), vec![vec![3]]);
    assert!(collect(9, 2, 1).is_empty());
    assert!(collect(8, 5, 1).is_empty());
}

#[test]
fn test_zero_count() {
    assert_eq!(collect(0, 4, 0), vec![Vec::<i64>::new()]);
    assert!(collect(5, 4, 0).is_empty());
}

#[test]
fn test_too_many_magnitudes() {
    // five unit squares already exceed four
    assert!(collect(4, 2, 5).is_empty());
}

#[test]
fn test_every_list_is_valid() {
    for list in MagnitudeMultisets::new(30, 5, 4) {
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().map(|a| a * a).sum::<i64>(), 30);
        assert!(list.windows(2).all(|w| w[0] >= w[1]));
        assert!(list.iter().all(|&a| (1..=5).contains(&a)));
    }
}

#[test]
fn test_descending_lexicographic_order() {
    assert_eq!(collect(27, 5, 3), vec![vec![5, 1, 1], vec![3, 3, 3]]);
    assert_eq!(collect(30, 5, 4), vec![vec![4, 3, 2, 1]]);
}

#[test]
fn test_asymmetry_cap() {
    let capped: Vec<Vec<i64>> = MagnitudeMultisets::new(50, 7, 2)
        .with_asymmetry_cap(8)
        .collect();
    assert_eq!(capped, vec![vec![7, 1]]);
}

#[test]
fn test_exhausted_iterator_stays_exhausted() {
    let mut iter = MagnitudeMultisets::new(2, 1, 2);
    assert_eq!(iter.next(), Some(vec![1, 1]));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}
