use sliceops::{compare, compare_by};

#[test]
fn test_compare_equal_sequences() {
    assert_eq!(compare(&[1, 2, 3], &[1, 2, 3]), 0);

    let empty: [i32; 0] = [];
    assert_eq!(compare(&empty, &empty), 0);
}

#[test]
fn test_compare_first_difference_wins() {
    assert_eq!(compare(&[1, 3], &[1, 2, 3]), 1);
    assert_eq!(compare(&[1, 2, 3], &[1, 3]), -1);
    assert_eq!(compare(&[0, 9, 9], &[1, 0, 0]), -1);
}

#[test]
fn test_compare_shorter_prefix_is_less() {
    assert_eq!(compare(&[1, 2], &[1, 2, 3]), -1);
    assert_eq!(compare(&[1, 2, 3], &[1, 2]), 1);

    let empty: [i32; 0] = [];
    assert_eq!(compare(&empty, &[1]), -1);
    assert_eq!(compare(&[1], &empty), 1);
}

#[test]
fn test_compare_unsigned_and_float() {
    assert_eq!(compare(&[1u8, 2], &[1u8, 3]), -1);
    assert_eq!(compare(&[1.5f64, 2.5], &[1.5f64, 2.5]), 0);
    assert_eq!(compare(&[2.5f64], &[1.5f64]), 1);
}

#[test]
fn test_compare_nan_pairs_fall_through() {
    // NaN is neither equal nor less-than, so a NaN pair resolves as +1.
    assert_eq!(compare(&[f64::NAN], &[f64::NAN]), 1);
    assert_eq!(compare(&[1.0, f64::NAN], &[1.0, 2.0]), 1);
}

#[test]
fn test_compare_strings() {
    assert_eq!(compare(&["apple", "pear"], &["apple", "plum"]), -1);
    assert_eq!(compare(&["pear"], &["apple", "plum"]), 1);
}

#[test]
fn test_compare_across_container_shapes() {
    let vec = vec![1, 2, 3];
    let array = [1, 2, 4];
    assert_eq!(compare(&vec, &array), -1);
    assert_eq!(compare(&array, &vec), 1);
}

#[test]
fn test_compare_by_forwards_nonzero_verbatim() {
    let a = [1, 2, 3];
    let b = [1, 5, 3];
    // The first nonzero result is returned as-is, not clamped to -1/0/+1.
    assert_eq!(compare_by(&a, &b, |x, y| x - y), -3);
    assert_eq!(compare_by(&b, &a, |x, y| x - y), 3);
}

#[test]
fn test_compare_by_length_tiebreak() {
    let always_zero = |_: &i32, _: &i32| 0;
    assert_eq!(compare_by(&[1, 2], &[9, 9, 9], always_zero), -1);
    assert_eq!(compare_by(&[9, 9, 9], &[1, 2], always_zero), 1);
    assert_eq!(compare_by(&[1, 2], &[9, 9], always_zero), 0);
}

#[test]
fn test_compare_by_stops_at_first_nonzero() {
    let mut calls = 0;
    let result = compare_by(&[1, 2, 3, 4], &[1, 9, 3, 4], |x: &i32, y: &i32| {
        calls += 1;
        x - y
    });
    assert_eq!(result, -7);
    assert_eq!(calls, 2);
}
