//! Custom assertions for testing.

#![allow(clippy::missing_panics_doc)]

use std::fmt::Debug;

/// Assert that two values are approximately equal (for floats).
///
/// # Examples
///
/// ```
/// use harmony_common::testing::assertions::assert_approx_eq;
///
/// assert_approx_eq(3.14159, 3.14160, 0.001);
/// ```
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Values not approximately equal: {} vs {} (diff: {})",
        actual,
        expected,
        diff
    );
}

/// Assert that a collection is sorted (non-decreasing).
///
/// # Examples
///
/// ```
/// use harmony_common::testing::assertions::assert_sorted;
///
/// let vec = vec![1, 2, 3, 4, 5];
/// assert_sorted(&vec);
/// ```
pub fn assert_sorted<T>(items: &[T])
where
    T: Ord + Debug,
{
    for window in items.windows(2) {
        assert!(window[0] <= window[1], "Items not sorted: {:?} > {:?}", window[0], window[1]);
    }
}
