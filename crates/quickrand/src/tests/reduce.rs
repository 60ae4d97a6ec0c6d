// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::reduce::reduce;

#[test]
fn test_reduce_maps_extremes() {
    assert_eq!(reduce(0, 10), 0);
    assert_eq!(reduce(u32::MAX, 10), 9);
    assert_eq!(reduce(u32::MAX, u32::MAX), u32::MAX - 1);
    assert_eq!(reduce(1 << 31, 10), 5);
}

#[test]
fn test_reduce_zero_bound_is_zero() {
    assert_eq!(reduce(0, 0), 0);
    assert_eq!(reduce(u32::MAX, 0), 0);
}

#[test]
fn test_reduce_bound_one_is_zero() {
    for x in [0, 1, 12345, 1 << 31, u32::MAX] {
        assert_eq!(reduce(x, 1), 0);
    }
}

#[test]
fn test_reduce_keeps_bias_of_multiply_shift() {
    // 2^32 = 3 * 1431655765 + 1: bucket 0 gets the extra preimage.
    let bucket_len = 1_431_655_766u32;

    assert_eq!(reduce(bucket_len - 1, 3), 0);
    assert_eq!(reduce(bucket_len, 3), 1);
}

proptest! {
    #[test]
    fn reduce_stays_below_bound(x in any::<u32>(), n in 1..=u32::MAX) {
        prop_assert!(reduce(x, n) < n);
    }

    #[test]
    fn reduce_is_monotonic_in_x(x in 0..u32::MAX, n in any::<u32>()) {
        prop_assert!(reduce(x, n) <= reduce(x + 1, n));
    }
}
