// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashSet;

use crate::shared::{
    bounded_int, bounded_uint32, fast_intn, fast_rand, fast_random_bytes, fast_randn,
    random_bytes, random_hex, random_string, shared,
};

#[test]
fn test_shared_is_a_single_instance() {
    let first = shared();
    let second = shared();

    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_shared_is_initialized_once_across_threads() {
    let addresses: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| scope.spawn(|| shared() as *const _ as usize))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("Failed to join thread"))
            .collect()
    });

    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_degenerate_inputs() {
    for n in [0, -1, i64::MIN] {
        assert_eq!(fast_intn(n), 0);
    }

    assert_eq!(random_string(0), "");
    assert_eq!(random_hex(0), "");
    assert!(fast_random_bytes(0).is_empty());
    assert!(random_bytes(0).expect("Failed to random_bytes(0)").is_empty());
    assert_eq!(bounded_int(5, 5), 5);
    assert_eq!(bounded_uint32(9, 9), 9);
}

#[test]
fn test_free_functions_stay_in_range() {
    for _ in 0..10_000 {
        assert!((0..10).contains(&fast_intn(10)));
        assert!(fast_randn(10) < 10);
        assert!((-3..3).contains(&bounded_int(3, -3)));
        assert!((10..20).contains(&bounded_uint32(20, 10)));
    }
}

#[test]
fn test_fast_rand_varies_across_draws() {
    let drawn: HashSet<u32> = (0..64).map(|_| fast_rand()).collect();

    assert!(drawn.len() > 1);
}

#[test]
fn test_free_string_and_bytes() {
    for len in [1, 20, 1000] {
        let s = random_string(len);
        assert_eq!(s.len(), len);
        assert!(s.bytes().all(|b| b.is_ascii_alphanumeric()));
    }

    assert_eq!(random_hex(8).len(), 16);
    assert_eq!(fast_random_bytes(12).len(), 12);
    assert_eq!(random_bytes(12).expect("Failed to random_bytes(..)").len(), 12);
}

#[test]
fn test_thousand_concurrent_callers() {
    let results: Vec<i64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..1000)
            .map(|_| scope.spawn(|| bounded_int(0, 1)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("Failed to join thread"))
            .collect()
    });

    assert_eq!(results.len(), 1000);
    assert!(results.iter().all(|&value| value == 0));
}

#[test]
fn test_concurrent_shared_generator_access() {
    std::thread::scope(|scope| {
        for _ in 0..32 {
            scope.spawn(|| {
                for _ in 0..1000 {
                    assert_eq!(shared().intn(1), 0);
                    assert_eq!(shared().int63n(1), 0);
                    assert!((0..1 << 40).contains(&fast_intn(1 << 40)));
                }
            });
        }
    });
}
