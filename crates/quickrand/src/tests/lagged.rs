// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand::Rng;
use rand_core::{RngCore, SeedableRng};

use crate::cooked::COOKED;
use crate::lagged::LaggedFibonacci;
use crate::ziggurat::{KE, KN};

#[test]
fn test_cooked_table_head() {
    assert_eq!(
        COOKED[..4],
        [
            -4_181_792_142_133_755_926,
            -4_576_982_950_128_230_565,
            1_395_769_623_340_756_751,
            5_333_664_234_075_297_259,
        ]
    );
}

#[test]
fn test_ziggurat_table_heads() {
    assert_eq!(KN[..5], [0x76ad2212, 0, 0x600f1b53, 0x6ce447a6, 0x725b46a2]);
    assert_eq!(KE[..4], [0xe290a139, 0, 0x9beadebc, 0xc377ac71]);
}

#[test]
fn test_seed_one_int63_sequence() {
    let mut rng = LaggedFibonacci::new(1);
    let drawn: Vec<i64> = (0..4).map(|_| rng.int63()).collect();

    assert_eq!(
        drawn,
        [
            5_577_006_791_947_779_410,
            8_674_665_223_082_153_551,
            6_129_484_611_666_145_821,
            4_037_200_794_235_010_051,
        ]
    );
}

#[test]
fn test_seed_one_word_views() {
    let mut rng = LaggedFibonacci::new(1);
    let words = [rng.next_u64(), rng.next_u64(), rng.next_u64()];
    assert_eq!(
        words,
        [
            5_577_006_791_947_779_410,
            8_674_665_223_082_153_551,
            15_352_856_648_520_921_629,
        ]
    );

    let mut rng = LaggedFibonacci::new(1);
    let halves = [rng.uint32(), rng.uint32(), rng.uint32()];
    assert_eq!(halves, [2_596_996_162, 4_039_455_774, 2_854_263_694]);

    let mut rng = LaggedFibonacci::new(1);
    let int31s = [rng.int31(), rng.int31(), rng.int31()];
    assert_eq!(int31s, [1_298_498_081, 2_019_727_887, 1_427_131_847]);

    let mut a = LaggedFibonacci::new(1);
    let mut b = LaggedFibonacci::new(1);
    assert_eq!(a.next_u32(), b.uint32());
}

#[test]
fn test_intn_seed_one_sequence() {
    let mut rng = LaggedFibonacci::new(1);
    let rolls: Vec<i64> = (0..10).map(|_| rng.intn(100)).collect();

    assert_eq!(rolls, [81, 87, 47, 59, 81, 18, 25, 40, 56, 0]);
}

#[test]
fn test_int63n_rejects_above_largest_multiple() {
    let mut rng = LaggedFibonacci::new(1);
    let drawn: Vec<i64> = (0..3).map(|_| rng.int63n(1_000_000_000_000)).collect();
    assert_eq!(drawn, [791_947_779_410, 223_082_153_551, 611_666_145_821]);

    // The first three steps all exceed the acceptance limit for this bound.
    let mut rng = LaggedFibonacci::new(1);
    assert_eq!(rng.int63n((1 << 62) + 3), 4_037_200_794_235_010_051);

    // Above the i32 range `intn` switches to the 63-bit path.
    let mut rng = LaggedFibonacci::new(1);
    assert_eq!(rng.intn(3_000_000_000), 2_947_779_410);
}

#[test]
fn test_power_of_two_bounds_mask_one_step() {
    let mut a = LaggedFibonacci::new(1);
    let mut b = LaggedFibonacci::new(1);

    assert_eq!(a.int63n(1 << 40), b.int63() & ((1 << 40) - 1));
    assert_eq!(a.int31n(64), b.int31() & 63);
}

#[test]
fn test_degenerate_bounds() {
    let mut rng = LaggedFibonacci::new(9);
    let untouched = rng.clone();

    assert_eq!(rng.int63n(0), 0);
    assert_eq!(rng.int63n(-1), 0);
    assert_eq!(rng.int31n(i32::MIN), 0);
    assert_eq!(rng.intn(-7), 0);
    assert_eq!(rng.intn(i64::MIN), 0);
    assert_eq!(rng.uint64n(0), 0);
    assert_eq!(rng, untouched);

    for _ in 0..100 {
        assert_eq!(rng.intn(1), 0);
        assert_eq!(rng.int63n(1), 0);
        assert_eq!(rng.uint64n(1), 0);
    }
}

#[test]
fn test_uint64n_known_draws_and_wide_bounds() {
    let mut rng = LaggedFibonacci::new(1);
    let drawn: Vec<u64> = (0..5).map(|_| rng.uint64n(1000)).collect();
    assert_eq!(drawn, [302, 470, 832, 718, 212]);

    let mut rng = LaggedFibonacci::new(3);
    for n in [u64::MAX, u64::MAX / 3 + 1, 1 << 63, (1 << 40) + 7] {
        for _ in 0..1000 {
            assert!(rng.uint64n(n) < n);
        }
    }
}

#[test]
fn test_floats_known_values_and_range() {
    let mut rng = LaggedFibonacci::new(1);
    assert_eq!(rng.float64(), 0.6046602879796196);
    assert_eq!(rng.float64(), 0.9405090880450124);

    let mut rng = LaggedFibonacci::new(1);
    assert_eq!(rng.float32(), 0.6046603);
    assert_eq!(rng.float32(), 0.9405091);

    for _ in 0..10_000 {
        assert!((0.0..1.0).contains(&rng.float64()));
        assert!((0.0..1.0).contains(&rng.float32()));
    }
}

#[test]
fn test_norm_float64_known_values() {
    let mut rng = LaggedFibonacci::new(1);
    let drawn: Vec<f64> = (0..4).map(|_| rng.norm_float64()).collect();

    assert_eq!(
        drawn,
        [
            -1.233758177597947,
            -0.12634751070237293,
            -0.5209945711531503,
            2.28571911769958,
        ]
    );
}

#[test]
fn test_exp_float64_known_values() {
    let mut rng = LaggedFibonacci::new(1);
    let drawn: Vec<f64> = (0..5).map(|_| rng.exp_float64()).collect();

    assert_eq!(
        drawn,
        [
            0.5872982159059681,
            0.5372820936538049,
            1.2310533463860203,
            0.6776268958872181,
            0.04451836051028885,
        ]
    );
}

#[test]
fn test_distribution_moments() {
    let mut rng = LaggedFibonacci::new(17);
    let samples = 100_000;

    let normals: Vec<f64> = (0..samples).map(|_| rng.norm_float64()).collect();
    let mean = normals.iter().sum::<f64>() / samples as f64;
    let variance = normals.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples as f64;
    assert!(mean.abs() < 0.02, "normal mean {mean}");
    assert!((variance - 1.0).abs() < 0.03, "normal variance {variance}");

    let exps: Vec<f64> = (0..samples).map(|_| rng.exp_float64()).collect();
    assert!(exps.iter().all(|&x| x >= 0.0));
    let mean = exps.iter().sum::<f64>() / samples as f64;
    assert!((mean - 1.0).abs() < 0.02, "exponential mean {mean}");
}

#[test]
fn test_perm_and_shuffle_known_orders() {
    let mut rng = LaggedFibonacci::new(5);
    assert_eq!(rng.perm(10), [3, 2, 4, 1, 9, 7, 0, 8, 6, 5]);

    let mut rng = LaggedFibonacci::new(5);
    let mut data: Vec<usize> = (0..10).collect();
    rng.shuffle(&mut data);
    assert_eq!(data, [6, 0, 5, 1, 3, 2, 9, 7, 4, 8]);

    let mut empty: [u8; 0] = [];
    rng.shuffle(&mut empty);
    assert!(rng.perm(0).is_empty());
    assert_eq!(rng.perm(1), [0]);
}

#[test]
fn test_fill_bytes_carries_leftover_bytes() {
    let mut rng = LaggedFibonacci::new(1);
    let mut whole = [0u8; 10];
    rng.fill_bytes(&mut whole);
    assert_eq!(whole, [82, 253, 252, 7, 33, 130, 101, 79, 22, 63]);

    let mut rng = LaggedFibonacci::new(1);
    let mut head = [0u8; 3];
    let mut tail = [0u8; 7];
    rng.fill_bytes(&mut head);
    rng.fill_bytes(&mut tail);
    assert_eq!([&head[..], &tail[..]].concat(), whole);
}

#[test]
fn test_seed_reduction() {
    let first = |seed: i64| LaggedFibonacci::new(seed).int63();

    // Zero and the modulus both fall back to the replacement seed.
    assert_eq!(first(0), 8_717_895_732_742_165_505);
    assert_eq!(first(i32::MAX as i64), first(0));
    assert_eq!(first(89_482_311), first(0));

    // Negative seeds wrap into range.
    assert_eq!(first(-1), 3_644_962_268_338_389_676);
    assert_eq!(first(-1), first(i32::MAX as i64 - 1));

    assert_eq!(first(i32::MAX as i64 + 1), first(1));
}

#[test]
fn test_reseed_restarts_sequence() {
    let mut rng = LaggedFibonacci::new(1);
    let mut scratch = [0u8; 3];
    rng.fill_bytes(&mut scratch);
    rng.int63();

    rng.reseed(1);

    assert_eq!(rng, LaggedFibonacci::new(1));
    assert_eq!(rng.int63(), 5_577_006_791_947_779_410);
}

#[test]
fn test_seedable_rng_entry_points_agree() {
    let from_bytes = LaggedFibonacci::from_seed(42i64.to_le_bytes());
    let from_u64 = LaggedFibonacci::seed_from_u64(42);

    assert_eq!(from_bytes, LaggedFibonacci::new(42));
    assert_eq!(from_u64, LaggedFibonacci::new(42));
    assert_eq!(
        LaggedFibonacci::seed_from_u64(u64::MAX),
        LaggedFibonacci::new(-1)
    );
}

#[test]
fn test_interoperates_with_rand() {
    let mut rng = LaggedFibonacci::new(11);

    for _ in 0..1000 {
        let die: u8 = rng.random_range(1..=6);
        assert!((1..=6).contains(&die));
    }

    let _: f32 = rng.random();
}
