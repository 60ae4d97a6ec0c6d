// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded integers on the fast path.

use crate::reduce::reduce;
use crate::seeded::SeededGenerator;
use crate::shared::shared;
use crate::thread_bits::ThreadBits;
use crate::traits::BitSource;

/// Fast generator: a [`BitSource`] plus an exact fallback for wide ranges.
///
/// Ranges up to `u32::MAX` wide cost one bit-source call and one multiply
/// (see [`reduce`]). Wider ranges are rare and go to the exact, locking
/// [`SeededGenerator::int63n`], or [`SeededGenerator::uint64n`] for widths
/// past `i64::MAX`.
///
/// `FastRng::new()` uses [`ThreadBits`] and the process-wide [`shared`]
/// generator. [`FastRng::with_source`] builds a private instance, which
/// keeps tests independent of shared state.
///
/// # Example
///
/// ```rust
/// use quickrand::FastRng;
///
/// let rng = FastRng::new();
///
/// let n = rng.fast_intn(100);
/// assert!((0..100).contains(&n));
///
/// let x = rng.bounded_int(10, -10);
/// assert!((-10..10).contains(&x));
///
/// assert_eq!(rng.bounded_int(5, 5), 5);
/// assert_eq!(rng.fast_intn(0), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FastRng<'g, B: BitSource = ThreadBits> {
    bits: B,
    wide: &'g SeededGenerator,
}

impl FastRng<'static, ThreadBits> {
    /// Per-thread bits with the shared fallback generator.
    #[inline]
    pub fn new() -> Self {
        Self::with_source(ThreadBits, shared())
    }
}

impl Default for FastRng<'static, ThreadBits> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, B: BitSource> FastRng<'g, B> {
    /// Builds a generator over `bits`, using `wide` for ranges wider than
    /// `u32::MAX`.
    #[inline]
    pub fn with_source(bits: B, wide: &'g SeededGenerator) -> Self {
        Self { bits, wide }
    }

    /// The underlying bit source.
    #[inline]
    pub fn bits(&self) -> &B {
        &self.bits
    }

    /// Raw 32-bit word.
    #[inline]
    pub fn fast_rand(&self) -> u32 {
        self.bits.next_u32()
    }

    /// Raw 64-bit word.
    #[inline]
    pub fn fast_rand64(&self) -> u64 {
        self.bits.next_u64()
    }

    /// Value in `[0, n)`, like `fast_rand() % n` but without the division.
    ///
    /// Returns `0` for `n == 0`; a bit-source word is still consumed.
    #[inline]
    pub fn fast_randn(&self, n: u32) -> u32 {
        reduce(self.bits.next_u32(), n)
    }

    /// Value in `[0, n)`, or `0` without drawing if `n <= 0`.
    ///
    /// `n <= u32::MAX` takes the fast path; anything larger is drawn exactly
    /// from the fallback generator.
    #[inline]
    pub fn fast_intn(&self, n: i64) -> i64 {
        if n <= 0 {
            return 0;
        }

        self.below(n as u64) as i64
    }

    /// Value in `[min, max)`. Operands are swapped if `max < min`; returns
    /// `min` without drawing if they are equal.
    ///
    /// The width is computed in `u64`, so any pair of `i64` values works,
    /// including `bounded_int(i64::MIN, i64::MAX)`.
    #[inline]
    pub fn bounded_int(&self, min: i64, max: i64) -> i64 {
        if min == max {
            return min;
        }

        let (low, high) = if max < min { (max, min) } else { (min, max) };
        let width = high.wrapping_sub(low) as u64;

        low.wrapping_add(self.below(width) as i64)
    }

    /// Value in `[min, max)` over `u32`, with the same ordering rules as
    /// [`bounded_int`](Self::bounded_int). Always on the fast path.
    #[inline]
    pub fn bounded_uint32(&self, min: u32, max: u32) -> u32 {
        if min == max {
            return min;
        }

        let (low, high) = if max < min { (max, min) } else { (min, max) };

        self.fast_randn(high - low) + low
    }

    /// Two-tier draw in `[0, width)` for `width > 0`.
    #[inline]
    fn below(&self, width: u64) -> u64 {
        if let Ok(narrow) = u32::try_from(width) {
            return self.fast_randn(narrow) as u64;
        }

        match i64::try_from(width) {
            Ok(n) => self.wide.int63n(n) as u64,
            Err(_) => self.wide.uint64n(width),
        }
    }
}
