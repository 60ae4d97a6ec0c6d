// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-thread xorshift bit source.
//!
//! [`ThreadBits`] is the default [`BitSource`]: a zero-sized handle onto a
//! generator kept in thread-local storage, so concurrent callers never touch
//! shared state and never lock.
//!
//! The generator is `xorshift64+` built from two 32-bit `xorshift` sequences
//! added together, using Marsaglia's shift triplet `[17, 7, 16]`. It passes
//! SmallCrush, which is plenty for load distribution, sampling and test data.

use core::cell::Cell;

use rand_core::{RngCore, impls};

use crate::reduce::reduce;
use crate::traits::BitSource;
use crate::u64_seed::{entropy_u64_or_fallback, fallback_seed};

thread_local! {
    static THREAD_RAND: Cell<FastRand> = Cell::new(FastRand::seeded_for_thread());
}

/// Single-owner `xorshift64+` generator with 64 bits of state.
///
/// This is the engine behind [`ThreadBits`]. It is `Copy` so it can live in a
/// [`Cell`]; copying it forks the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FastRand {
    one: u32,
    two: u32,
}

impl FastRand {
    /// Creates a generator from a 64-bit seed.
    ///
    /// The low half of the seed can't be zero (the state would stay zero
    /// forever), so a zero low half is replaced with one.
    #[inline]
    pub fn new(seed: u64) -> Self {
        let one = (seed >> 32) as u32;
        let mut two = seed as u32;

        if two == 0 {
            two = 1;
        }

        Self { one, two }
    }

    fn seeded_for_thread() -> Self {
        let seed = entropy_u64_or_fallback();
        tracing::debug!("seeded thread-local bit source");
        Self::new(seed)
    }

    /// Returns the next 32-bit output.
    #[inline]
    pub fn fastrand(&mut self) -> u32 {
        let mut s1 = self.one;
        let s0 = self.two;

        s1 ^= s1 << 17;
        s1 = s1 ^ s0 ^ s1 >> 7 ^ s0 >> 16;

        self.one = s0;
        self.two = s1;

        s0.wrapping_add(s1)
    }

    /// Returns a value in `[0, n)` using multiply-shift reduction.
    #[inline]
    pub fn fastrand_n(&mut self, n: u32) -> u32 {
        reduce(self.fastrand(), n)
    }
}

impl RngCore for FastRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.fastrand()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

/// Handle to the calling thread's [`FastRand`].
///
/// Zero-sized and `Copy`; every copy on the same thread draws from the same
/// sequence. Each thread is seeded lazily from OS entropy on its first draw
/// (see [`u64_seed`](crate::u64_seed) for the fallback policy).
///
/// # Example
///
/// ```rust
/// use quickrand::{BitSource, ThreadBits};
///
/// let word = ThreadBits.next_u32();
/// let wide = ThreadBits.next_u64();
/// # let _ = (word, wide);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadBits;

impl BitSource for ThreadBits {
    #[inline]
    fn next_u32(&self) -> u32 {
        THREAD_RAND
            .try_with(|cell| {
                let mut rng = cell.get();
                let value = rng.fastrand();
                cell.set(rng);
                value
            })
            // Thread-local storage is gone during thread teardown.
            .unwrap_or_else(|_| fallback_seed() as u32)
    }
}
