// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reproducible generator core: additive lagged Fibonacci, lags 607 and 273.
//!
//! `x[n] = x[n-607] + x[n-273] mod 2^64`. The state is expanded from a 31-bit
//! seed with the Park-Miller minimal standard generator and XORed with a
//! precomputed mixing table ([`COOKED`]). Sequences are fixed: seed `1` always
//! yields `5577006791947779410` as its first [`int63`](LaggedFibonacci::int63),
//! the same stream as Go's `math/rand` with the same seed.

use core::fmt;

use rand_core::{RngCore, SeedableRng};

use crate::cooked::COOKED;
use crate::ziggurat;

/// Number of state words (long lag).
const LEN: usize = 607;

/// Short lag.
const TAP: usize = 273;

/// `2^31 - 1`, the Park-Miller modulus.
const INT32_MAX: i32 = i32::MAX;

/// Replacement for seeds that reduce to zero.
const ZERO_SEED: i32 = 89_482_311;

/// Park-Miller step: `x * 48271 mod (2^31 - 1)` without overflow (Schrage).
fn seedrand(x: i32) -> i32 {
    const A: i32 = 48_271;
    const Q: i32 = 44_488;
    const R: i32 = 3_399;

    let hi = x / Q;
    let lo = x % Q;
    let x = A * lo - R * hi;

    if x < 0 { x + INT32_MAX } else { x }
}

/// The lagged Fibonacci generator.
///
/// Single-owner; wrap it in [`SeededGenerator`](crate::SeededGenerator) to
/// share it between threads.
///
/// Only `seed mod (2^31 - 1)` affects the state, so there are about two
/// billion distinct streams. Seeds `0` and `2^31 - 1` both map to a fixed
/// replacement seed.
///
/// # Example
///
/// ```rust
/// use quickrand::LaggedFibonacci;
/// use rand_core::{RngCore, SeedableRng};
///
/// let mut a = LaggedFibonacci::seed_from_u64(1);
/// assert_eq!(a.int63(), 5577006791947779410);
///
/// let mut b = LaggedFibonacci::seed_from_u64(7);
/// let mut c = LaggedFibonacci::seed_from_u64(7);
/// assert_eq!(b.next_u64(), c.next_u64());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LaggedFibonacci {
    vec: [u64; LEN],
    tap: usize,
    feed: usize,
    // Leftover bytes of the last word consumed by `fill_bytes`.
    read_val: i64,
    read_pos: u8,
}

impl fmt::Debug for LaggedFibonacci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaggedFibonacci")
            .field("tap", &self.tap)
            .field("feed", &self.feed)
            .finish_non_exhaustive()
    }
}

impl LaggedFibonacci {
    /// Creates a generator seeded with `seed`.
    pub fn new(seed: i64) -> Self {
        let mut rng = Self {
            vec: [0; LEN],
            tap: 0,
            feed: 0,
            read_val: 0,
            read_pos: 0,
        };
        rng.reseed(seed);

        rng
    }

    /// Resets the state as if freshly created with `seed`.
    ///
    /// Negative seeds are reduced the same way as positive ones.
    pub fn reseed(&mut self, seed: i64) {
        self.tap = 0;
        self.feed = LEN - TAP;
        self.read_val = 0;
        self.read_pos = 0;

        let mut seed = seed % INT32_MAX as i64;
        if seed < 0 {
            seed += INT32_MAX as i64;
        }
        if seed == 0 {
            seed = ZERO_SEED as i64;
        }

        let mut x = seed as i32;
        for _ in 0..20 {
            x = seedrand(x);
        }

        for (word, cooked) in self.vec.iter_mut().zip(COOKED) {
            x = seedrand(x);
            let mut u = (x as u64) << 40;
            x = seedrand(x);
            u ^= (x as u64) << 20;
            x = seedrand(x);
            u ^= x as u64;

            *word = u ^ cooked as u64;
        }
    }

    /// Returns a non-negative `i64`: the low 63 bits of a step.
    #[inline]
    pub fn int63(&mut self) -> i64 {
        (self.next_u64() & i64::MAX as u64) as i64
    }

    /// Returns bits 31..62 of a step.
    #[inline]
    pub fn uint32(&mut self) -> u32 {
        (self.int63() >> 31) as u32
    }

    /// Returns a non-negative `i32`: bits 32..62 of a step.
    #[inline]
    pub fn int31(&mut self) -> i32 {
        (self.int63() >> 32) as i32
    }

    /// Returns a value in `[0, n)`, or `0` if `n <= 0`.
    ///
    /// Powers of two mask a single draw; other bounds reject the draws above
    /// the largest multiple of `n` and reduce with `%`.
    pub fn int63n(&mut self, n: i64) -> i64 {
        if n <= 0 {
            return 0;
        }
        if n & (n - 1) == 0 {
            return self.int63() & (n - 1);
        }

        let max = i64::MAX - ((1u64 << 63) % n as u64) as i64;
        let mut v = self.int63();
        while v > max {
            v = self.int63();
        }

        v % n
    }

    /// Returns a value in `[0, n)`, or `0` if `n <= 0`.
    pub fn int31n(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        if n & (n - 1) == 0 {
            return self.int31() & (n - 1);
        }

        let max = i32::MAX - ((1u32 << 31) % n as u32) as i32;
        let mut v = self.int31();
        while v > max {
            v = self.int31();
        }

        v % n
    }

    /// Returns a value in `[0, n)`, or `0` if `n <= 0`.
    ///
    /// Bounds that fit in `i32` draw through [`int31n`](Self::int31n).
    pub fn intn(&mut self, n: i64) -> i64 {
        match i32::try_from(n) {
            Ok(narrow) => self.int31n(narrow) as i64,
            Err(_) => self.int63n(n),
        }
    }

    /// Multiply-shift with rejection over [`uint32`](Self::uint32), `n > 0`.
    ///
    /// Used by [`shuffle`](Self::shuffle) to stay on the `math/rand` stream.
    fn int31n_lemire(&mut self, n: u32) -> u32 {
        let mut prod = self.uint32() as u64 * n as u64;
        let mut low = prod as u32;

        if low < n {
            let threshold = n.wrapping_neg() % n;
            while low < threshold {
                prod = self.uint32() as u64 * n as u64;
                low = prod as u32;
            }
        }

        (prod >> 32) as u32
    }

    /// Returns a value in `[0, n)` with exact uniform distribution over the
    /// full `u64` range. Returns `0` for `n == 0`.
    ///
    /// Multiplies a 64-bit step by `n` in 128-bit arithmetic and keeps the
    /// high word, rejecting the few steps whose low word falls below
    /// `2^64 mod n`.
    ///
    /// Lemire, "Fast Random Integer Generation in an Interval" (2019).
    pub fn uint64n(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }

        let mut m = self.next_u64() as u128 * n as u128;
        let mut low = m as u64;

        if low < n {
            let threshold = n.wrapping_neg() % n;
            while low < threshold {
                m = self.next_u64() as u128 * n as u128;
                low = m as u64;
            }
        }

        (m >> 64) as u64
    }

    /// Returns a float in `[0, 1)`.
    pub fn float64(&mut self) -> f64 {
        loop {
            // Rounding can land on exactly 1.0.
            let f = self.int63() as f64 / (1u64 << 63) as f64;
            if f < 1.0 {
                return f;
            }
        }
    }

    /// Returns a float in `[0, 1)`.
    pub fn float32(&mut self) -> f32 {
        loop {
            let f = self.float64() as f32;
            if f < 1.0 {
                return f;
            }
        }
    }

    /// Standard normal draw (mean 0, stddev 1), ziggurat method.
    pub fn norm_float64(&mut self) -> f64 {
        ziggurat::normal(self)
    }

    /// Exponential draw with rate 1 (mean 1), ziggurat method.
    pub fn exp_float64(&mut self) -> f64 {
        ziggurat::exponential(self)
    }

    /// Shuffles `data` in place with Fisher-Yates.
    pub fn shuffle<T>(&mut self, data: &mut [T]) {
        let mut i = data.len();

        // Indices past the i32 range need the 63-bit path.
        while i > INT32_MAX as usize {
            let j = self.int63n(i as i64) as usize;
            data.swap(i - 1, j);
            i -= 1;
        }

        while i > 1 {
            let j = self.int31n_lemire(i as u32) as usize;
            data.swap(i - 1, j);
            i -= 1;
        }
    }

    /// Returns a random permutation of `0..n` (inside-out Fisher-Yates).
    pub fn perm(&mut self, n: usize) -> Vec<usize> {
        let mut out = vec![0; n];

        for i in 0..n {
            let j = self.intn(i as i64 + 1) as usize;
            out[i] = out[j];
            out[j] = i;
        }

        out
    }
}

impl RngCore for LaggedFibonacci {
    /// Same as [`LaggedFibonacci::uint32`].
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.uint32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.tap = if self.tap == 0 { LEN - 1 } else { self.tap - 1 };
        self.feed = if self.feed == 0 { LEN - 1 } else { self.feed - 1 };

        let x = self.vec[self.feed].wrapping_add(self.vec[self.tap]);
        self.vec[self.feed] = x;

        x
    }

    /// Takes 7 bytes from each [`int63`](LaggedFibonacci::int63), low byte
    /// first. Unused bytes carry over to the next call, so filling `a` then
    /// `b` equals filling `a ++ b` in one go.
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst {
            if self.read_pos == 0 {
                self.read_val = self.int63();
                self.read_pos = 7;
            }

            *byte = self.read_val as u8;
            self.read_val >>= 8;
            self.read_pos -= 1;
        }
    }
}

impl SeedableRng for LaggedFibonacci {
    type Seed = [u8; 8];

    /// Reads the seed as a little-endian `i64`.
    fn from_seed(seed: [u8; 8]) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    /// Reinterprets `state` as an `i64` seed.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}

