// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Thread-safe, explicitly seedable generator.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand_core::{RngCore, SeedableRng};

use crate::lagged::LaggedFibonacci;
use crate::u64_seed::entropy_u64_or_fallback;

/// A [`LaggedFibonacci`] behind a mutex.
///
/// Every method takes `&self`, so one instance can be shared by any number of
/// threads. Draws from concurrent callers interleave in an unspecified order;
/// a single caller drawing from an instance created with
/// [`SeededGenerator::new_seeded`] always sees the same sequence, which is
/// the `math/rand` sequence for that seed.
///
/// Non-positive bounds return `0`.
///
/// # Example
///
/// ```rust
/// use quickrand::SeededGenerator;
///
/// let a = SeededGenerator::new_seeded(1);
/// let b = SeededGenerator::new_seeded(1);
///
/// assert_eq!(a.next_int63(), 5577006791947779410);
/// assert_eq!(b.next_int63(), 5577006791947779410);
///
/// let roll = a.intn(6);
/// assert!((0..6).contains(&roll));
/// ```
#[derive(Debug)]
pub struct SeededGenerator {
    rng: Mutex<LaggedFibonacci>,
    seed: AtomicU64,
}

impl SeededGenerator {
    /// Creates a generator seeded from OS entropy.
    ///
    /// Falls back to a counter/clock seed when entropy is unavailable.
    pub fn new_default() -> Self {
        Self::new_seeded(entropy_u64_or_fallback())
    }

    /// Creates a generator whose sequence is fully determined by `seed`.
    ///
    /// `seed` is read as an `i64`; see [`LaggedFibonacci`] for how it is
    /// reduced.
    pub fn new_seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(LaggedFibonacci::seed_from_u64(seed)),
            seed: AtomicU64::new(seed),
        }
    }

    /// Returns the seed of the current sequence.
    pub fn seed(&self) -> u64 {
        self.seed.load(Ordering::Relaxed)
    }

    /// Restarts the sequence from `seed`.
    pub fn reseed(&self, seed: u64) {
        let mut rng = self.lock();
        rng.reseed(seed as i64);
        self.seed.store(seed, Ordering::Relaxed);
    }

    /// Runs `f` with exclusive access to the underlying core.
    ///
    /// Use this to take several draws atomically or to drive `rand`
    /// distributions. A poisoned lock is recovered: the core holds no
    /// invariant a panic could break.
    pub fn with_rng<R>(&self, f: impl FnOnce(&mut LaggedFibonacci) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, LaggedFibonacci> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns 32 random bits (bits 31..62 of one step).
    pub fn next_u32(&self) -> u32 {
        self.lock().uint32()
    }

    /// Returns 64 random bits.
    pub fn next_u64(&self) -> u64 {
        self.lock().next_u64()
    }

    /// Returns a non-negative `i64`.
    pub fn next_int63(&self) -> i64 {
        self.lock().int63()
    }

    /// Returns a non-negative `i32`.
    pub fn next_int31(&self) -> i32 {
        self.lock().int31()
    }

    /// Returns a non-negative `i64`; same draw as
    /// [`next_int63`](Self::next_int63).
    pub fn next_int(&self) -> i64 {
        self.next_int63()
    }

    /// Returns a value in `[0, n)`, or `0` if `n <= 0`.
    pub fn int63n(&self, n: i64) -> i64 {
        self.lock().int63n(n)
    }

    /// Returns a value in `[0, n)`, or `0` if `n <= 0`.
    pub fn int31n(&self, n: i32) -> i32 {
        self.lock().int31n(n)
    }

    /// Returns a value in `[0, n)`, or `0` if `n <= 0`.
    ///
    /// Bounds that fit in `i32` use [`int31n`](Self::int31n), larger ones
    /// [`int63n`](Self::int63n).
    pub fn intn(&self, n: i64) -> i64 {
        self.lock().intn(n)
    }

    /// Returns a value in `[0, n)` over the full `u64` range, or `0` if
    /// `n == 0`.
    pub fn uint64n(&self, n: u64) -> u64 {
        self.lock().uint64n(n)
    }

    /// Returns a float in `[0, 1)`.
    pub fn float64(&self) -> f64 {
        self.lock().float64()
    }

    /// Returns a float in `[0, 1)`.
    pub fn float32(&self) -> f32 {
        self.lock().float32()
    }

    /// Standard normal draw (mean 0, stddev 1).
    pub fn norm_float64(&self) -> f64 {
        self.lock().norm_float64()
    }

    /// Exponential draw with rate 1 (mean 1).
    pub fn exp_float64(&self) -> f64 {
        self.lock().exp_float64()
    }

    /// Shuffles `data` in place with Fisher-Yates, holding the lock once.
    pub fn shuffle<T>(&self, data: &mut [T]) {
        self.lock().shuffle(data)
    }

    /// Returns a random permutation of `0..n`.
    pub fn perm(&self, n: usize) -> Vec<usize> {
        self.lock().perm(n)
    }

    /// Fills `dst` with random bytes. Not suitable for secrets.
    pub fn fill_bytes(&self, dst: &mut [u8]) {
        self.lock().fill_bytes(dst)
    }
}

impl Default for SeededGenerator {
    fn default() -> Self {
        Self::new_default()
    }
}

/// Creates a private generator: seeded with `seed`, or from entropy when
/// `None`.
///
/// # Example
///
/// ```rust
/// use quickrand::new_seeded_generator;
///
/// let seeded = new_seeded_generator(Some(1));
/// assert_eq!(seeded.next_int63(), 5577006791947779410);
///
/// let unseeded = new_seeded_generator(None);
/// assert!(unseeded.next_int63() >= 0);
/// ```
pub fn new_seeded_generator(seed: Option<u64>) -> SeededGenerator {
    match seed {
        Some(seed) => SeededGenerator::new_seeded(seed),
        None => SeededGenerator::new_default(),
    }
}
