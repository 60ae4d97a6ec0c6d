// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide defaults and free-function API.
//!
//! The shared [`SeededGenerator`] is created on first use and lives until the
//! process exits. The free functions below draw from the calling thread's
//! [`ThreadBits`](crate::ThreadBits) and only touch the shared generator for ranges wider than
//! `u32::MAX`.

use std::sync::OnceLock;

use crate::bytes;
use crate::error::EntropyError;
use crate::fast::FastRng;
use crate::seeded::SeededGenerator;

static SHARED: OnceLock<SeededGenerator> = OnceLock::new();

/// The process-wide generator, seeded from OS entropy on first call.
///
/// Safe to use from any thread. For a reproducible sequence create a private
/// instance with [`SeededGenerator::new_seeded`] instead.
///
/// # Example
///
/// ```rust
/// use quickrand::shared;
///
/// assert_eq!(shared().intn(1), 0);
/// assert!(std::ptr::eq(shared(), shared()));
/// ```
pub fn shared() -> &'static SeededGenerator {
    SHARED.get_or_init(|| {
        let generator = SeededGenerator::new_default();
        tracing::debug!("initialized shared seeded generator");
        generator
    })
}

/// Raw 32-bit word from the calling thread's bit source.
#[inline]
pub fn fast_rand() -> u32 {
    FastRng::new().fast_rand()
}

/// See [`FastRng::fast_randn`].
#[inline]
pub fn fast_randn(n: u32) -> u32 {
    FastRng::new().fast_randn(n)
}

/// See [`FastRng::fast_intn`].
#[inline]
pub fn fast_intn(n: i64) -> i64 {
    FastRng::new().fast_intn(n)
}

/// See [`FastRng::bounded_int`].
#[inline]
pub fn bounded_int(min: i64, max: i64) -> i64 {
    FastRng::new().bounded_int(min, max)
}

/// See [`FastRng::bounded_uint32`].
#[inline]
pub fn bounded_uint32(min: u32, max: u32) -> u32 {
    FastRng::new().bounded_uint32(min, max)
}

/// See [`FastRng::random_string`].
pub fn random_string(len: usize) -> String {
    FastRng::new().random_string(len)
}

/// See [`FastRng::random_hex`]. NON-secure.
pub fn random_hex(n_half: usize) -> String {
    FastRng::new().random_hex(n_half)
}

/// See [`FastRng::fast_random_bytes`]. NON-secure.
pub fn fast_random_bytes(n: usize) -> Vec<u8> {
    FastRng::new().fast_random_bytes(n)
}

/// Secure bytes from the OS; see [`secure_random_bytes`](crate::secure_random_bytes).
pub fn random_bytes(n: usize) -> Result<Vec<u8>, EntropyError> {
    bytes::secure_random_bytes(n)
}
