// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! OS entropy for `u64` seeds.
//!
//! Seeds for [`ThreadBits`](crate::ThreadBits) and
//! [`SeededGenerator::new_default`](crate::SeededGenerator::new_default) are
//! read straight from the kernel where a direct syscall exists, and through
//! `getrandom` everywhere else.
//!
//! # Platform support
//!
//! - **Linux/Android**: `getrandom(2)` via libc
//! - **macOS/iOS**: `getentropy(3)` via libc
//! - **Other**: `getrandom` crate (Windows, WASI, wasm32, BSDs)
//!
//! When no entropy can be obtained, [`fallback_seed`] derives a seed from a
//! process-wide counter and the wall clock. Such seeds differ from call to
//! call but are predictable; they only keep the fast path alive.

use core::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::EntropyError;

const SEED_LEN: usize = core::mem::size_of::<u64>();

/// Golden-ratio increment used by SplitMix64.
pub(crate) const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Reads a `u64` from the best available OS entropy source.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the source fails or
/// delivers fewer than 8 bytes.
///
/// # Example
///
/// ```rust
/// use quickrand::u64_seed::entropy_u64;
///
/// let seed = entropy_u64().expect("Failed to read entropy");
/// # let _ = seed;
/// ```
pub fn entropy_u64() -> Result<u64, EntropyError> {
    let mut bytes = [0u8; SEED_LEN];
    fill_seed_bytes(&mut bytes)?;

    Ok(u64::from_le_bytes(bytes))
}

/// Reads an entropy seed, falling back to [`fallback_seed`] on failure.
///
/// Never fails. The fallback is logged at `warn` level.
pub fn entropy_u64_or_fallback() -> u64 {
    match entropy_u64() {
        Ok(seed) => seed,
        Err(err) => {
            let seed = fallback_seed();
            tracing::warn!(error = %err, "entropy unavailable, using counter/clock seed");
            seed
        }
    }
}

/// Derives a non-secret seed from a monotonic counter and the wall clock.
///
/// Two calls landing on the same clock reading still differ, because the
/// counter has moved.
pub fn fallback_seed() -> u64 {
    let tick = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    splitmix64(nanos ^ tick.wrapping_mul(GOLDEN_GAMMA))
}

/// One SplitMix64 step on `state`, returning the mixed output.
///
/// Bijective on `u64`, so distinct inputs always give distinct outputs.
#[inline]
pub(crate) fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn fill_seed_bytes(dst: &mut [u8; SEED_LEN]) -> Result<(), EntropyError> {
    let ret = unsafe { libc::getrandom(dst.as_mut_ptr() as *mut libc::c_void, SEED_LEN, 0) };

    if ret == SEED_LEN as libc::ssize_t {
        Ok(())
    } else {
        Err(EntropyError::EntropyNotAvailable)
    }
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn fill_seed_bytes(dst: &mut [u8; SEED_LEN]) -> Result<(), EntropyError> {
    let ret = unsafe { libc::getentropy(dst.as_mut_ptr() as *mut libc::c_void, SEED_LEN) };

    if ret == 0 {
        Ok(())
    } else {
        Err(EntropyError::EntropyNotAvailable)
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios"
)))]
fn fill_seed_bytes(dst: &mut [u8; SEED_LEN]) -> Result<(), EntropyError> {
    getrandom::fill(dst).map_err(|_| EntropyError::EntropyNotAvailable)
}
