// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # quickrand
//!
//! Fast, statistically adequate random values for latency-sensitive code.
//! Not cryptographically secure, except for [`secure_random_bytes`].
//!
//! ## Core Types
//!
//! - [`ThreadBits`]: per-thread `xorshift64+` bit source, lock-free
//! - [`FastRng`]: bounded integers, strings and bytes over any [`BitSource`]
//! - [`SeededGenerator`]: reproducible, mutex-guarded [`LaggedFibonacci`]
//!   (same stream as Go's `math/rand` for a given seed)
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//!
//! ## Traits
//!
//! - [`BitSource`]: raw 32/64-bit words for the fast path
//! - [`EntropySource`]: secure byte source
//!
//! ## Example
//!
//! ```rust
//! use quickrand::{bounded_int, fast_intn, new_seeded_generator, random_string};
//!
//! // Fast path: one thread-local draw and one multiply
//! let shard = fast_intn(16);
//! assert!((0..16).contains(&shard));
//!
//! let jitter = bounded_int(-50, 50);
//! assert!((-50..50).contains(&jitter));
//!
//! // 20 alphanumeric characters from ~5 bit-source calls
//! let id = random_string(20);
//! assert_eq!(id.len(), 20);
//!
//! // Reproducible sequence
//! let rng = new_seeded_generator(Some(1));
//! assert_eq!(rng.next_int63(), 5577006791947779410);
//! ```
//!
//! ## Bias
//!
//! Bounded draws up to `u32::MAX` use multiply-shift reduction ([`reduce`]):
//! no division and no retry loop, at the cost of a bias of at most
//! `n / 2^32`. Wider bounds are exact.
//!
//! ## Platform Support
//!
//! Seeds and secure bytes come from:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod bytes;
mod cooked;
mod error;
mod fast;
mod lagged;
mod reduce;
mod seeded;
mod shared;
mod string;
mod support;
mod system;
mod thread_bits;
mod traits;
mod ziggurat;

pub mod u64_seed;

pub use bytes::{secure_random_bytes, secure_random_bytes_with};
pub use error::EntropyError;
pub use fast::FastRng;
pub use lagged::LaggedFibonacci;
pub use reduce::reduce;
pub use seeded::{SeededGenerator, new_seeded_generator};
pub use shared::{
    bounded_int, bounded_uint32, fast_intn, fast_rand, fast_random_bytes, fast_randn,
    random_bytes, random_hex, random_string, shared,
};
pub use string::{ALPHABET, fill_alphanumeric};
pub use system::SystemEntropySource;
pub use thread_bits::{FastRand, ThreadBits};
pub use traits::{BitSource, EntropySource};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
