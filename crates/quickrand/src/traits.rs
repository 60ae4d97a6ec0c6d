// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for cryptographically secure random byte sources.
///
/// Implementations are typically backed by the OS-level CSPRNG and may block
/// briefly. They are never used on the fast path.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source failed or
    /// could not fill the whole buffer. The contents of `dest` are unspecified
    /// after an error.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Source of raw random words for the fast path.
///
/// Takes `&self` so a single value can be shared by every caller; any state
/// must be synchronized (or kept per thread) by the implementation. Calls must
/// not allocate and cannot fail.
pub trait BitSource {
    /// Returns 32 pseudo-random bits.
    fn next_u32(&self) -> u32;

    /// Returns 64 pseudo-random bits composed from two 32-bit draws.
    #[inline]
    fn next_u64(&self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }
}

impl<B: BitSource + ?Sized> BitSource for &B {
    #[inline]
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }

    #[inline]
    fn next_u64(&self) -> u64 {
        (**self).next_u64()
    }
}
