// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Alphanumeric strings from packed random bits.
//!
//! One 32-bit word holds five 6-bit symbol indices (30 bits; the top bits
//! are never used). Indices 62 and 63 fall outside the alphabet: their group
//! is discarded without output and the next group is tried. On average a word
//! yields `5 * 62 / 64 ≈ 4.84` symbols, so a string of `n` characters costs
//! about `n / 4.84` bit-source calls instead of `n`.

use crate::fast::FastRng;
use crate::traits::BitSource;

/// Output alphabet, indexed by the 6-bit group value.
pub const ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const INDEX_BITS: u32 = 6;
const INDEX_MASK: u32 = (1 << INDEX_BITS) - 1;
const INDICES_PER_WORD: u32 = 31 / INDEX_BITS;

/// Fills `dst` with symbols from [`ALPHABET`], last byte first.
///
/// Allocation-free. Every byte of `dst` is overwritten.
///
/// # Example
///
/// ```rust
/// use quickrand::{ALPHABET, ThreadBits, fill_alphanumeric};
///
/// let mut id = [0u8; 16];
/// fill_alphanumeric(&ThreadBits, &mut id);
///
/// assert!(id.iter().all(|b| ALPHABET.contains(b)));
/// ```
pub fn fill_alphanumeric<B: BitSource + ?Sized>(bits: &B, dst: &mut [u8]) {
    if dst.is_empty() {
        return;
    }

    let mut cache = bits.next_u32();
    let mut remain = INDICES_PER_WORD;
    let mut pos = dst.len();

    while pos > 0 {
        if remain == 0 {
            cache = bits.next_u32();
            remain = INDICES_PER_WORD;
        }

        let idx = (cache & INDEX_MASK) as usize;
        if idx < ALPHABET.len() {
            pos -= 1;
            dst[pos] = ALPHABET[idx];
        }

        cache >>= INDEX_BITS;
        remain -= 1;
    }
}

impl<B: BitSource> FastRng<'_, B> {
    /// Random string of `len` characters from [`ALPHABET`].
    ///
    /// Returns an empty string without drawing when `len == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use quickrand::FastRng;
    ///
    /// let s = FastRng::new().random_string(20);
    ///
    /// assert_eq!(s.len(), 20);
    /// assert!(s.bytes().all(|b| b.is_ascii_alphanumeric()));
    /// ```
    pub fn random_string(&self, len: usize) -> String {
        if len == 0 {
            return String::new();
        }

        let mut buf = vec![0u8; len];
        fill_alphanumeric(self.bits(), &mut buf);

        buf.into_iter().map(char::from).collect()
    }
}
