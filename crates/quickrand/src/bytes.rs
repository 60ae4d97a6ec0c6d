// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random byte buffers and hex strings.
//!
//! Two very different sources live here:
//!
//! - [`secure_random_bytes`] reads the OS CSPRNG. Use it for keys, tokens and
//!   anything an attacker must not guess.
//! - [`FastRng::fast_random_bytes`] and [`FastRng::random_hex`] reuse the
//!   alphanumeric string generator. They are fast and predictable. Never use
//!   them for secrets.

use crate::error::EntropyError;
use crate::fast::FastRng;
use crate::system::SystemEntropySource;
use crate::traits::{BitSource, EntropySource};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Reads `n` bytes from the OS entropy source.
///
/// Returns an empty vector without touching the source when `n == 0`.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the source fails or
/// delivers fewer than `n` bytes. A partially filled buffer is never returned.
///
/// # Example
///
/// ```rust
/// use quickrand::secure_random_bytes;
///
/// let key = secure_random_bytes(32).expect("Failed to read entropy");
/// assert_eq!(key.len(), 32);
///
/// assert!(secure_random_bytes(0).expect("Failed on empty request").is_empty());
/// ```
pub fn secure_random_bytes(n: usize) -> Result<Vec<u8>, EntropyError> {
    secure_random_bytes_with(&SystemEntropySource {}, n)
}

/// [`secure_random_bytes`] over a caller-supplied [`EntropySource`].
pub fn secure_random_bytes_with<E: EntropySource + ?Sized>(
    source: &E,
    n: usize,
) -> Result<Vec<u8>, EntropyError> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut buf = vec![0u8; n];
    if let Err(err) = source.fill_bytes(&mut buf) {
        tracing::warn!(error = %err, requested = n, "secure random read failed");
        return Err(err);
    }

    Ok(buf)
}

/// Lowercase hex encoding of `bytes`.
pub(crate) fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);

    for &byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }

    out
}

impl<B: BitSource> FastRng<'_, B> {
    /// `n` fast, NON-secure random bytes.
    ///
    /// The bytes are the ASCII of [`random_string(n)`](Self::random_string),
    /// handed over without copying, so each byte is one of 62 alphanumeric
    /// values. For secrets use [`secure_random_bytes`].
    pub fn fast_random_bytes(&self, n: usize) -> Vec<u8> {
        self.random_string(n).into_bytes()
    }

    /// Hex string of `2 * n_half` lowercase digits. NON-secure.
    ///
    /// Encodes `n_half` bytes from [`fast_random_bytes`](Self::fast_random_bytes).
    ///
    /// # Example
    ///
    /// ```rust
    /// use quickrand::FastRng;
    ///
    /// let hex = FastRng::new().random_hex(8);
    ///
    /// assert_eq!(hex.len(), 16);
    /// assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    /// ```
    pub fn random_hex(&self, n_half: usize) -> String {
        encode_hex(&self.fast_random_bytes(n_half))
    }
}
