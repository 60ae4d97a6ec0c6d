// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Maps a raw 32-bit word into `[0, n)` without division.
///
/// Treats `x` as the fraction `x / 2^32` and scales it by `n`, keeping the
/// integer part: `(x * n) >> 32` in 64-bit arithmetic. When `n` does not divide
/// `2^32` some outputs get one more preimage than others, a bias of at most
/// `n / 2^32`. No rejection step corrects it.
///
/// Total over all inputs: `n == 0` yields `0`.
///
/// See <https://lemire.me/blog/2016/06/27/a-fast-alternative-to-the-modulo-reduction/>
///
/// # Example
///
/// ```rust
/// use quickrand::reduce;
///
/// assert_eq!(reduce(0, 10), 0);
/// assert_eq!(reduce(u32::MAX, 10), 9);
/// assert_eq!(reduce(1 << 31, 10), 5);
/// ```
#[inline(always)]
pub fn reduce(x: u32, n: u32) -> u32 {
    ((x as u64 * n as u64) >> 32) as u32
}
