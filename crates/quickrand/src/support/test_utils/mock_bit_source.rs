// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::traits::BitSource;

/// Scripted [`BitSource`] for testing.
///
/// Returns the given words in order, starting over after the last one, and
/// counts how many words were drawn.
pub struct MockBitSource {
    words: Vec<u32>,
    next: Cell<usize>,
    next_u32_count: Cell<usize>,
}

impl MockBitSource {
    /// Creates a source cycling through `words`.
    ///
    /// # Panics
    ///
    /// Panics if `words` is empty.
    pub fn new(words: Vec<u32>) -> Self {
        assert!(!words.is_empty(), "MockBitSource needs at least one word");

        Self {
            words,
            next: Cell::new(0),
            next_u32_count: Cell::new(0),
        }
    }

    /// Creates a source that always returns `word`.
    pub fn constant(word: u32) -> Self {
        Self::new(vec![word])
    }

    /// Resets the call counter (the script position is kept).
    pub fn reset_count(&self) {
        self.next_u32_count.set(0);
    }

    /// Returns how many 32-bit words were drawn.
    pub fn call_count(&self) -> usize {
        self.next_u32_count.get()
    }
}

impl BitSource for MockBitSource {
    fn next_u32(&self) -> u32 {
        let idx = self.next.get();
        self.next.set((idx + 1) % self.words.len());
        self.next_u32_count.set(self.next_u32_count.get() + 1);

        self.words[idx]
    }
}
