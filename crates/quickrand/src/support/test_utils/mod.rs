// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking entropy and bit sources.
//!
//! Provides mock implementations with configurable behavior for testing.

mod mock_bit_source;
mod mock_entropy_source;

pub use mock_bit_source::MockBitSource;
pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
