// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::MockBitSource;
use crate::traits::BitSource;

#[test]
fn test_mock_bit_source_cycles_script() {
    let mock = MockBitSource::new(vec![1, 2, 3]);

    let drawn: Vec<u32> = (0..7).map(|_| mock.next_u32()).collect();

    assert_eq!(drawn, [1, 2, 3, 1, 2, 3, 1]);
    assert_eq!(mock.call_count(), 7);
}

#[test]
fn test_mock_bit_source_next_u64_composes_two_words() {
    let mock = MockBitSource::new(vec![0xAAAA_BBBB, 0xCCCC_DDDD]);

    assert_eq!(mock.next_u64(), 0xAAAA_BBBB_CCCC_DDDD);
    assert_eq!(mock.call_count(), 2);
}

#[test]
fn test_mock_bit_source_reset_count_keeps_position() {
    let mock = MockBitSource::new(vec![10, 20]);

    assert_eq!(mock.next_u32(), 10);
    mock.reset_count();

    assert_eq!(mock.call_count(), 0);
    assert_eq!(mock.next_u32(), 20);
}

#[test]
#[should_panic(expected = "MockBitSource needs at least one word")]
fn test_mock_bit_source_empty_script_panics() {
    let _ = MockBitSource::new(Vec::new());
}
