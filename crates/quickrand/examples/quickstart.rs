// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tour of the public API.
//!
//! Run with `RUST_LOG=debug` to see seeding events.

use tracing_subscriber::EnvFilter;

use quickrand::{SeededGenerator, fast_intn, random_string, shared};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Shared exact generator vs. the fast path, bounds 1..=10^6
    let mut bound = 1;
    while bound <= 1_000_000 {
        print!("{} {} ", shared().intn(bound), fast_intn(bound));
        bound *= 10;
    }
    println!();

    println!("{} {}", random_string(20), random_string(20));

    // Seeded from OS entropy
    let rng = SeededGenerator::new_default();
    println!("{}", rng.next_int63());

    // Same output on every run
    let rng = SeededGenerator::new_seeded(1);
    println!("{}", rng.next_int63());
}
