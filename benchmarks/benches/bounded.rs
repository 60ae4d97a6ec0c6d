// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

use quickrand::{FastRng, SeededGenerator, bounded_int, fast_intn, fast_randn, shared};

fn benchmark_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded");
    group.throughput(Throughput::Elements(1));

    for bound in [10i64, 1_000_000, 1 << 40].iter() {
        group.bench_with_input(format!("fast_intn {}", bound), bound, |b, &bound| {
            b.iter(|| fast_intn(black_box(bound)));
        });

        group.bench_with_input(format!("shared intn {}", bound), bound, |b, &bound| {
            b.iter(|| shared().intn(black_box(bound)));
        });

        group.bench_with_input(format!("rand random_range {}", bound), bound, |b, &bound| {
            let mut rng = rand::rng();
            b.iter(|| rng.random_range(0..black_box(bound)));
        });
    }

    group.bench_function("fast_randn u32", |b| {
        b.iter(|| fast_randn(black_box(1000)));
    });

    group.bench_function("bounded_int -500..500", |b| {
        b.iter(|| bounded_int(black_box(-500), black_box(500)));
    });

    group.bench_function("private FastRng fast_intn 1000", |b| {
        let wide = SeededGenerator::new_seeded(1);
        let rng = FastRng::with_source(quickrand::ThreadBits, &wide);
        b.iter(|| rng.fast_intn(black_box(1000)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_bounded);
criterion_main!(benches);
