// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lectern_focus::{FocusRing, Key, KeyboardNav, Modifiers};

fn ring(len: usize) -> FocusRing<usize> {
    let mut ring = FocusRing::with_negative_tabindex();
    for i in 0..len {
        ring.add(i, None);
    }
    ring
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_ring/navigate");

    // Promotion rewrites every tab stop, so a full lap is O(n^2).
    for len in [8_usize, 64, 512] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("next_lap", len), &len, |b, &len| {
            let mut ring = ring(len);
            b.iter(|| {
                for _ in 0..len {
                    black_box(ring.next(&mut ()));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("keyboard_lap", len), &len, |b, &len| {
            let mut ring = ring(len);
            let nav = KeyboardNav::new();
            b.iter(|| {
                for _ in 0..len {
                    black_box(nav.handle_key(
                        Key::ArrowRight,
                        Modifiers::empty(),
                        &mut ring,
                        &mut (),
                    ));
                }
            });
        });
    }

    group.finish();
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_ring/membership");
    for len in [64_usize, 512] {
        group.bench_with_input(BenchmarkId::new("insert_front", len), &len, |b, &len| {
            b.iter(|| {
                let mut ring = FocusRing::new();
                for i in 0..len {
                    ring.add(i, Some(0));
                }
                black_box(ring)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_navigation, bench_membership);
criterion_main!(benches);
