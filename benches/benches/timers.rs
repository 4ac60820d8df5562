// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lectern_timing::TimerQueue;

fn bench_schedule_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timers");
    for len in [16_u64, 256, 4_096] {
        group.bench_with_input(BenchmarkId::new("schedule_drain", len), &len, |b, &len| {
            b.iter_batched(
                TimerQueue::<u64>::new,
                |mut timers| {
                    // Interleaved deadlines exercise sorted insertion.
                    for i in 0..len {
                        timers.schedule((i * 7_919) % 1_000, i);
                    }
                    while let Some(fired) = timers.pop_due(1_000) {
                        black_box(fired);
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("debounce", len), &len, |b, &len| {
            b.iter(|| {
                let mut timers = TimerQueue::new();
                let mut pending = None;
                for now in 0..len {
                    if let Some(id) = pending.take() {
                        timers.cancel(id);
                    }
                    pending = Some(timers.schedule(now + 100, ()));
                }
                black_box(timers.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_schedule_and_drain);
criterion_main!(benches);
