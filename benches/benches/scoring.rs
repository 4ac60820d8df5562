// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lectern_score::{
    ScoreAggregator, ScoredSlide, SummaryBuilder, SummaryOptions, TaskElement, is_empty_state,
};
use serde_json::{Value, json};

struct Element {
    scored: bool,
    score: f64,
    state: Value,
}

impl TaskElement for Element {
    fn score(&self) -> Option<f64> {
        self.scored.then_some(self.score)
    }

    fn max_score(&self) -> Option<f64> {
        self.scored.then_some(10.0)
    }

    fn answer_given(&self) -> Option<bool> {
        self.scored.then_some(true)
    }

    fn current_state(&self) -> Option<Value> {
        self.scored.then(|| self.state.clone())
    }
}

struct Page(Vec<Element>);

impl ScoredSlide for Page {
    type Task = Element;

    fn tasks(&self) -> impl Iterator<Item = (usize, &Element)> + '_ {
        self.0.iter().enumerate()
    }
}

/// `slides` slides of eight elements; every third element is a task.
fn deck(slides: usize) -> Vec<Page> {
    (0..slides)
        .map(|s| {
            Page(
                (0..8)
                    .map(|e| Element {
                        scored: (s * 8 + e) % 3 == 0,
                        score: (e % 11) as f64,
                        state: json!({ "answers": [e, null, { "text": "" }] }),
                    })
                    .collect(),
            )
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring/aggregate");
    for slides in [10_usize, 100, 1_000] {
        let deck = deck(slides);
        group.throughput(Throughput::Elements(slides as u64));

        group.bench_with_input(BenchmarkId::new("totals", slides), &deck, |b, deck| {
            b.iter(|| {
                let agg = ScoreAggregator::new(deck);
                black_box((agg.total_score(), agg.max_score()))
            });
        });

        group.bench_with_input(BenchmarkId::new("answered", slides), &deck, |b, deck| {
            b.iter(|| black_box(ScoreAggregator::new(deck).answered()));
        });

        group.bench_with_input(BenchmarkId::new("summary", slides), &deck, |b, deck| {
            let builder = SummaryBuilder::new(SummaryOptions::default());
            b.iter(|| {
                let records = ScoreAggregator::new(deck).records();
                black_box(builder.build(&records, |i| Some(format!("Slide {}", i + 1))))
            });
        });
    }
    group.finish();
}

fn bench_empty_state(c: &mut Criterion) {
    let nested = json!({
        "answers": [[], [null, ""], { "a": { "b": [null, [null, [""]]] } }],
        "extra": { "x": null }
    });
    c.bench_function("scoring/is_empty_state", |b| {
        b.iter(|| black_box(is_empty_state(black_box(&nested))));
    });
}

criterion_group!(benches, bench_aggregate, bench_empty_state);
criterion_main!(benches);
