// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregation and summary tests over arbitrary element scores.

use lectern_score::{
    ScoreAggregator, ScoredSlide, SubmissionLatch, SummaryBuilder, SummaryOptions, TaskElement,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
struct Task {
    score: Option<f64>,
    max: Option<f64>,
}

impl TaskElement for Task {
    fn score(&self) -> Option<f64> {
        self.score
    }
    fn max_score(&self) -> Option<f64> {
        self.max
    }
}

#[derive(Clone, Debug)]
struct Slide(Vec<Task>);

impl ScoredSlide for Slide {
    type Task = Task;
    fn tasks(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.0.iter().enumerate()
    }
}

fn value() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -5.0_f64..20.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(0.0),
    ]
}

fn task() -> impl Strategy<Value = Task> {
    (proptest::option::of(value()), proptest::option::of(value()))
        .prop_map(|(score, max)| Task { score, max })
}

fn deck() -> impl Strategy<Value = Vec<Slide>> {
    proptest::collection::vec(proptest::collection::vec(task(), 0..5).prop_map(Slide), 0..8)
}

proptest! {
    #[test]
    fn records_are_consistent(slides in deck()) {
        let agg = ScoreAggregator::new(&slides);
        let records = agg.records();
        for r in &records {
            prop_assert!(r.score.is_finite() && r.max_score.is_finite());
            prop_assert!(r.score >= 0.0 && r.score <= r.max_score);
            prop_assert!(!r.element_indexes.is_empty());
        }
        let report = SummaryBuilder::default().build(&records, |_| None);
        prop_assert_eq!(report.rows.len(), records.len());
        prop_assert!(report.total.percentage <= 100);
        for row in &report.rows {
            prop_assert!(row.percentage <= 100);
        }
        prop_assert!((agg.total_score() - report.total.score).abs() < 1e-9);
        prop_assert!((agg.max_score() - report.total.max_score).abs() < 1e-9);
    }
}

#[test]
fn two_scored_slides_out_of_five() {
    let scored = |score| {
        Slide(vec![Task {
            score: Some(score),
            max: Some(5.0),
        }])
    };
    let plain = || Slide(vec![Task {
        score: None,
        max: None,
    }]);
    let slides = vec![plain(), plain(), scored(3.0), plain(), scored(2.0)];

    let agg = ScoreAggregator::new(&slides);
    assert_eq!(agg.total_score(), 5.0);
    assert_eq!(agg.max_score(), 10.0);

    let options = SummaryOptions {
        enable_retry: true,
        ..SummaryOptions::default()
    };
    let report = SummaryBuilder::new(options).build(&agg.records(), |i| Some(format!("#{i}")));
    let rows: Vec<(usize, u32)> = report
        .rows
        .iter()
        .map(|r| (r.slide_index, r.percentage))
        .collect();
    assert_eq!(rows, vec![(2, 60), (4, 40)]);
    assert_eq!(report.total.percentage, 50);
    assert!(report.affordances.retry);

    // Re-rendering the summary does not resubmit.
    let mut latch = SubmissionLatch::new();
    assert!(latch.on_render(false));
    assert!(!latch.on_render(false));
}
