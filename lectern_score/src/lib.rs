// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lectern Score: aggregate task scores across slides and build summaries.
//!
//! ## Overview
//!
//! Slides hold heterogeneous interactive elements. Some of them are *tasks*
//! that can report a score; most (images, text, shapes) cannot. This crate
//! walks slides through the [`ScoredSlide`] trait, asks every element for its
//! optional [`TaskElement`] capabilities and reduces the answers into:
//!
//! - per-slide [`ScoreRecord`]s and grand totals ([`ScoreAggregator`]),
//! - a tabular [`SummaryReport`] with percentages and the affordances a
//!   summary screen should show ([`SummaryBuilder`]),
//! - a one-shot [`SubmissionLatch`] deciding when results are submitted.
//!
//! Scores are never cached; every query walks the current element state.
//!
//! ## Minimal example
//!
//! ```rust
//! use lectern_score::{ScoreAggregator, ScoredSlide, SummaryBuilder, SummaryOptions, TaskElement};
//!
//! struct Quiz { score: f64, max: f64 }
//! impl TaskElement for Quiz {
//!     fn score(&self) -> Option<f64> { Some(self.score) }
//!     fn max_score(&self) -> Option<f64> { Some(self.max) }
//! }
//!
//! struct Page(Vec<Quiz>);
//! impl ScoredSlide for Page {
//!     type Task = Quiz;
//!     fn tasks(&self) -> impl Iterator<Item = (usize, &Quiz)> + '_ {
//!         self.0.iter().enumerate()
//!     }
//! }
//!
//! let deck = [Page(vec![Quiz { score: 3.0, max: 5.0 }]), Page(vec![]), Page(vec![Quiz { score: 2.0, max: 5.0 }])];
//! let scores = ScoreAggregator::new(&deck);
//! assert_eq!(scores.total_score(), 5.0);
//! assert_eq!(scores.max_score(), 10.0);
//!
//! let report = SummaryBuilder::new(SummaryOptions::default()).build(&scores.records(), |_| None);
//! assert_eq!(report.rows.len(), 2);
//! assert_eq!(report.total.percentage, 50);
//! ```

pub mod aggregate;
pub mod state;
pub mod summary;

pub use aggregate::{ScoreAggregator, ScoreRecord, ScoredSlide, TaskElement};
pub use state::is_empty_state;
pub use summary::{
    ShareTargets, SubmissionLatch, SummaryAffordances, SummaryBuilder, SummaryOptions,
    SummaryReport, SummaryRow, TotalScore, percentage,
};
