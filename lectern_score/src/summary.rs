// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary report: per-slide breakdown, totals, and summary affordances.
//!
//! ## Usage
//!
//! 1) Collect [`ScoreRecord`]s (typically [`ScoreAggregator::records`]).
//! 2) Build a [`SummaryReport`] with [`SummaryBuilder::build`].
//! 3) Ask a [`SubmissionLatch`] whether this render should submit results.
//!
//! [`ScoreAggregator::records`]: crate::ScoreAggregator::records

use bitflags::bitflags;
use tracing::debug;

use crate::aggregate::ScoreRecord;

/// `round(score / max * 100)`, or `0` when `max` is zero or not finite.
#[must_use]
#[expect(clippy::cast_possible_truncation, reason = "clamped to 0..=100")]
pub fn percentage(score: f64, max: f64) -> u32 {
    if !max.is_finite() || max <= 0.0 || !score.is_finite() {
        return 0;
    }
    (score / max * 100.0).round().clamp(0.0, 100.0) as u32
}

bitflags! {
    /// Social networks offered on the summary screen.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ShareTargets: u8 {
        /// Facebook.
        const FACEBOOK = 1 << 0;
        /// Twitter / X.
        const TWITTER = 1 << 1;
        /// Google.
        const GOOGLE = 1 << 2;
    }
}

impl Default for ShareTargets {
    fn default() -> Self {
        Self::empty()
    }
}

/// Flags controlling which affordances a summary shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Offer a "show solutions" action.
    pub enable_solutions_button: bool,
    /// Offer a "retry" action.
    pub enable_retry: bool,
    /// Offer a print/export action.
    pub enable_print_button: bool,
    /// Share targets; empty hides sharing.
    pub share: ShareTargets,
}

/// Which affordances the summary should display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SummaryAffordances {
    /// "Show solutions".
    pub solutions: bool,
    /// "Retry".
    pub retry: bool,
    /// Print / export.
    pub export: bool,
    /// Share targets to display.
    pub share: ShareTargets,
}

/// One row of the per-slide breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    /// Index of the slide.
    pub slide_index: usize,
    /// Slide title, if the host supplied one.
    pub title: Option<String>,
    /// Points earned.
    pub score: f64,
    /// Points available.
    pub max_score: f64,
    /// Rounded percentage.
    pub percentage: u32,
}

/// Grand totals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TotalScore {
    /// Points earned over all scored slides.
    pub score: f64,
    /// Points available over all scored slides.
    pub max_score: f64,
    /// Percentage of the totals (not an average of row percentages).
    pub percentage: u32,
}

/// A rendered summary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryReport {
    /// One row per slide with score data, in slide order.
    pub rows: Vec<SummaryRow>,
    /// Grand totals.
    pub total: TotalScore,
    /// Visible affordances.
    pub affordances: SummaryAffordances,
}

/// Builds [`SummaryReport`]s.
#[derive(Copy, Clone, Debug, Default)]
pub struct SummaryBuilder {
    options: SummaryOptions,
}

impl SummaryBuilder {
    /// Creates a builder with the given affordance options.
    #[must_use]
    pub fn new(options: SummaryOptions) -> Self {
        Self { options }
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &SummaryOptions {
        &self.options
    }

    /// Builds a report from `records`, naming rows with `title_of(slide_index)`.
    pub fn build(
        &self,
        records: &[ScoreRecord],
        title_of: impl Fn(usize) -> Option<String>,
    ) -> SummaryReport {
        let mut rows: Vec<SummaryRow> = records
            .iter()
            .map(|r| SummaryRow {
                slide_index: r.slide_index,
                title: title_of(r.slide_index),
                score: r.score,
                max_score: r.max_score,
                percentage: percentage(r.score, r.max_score),
            })
            .collect();
        rows.sort_by_key(|row| row.slide_index);

        let score: f64 = rows.iter().map(|r| r.score).sum();
        let max_score: f64 = rows.iter().map(|r| r.max_score).sum();
        let total = TotalScore {
            score,
            max_score,
            percentage: percentage(score, max_score),
        };
        debug!(rows = rows.len(), score, max_score, "built summary report");

        let affordances = SummaryAffordances {
            solutions: self.options.enable_solutions_button && !rows.is_empty(),
            retry: self.options.enable_retry,
            export: self.options.enable_print_button,
            share: self.options.share,
        };
        SummaryReport {
            rows,
            total,
            affordances,
        }
    }
}

/// Fires the "results submitted" notification once per attempt.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionLatch {
    submitted: bool,
}

impl SubmissionLatch {
    /// Creates an armed latch.
    #[must_use]
    pub const fn new() -> Self {
        Self { submitted: false }
    }

    /// Records a summary render. Returns `true` exactly once per attempt: on
    /// the first render outside solution-review mode.
    pub fn on_render(&mut self, solution_mode: bool) -> bool {
        if solution_mode || self.submitted {
            return false;
        }
        self.submitted = true;
        true
    }

    /// Returns `true` once results were submitted in this attempt.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Records a submission made earlier in this attempt, such as one that
    /// happened before a saved session was resumed.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Re-arms the latch for a new attempt.
    pub fn reset(&mut self) {
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(slide_index: usize, score: f64, max_score: f64) -> ScoreRecord {
        ScoreRecord {
            slide_index,
            element_indexes: vec![0],
            score,
            max_score,
        }
    }

    #[test]
    fn percentage_rounds_and_guards_zero() {
        assert_eq!(percentage(1.0, 3.0), 33);
        assert_eq!(percentage(2.0, 3.0), 67);
        assert_eq!(percentage(0.0, 0.0), 0);
        assert_eq!(percentage(5.0, f64::NAN), 0);
        assert_eq!(percentage(f64::NAN, 5.0), 0);
    }

    #[test]
    fn total_is_weighted_not_averaged() {
        // 1/1 and 0/9: row average would be 50%, weighted total is 10%.
        let records = [rec(0, 1.0, 1.0), rec(1, 0.0, 9.0)];
        let report = SummaryBuilder::default().build(&records, |_| None);
        assert_eq!(report.rows[0].percentage, 100);
        assert_eq!(report.rows[1].percentage, 0);
        assert_eq!(report.total.percentage, 10);
    }

    #[test]
    fn rows_follow_slide_order_and_titles() {
        let records = [rec(4, 2.0, 5.0), rec(2, 3.0, 5.0)];
        let report =
            SummaryBuilder::default().build(&records, |i| Some(format!("Slide {}", i + 1)));
        let order: Vec<usize> = report.rows.iter().map(|r| r.slide_index).collect();
        assert_eq!(order, vec![2, 4]);
        assert_eq!(report.rows[0].title.as_deref(), Some("Slide 3"));
        assert_eq!(report.total.percentage, 50);
    }

    #[test]
    fn affordances_follow_options() {
        let options = SummaryOptions {
            enable_solutions_button: true,
            enable_retry: true,
            enable_print_button: false,
            share: ShareTargets::FACEBOOK | ShareTargets::TWITTER,
        };
        let builder = SummaryBuilder::new(options);
        let report = builder.build(&[rec(0, 1.0, 2.0)], |_| None);
        assert!(report.affordances.solutions);
        assert!(report.affordances.retry);
        assert!(!report.affordances.export);
        assert!(report.affordances.share.contains(ShareTargets::TWITTER));

        // Nothing to show solutions for.
        let empty = builder.build(&[], |_| None);
        assert!(!empty.affordances.solutions);
        assert_eq!(empty.total.percentage, 0);
    }

    #[test]
    fn latch_fires_once_per_attempt() {
        let mut latch = SubmissionLatch::new();
        assert!(!latch.on_render(true));
        assert!(latch.on_render(false));
        assert!(!latch.on_render(false));
        assert!(latch.is_submitted());
        latch.reset();
        assert!(latch.on_render(false));
    }

    #[test]
    fn marked_latch_stays_quiet_until_reset() {
        let mut latch = SubmissionLatch::new();
        latch.mark_submitted();
        assert!(!latch.on_render(false));
        latch.reset();
        assert!(latch.on_render(false));
    }
}
