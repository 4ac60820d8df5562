// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Score aggregation over slides of optional task capabilities.

use serde_json::Value;
use tracing::warn;

use crate::state::is_empty_state;

/// Optional task capabilities of a slide element.
///
/// Every method defaults to `None`, meaning "not participating". An element
/// takes part in scoring only when it reports both [`score`](Self::score) and
/// [`max_score`](Self::max_score).
pub trait TaskElement {
    /// Points earned so far.
    fn score(&self) -> Option<f64> {
        None
    }

    /// Points available.
    fn max_score(&self) -> Option<f64> {
        None
    }

    /// Whether the learner interacted with the task.
    fn answer_given(&self) -> Option<bool> {
        None
    }

    /// Serialized answer state, as used for resuming.
    fn current_state(&self) -> Option<Value> {
        None
    }
}

/// A slide as seen by the aggregator.
pub trait ScoredSlide {
    /// Element type yielded by [`tasks`](Self::tasks).
    type Task: TaskElement + ?Sized;

    /// Iterates `(element ordinal, element)` pairs in slide order.
    fn tasks(&self) -> impl Iterator<Item = (usize, &Self::Task)> + '_;
}

/// Aggregated score of one slide.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRecord {
    /// Index of the slide.
    pub slide_index: usize,
    /// Ordinals of the scorable elements that contributed.
    pub element_indexes: Vec<usize>,
    /// Sum of element scores, within `0..=max_score`.
    pub score: f64,
    /// Sum of element maximum scores.
    pub max_score: f64,
}

/// A sanitized `(score, max)` contribution of a single element.
fn contribution(slide: usize, element: usize, score: f64, max: f64) -> (f64, f64) {
    if !max.is_finite() || max <= 0.0 {
        if max != 0.0 {
            warn!(slide, element, max, "ignoring malformed max score");
        }
        return (0.0, 0.0);
    }
    if !score.is_finite() {
        warn!(slide, element, score, "ignoring malformed score");
        return (0.0, max);
    }
    (score.clamp(0.0, max), max)
}

/// Reduces task scores across a deck of slides.
///
/// The aggregator borrows the slides and recomputes on every call.
#[derive(Debug)]
pub struct ScoreAggregator<'a, S> {
    slides: &'a [S],
}

impl<S> Clone for ScoreAggregator<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ScoreAggregator<'_, S> {}

impl<'a, S: ScoredSlide> ScoreAggregator<'a, S> {
    /// Creates an aggregator over `slides`.
    #[must_use]
    pub fn new(slides: &'a [S]) -> Self {
        Self { slides }
    }

    /// Score of one slide, or `None` if it has no scorable element (or the
    /// index is out of range).
    #[must_use]
    pub fn slide_score(&self, slide_index: usize) -> Option<ScoreRecord> {
        let slide = self.slides.get(slide_index)?;
        let mut record = ScoreRecord {
            slide_index,
            element_indexes: Vec::new(),
            score: 0.0,
            max_score: 0.0,
        };
        for (ordinal, task) in slide.tasks() {
            let (Some(score), Some(max)) = (task.score(), task.max_score()) else {
                continue;
            };
            let (score, max) = contribution(slide_index, ordinal, score, max);
            record.element_indexes.push(ordinal);
            record.score += score;
            record.max_score += max;
        }
        (!record.element_indexes.is_empty()).then_some(record)
    }

    /// Records for every slide with score data, in slide order.
    #[must_use]
    pub fn records(&self) -> Vec<ScoreRecord> {
        (0..self.slides.len())
            .filter_map(|i| self.slide_score(i))
            .collect()
    }

    /// Returns `true` if any slide has a scorable element.
    #[must_use]
    pub fn has_tasks(&self) -> bool {
        (0..self.slides.len()).any(|i| self.slide_score(i).is_some())
    }

    /// Sum of scores across all slides.
    #[must_use]
    pub fn total_score(&self) -> f64 {
        self.records().iter().map(|r| r.score).sum()
    }

    /// Sum of maximum scores across all slides.
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.records().iter().map(|r| r.max_score).sum()
    }

    /// Returns `true` if a scorable element on the slide holds an answer.
    ///
    /// An element counts only when it reports that an answer was given *and*
    /// its serialized state is non-empty. An element that says it was
    /// answered but whose state is empty does not count.
    #[must_use]
    pub fn has_answered_task(&self, slide_index: usize) -> bool {
        let Some(slide) = self.slides.get(slide_index) else {
            return false;
        };
        slide.tasks().any(|(_, task)| {
            task.score().is_some()
                && task.max_score().is_some()
                && task.answer_given() == Some(true)
                && task
                    .current_state()
                    .is_some_and(|state| !is_empty_state(&state))
        })
    }

    /// [`has_answered_task`](Self::has_answered_task) for every slide.
    #[must_use]
    pub fn answered(&self) -> Vec<bool> {
        (0..self.slides.len())
            .map(|i| self.has_answered_task(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct El {
        score: Option<f64>,
        max: Option<f64>,
        given: Option<bool>,
        state: Option<Value>,
    }

    impl El {
        fn task(score: f64, max: f64) -> Self {
            Self {
                score: Some(score),
                max: Some(max),
                ..Self::default()
            }
        }
    }

    impl TaskElement for El {
        fn score(&self) -> Option<f64> {
            self.score
        }
        fn max_score(&self) -> Option<f64> {
            self.max
        }
        fn answer_given(&self) -> Option<bool> {
            self.given
        }
        fn current_state(&self) -> Option<Value> {
            self.state.clone()
        }
    }

    struct Page(Vec<El>);

    impl ScoredSlide for Page {
        type Task = El;
        fn tasks(&self) -> impl Iterator<Item = (usize, &El)> + '_ {
            self.0.iter().enumerate()
        }
    }

    #[test]
    fn non_scorable_elements_do_not_participate() {
        let deck = [Page(vec![El::default(), El::task(1.0, 2.0), El::default()])];
        let agg = ScoreAggregator::new(&deck);
        let rec = agg.slide_score(0).unwrap();
        assert_eq!(rec.element_indexes, vec![1]);
        assert_eq!(rec.score, 1.0);
        assert_eq!(rec.max_score, 2.0);
    }

    #[test]
    fn slide_without_tasks_is_omitted() {
        let deck = [Page(vec![El::default()]), Page(vec![El::task(1.0, 1.0)])];
        let agg = ScoreAggregator::new(&deck);
        assert_eq!(agg.slide_score(0), None);
        assert_eq!(agg.slide_score(7), None);
        let recs = agg.records();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].slide_index, 1);
        assert!(agg.has_tasks());
    }

    #[test]
    fn score_only_capability_is_not_scorable() {
        let half = El {
            score: Some(3.0),
            ..El::default()
        };
        let deck = [Page(vec![half])];
        assert!(!ScoreAggregator::new(&deck).has_tasks());
    }

    #[test]
    fn malformed_scores_degrade_to_zero() {
        let deck = [Page(vec![
            El::task(2.0, f64::NAN),
            El::task(f64::NAN, 4.0),
            El::task(9.0, 3.0),
            El::task(-1.0, 1.0),
            El::task(0.0, 0.0),
        ])];
        let agg = ScoreAggregator::new(&deck);
        let rec = agg.slide_score(0).unwrap();
        assert_eq!(rec.element_indexes, vec![0, 1, 2, 3, 4]);
        assert_eq!(rec.score, 3.0);
        assert_eq!(rec.max_score, 8.0);
        assert!(agg.total_score().is_finite());
    }

    #[test]
    fn totals_sum_across_slides() {
        let deck = [
            Page(vec![]),
            Page(vec![]),
            Page(vec![El::task(3.0, 5.0)]),
            Page(vec![]),
            Page(vec![El::task(2.0, 5.0)]),
        ];
        let agg = ScoreAggregator::new(&deck);
        assert_eq!(agg.total_score(), 5.0);
        assert_eq!(agg.max_score(), 10.0);
    }

    #[test]
    fn answered_requires_given_and_non_empty_state() {
        let answered = El {
            given: Some(true),
            state: Some(json!({"answers": [1]})),
            ..El::task(1.0, 1.0)
        };
        let withdrawn = El {
            given: Some(true),
            state: Some(json!({"answers": []})),
            ..El::task(0.0, 1.0)
        };
        let untouched = El {
            given: Some(false),
            state: Some(json!({"answers": [1]})),
            ..El::task(0.0, 1.0)
        };
        let deck = [
            Page(vec![answered]),
            Page(vec![withdrawn]),
            Page(vec![untouched]),
            Page(vec![]),
        ];
        let agg = ScoreAggregator::new(&deck);
        assert_eq!(agg.answered(), vec![true, false, false, false]);
        assert!(!agg.has_answered_task(99));
    }
}
