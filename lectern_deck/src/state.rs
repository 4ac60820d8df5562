// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restorable learner state.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot of a learner's progress, as stored by the host between sessions.
///
/// `answers[slide][element]` holds each element's opaque serialized state
/// (`null` when the element has none).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentationState {
    /// Index of the slide the learner was on.
    pub progress: usize,
    /// Per slide: whether a task on it holds an answer.
    pub answered: Vec<bool>,
    /// Per slide, per element: serialized element state.
    pub answers: Vec<Vec<Value>>,
}

impl PresentationState {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        serde_json::from_str(json).map_err(StateError::Json)
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, StateError> {
        serde_json::to_string(self).map_err(StateError::Json)
    }

    /// The stored state of one element, if any.
    ///
    /// A stored `null` counts as absent.
    #[must_use]
    pub fn element_state(&self, slide: usize, element: usize) -> Option<&Value> {
        self.answers
            .get(slide)?
            .get(element)
            .filter(|v| !v.is_null())
    }

    /// Checks that the snapshot fits a deck of `slide_count` slides.
    pub fn check_shape(&self, slide_count: usize) -> Result<(), StateError> {
        if self.answers.len() > slide_count {
            return Err(StateError::SlideCountMismatch {
                expected: slide_count,
                found: self.answers.len(),
            });
        }
        Ok(())
    }
}

/// Error returned when a stored snapshot cannot be used.
#[derive(Debug)]
pub enum StateError {
    /// The snapshot is not valid JSON for this schema.
    Json(serde_json::Error),
    /// The snapshot describes more slides than the deck has.
    SlideCountMismatch {
        /// Slides in the deck.
        expected: usize,
        /// Slides in the snapshot.
        found: usize,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed presentation state: {err}"),
            Self::SlideCountMismatch { expected, found } => write!(
                f,
                "presentation state has {found} slides but the deck has {expected}"
            ),
        }
    }
}

impl core::error::Error for StateError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::SlideCountMismatch { .. } => None,
        }
    }
}
