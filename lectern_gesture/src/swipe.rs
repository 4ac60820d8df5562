// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognizer: horizontal slide swipes versus vertical scrolls.
//!
//! ## Usage
//!
//! 1) On touch start call [`SwipeRecognizer::start`] with the touch point and a
//!    [`SwipeContext`] describing the deck around the current slide.
//! 2) On each touch move call [`SwipeRecognizer::update`]. The first sample
//!    decides the axis; a mostly vertical first sample turns the whole gesture
//!    into a scroll that is ignored until it ends. Horizontal gestures return a
//!    [`SwipePreview`] describing where to draw the current and adjacent slides.
//! 3) On touch end call [`SwipeRecognizer::end`] and act on the
//!    [`SwipeIntent`].
//!
//! The commit threshold is `100 * zoom_ratio` pixels, so scaled-down decks need
//! proportionally shorter swipes.

use kurbo::{Point, Vec2};

/// Unscaled horizontal distance, in pixels, a swipe must cover to commit.
pub const BASE_SWIPE_THRESHOLD: f64 = 100.0;

/// The deck surrounding the current slide at gesture start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeContext {
    /// A slide exists before the current one.
    pub has_previous: bool,
    /// A slide exists after the current one.
    pub has_next: bool,
    /// Width of the slide track in pixels.
    pub track_width: f64,
}

/// Direction of a horizontal swipe, named by the slide it reveals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Finger moves right; the previous slide slides in from the left.
    Previous,
    /// Finger moves left; the next slide slides in from the right.
    Next,
}

/// Where to draw slides while a horizontal swipe is in progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipePreview {
    /// Horizontal translation for the current slide.
    pub current_offset: f64,
    /// The adjacent slide being revealed and its translation, if one exists.
    pub adjacent: Option<(SwipeDirection, f64)>,
}

/// Result of feeding a touch move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwipeUpdate {
    /// No gesture is active.
    Inactive,
    /// The gesture was classified as a vertical scroll.
    Ignored,
    /// Horizontal drag preview.
    Preview(SwipePreview),
}

/// What the host should do when the gesture ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeIntent {
    /// Navigate to the previous slide.
    Previous,
    /// Navigate to the next slide.
    Next,
    /// Clear any preview translation; no navigation.
    SnapBack,
    /// Nothing to do (no gesture, or a scroll).
    Ignored,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum Axis {
    #[default]
    Undecided,
    Horizontal,
    Vertical,
}

/// Classifies touch gestures into swipe intents.
#[derive(Clone, Debug)]
pub struct SwipeRecognizer {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    axis: Axis,
    // Offsets at which the adjacent slides would land; 0 at a boundary.
    previous_landing: f64,
    next_landing: f64,
    zoom_ratio: f64,
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn magnitude(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

impl SwipeRecognizer {
    /// Creates an idle recognizer with a zoom ratio of `1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            axis: Axis::Undecided,
            previous_landing: 0.0,
            next_landing: 0.0,
            zoom_ratio: 1.0,
        }
    }

    /// Sets the deck's zoom ratio (rendered size over authored size).
    ///
    /// Non-finite or non-positive ratios are ignored.
    pub fn set_zoom_ratio(&mut self, ratio: f64) {
        if ratio.is_finite() && ratio > 0.0 {
            self.zoom_ratio = ratio;
        }
    }

    /// Returns the current zoom ratio.
    #[must_use]
    pub fn zoom_ratio(&self) -> f64 {
        self.zoom_ratio
    }

    /// Horizontal distance a swipe must exceed to commit.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        BASE_SWIPE_THRESHOLD * self.zoom_ratio
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` if the active gesture was classified as a scroll.
    #[must_use]
    pub fn is_scroll(&self) -> bool {
        self.axis == Axis::Vertical
    }

    /// Begins a gesture at `pos`.
    pub fn start(&mut self, pos: Point, ctx: SwipeContext) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.axis = Axis::Undecided;
        self.previous_landing = if ctx.has_previous {
            -ctx.track_width
        } else {
            0.0
        };
        self.next_landing = if ctx.has_next { ctx.track_width } else { 0.0 };
    }

    /// Total movement since the gesture started.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.last_pos? - self.start_pos?)
    }

    /// Feeds a touch move sample.
    pub fn update(&mut self, pos: Point) -> SwipeUpdate {
        let Some(start) = self.start_pos else {
            return SwipeUpdate::Inactive;
        };
        self.last_pos = Some(pos);
        let delta = pos - start;

        if self.axis == Axis::Undecided {
            self.axis = if magnitude(delta.y) > magnitude(delta.x) {
                Axis::Vertical
            } else {
                Axis::Horizontal
            };
        }
        if self.axis == Axis::Vertical {
            return SwipeUpdate::Ignored;
        }

        let adjacent = if delta.x < 0.0 && self.next_landing != 0.0 {
            Some((SwipeDirection::Next, self.next_landing + delta.x))
        } else if delta.x > 0.0 && self.previous_landing != 0.0 {
            Some((SwipeDirection::Previous, self.previous_landing + delta.x))
        } else {
            None
        };
        SwipeUpdate::Preview(SwipePreview {
            current_offset: delta.x,
            adjacent,
        })
    }

    /// Ends the gesture and returns the intent. The recognizer becomes idle.
    pub fn end(&mut self) -> SwipeIntent {
        let intent = match (self.axis, self.total_offset()) {
            (Axis::Horizontal, Some(delta)) => {
                let threshold = self.threshold();
                if delta.x < -threshold && self.next_landing != 0.0 {
                    SwipeIntent::Next
                } else if delta.x > threshold && self.previous_landing != 0.0 {
                    SwipeIntent::Previous
                } else {
                    SwipeIntent::SnapBack
                }
            }
            _ => SwipeIntent::Ignored,
        };
        self.cancel();
        intent
    }

    /// Abandons the active gesture without producing an intent.
    pub fn cancel(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.axis = Axis::Undecided;
    }
}
