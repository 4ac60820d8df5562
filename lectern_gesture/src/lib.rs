// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lectern Gesture: touch gesture state machines for slide decks.
//!
//! This crate turns raw touch samples into navigation intents. It does not
//! know about slides, DOM nodes or transitions; callers describe the
//! surrounding deck with a [`swipe::SwipeContext`] when a gesture starts and
//! act on the returned [`swipe::SwipeIntent`] when it ends.
//!
//! - [`swipe`]: classify a touch gesture as a horizontal swipe (with drag
//!   previews) or a vertical scroll, and decide whether it commits.
//!
//! ```rust
//! use kurbo::Point;
//! use lectern_gesture::{SwipeContext, SwipeIntent, SwipeRecognizer};
//!
//! let mut swipe = SwipeRecognizer::new();
//! let ctx = SwipeContext { has_previous: true, has_next: true, track_width: 800.0 };
//!
//! swipe.start(Point::new(400.0, 300.0), ctx);
//! swipe.update(Point::new(250.0, 305.0));
//! assert_eq!(swipe.end(), SwipeIntent::Next);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod swipe;

pub use swipe::{
    SwipeContext, SwipeDirection, SwipeIntent, SwipePreview, SwipeRecognizer, SwipeUpdate,
};
