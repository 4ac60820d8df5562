// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lectern Deck: a headless slide deck engine.
//!
//! ## Overview
//!
//! A deck is a fixed sequence of slides holding positioned interactive
//! widgets. [`PresentationEngine`] owns the deck and everything needed to move
//! through it without a UI toolkit:
//!
//! - one transition at a time, settled by a host-driven clock
//!   ([`transition`], [`lectern_timing`]),
//! - a roving-tabindex progress indicator driven by the keyboard
//!   ([`lectern_focus`]),
//! - horizontal swipes that commit past a zoom-scaled threshold
//!   ([`lectern_gesture`]),
//! - scoring, a generated summary slide and a one-shot results submission,
//!   optionally gated behind a confirmation prompt ([`lectern_score`]),
//! - restorable learner state ([`PresentationState`]).
//!
//! Widgets plug in through [`SlideAction`] and are created by an
//! [`ActionFactory`]. The engine never renders; hosts read its state
//! ([`PresentationEngine::placement`], [`PresentationEngine::progress`],
//! [`PresentationEngine::summary`], ...) and drain [`DeckEvent`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use lectern_deck::{
//!     ActionContent, Config, ContainerId, DeckEvent, PresentationEngine, Presentation,
//!     SETTLE_DELAY_MS, SlideAction, TaskElement,
//! };
//! use serde_json::Value;
//!
//! struct Text;
//! impl TaskElement for Text {}
//! impl SlideAction for Text {
//!     fn attach(&mut self, _container: ContainerId) {}
//! }
//!
//! let content = Presentation::from_json(r#"{ "slides": [
//!     { "elements": [{ "action": { "library": "Text 1.1" } }] },
//!     { "elements": [{ "action": { "library": "Text 1.1" } }] }
//! ] }"#)
//! .unwrap();
//!
//! let mut factory =
//!     |_: &ActionContent, _: Option<&Value>| -> Box<dyn SlideAction> { Box::new(Text) };
//! let mut deck = PresentationEngine::new(&content, Config::default(), None, &mut factory).unwrap();
//!
//! assert!(deck.next().is_started());
//! deck.advance_by(SETTLE_DELAY_MS);
//! assert_eq!(deck.current_index(), 1);
//! assert_eq!(
//!     deck.drain_events(),
//!     vec![
//!         DeckEvent::TransitionStarted { from: 0, to: 1 },
//!         DeckEvent::TransitionSettled { index: 1 },
//!     ]
//! );
//! ```

pub mod action;
pub mod config;
pub mod content;
pub mod engine;
pub mod event;
pub mod slide;
pub mod state;
pub mod transition;

pub use action::{ActionEvent, ActionFactory, ContainerId, SlideAction};
pub use config::{Config, ShareConfig};
pub use content::{ActionContent, ContentError, ElementContent, Keyword, Presentation, SlideContent};
pub use engine::{
    DEFAULT_TRACK_WIDTH, NavAffordances, PresentationEngine, ProgressDot, RELAYOUT_DEBOUNCE_MS,
    SwipeResult,
};
pub use event::DeckEvent;
pub use lectern_score::TaskElement;
pub use slide::{Slide, SlideElement, SlideKind};
pub use state::{PresentationState, StateError};
pub use transition::{
    AfterSettle, JumpOptions, JumpOutcome, JumpRejection, SETTLE_DELAY_MS, SlidePlacement,
    TransitionState,
};
