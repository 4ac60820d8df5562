// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lectern Focus: roving-tabindex focus rings and keyboard navigation.
//!
//! ## Overview
//!
//! A *roving tabindex* group exposes exactly one of its members to the Tab key
//! at a time; arrow keys move that single tab stop around the group. This crate
//! models the bookkeeping for such a group without touching any DOM or scene
//! graph:
//!
//! - [`FocusRing`] owns an ordered list of handles, keeps exactly one of them
//!   tabbable, and performs the ring moves (`next`, `previous`, `first`,
//!   `last`) plus the `select` and `close` actions.
//! - [`KeyboardNav`] translates raw keys into those ring actions, passing
//!   assistive-technology chords through untouched.
//!
//! ## Vetoing actions
//!
//! Every ring action fires a `before` notification on a [`RingListener`]
//! before it takes effect and an `after` notification once it has. A listener
//! returning [`ControlFlow::Break`](core::ops::ControlFlow::Break) from
//! `before` suppresses the action entirely: no tab stop changes and no
//! `after` fires. Hosts use this to pin focus at the ends of a group that
//! should not wrap.
//!
//! ```rust
//! use core::ops::ControlFlow;
//! use lectern_focus::{FocusRing, RingAction, RingEvent, RingListener, RingOutcome};
//!
//! // Refuse to wrap from the last member back to the first.
//! struct NoWrap { len: usize }
//! impl RingListener<usize> for NoWrap {
//!     fn before(&mut self, ev: &RingEvent<usize>) -> ControlFlow<()> {
//!         if ev.action == RingAction::Next && ev.from == Some(self.len - 1) {
//!             return ControlFlow::Break(());
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut ring = FocusRing::new();
//! for dot in 0..3_usize {
//!     ring.add(dot, None);
//! }
//! let mut pin = NoWrap { len: 3 };
//! assert_eq!(ring.next(&mut pin), RingOutcome::Performed(Some(1)));
//! assert_eq!(ring.next(&mut pin), RingOutcome::Performed(Some(2)));
//! assert_eq!(ring.next(&mut pin), RingOutcome::Vetoed);
//! assert_eq!(ring.tabbable(), Some(&2));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod keyboard;
pub mod ring;

pub use keyboard::{Key, KeyOutcome, KeyboardNav, ModifierGuard, Modifiers, screen_reader_chord};
pub use ring::{
    FnListener, FocusRing, Member, RingAction, RingEvent, RingListener, RingOutcome, TabStop,
};
