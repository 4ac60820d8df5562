// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard adapter: map raw keys onto [`FocusRing`] actions.
//!
//! The mapping is fixed and stateless between calls:
//!
//! | Key               | Action                         |
//! |-------------------|--------------------------------|
//! | Escape            | [`RingAction::Close`]          |
//! | End               | [`RingAction::Last`]           |
//! | Home              | [`RingAction::First`]          |
//! | Enter, Space      | [`RingAction::Select`]         |
//! | Left, Up          | [`RingAction::Previous`] (guarded) |
//! | Right, Down       | [`RingAction::Next`] (guarded) |
//!
//! Arrow keys are *guarded*: when the configured [`ModifierGuard`] matches the
//! held modifiers, the key is not intercepted at all so that screen reader
//! chords keep working.
//!
//! ```
//! use lectern_focus::{FocusRing, Key, KeyOutcome, KeyboardNav, Modifiers, RingAction};
//!
//! let mut ring = FocusRing::new();
//! ring.add(10, None);
//! ring.add(20, None);
//!
//! let nav = KeyboardNav::new();
//! let out = nav.handle_key(Key::ArrowRight, Modifiers::empty(), &mut ring, &mut ());
//! assert_eq!(out, KeyOutcome::Performed(RingAction::Next, Some(20)));
//!
//! // Shift without Ctrl is a screen reader chord: pass it through.
//! let out = nav.handle_key(Key::ArrowLeft, Modifiers::SHIFT, &mut ring, &mut ());
//! assert_eq!(out, KeyOutcome::PassThrough);
//! assert_eq!(ring.tabbable(), Some(&20));
//! ```

use bitflags::bitflags;

use crate::ring::{FocusRing, RingAction, RingListener, RingOutcome};

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CTRL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Windows.
        const META = 1 << 3;
    }
}

/// Keys the adapter understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape.
    Escape,
    /// End.
    End,
    /// Home.
    Home,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Left arrow.
    ArrowLeft,
    /// Up arrow.
    ArrowUp,
    /// Right arrow.
    ArrowRight,
    /// Down arrow.
    ArrowDown,
    /// Any other key, by legacy key code.
    Other(u32),
}

impl Key {
    /// Decodes a legacy DOM `keyCode`.
    #[must_use]
    pub fn from_key_code(code: u32) -> Self {
        match code {
            27 => Self::Escape,
            35 => Self::End,
            36 => Self::Home,
            13 => Self::Enter,
            32 => Self::Space,
            37 => Self::ArrowLeft,
            38 => Self::ArrowUp,
            39 => Self::ArrowRight,
            40 => Self::ArrowDown,
            other => Self::Other(other),
        }
    }

    /// The ring action this key maps to, ignoring modifier guards.
    #[must_use]
    pub fn action(self) -> Option<RingAction> {
        match self {
            Self::Escape => Some(RingAction::Close),
            Self::End => Some(RingAction::Last),
            Self::Home => Some(RingAction::First),
            Self::Enter | Self::Space => Some(RingAction::Select),
            Self::ArrowLeft | Self::ArrowUp => Some(RingAction::Previous),
            Self::ArrowRight | Self::ArrowDown => Some(RingAction::Next),
            Self::Other(_) => None,
        }
    }

    fn is_arrow(self) -> bool {
        matches!(
            self,
            Self::ArrowLeft | Self::ArrowUp | Self::ArrowRight | Self::ArrowDown
        )
    }
}

/// Predicate deciding whether held modifiers belong to an assistive
/// technology chord that must not be intercepted.
pub type ModifierGuard = fn(Modifiers) -> bool;

/// Default guard: Shift held without Ctrl, or Ctrl without Shift.
#[must_use]
pub fn screen_reader_chord(mods: Modifiers) -> bool {
    mods.contains(Modifiers::SHIFT) != mods.contains(Modifiers::CTRL)
}

/// What happened to a key event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome<H> {
    /// The key is not ours; let the platform handle it.
    PassThrough,
    /// The action ran and landed on the given member.
    Performed(RingAction, Option<H>),
    /// A listener vetoed the action.
    Vetoed(RingAction),
    /// The action had nothing to act on.
    Unavailable(RingAction),
}

impl<H> KeyOutcome<H> {
    /// Returns `true` if the host should suppress the platform default for
    /// this key.
    #[must_use]
    pub fn is_intercepted(&self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

/// Keyboard-to-ring adapter.
#[derive(Copy, Clone, Debug)]
pub struct KeyboardNav {
    guard: ModifierGuard,
}

impl Default for KeyboardNav {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardNav {
    /// Creates an adapter using [`screen_reader_chord`] as the arrow-key guard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            guard: screen_reader_chord,
        }
    }

    /// Creates an adapter with a custom arrow-key guard.
    #[must_use]
    pub fn with_guard(guard: ModifierGuard) -> Self {
        Self { guard }
    }

    /// Resolves `key` to an action, or `None` when it must pass through.
    #[must_use]
    pub fn action_for(&self, key: Key, mods: Modifiers) -> Option<RingAction> {
        if key.is_arrow() && (self.guard)(mods) {
            return None;
        }
        key.action()
    }

    /// Handles a key event targeted at a member of `ring`.
    pub fn handle_key<H>(
        &self,
        key: Key,
        mods: Modifiers,
        ring: &mut FocusRing<H>,
        listener: &mut impl RingListener<H>,
    ) -> KeyOutcome<H>
    where
        H: Clone + PartialEq,
    {
        let Some(action) = self.action_for(key, mods) else {
            return KeyOutcome::PassThrough;
        };
        match ring.perform(action, listener) {
            RingOutcome::Performed(to) => KeyOutcome::Performed(action, to),
            RingOutcome::Vetoed => KeyOutcome::Vetoed(action),
            RingOutcome::Unavailable => KeyOutcome::Unavailable(action),
        }
    }
}
