// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving-tabindex ring: one tabbable member, ring arithmetic, vetoable actions.
//!
//! ## Usage
//!
//! 1) Register focusable handles with [`FocusRing::add`]. The first handle
//!    added becomes the tabbable one.
//! 2) Drive navigation with [`FocusRing::next`], [`FocusRing::previous`],
//!    [`FocusRing::first`] and [`FocusRing::last`] (usually via
//!    [`KeyboardNav`](crate::KeyboardNav)).
//! 3) Mirror [`Member::tab_stop`] onto your widgets and move platform focus to
//!    [`FocusRing::focused`] after each performed move.
//!
//! ## Minimal example
//!
//! ```
//! use lectern_focus::{FocusRing, RingOutcome, TabStop};
//!
//! let mut ring = FocusRing::new();
//! ring.add("a", None);
//! ring.add("b", None);
//! ring.add("c", None);
//!
//! // `previous` wraps from the first member to the last.
//! assert_eq!(ring.previous(&mut ()), RingOutcome::Performed(Some("c")));
//! assert_eq!(ring.focused(), Some(&"c"));
//! assert_eq!(ring.member(&"a").unwrap().tab_stop, TabStop::Removed);
//! assert_eq!(ring.member(&"c").unwrap().tab_stop, TabStop::Tabbable);
//! ```

use alloc::vec::Vec;
use core::ops::ControlFlow;

/// Tab stop state of a ring member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabStop {
    /// Reachable with the Tab key (`tabindex="0"`).
    Tabbable,
    /// Focusable programmatically only (`tabindex="-1"`).
    Negative,
    /// Not part of the tab order at all (tabindex removed).
    Removed,
}

impl TabStop {
    /// The equivalent HTML `tabindex` value, or `None` when the attribute is
    /// absent.
    #[must_use]
    pub fn tab_index(self) -> Option<i32> {
        match self {
            Self::Tabbable => Some(0),
            Self::Negative => Some(-1),
            Self::Removed => None,
        }
    }
}

/// A handle registered with a [`FocusRing`] plus its ring position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member<H> {
    /// The host's handle for the focusable element.
    pub handle: H,
    /// Ordinal position within the ring.
    pub position: usize,
    /// Current tab stop state.
    pub tab_stop: TabStop,
}

/// Actions a ring performs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RingAction {
    /// Move to the following member, wrapping from last to first.
    Next,
    /// Move to the preceding member, wrapping from first to last.
    Previous,
    /// Move to the first member.
    First,
    /// Move to the last member.
    Last,
    /// Activate the tabbable member.
    Select,
    /// Dismiss whatever the ring belongs to.
    Close,
}

/// Notification payload for [`RingListener`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingEvent<H> {
    /// The action being performed.
    pub action: RingAction,
    /// The tabbable member when the action started.
    pub from: Option<H>,
    /// The member the action lands on. For `Select` and `Close` this equals `from`.
    pub to: Option<H>,
}

/// Observer for ring actions.
///
/// Both methods default to no-ops that let every action through, so
/// implementors only override what they need.
pub trait RingListener<H> {
    /// Called before `event` takes effect. Return `Break` to suppress it.
    fn before(&mut self, event: &RingEvent<H>) -> ControlFlow<()> {
        let _ = event;
        ControlFlow::Continue(())
    }

    /// Called after `event` took effect.
    fn after(&mut self, event: &RingEvent<H>) {
        let _ = event;
    }
}

impl<H> RingListener<H> for () {}

/// Adapts a closure into a [`RingListener`] that only implements `before`.
#[derive(Debug)]
pub struct FnListener<F>(pub F);

impl<H, F> RingListener<H> for FnListener<F>
where
    F: FnMut(&RingEvent<H>) -> ControlFlow<()>,
{
    fn before(&mut self, event: &RingEvent<H>) -> ControlFlow<()> {
        (self.0)(event)
    }
}

/// Result of a ring action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RingOutcome<H> {
    /// The action took effect; carries the member it landed on.
    Performed(Option<H>),
    /// A listener vetoed the action; nothing changed.
    Vetoed,
    /// The action had nothing to act on (empty ring, or selection disabled).
    Unavailable,
}

/// An ordered roving-tabindex group.
///
/// Invariant: exactly one member has [`TabStop::Tabbable`], or none when the
/// ring is empty.
#[derive(Clone, Debug)]
pub struct FocusRing<H> {
    members: Vec<Member<H>>,
    focused: Option<H>,
    negative_tabindex: bool,
    selectable: bool,
    revision: u64,
}

impl<H> Default for FocusRing<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FocusRing<H> {
    /// Creates an empty ring. Demoted members get [`TabStop::Removed`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
            focused: None,
            negative_tabindex: false,
            selectable: true,
            revision: 0,
        }
    }

    /// Creates an empty ring whose demoted members get [`TabStop::Negative`].
    #[must_use]
    pub const fn with_negative_tabindex() -> Self {
        Self {
            members: Vec::new(),
            focused: None,
            negative_tabindex: true,
            selectable: true,
            revision: 0,
        }
    }

    /// Returns `true` if the ring has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns the members in ring order.
    #[must_use]
    pub fn members(&self) -> &[Member<H>] {
        &self.members
    }

    /// Returns the handle holding the tab stop, if any.
    #[must_use]
    pub fn tabbable(&self) -> Option<&H> {
        self.tabbable_index().map(|i| &self.members[i].handle)
    }

    /// Returns the handle input focus was last moved to, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&H> {
        self.focused.as_ref()
    }

    /// Returns `true` if `select` is currently honored.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Enables or disables the `select` action without affecting navigation.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    /// Returns a counter that bumps whenever a tab stop changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn tabbable_index(&self) -> Option<usize> {
        self.members
            .iter()
            .position(|m| m.tab_stop == TabStop::Tabbable)
    }

    fn demoted(&self) -> TabStop {
        if self.negative_tabindex {
            TabStop::Negative
        } else {
            TabStop::Removed
        }
    }

    fn reindex_from(&mut self, start: usize) {
        for (pos, m) in self.members.iter_mut().enumerate().skip(start) {
            m.position = pos;
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<H> FocusRing<H>
where
    H: Clone + PartialEq,
{
    /// Returns the position of `handle`, if it is a member.
    #[must_use]
    pub fn position_of(&self, handle: &H) -> Option<usize> {
        self.members.iter().position(|m| &m.handle == handle)
    }

    /// Returns the member record for `handle`.
    #[must_use]
    pub fn member(&self, handle: &H) -> Option<&Member<H>> {
        self.members.iter().find(|m| &m.handle == handle)
    }

    /// Inserts `handle` at `at` (clamped to the ring length), or appends it.
    ///
    /// The first handle added becomes tabbable. Adding a handle that is
    /// already a member is a no-op.
    pub fn add(&mut self, handle: H, at: Option<usize>) {
        if self.position_of(&handle).is_some() {
            return;
        }
        let at = at.map_or(self.members.len(), |i| i.min(self.members.len()));
        let tab_stop = if self.members.is_empty() {
            TabStop::Tabbable
        } else {
            self.demoted()
        };
        self.members.insert(
            at,
            Member {
                handle,
                position: at,
                tab_stop,
            },
        );
        self.reindex_from(at);
        if tab_stop == TabStop::Tabbable {
            self.bump_revision();
        }
    }

    /// Removes `handle`, returning `true` if it was a member.
    ///
    /// When the removed member was tabbable, the new first member (if any)
    /// inherits the tab stop.
    pub fn remove(&mut self, handle: &H) -> bool {
        let Some(idx) = self.position_of(handle) else {
            return false;
        };
        let removed = self.members.remove(idx);
        self.reindex_from(idx);
        if self.focused.as_ref() == Some(handle) {
            self.focused = None;
        }
        if removed.tab_stop == TabStop::Tabbable {
            if let Some(first) = self.members.first_mut() {
                first.tab_stop = TabStop::Tabbable;
            }
            self.bump_revision();
        }
        true
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        if self.members.is_empty() {
            return;
        }
        self.members.clear();
        self.focused = None;
        self.bump_revision();
    }

    /// Moves the tab stop to `handle`. Returns `false` if it is not a member.
    pub fn set_tabbable(&mut self, handle: &H) -> bool {
        let Some(target) = self.position_of(handle) else {
            return false;
        };
        self.promote(target);
        true
    }

    /// Records that input focus arrived at `handle` from outside the ring
    /// (for example a pointer click), making it the tabbable member.
    pub fn focus(&mut self, handle: &H) -> bool {
        if !self.set_tabbable(handle) {
            return false;
        }
        self.focused = Some(handle.clone());
        true
    }

    /// Clears the recorded input focus, keeping the tab stop where it is.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    fn promote(&mut self, target: usize) {
        if self.tabbable_index() == Some(target) {
            return;
        }
        let demoted = self.demoted();
        for (i, m) in self.members.iter_mut().enumerate() {
            m.tab_stop = if i == target {
                TabStop::Tabbable
            } else {
                demoted
            };
        }
        self.bump_revision();
    }

    /// Moves to the following member, wrapping from last to first.
    pub fn next(&mut self, listener: &mut impl RingListener<H>) -> RingOutcome<H> {
        self.navigate(RingAction::Next, listener)
    }

    /// Moves to the preceding member, wrapping from first to last.
    pub fn previous(&mut self, listener: &mut impl RingListener<H>) -> RingOutcome<H> {
        self.navigate(RingAction::Previous, listener)
    }

    /// Moves to the first member.
    pub fn first(&mut self, listener: &mut impl RingListener<H>) -> RingOutcome<H> {
        self.navigate(RingAction::First, listener)
    }

    /// Moves to the last member.
    pub fn last(&mut self, listener: &mut impl RingListener<H>) -> RingOutcome<H> {
        self.navigate(RingAction::Last, listener)
    }

    /// Activates the tabbable member.
    ///
    /// Returns [`RingOutcome::Unavailable`] when selection is disabled or the
    /// ring is empty.
    pub fn select(&mut self, listener: &mut impl RingListener<H>) -> RingOutcome<H> {
        if !self.selectable {
            return RingOutcome::Unavailable;
        }
        let Some(current) = self.tabbable().cloned() else {
            return RingOutcome::Unavailable;
        };
        let event = RingEvent {
            action: RingAction::Select,
            from: Some(current.clone()),
            to: Some(current.clone()),
        };
        if listener.before(&event).is_break() {
            return RingOutcome::Vetoed;
        }
        listener.after(&event);
        RingOutcome::Performed(Some(current))
    }

    /// Dismisses the owner of the ring. Works on an empty ring too.
    pub fn close(&mut self, listener: &mut impl RingListener<H>) -> RingOutcome<H> {
        let current = self.tabbable().cloned();
        let event = RingEvent {
            action: RingAction::Close,
            from: current.clone(),
            to: current.clone(),
        };
        if listener.before(&event).is_break() {
            return RingOutcome::Vetoed;
        }
        listener.after(&event);
        RingOutcome::Performed(current)
    }

    /// Performs any [`RingAction`].
    pub fn perform(
        &mut self,
        action: RingAction,
        listener: &mut impl RingListener<H>,
    ) -> RingOutcome<H> {
        match action {
            RingAction::Select => self.select(listener),
            RingAction::Close => self.close(listener),
            RingAction::Next | RingAction::Previous | RingAction::First | RingAction::Last => {
                self.navigate(action, listener)
            }
        }
    }

    fn target_index(&self, action: RingAction) -> Option<usize> {
        let len = self.members.len();
        if len == 0 {
            return None;
        }
        let current = self.tabbable_index().unwrap_or(0);
        Some(match action {
            RingAction::Next => (current + 1) % len,
            RingAction::Previous => (current + len - 1) % len,
            RingAction::First => 0,
            RingAction::Last => len - 1,
            RingAction::Select | RingAction::Close => current,
        })
    }

    fn navigate(
        &mut self,
        action: RingAction,
        listener: &mut impl RingListener<H>,
    ) -> RingOutcome<H> {
        let Some(target) = self.target_index(action) else {
            return RingOutcome::Unavailable;
        };
        let to = self.members[target].handle.clone();
        let event = RingEvent {
            action,
            from: self.tabbable().cloned(),
            to: Some(to.clone()),
        };
        if listener.before(&event).is_break() {
            return RingOutcome::Vetoed;
        }
        self.promote(target);
        self.focused = Some(to.clone());
        listener.after(&event);
        RingOutcome::Performed(Some(to))
    }
}
