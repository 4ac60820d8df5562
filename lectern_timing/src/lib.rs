// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lectern Timing: a host-agnostic timer queue.
//!
//! Presentation runtimes express every wait (transition settle delays,
//! debounced re-layout) as a scheduled callback instead of a blocking call.
//! This crate provides the bookkeeping for that: a queue of payloads keyed by
//! a deadline on a host-supplied monotonic clock.
//!
//! The queue never reads a clock itself. Hosts pass the current time (any
//! monotonic unit, conventionally milliseconds) when they poll, which keeps the
//! queue deterministic under test.
//!
//! ## Minimal example
//!
//! ```rust
//! use lectern_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let settle = timers.schedule(250, "settle");
//! let _resize = timers.schedule(100, "resize");
//!
//! // Nothing is due yet.
//! assert!(timers.pop_due(50).is_none());
//!
//! // Timers fire in deadline order.
//! assert_eq!(timers.pop_due(300).map(|(_, p)| p), Some("resize"));
//! assert_eq!(timers.pop_due(300), Some((settle, "settle")));
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Identifier for a scheduled timer.
///
/// Identifiers are unique for the lifetime of a [`TimerQueue`] and are never
/// reused, so a stale id can be passed to [`TimerQueue::cancel`] safely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

/// A queue of payloads ordered by deadline.
///
/// Ties on the deadline fire in scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    // Sorted by (deadline, id).
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let at = self
            .entries
            .partition_point(|e| (e.deadline, e.id) <= (deadline, id));
        self.entries.insert(
            at,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Cancels a pending timer, returning its payload if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx).payload)
    }

    /// Returns `true` if `id` is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts typically arm a single platform timer for this instant.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    ///
    /// Call in a loop to drain everything that is due. Payloads scheduled
    /// while draining are observed by later calls if they are already due.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, T)> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let e = self.entries.remove(0);
        Some((e.id, e.payload))
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_queue_has_no_deadline() {
        let q: TimerQueue<u8> = TimerQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.next_deadline(), None);
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(30, 'c');
        q.schedule(10, 'a');
        q.schedule(20, 'b');
        assert_eq!(q.next_deadline(), Some(10));

        let mut fired = Vec::new();
        while let Some((_, p)) = q.pop_due(25) {
            fired.push(p);
        }
        assert_eq!(fired, vec!['a', 'b']);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(30));
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let mut q = TimerQueue::new();
        q.schedule(5, 1);
        q.schedule(5, 2);
        q.schedule(5, 3);
        let fired: Vec<i32> = core::iter::from_fn(|| q.pop_due(5).map(|(_, p)| p)).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn deadline_equal_to_now_is_due() {
        let mut q = TimerQueue::new();
        q.schedule(100, ());
        assert!(q.pop_due(99).is_none());
        assert!(q.pop_due(100).is_some());
    }

    #[test]
    fn cancel_removes_pending_and_ignores_stale_ids() {
        let mut q = TimerQueue::new();
        let a = q.schedule(10, "a");
        let b = q.schedule(20, "b");
        assert!(q.contains(a));
        assert_eq!(q.cancel(a), Some("a"));
        assert!(!q.contains(a));
        assert_eq!(q.cancel(a), None);

        assert_eq!(q.pop_due(50), Some((b, "b")));
        assert_eq!(q.cancel(b), None);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut q = TimerQueue::new();
        let first = q.schedule(1, ());
        q.clear();
        let second = q.schedule(1, ());
        assert_ne!(first, second);
    }
}
