// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide transition state machine.
//!
//! [`TransitionController`] owns the current slide index and the single
//! in-flight transition. It is a pure state machine: the engine schedules the
//! settle timer and reports back with [`TransitionController::settle`].
//!
//! ```text
//!   Idle --begin(target)--> Transitioning --settle(ticket)--> Idle
//!                                 |
//!                                 +--begin(..)--> Rejected(InFlight)
//! ```

use core::fmt;

/// Delay, in host clock milliseconds, after which a transition settles.
pub const SETTLE_DELAY_MS: u64 = 250;

/// Callback invoked with the settled slide index.
pub type AfterSettle = Box<dyn FnOnce(usize)>;

/// Snapshot of the controller's position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransitionState {
    /// Slide being shown (or being transitioned to).
    pub current_index: usize,
    /// Slide shown before the last transition.
    pub previous_index: Option<usize>,
    /// A transition has started and not yet settled.
    pub is_animating: bool,
}

/// Controller phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No transition in flight.
    Idle,
    /// A transition waits for its settle timer.
    Transitioning,
}

/// Where a slide sits relative to the current one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlidePlacement {
    /// Strictly before the current slide (parked off to the left).
    Previous,
    /// The current slide.
    Current,
    /// After the current slide (parked off to the right).
    Upcoming,
}

/// Why a jump did not start.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JumpRejection {
    /// The target index does not exist.
    OutOfRange,
    /// The target is already the current slide.
    AlreadyCurrent,
    /// Another transition has not settled yet.
    InFlight,
    /// A confirmation prompt is waiting for an answer.
    AwaitingConfirmation,
    /// `next`/`previous` at the end of the deck.
    AtBoundary,
}

/// Result of a jump request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JumpOutcome {
    /// The transition started (and, when animation was bypassed, settled).
    Started,
    /// The jump waits for the host to confirm or cancel.
    AwaitingConfirmation,
    /// Nothing happened.
    Rejected(JumpRejection),
}

impl JumpOutcome {
    /// Returns `true` if a transition started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started)
    }
}

/// Options for [`PresentationEngine::jump_to_slide`](crate::PresentationEngine::jump_to_slide).
#[derive(Default)]
pub struct JumpOptions {
    /// The jump came from the keyboard; input focus follows to the progress dot.
    pub from_keyboard: bool,
    /// Skip the submission confirmation prompt.
    pub bypass_confirm: bool,
    /// Settle synchronously instead of after [`SETTLE_DELAY_MS`].
    pub bypass_animation: bool,
    /// Restoring a saved position on startup. Implies `bypass_confirm` and
    /// `bypass_animation`.
    pub initial_restore: bool,
    /// Invoked once the transition settled.
    pub after: Option<AfterSettle>,
}

impl fmt::Debug for JumpOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JumpOptions")
            .field("from_keyboard", &self.from_keyboard)
            .field("bypass_confirm", &self.bypass_confirm)
            .field("bypass_animation", &self.bypass_animation)
            .field("initial_restore", &self.initial_restore)
            .field("after", &self.after.is_some())
            .finish()
    }
}

impl JumpOptions {
    /// Options for a keyboard-initiated jump.
    #[must_use]
    pub fn keyboard() -> Self {
        Self {
            from_keyboard: true,
            ..Self::default()
        }
    }

    /// Adds a settle callback.
    #[must_use]
    pub fn then(mut self, after: impl FnOnce(usize) + 'static) -> Self {
        self.after = Some(Box::new(after));
        self
    }
}

/// Identifies one transition, so stale settle timers are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionTicket(u64);

/// A transition that just began.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Pass to [`TransitionController::settle`].
    pub ticket: TransitionTicket,
    /// Outgoing slide.
    pub from: usize,
    /// Incoming slide.
    pub to: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct InFlight {
    ticket: TransitionTicket,
    outgoing: usize,
}

/// Owns the current index and gates transitions one at a time.
///
/// Invariant: `current_index < slide_count`, with `slide_count >= 1`.
#[derive(Clone, Debug)]
pub struct TransitionController {
    slide_count: usize,
    current: usize,
    previous: Option<usize>,
    in_flight: Option<InFlight>,
    next_ticket: u64,
}

impl TransitionController {
    /// Creates an idle controller on slide 0 of `slide_count` slides.
    ///
    /// A `slide_count` of zero is treated as one.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count: slide_count.max(1),
            current: 0,
            previous: None,
            in_flight: None,
            next_ticket: 0,
        }
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the current slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Snapshot of the position.
    #[must_use]
    pub fn state(&self) -> TransitionState {
        TransitionState {
            current_index: self.current,
            previous_index: self.previous,
            is_animating: self.in_flight.is_some(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The slide being transitioned away from, while in flight.
    #[must_use]
    pub fn outgoing(&self) -> Option<usize> {
        self.in_flight.map(|f| f.outgoing)
    }

    /// Placement of `slide` relative to the current slide.
    #[must_use]
    pub fn placement(&self, slide: usize) -> Option<SlidePlacement> {
        if slide >= self.slide_count {
            return None;
        }
        Some(match slide.cmp(&self.current) {
            core::cmp::Ordering::Less => SlidePlacement::Previous,
            core::cmp::Ordering::Equal => SlidePlacement::Current,
            core::cmp::Ordering::Greater => SlidePlacement::Upcoming,
        })
    }

    /// Placements of every slide, in slide order.
    pub fn placements(&self) -> impl Iterator<Item = SlidePlacement> + '_ {
        (0..self.slide_count).filter_map(|i| self.placement(i))
    }

    /// Checks whether a jump to `target` could start now.
    pub fn check(&self, target: usize) -> Result<(), JumpRejection> {
        if target >= self.slide_count {
            return Err(JumpRejection::OutOfRange);
        }
        if target == self.current {
            return Err(JumpRejection::AlreadyCurrent);
        }
        if self.in_flight.is_some() {
            return Err(JumpRejection::InFlight);
        }
        Ok(())
    }

    /// Starts a transition to `target`.
    pub fn begin(&mut self, target: usize) -> Result<Transition, JumpRejection> {
        self.check(target)?;
        let ticket = TransitionTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let from = self.current;
        self.in_flight = Some(InFlight {
            ticket,
            outgoing: from,
        });
        self.previous = Some(from);
        self.current = target;
        Ok(Transition {
            ticket,
            from,
            to: target,
        })
    }

    /// Completes the transition identified by `ticket`.
    ///
    /// Returns the settled slide index, or `None` for a stale ticket.
    pub fn settle(&mut self, ticket: TransitionTicket) -> Option<usize> {
        match self.in_flight {
            Some(f) if f.ticket == ticket => {
                self.in_flight = None;
                Some(self.current)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_transition_at_a_time() {
        let mut c = TransitionController::new(4);
        let t = c.begin(2).unwrap();
        assert_eq!((t.from, t.to), (0, 2));
        assert_eq!(c.phase(), Phase::Transitioning);
        assert_eq!(c.outgoing(), Some(0));
        assert_eq!(c.begin(3), Err(JumpRejection::InFlight));
        assert_eq!(c.current_index(), 2);

        assert_eq!(c.settle(t.ticket), Some(2));
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.settle(t.ticket), None);
        assert!(c.begin(3).is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_current() {
        let mut c = TransitionController::new(3);
        assert_eq!(c.begin(3), Err(JumpRejection::OutOfRange));
        assert_eq!(c.begin(0), Err(JumpRejection::AlreadyCurrent));
        assert_eq!(c.state().previous_index, None);
        assert!(!c.is_animating());
    }

    #[test]
    fn placements_follow_current() {
        let mut c = TransitionController::new(5);
        let t = c.begin(2).unwrap();
        c.settle(t.ticket);
        let placements: Vec<_> = c.placements().collect();
        assert_eq!(
            placements,
            vec![
                SlidePlacement::Previous,
                SlidePlacement::Previous,
                SlidePlacement::Current,
                SlidePlacement::Upcoming,
                SlidePlacement::Upcoming,
            ]
        );
        assert_eq!(c.placement(5), None);
    }

    #[test]
    fn empty_deck_has_one_slot() {
        let c = TransitionController::new(0);
        assert_eq!(c.slide_count(), 1);
        assert_eq!(c.current_index(), 0);
    }
}
