// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications the engine queues for the host.

use lectern_score::TotalScore;

use crate::action::{ActionEvent, ContainerId};

/// Something the host may want to react to.
///
/// Drain with [`PresentationEngine::drain_events`](crate::PresentationEngine::drain_events).
#[derive(Clone, Debug, PartialEq)]
pub enum DeckEvent {
    /// A transition began.
    TransitionStarted {
        /// Outgoing slide.
        from: usize,
        /// Incoming slide.
        to: usize,
    },
    /// A transition settled on `index`.
    TransitionSettled {
        /// The now-current slide.
        index: usize,
    },
    /// Entering the summary slide needs confirmation.
    ConfirmationRequested {
        /// The slide waiting behind the prompt.
        target: usize,
    },
    /// The prompt was dismissed; nothing changed.
    ConfirmationCancelled {
        /// The slide that was not entered.
        target: usize,
    },
    /// The summary slide was rendered.
    SummaryRendered {
        /// Totals shown.
        total: TotalScore,
    },
    /// Results were submitted for this attempt.
    ResultsSubmitted {
        /// Totals submitted.
        total: TotalScore,
    },
    /// Solution mode was entered.
    SolutionsShown,
    /// All tasks were reset for a new attempt.
    TaskReset,
    /// The keyword list opened or closed.
    KeywordsToggled {
        /// New state.
        open: bool,
    },
    /// A debounced re-layout ran.
    Relayout {
        /// Track width in pixels.
        track_width: f64,
    },
    /// A widget raised an event.
    ElementEvent {
        /// Where the widget lives.
        container: ContainerId,
        /// What it raised.
        event: ActionEvent,
    },
}
