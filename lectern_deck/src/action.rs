// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget seam: the capabilities the engine expects from slide elements.

use lectern_score::TaskElement;
use serde_json::Value;

use crate::content::ActionContent;

/// Where an element is mounted: slide index plus element ordinal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId {
    /// Slide index.
    pub slide: usize,
    /// Element ordinal on the slide.
    pub element: usize,
}

/// Notifications a widget raises for the host.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionEvent {
    /// The learner interacted with the widget.
    Interacted,
    /// The learner answered; carries the widget's score if it has one.
    Answered {
        /// Score after answering.
        score: Option<f64>,
    },
    /// Widget-specific event.
    Custom {
        /// Event name.
        name: String,
        /// Event payload.
        data: Value,
    },
}

/// A live widget hosted by a slide element.
///
/// Scoring capabilities come from [`TaskElement`]; the remaining hooks all
/// default to no-ops so plain content widgets implement only
/// [`attach`](Self::attach).
pub trait SlideAction: TaskElement {
    /// Mounts the widget into its container. Called at most once, the first
    /// time the slide is shown or pre-loaded.
    fn attach(&mut self, container: ContainerId);

    /// Clears the learner's answer.
    fn reset_task(&mut self) {}

    /// Reveals the correct answer.
    fn show_solutions(&mut self) {}

    /// Drains events raised since the last call.
    fn take_events(&mut self) -> Vec<ActionEvent> {
        Vec::new()
    }
}

/// Creates widgets for element content.
///
/// `previous_state` is the element's state from a restored snapshot.
pub trait ActionFactory {
    /// Instantiates the widget for `content`.
    fn create(
        &mut self,
        content: &ActionContent,
        previous_state: Option<&Value>,
    ) -> Box<dyn SlideAction>;
}

impl<F> ActionFactory for F
where
    F: FnMut(&ActionContent, Option<&Value>) -> Box<dyn SlideAction>,
{
    fn create(
        &mut self,
        content: &ActionContent,
        previous_state: Option<&Value>,
    ) -> Box<dyn SlideAction> {
        self(content, previous_state)
    }
}
