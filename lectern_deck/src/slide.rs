// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live slides and their elements.

use core::fmt;

use kurbo::Rect;
use lectern_score::ScoredSlide;

use crate::action::{ActionFactory, ContainerId, SlideAction};
use crate::content::{ElementContent, Keyword, SlideContent};
use crate::state::PresentationState;

/// A widget placed on a slide.
pub struct SlideElement {
    /// Placement in percent of the slide size.
    pub rect: Rect,
    /// Render behind a popup button.
    pub display_as_button: bool,
    /// Keep feedback comments visible.
    pub always_display_comments: bool,
    /// Solution text shown in solution mode.
    pub solution: Option<String>,
    action: Box<dyn SlideAction>,
}

impl fmt::Debug for SlideElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideElement")
            .field("rect", &self.rect)
            .field("display_as_button", &self.display_as_button)
            .field("always_display_comments", &self.always_display_comments)
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}

impl SlideElement {
    fn new(content: &ElementContent, action: Box<dyn SlideAction>) -> Self {
        Self {
            rect: Rect::new(
                content.x,
                content.y,
                content.x + content.width,
                content.y + content.height,
            ),
            display_as_button: content.display_as_button,
            always_display_comments: content.always_display_comments,
            solution: content.solution.clone(),
            action,
        }
    }

    /// The hosted widget.
    #[must_use]
    pub fn action(&self) -> &dyn SlideAction {
        &*self.action
    }

    /// The hosted widget, mutably.
    pub fn action_mut(&mut self) -> &mut dyn SlideAction {
        &mut *self.action
    }
}

/// What kind of slide this is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlideKind {
    /// An authored slide.
    Content,
    /// The generated summary slide at the end of the deck.
    Summary,
}

/// A slide of the running deck.
#[derive(Debug)]
pub struct Slide {
    index: usize,
    kind: SlideKind,
    keywords: Vec<Keyword>,
    elements: Vec<SlideElement>,
    attached: bool,
}

impl Slide {
    pub(crate) fn from_content(
        index: usize,
        content: &SlideContent,
        restored: Option<&PresentationState>,
        factory: &mut impl ActionFactory,
    ) -> Self {
        let elements = content
            .elements
            .iter()
            .enumerate()
            .map(|(ordinal, el)| {
                let previous = restored.and_then(|s| s.element_state(index, ordinal));
                SlideElement::new(el, factory.create(&el.action, previous))
            })
            .collect();
        Self {
            index,
            kind: SlideKind::Content,
            keywords: content.keywords.clone(),
            elements,
            attached: false,
        }
    }

    pub(crate) fn summary(index: usize) -> Self {
        Self {
            index,
            kind: SlideKind::Summary,
            keywords: Vec::new(),
            elements: Vec::new(),
            attached: false,
        }
    }

    /// Position in the deck.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Content or summary.
    #[must_use]
    pub fn kind(&self) -> SlideKind {
        self.kind
    }

    /// Title keywords.
    #[must_use]
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// The slide title: its first keyword.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.keywords.first().map(|k| k.main.as_str())
    }

    /// Elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[SlideElement] {
        &self.elements
    }

    pub(crate) fn elements_mut(&mut self) -> &mut [SlideElement] {
        &mut self.elements
    }

    /// Returns `true` once the elements were mounted.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Mounts every element. Returns `false` if already attached.
    pub(crate) fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.attached = true;
        let slide = self.index;
        for (element, el) in self.elements.iter_mut().enumerate() {
            el.action.attach(ContainerId { slide, element });
        }
        true
    }
}

impl ScoredSlide for Slide {
    type Task = dyn SlideAction;

    fn tasks(&self) -> impl Iterator<Item = (usize, &Self::Task)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, el)| (i, &*el.action))
    }
}
