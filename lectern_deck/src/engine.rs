// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation engine: composes transitions, progress navigation,
//! swipes, scoring and the summary slide.

use core::fmt;
use core::ops::ControlFlow;

use kurbo::Point;
use lectern_focus::{
    FocusRing, Key, KeyOutcome, KeyboardNav, Modifiers, RingAction, RingEvent, RingListener,
};
use lectern_gesture::{SwipeContext, SwipeIntent, SwipeRecognizer, SwipeUpdate};
use lectern_score::{
    ScoreAggregator, ScoreRecord, SubmissionLatch, SummaryBuilder, SummaryReport,
};
use lectern_timing::{TimerId, TimerQueue};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::action::{ActionFactory, ContainerId};
use crate::config::Config;
use crate::content::{ContentError, Presentation};
use crate::event::DeckEvent;
use crate::slide::{Slide, SlideKind};
use crate::state::PresentationState;
use crate::transition::{
    AfterSettle, JumpOptions, JumpOutcome, JumpRejection, SETTLE_DELAY_MS, SlidePlacement,
    TransitionController, TransitionState, TransitionTicket,
};

/// Quiet period, in host clock milliseconds, before a viewport change is
/// applied.
pub const RELAYOUT_DEBOUNCE_MS: u64 = 100;

/// Track width assumed until the host reports one.
pub const DEFAULT_TRACK_WIDTH: f64 = 640.0;

/// A dot of the progress indicator; wraps the slide index it stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgressDot(pub usize);

/// Whether the previous/next buttons should be disabled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavAffordances {
    /// On the first slide.
    pub previous_disabled: bool,
    /// On the last slide.
    pub next_disabled: bool,
}

/// Outcome of a finished touch gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwipeResult {
    /// What the recognizer decided.
    pub intent: SwipeIntent,
    /// The navigation it triggered, if any.
    pub jump: Option<JumpOutcome>,
}

enum DeckTimer {
    Settle {
        ticket: TransitionTicket,
        after: Option<AfterSettle>,
    },
    Relayout,
}

impl fmt::Debug for DeckTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settle { ticket, after } => f
                .debug_struct("Settle")
                .field("ticket", ticket)
                .field("after", &after.is_some())
                .finish(),
            Self::Relayout => f.write_str("Relayout"),
        }
    }
}

struct PendingJump {
    target: usize,
    from_keyboard: bool,
    bypass_animation: bool,
    after: Option<AfterSettle>,
}

impl fmt::Debug for PendingJump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingJump")
            .field("target", &self.target)
            .field("from_keyboard", &self.from_keyboard)
            .field("bypass_animation", &self.bypass_animation)
            .field("after", &self.after.is_some())
            .finish()
    }
}

/// Pins progress navigation at the ends of the deck and records what the
/// engine must do once the ring action completed.
struct ProgressListener {
    last: usize,
    selected: Option<usize>,
    closed: bool,
}

impl RingListener<ProgressDot> for ProgressListener {
    fn before(&mut self, event: &RingEvent<ProgressDot>) -> ControlFlow<()> {
        match (event.action, event.from) {
            (RingAction::Next, Some(ProgressDot(i))) if i >= self.last => ControlFlow::Break(()),
            (RingAction::Previous, Some(ProgressDot(0))) => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }

    fn after(&mut self, event: &RingEvent<ProgressDot>) {
        match event.action {
            RingAction::Select => self.selected = event.to.map(|dot| dot.0),
            RingAction::Close => self.closed = true,
            RingAction::Next | RingAction::Previous | RingAction::First | RingAction::Last => {}
        }
    }
}

/// A running slide deck.
///
/// All navigation goes through [`jump_to_slide`](Self::jump_to_slide); the
/// convenience entry points (buttons, keyboard, swipes, keywords) are thin
/// wrappers around it. Time only passes when the host calls
/// [`advance_to`](Self::advance_to) or [`advance_by`](Self::advance_by).
#[derive(Debug)]
pub struct PresentationEngine {
    config: Config,
    slides: Vec<Slide>,
    content_len: usize,
    summary_slide: Option<usize>,
    has_tasks: bool,
    controller: TransitionController,
    timers: TimerQueue<DeckTimer>,
    now: u64,
    relayout_timer: Option<TimerId>,
    settle_timer: Option<TimerId>,
    pending: Option<PendingJump>,
    progress: FocusRing<ProgressDot>,
    keyboard: KeyboardNav,
    swipe: SwipeRecognizer,
    track_width: f64,
    keywords_open: bool,
    solution_mode: bool,
    latch: SubmissionLatch,
    summary: Option<SummaryReport>,
    events: Vec<DeckEvent>,
}

impl PresentationEngine {
    /// Builds the deck from `presentation`, creating widgets with `factory`.
    ///
    /// When `previous` is given, widgets receive their stored state and the
    /// deck opens on the stored slide. A stored slide index that does not
    /// exist is ignored with a warning.
    pub fn new(
        presentation: &Presentation,
        config: Config,
        previous: Option<PresentationState>,
        factory: &mut impl ActionFactory,
    ) -> Result<Self, ContentError> {
        presentation.validate()?;
        let content_len = presentation.slides.len();
        let restored = previous.and_then(|state| match state.check_shape(content_len) {
            Ok(()) => Some(state),
            Err(err) => {
                warn!(%err, "discarding presentation state");
                None
            }
        });

        let mut slides: Vec<Slide> = presentation
            .slides
            .iter()
            .enumerate()
            .map(|(index, content)| {
                Slide::from_content(index, content, restored.as_ref(), &mut *factory)
            })
            .collect();
        let has_tasks = ScoreAggregator::new(&slides).has_tasks();
        let summary_slide = (has_tasks && !config.hide_summary_slide).then(|| {
            let index = slides.len();
            slides.push(Slide::summary(index));
            index
        });

        let mut progress = FocusRing::with_negative_tabindex();
        for index in 0..slides.len() {
            progress.add(ProgressDot(index), None);
        }

        let mut engine = Self {
            keywords_open: config.keyword_list_always_show,
            controller: TransitionController::new(slides.len()),
            config,
            slides,
            content_len,
            summary_slide,
            has_tasks,
            timers: TimerQueue::new(),
            now: 0,
            relayout_timer: None,
            settle_timer: None,
            pending: None,
            progress,
            keyboard: KeyboardNav::new(),
            swipe: SwipeRecognizer::new(),
            track_width: DEFAULT_TRACK_WIDTH,
            solution_mode: false,
            latch: SubmissionLatch::new(),
            summary: None,
            events: Vec::new(),
        };
        engine.attach_around(0);

        if let Some(progress) = restored.map(|s| s.progress).filter(|&p| p != 0) {
            let options = JumpOptions {
                initial_restore: true,
                ..JumpOptions::default()
            };
            match engine.jump_to_slide(progress, options) {
                JumpOutcome::Rejected(reason) => warn!(
                    progress,
                    ?reason,
                    "cannot restore progress, starting at the first slide"
                ),
                // Resuming on the summary means this attempt already submitted.
                _ if engine.summary_slide == Some(progress) => engine.latch.mark_submitted(),
                _ => {}
            }
        }
        engine.events.clear();
        debug!(
            slides = engine.slides.len(),
            has_tasks,
            summary = engine.summary_slide.is_some(),
            "presentation ready"
        );
        Ok(engine)
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All slides, including the summary slide.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides, including the summary slide.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Index of the summary slide, if the deck has one.
    #[must_use]
    pub fn summary_slide(&self) -> Option<usize> {
        self.summary_slide
    }

    /// Index of the current slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    /// Transition snapshot.
    #[must_use]
    pub fn transition_state(&self) -> TransitionState {
        self.controller.state()
    }

    /// Placement of `slide` relative to the current slide.
    #[must_use]
    pub fn placement(&self, slide: usize) -> Option<SlidePlacement> {
        self.controller.placement(slide)
    }

    /// Returns `true` while `slide` is animating out.
    #[must_use]
    pub fn is_transitioning(&self, slide: usize) -> bool {
        self.controller.outgoing() == Some(slide)
    }

    /// Returns `true` in solution-review mode.
    #[must_use]
    pub fn is_solution_mode(&self) -> bool {
        self.solution_mode
    }

    /// The slide waiting behind a confirmation prompt.
    #[must_use]
    pub fn pending_confirmation(&self) -> Option<usize> {
        self.pending.as_ref().map(|p| p.target)
    }

    /// The progress indicator's focus ring.
    #[must_use]
    pub fn progress(&self) -> &FocusRing<ProgressDot> {
        &self.progress
    }

    /// Host clock as last reported.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Deadline of the next pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Takes the queued notifications.
    pub fn drain_events(&mut self) -> Vec<DeckEvent> {
        core::mem::take(&mut self.events)
    }

    // --- navigation ---

    /// Navigates to `target`.
    ///
    /// Rejected when `target` does not exist, is already current, another
    /// transition is in flight or a confirmation prompt is open. Entering the
    /// summary slide may instead open a prompt
    /// ([`JumpOutcome::AwaitingConfirmation`]).
    pub fn jump_to_slide(&mut self, target: usize, options: JumpOptions) -> JumpOutcome {
        if self.pending.is_some() {
            return JumpOutcome::Rejected(JumpRejection::AwaitingConfirmation);
        }
        if let Err(reason) = self.controller.check(target) {
            debug!(target, ?reason, "jump rejected");
            return JumpOutcome::Rejected(reason);
        }
        let restore = options.initial_restore;
        if !options.bypass_confirm && !restore && self.needs_confirmation(target) {
            debug!(target, "submission needs confirmation");
            self.pending = Some(PendingJump {
                target,
                from_keyboard: options.from_keyboard,
                bypass_animation: options.bypass_animation,
                after: options.after,
            });
            self.events.push(DeckEvent::ConfirmationRequested { target });
            return JumpOutcome::AwaitingConfirmation;
        }
        self.process_jump(
            target,
            options.from_keyboard,
            options.bypass_animation || restore,
            !restore,
            options.after,
        )
    }

    /// Goes to the following slide.
    pub fn next(&mut self) -> JumpOutcome {
        let target = self.current_index() + 1;
        if target >= self.slides.len() {
            return JumpOutcome::Rejected(JumpRejection::AtBoundary);
        }
        self.jump_to_slide(target, JumpOptions::default())
    }

    /// Goes to the preceding slide.
    pub fn previous(&mut self) -> JumpOutcome {
        let Some(target) = self.current_index().checked_sub(1) else {
            return JumpOutcome::Rejected(JumpRejection::AtBoundary);
        };
        self.jump_to_slide(target, JumpOptions::default())
    }

    /// Jumps to `index` (progress indicator click).
    pub fn set_progress(&mut self, index: usize) -> JumpOutcome {
        self.jump_to_slide(index, JumpOptions::default())
    }

    /// Accepts the open confirmation prompt and performs its jump.
    ///
    /// Returns `None` when no prompt is open.
    pub fn confirm_pending(&mut self) -> Option<JumpOutcome> {
        let pending = self.pending.take()?;
        debug!(target = pending.target, "submission confirmed");
        Some(self.process_jump(
            pending.target,
            pending.from_keyboard,
            pending.bypass_animation,
            true,
            pending.after,
        ))
    }

    /// Dismisses the open confirmation prompt. Returns `false` when none is
    /// open.
    pub fn cancel_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        debug!(target = pending.target, "submission cancelled");
        self.events.push(DeckEvent::ConfirmationCancelled {
            target: pending.target,
        });
        true
    }

    /// Previous/next button state.
    #[must_use]
    pub fn nav_affordances(&self) -> NavAffordances {
        let current = self.current_index();
        NavAffordances {
            previous_disabled: current == 0,
            next_disabled: current + 1 >= self.slides.len(),
        }
    }

    fn needs_confirmation(&self, target: usize) -> bool {
        self.summary_slide == Some(target)
            && self.config.confirms_submission()
            && self.has_tasks
            && !self.solution_mode
    }

    fn process_jump(
        &mut self,
        target: usize,
        from_keyboard: bool,
        bypass_animation: bool,
        submit: bool,
        after: Option<AfterSettle>,
    ) -> JumpOutcome {
        let transition = match self.controller.begin(target) {
            Ok(transition) => transition,
            Err(reason) => {
                debug!(target, ?reason, "jump rejected");
                return JumpOutcome::Rejected(reason);
            }
        };
        debug!(from = transition.from, to = target, "slide transition started");

        self.attach_around(target);
        let dot = ProgressDot(target);
        if from_keyboard {
            self.progress.focus(&dot);
        } else {
            self.progress.set_tabbable(&dot);
        }
        self.events.push(DeckEvent::TransitionStarted {
            from: transition.from,
            to: target,
        });
        if self.summary_slide == Some(target) {
            self.render_summary(submit);
        }

        if bypass_animation {
            self.finish_transition(transition.ticket, after);
        } else {
            self.settle_timer = Some(self.timers.schedule(
                self.now.saturating_add(SETTLE_DELAY_MS),
                DeckTimer::Settle {
                    ticket: transition.ticket,
                    after,
                },
            ));
        }
        JumpOutcome::Started
    }

    fn finish_transition(&mut self, ticket: TransitionTicket, after: Option<AfterSettle>) {
        let Some(index) = self.controller.settle(ticket) else {
            return;
        };
        trace!(index, "slide transition settled");
        self.events.push(DeckEvent::TransitionSettled { index });
        if let Some(after) = after {
            after(index);
        }
    }

    // --- time ---

    /// Moves the host clock to `now` and fires every due timer.
    ///
    /// The clock never runs backwards; an earlier `now` is ignored. Widget
    /// events raised since the last call are collected afterwards.
    pub fn advance_to(&mut self, now: u64) {
        self.now = self.now.max(now);
        while let Some((_, timer)) = self.timers.pop_due(self.now) {
            self.fire(timer);
        }
        self.collect_element_events();
    }

    /// Advances the host clock by `ms`.
    pub fn advance_by(&mut self, ms: u64) {
        self.advance_to(self.now.saturating_add(ms));
    }

    fn fire(&mut self, timer: DeckTimer) {
        match timer {
            DeckTimer::Settle { ticket, after } => {
                self.settle_timer = None;
                self.finish_transition(ticket, after);
            }
            DeckTimer::Relayout => {
                self.relayout_timer = None;
                self.relayout();
            }
        }
    }

    /// Settles any in-flight transition without moving the clock. Other
    /// timers keep their deadlines.
    fn settle_now(&mut self) {
        if let Some(timer) = self.settle_timer.take().and_then(|id| self.timers.cancel(id)) {
            self.fire(timer);
        }
    }

    fn collect_element_events(&mut self) {
        for slide in self.slides.iter_mut().filter(|s| s.is_attached()) {
            let index = slide.index();
            for (element, el) in slide.elements_mut().iter_mut().enumerate() {
                for event in el.action_mut().take_events() {
                    self.events.push(DeckEvent::ElementEvent {
                        container: ContainerId {
                            slide: index,
                            element,
                        },
                        event,
                    });
                }
            }
        }
    }

    // --- attachment ---

    fn attach_slide(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            if slide.attach() {
                trace!(slide = index, "attached slide elements");
            }
        }
    }

    /// Attaches `index` and pre-attaches the slide after it.
    fn attach_around(&mut self, index: usize) {
        self.attach_slide(index);
        self.attach_slide(index + 1);
    }

    fn attach_all(&mut self) {
        for index in 0..self.slides.len() {
            self.attach_slide(index);
        }
    }

    // --- keyboard ---

    /// Handles a key pressed while the progress indicator has focus.
    ///
    /// Arrow keys, Home and End move focus between dots without navigating
    /// and stop at the first and last dot. Enter and Space jump to the
    /// focused dot's slide. Escape dismisses an open confirmation prompt and
    /// the keyword list.
    pub fn handle_key(&mut self, key: Key, mods: Modifiers) -> KeyOutcome<ProgressDot> {
        let mut listener = ProgressListener {
            last: self.slides.len().saturating_sub(1),
            selected: None,
            closed: false,
        };
        let outcome = self
            .keyboard
            .handle_key(key, mods, &mut self.progress, &mut listener);
        trace!(?key, ?outcome, "progress key");

        if let Some(slide) = listener.selected {
            let jump = self.jump_to_slide(slide, JumpOptions::keyboard());
            if !jump.is_started() {
                debug!(slide, ?jump, "progress selection did not navigate");
            }
        }
        if listener.closed {
            self.cancel_pending();
            if self.keywords_open && !self.config.keyword_list_always_show {
                self.set_keywords_open(false);
            }
        }
        outcome
    }

    // --- touch ---

    /// Reports the track width and zoom ratio after a resize.
    ///
    /// The zoom ratio applies immediately; the re-layout runs once the
    /// viewport has been quiet for [`RELAYOUT_DEBOUNCE_MS`].
    pub fn set_viewport(&mut self, track_width: f64, zoom_ratio: f64) {
        self.swipe.set_zoom_ratio(zoom_ratio);
        if track_width.is_finite() && track_width > 0.0 {
            self.track_width = track_width;
        }
        if let Some(id) = self.relayout_timer.take() {
            self.timers.cancel(id);
        }
        let deadline = self.now.saturating_add(RELAYOUT_DEBOUNCE_MS);
        self.relayout_timer = Some(self.timers.schedule(deadline, DeckTimer::Relayout));
    }

    fn relayout(&mut self) {
        trace!(track_width = self.track_width, "relayout");
        if self.summary_slide == Some(self.current_index()) {
            self.render_summary(false);
        }
        self.events.push(DeckEvent::Relayout {
            track_width: self.track_width,
        });
    }

    /// Begins a touch gesture.
    pub fn touch_start(&mut self, pos: Point) {
        let current = self.current_index();
        self.swipe.start(
            pos,
            SwipeContext {
                has_previous: current > 0,
                has_next: current + 1 < self.slides.len(),
                track_width: self.track_width,
            },
        );
    }

    /// Feeds a touch move.
    pub fn touch_move(&mut self, pos: Point) -> SwipeUpdate {
        self.swipe.update(pos)
    }

    /// Ends the touch gesture, navigating when the swipe committed.
    pub fn touch_end(&mut self) -> SwipeResult {
        let intent = self.swipe.end();
        trace!(?intent, "swipe ended");
        let jump = match intent {
            SwipeIntent::Next => Some(self.next()),
            SwipeIntent::Previous => Some(self.previous()),
            SwipeIntent::SnapBack | SwipeIntent::Ignored => None,
        };
        SwipeResult { intent, jump }
    }

    /// Abandons the touch gesture.
    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    // --- scoring ---

    /// Returns `true` if any slide has a scorable element.
    #[must_use]
    pub fn has_tasks(&self) -> bool {
        self.has_tasks
    }

    /// Score of one slide. Does not attach anything.
    #[must_use]
    pub fn slide_score(&self, index: usize) -> Option<ScoreRecord> {
        ScoreAggregator::new(&self.slides).slide_score(index)
    }

    /// Running total. Does not attach anything.
    #[must_use]
    pub fn total_score(&self) -> f64 {
        ScoreAggregator::new(&self.slides).total_score()
    }

    /// Running maximum. Does not attach anything.
    #[must_use]
    pub fn max_score(&self) -> f64 {
        ScoreAggregator::new(&self.slides).max_score()
    }

    /// Attaches every slide and builds a full report.
    pub fn score_report(&mut self) -> SummaryReport {
        self.attach_all();
        self.build_report()
    }

    /// The report shown on the summary slide, once it was rendered.
    #[must_use]
    pub fn summary(&self) -> Option<&SummaryReport> {
        self.summary.as_ref()
    }

    fn build_report(&self) -> SummaryReport {
        let records = ScoreAggregator::new(&self.slides).records();
        SummaryBuilder::new(self.config.summary_options()).build(&records, |index| {
            self.slides
                .get(index)
                .and_then(Slide::title)
                .map(str::to_owned)
        })
    }

    fn render_summary(&mut self, submit: bool) {
        let report = self.score_report();
        let total = report.total;
        self.summary = Some(report);
        self.events.push(DeckEvent::SummaryRendered { total });
        if submit && self.latch.on_render(self.solution_mode) {
            debug!(score = total.score, max_score = total.max_score, "results submitted");
            self.events.push(DeckEvent::ResultsSubmitted { total });
        }
    }

    /// Enters solution-review mode and goes to the first scored slide.
    pub fn show_solutions(&mut self) -> JumpOutcome {
        self.settle_now();
        self.pending = None;
        self.attach_all();
        self.solution_mode = true;
        for slide in &mut self.slides {
            for el in slide.elements_mut() {
                el.action_mut().show_solutions();
            }
        }
        self.events.push(DeckEvent::SolutionsShown);

        let Some(first) = ScoreAggregator::new(&self.slides)
            .records()
            .first()
            .map(|r| r.slide_index)
        else {
            return JumpOutcome::Rejected(JumpRejection::OutOfRange);
        };
        self.jump_to_slide(
            first,
            JumpOptions {
                bypass_confirm: true,
                ..JumpOptions::default()
            },
        )
    }

    /// Resets every task for a new attempt and goes back to the first slide.
    pub fn reset_task(&mut self) -> JumpOutcome {
        self.settle_now();
        self.pending = None;
        for slide in &mut self.slides {
            for el in slide.elements_mut() {
                el.action_mut().reset_task();
            }
        }
        self.solution_mode = false;
        self.latch.reset();
        self.summary = None;
        self.events.push(DeckEvent::TaskReset);
        debug!("task reset");
        self.jump_to_slide(
            0,
            JumpOptions {
                bypass_confirm: true,
                ..JumpOptions::default()
            },
        )
    }

    // --- keywords ---

    /// Returns `true` while the keyword list is open.
    #[must_use]
    pub fn keywords_open(&self) -> bool {
        self.keywords_open
    }

    /// Opens or closes the keyword list. Pinned lists stay open.
    pub fn toggle_keywords(&mut self) -> bool {
        if !self.config.keyword_list_always_show {
            self.set_keywords_open(!self.keywords_open);
        }
        self.keywords_open
    }

    /// Jumps to the slide of a keyword list entry.
    pub fn select_keyword(&mut self, slide: usize) -> JumpOutcome {
        let outcome = self.jump_to_slide(slide, JumpOptions::default());
        if self.config.keyword_list_auto_hide
            && !self.config.keyword_list_always_show
            && self.keywords_open
        {
            self.set_keywords_open(false);
        }
        outcome
    }

    fn set_keywords_open(&mut self, open: bool) {
        if self.keywords_open != open {
            self.keywords_open = open;
            self.events.push(DeckEvent::KeywordsToggled { open });
        }
    }

    // --- text ---

    /// The rendered progress template.
    #[must_use]
    pub fn progress_text(&self) -> String {
        self.config
            .render_progress(self.current_index(), self.slides.len())
    }

    /// Screen reader text for the current slide, unless announcements are
    /// disabled.
    #[must_use]
    pub fn announcement(&self) -> Option<String> {
        if self.config.disable_aria {
            return None;
        }
        let progress = self.progress_text();
        let title = self.slides.get(self.current_index()).and_then(Slide::title);
        Some(match title {
            Some(title) => format!("{title}. {progress}"),
            None => progress,
        })
    }

    // --- state ---

    /// Snapshot for resuming later.
    ///
    /// Covers the authored slides; the summary slide holds no state.
    #[must_use]
    pub fn current_state(&self) -> PresentationState {
        let content = &self.slides[..self.content_len];
        PresentationState {
            progress: self.current_index(),
            answered: ScoreAggregator::new(content).answered(),
            answers: content
                .iter()
                .map(|slide| {
                    slide
                        .elements()
                        .iter()
                        .map(|el| el.action().current_state().unwrap_or(Value::Null))
                        .collect()
                })
                .collect(),
        }
    }

    /// Returns `true` if `index` is the generated summary slide.
    #[must_use]
    pub fn is_summary_slide(&self, index: usize) -> bool {
        self.slides
            .get(index)
            .is_some_and(|s| s.kind() == SlideKind::Summary)
    }
}
