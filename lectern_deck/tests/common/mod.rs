// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scriptable quiz widget and content builders shared by the deck tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::RefCell;
use std::rc::Rc;

use lectern_deck::{
    ActionContent, ActionEvent, ActionFactory, Config, ContainerId, ElementContent, Keyword,
    Presentation, PresentationEngine, PresentationState, SlideAction, SlideContent, TaskElement,
};
use serde_json::{Value, json};

/// What the test sees of one widget.
#[derive(Debug, Default)]
pub struct Probe {
    pub score: f64,
    pub answered: bool,
    pub attached: Option<ContainerId>,
    pub resets: u32,
    pub solutions_shown: bool,
    pub events: Vec<ActionEvent>,
}

pub type Handle = Rc<RefCell<Probe>>;

/// Answers the quiz behind `handle`.
pub fn answer(handle: &Handle, score: f64) {
    let mut probe = handle.borrow_mut();
    probe.score = score;
    probe.answered = true;
    probe.events.push(ActionEvent::Answered { score: Some(score) });
}

/// A widget that is a scored quiz when it has a `max`, plain content otherwise.
struct Quiz {
    max: Option<f64>,
    probe: Handle,
}

impl TaskElement for Quiz {
    fn score(&self) -> Option<f64> {
        self.max.map(|_| self.probe.borrow().score)
    }

    fn max_score(&self) -> Option<f64> {
        self.max
    }

    fn answer_given(&self) -> Option<bool> {
        self.max.map(|_| self.probe.borrow().answered)
    }

    fn current_state(&self) -> Option<Value> {
        self.max?;
        let probe = self.probe.borrow();
        Some(if probe.answered {
            json!({ "answers": [probe.score] })
        } else {
            json!({ "answers": [] })
        })
    }
}

impl SlideAction for Quiz {
    fn attach(&mut self, container: ContainerId) {
        let mut probe = self.probe.borrow_mut();
        assert!(probe.attached.is_none(), "attached twice");
        probe.attached = Some(container);
    }

    fn reset_task(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.resets += 1;
        probe.score = 0.0;
        probe.answered = false;
    }

    fn show_solutions(&mut self) {
        self.probe.borrow_mut().solutions_shown = true;
    }

    fn take_events(&mut self) -> Vec<ActionEvent> {
        std::mem::take(&mut self.probe.borrow_mut().events)
    }
}

/// Creates [`Quiz`] widgets and keeps their probes in creation order.
#[derive(Debug, Default)]
pub struct QuizFactory {
    pub probes: Vec<Handle>,
}

impl ActionFactory for QuizFactory {
    fn create(
        &mut self,
        content: &ActionContent,
        previous_state: Option<&Value>,
    ) -> Box<dyn SlideAction> {
        let probe = Handle::default();
        let restored = previous_state
            .and_then(|s| s.get("answers"))
            .and_then(|a| a.get(0))
            .and_then(Value::as_f64);
        if let Some(score) = restored {
            let mut p = probe.borrow_mut();
            p.score = score;
            p.answered = true;
        }
        self.probes.push(Rc::clone(&probe));
        Box::new(Quiz {
            max: content.params.get("max").and_then(Value::as_f64),
            probe,
        })
    }
}

/// One slide per entry; each slide gets one element per max score
/// (`None` is a plain text element).
pub fn deck(slides: &[&[Option<f64>]]) -> Presentation {
    Presentation {
        slides: slides
            .iter()
            .enumerate()
            .map(|(i, elements)| SlideContent {
                keywords: vec![Keyword {
                    main: format!("Slide {}", i + 1),
                }],
                elements: elements
                    .iter()
                    .map(|max| ElementContent {
                        x: 10.0,
                        y: 10.0,
                        width: 50.0,
                        height: 20.0,
                        action: ActionContent {
                            library: String::from(if max.is_some() { "Quiz 1.0" } else { "Text 1.0" }),
                            params: max.map_or(Value::Null, |m| json!({ "max": m })),
                            sub_content_id: None,
                        },
                        display_as_button: false,
                        always_display_comments: false,
                        solution: None,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// `count` slides of plain text.
pub fn plain_deck(count: usize) -> Presentation {
    let text: &[Option<f64>] = &[None];
    deck(&vec![text; count])
}

/// Five slides; slides 2 and 4 hold one quiz worth 5 points each.
pub fn scored_deck() -> Presentation {
    deck(&[&[None], &[None], &[Some(5.0)], &[None], &[Some(5.0)]])
}

pub fn start(
    content: &Presentation,
    config: Config,
    previous: Option<PresentationState>,
) -> (PresentationEngine, QuizFactory) {
    let mut factory = QuizFactory::default();
    let engine = PresentationEngine::new(content, config, previous, &mut factory).unwrap();
    (engine, factory)
}

/// Reporting with the confirmation gate on.
pub fn reporting() -> Config {
    Config {
        enable_reporting: true,
        confirm_submission: true,
        ..Config::default()
    }
}
