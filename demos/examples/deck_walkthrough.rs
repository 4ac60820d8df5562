// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless deck walkthrough.
//!
//! Loads a small quiz deck from JSON, answers the quizzes, swipes and types
//! its way to the summary slide, confirms the submission and resumes the
//! session from saved state.
//!
//! Run:
//! - `cargo run -p lectern_demos --example deck_walkthrough`
//! - `RUST_LOG=lectern_deck=debug cargo run -p lectern_demos --example deck_walkthrough`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use lectern_deck::{
    ActionContent, Config, ContainerId, DeckEvent, Presentation, PresentationEngine,
    SETTLE_DELAY_MS, SlideAction, TaskElement,
};
use lectern_focus::{Key, Modifiers};
use serde_json::{Value, json};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CONTENT: &str = r#"{
  "slides": [
    { "keywords": [{ "main": "Welcome" }],
      "elements": [{ "x": 5, "y": 5, "width": 90, "height": 20, "action": { "library": "Text 1.2" } }] },
    { "keywords": [{ "main": "Capitals" }],
      "elements": [{ "x": 5, "y": 30, "width": 60, "height": 40,
                     "action": { "library": "MultiChoice 1.16", "params": { "max": 3 } } }] },
    { "keywords": [{ "main": "Rivers" }],
      "elements": [{ "x": 5, "y": 30, "width": 60, "height": 40,
                     "action": { "library": "MultiChoice 1.16", "params": { "max": 2 } } }] }
  ]
}"#;

const CONFIG: &str = r#"{
  "enableReporting": true,
  "confirmSubmission": true,
  "progressText": ":num / :total",
  "share": { "twitter": true }
}"#;

/// A quiz whose score is set from outside, standing in for a real widget.
struct Quiz {
    max: Option<f64>,
    score: Rc<Cell<Option<f64>>>,
}

impl TaskElement for Quiz {
    fn score(&self) -> Option<f64> {
        self.max.map(|_| self.score.get().unwrap_or(0.0))
    }

    fn max_score(&self) -> Option<f64> {
        self.max
    }

    fn answer_given(&self) -> Option<bool> {
        self.max.map(|_| self.score.get().is_some())
    }

    fn current_state(&self) -> Option<Value> {
        self.max?;
        Some(json!({ "answers": self.score.get().into_iter().collect::<Vec<_>>() }))
    }
}

impl SlideAction for Quiz {
    fn attach(&mut self, container: ContainerId) {
        tracing::info!(slide = container.slide, element = container.element, "widget attached");
    }

    fn reset_task(&mut self) {
        self.score.set(None);
    }
}

#[derive(Default)]
struct Widgets {
    scores: Vec<Rc<Cell<Option<f64>>>>,
}

impl lectern_deck::ActionFactory for Widgets {
    fn create(
        &mut self,
        content: &ActionContent,
        previous_state: Option<&Value>,
    ) -> Box<dyn SlideAction> {
        let restored = previous_state
            .and_then(|s| s.get("answers"))
            .and_then(|a| a.get(0))
            .and_then(Value::as_f64);
        let score = Rc::new(Cell::new(restored));
        self.scores.push(Rc::clone(&score));
        Box::new(Quiz {
            max: content.params.get("max").and_then(Value::as_f64),
            score,
        })
    }
}

fn report(deck: &mut PresentationEngine) {
    for event in deck.drain_events() {
        println!("  event: {event:?}");
    }
    if let Some(text) = deck.announcement() {
        println!("  announce: {text}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content = Presentation::from_json(CONTENT)?;
    let config = Config::from_json(CONFIG)?;
    let mut widgets = Widgets::default();
    let mut deck = PresentationEngine::new(&content, config.clone(), None, &mut widgets)?;
    println!(
        "deck of {} slides, summary at {:?}",
        deck.slide_count(),
        deck.summary_slide()
    );

    // Swipe left to the first quiz and answer it.
    deck.set_viewport(960.0, 1.0);
    deck.touch_start(Point::new(600.0, 300.0));
    deck.touch_move(Point::new(560.0, 305.0));
    deck.touch_move(Point::new(420.0, 310.0));
    println!("swipe: {:?}", deck.touch_end());
    deck.advance_by(SETTLE_DELAY_MS);
    widgets.scores[1].set(Some(2.0));
    report(&mut deck);

    // Keyboard on the progress indicator: move to the last dot and select it.
    let none = Modifiers::empty();
    deck.handle_key(Key::End, none);
    println!("select summary: {:?}", deck.handle_key(Key::Enter, none));
    if deck.pending_confirmation().is_some() {
        println!("confirm: {:?}", deck.confirm_pending());
    }
    deck.advance_by(SETTLE_DELAY_MS);
    report(&mut deck);

    if let Some(summary) = deck.summary() {
        for row in &summary.rows {
            println!(
                "  {:<10} {}/{} ({}%)",
                row.title.as_deref().unwrap_or("?"),
                row.score,
                row.max_score,
                row.percentage
            );
        }
        println!(
            "  total {}/{} ({}%), affordances {:?}",
            summary.total.score, summary.total.max_score, summary.total.percentage,
            summary.affordances
        );
    }

    // Save and resume.
    let saved = deck.current_state().to_json()?;
    println!("saved state: {saved}");
    let state = lectern_deck::PresentationState::from_json(&saved)?;
    let mut resumed = PresentationEngine::new(&content, config, Some(state), &mut Widgets::default())?;
    println!(
        "resumed on slide {} with {}/{}",
        resumed.current_index(),
        resumed.total_score(),
        resumed.max_score()
    );
    for event in resumed.drain_events() {
        if let DeckEvent::ResultsSubmitted { .. } = event {
            println!("unexpected resubmission");
        }
    }
    Ok(())
}
