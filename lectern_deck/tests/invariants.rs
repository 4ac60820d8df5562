// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine invariants under arbitrary operation sequences.

mod common;

use common::{deck, reporting, start};
use lectern_deck::{DeckEvent, JumpOutcome};
use lectern_focus::{Key, Modifiers, TabStop};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Next,
    Previous,
    Jump(usize),
    Confirm,
    Cancel,
    Key(Key),
    Advance(u64),
    Solutions,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Next),
        3 => Just(Op::Previous),
        3 => (0_usize..10).prop_map(Op::Jump),
        1 => Just(Op::Confirm),
        1 => Just(Op::Cancel),
        2 => prop_oneof![
            Just(Key::ArrowLeft),
            Just(Key::ArrowRight),
            Just(Key::Home),
            Just(Key::End),
            Just(Key::Enter),
            Just(Key::Escape),
        ]
        .prop_map(Op::Key),
        3 => (0_u64..400).prop_map(Op::Advance),
        1 => Just(Op::Solutions),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn index_and_tab_stop_invariants(ops in proptest::collection::vec(op(), 0..60)) {
        let content = deck(&[&[None], &[Some(3.0)], &[None, Some(1.0)], &[None]]);
        let (mut deck, _) = start(&content, reporting(), None);
        let count = deck.slide_count();
        let mut submissions = 0;

        for op in ops {
            let before = deck.current_index();
            match op {
                Op::Next => { deck.next(); }
                Op::Previous => { deck.previous(); }
                Op::Jump(target) => {
                    let outcome = deck.set_progress(target);
                    if target == before {
                        prop_assert_ne!(outcome, JumpOutcome::Started);
                        prop_assert_eq!(deck.current_index(), before);
                    }
                }
                Op::Confirm => { deck.confirm_pending(); }
                Op::Cancel => { deck.cancel_pending(); }
                Op::Key(key) => { deck.handle_key(key, Modifiers::empty()); }
                Op::Advance(ms) => deck.advance_by(ms),
                Op::Solutions => { deck.show_solutions(); }
                Op::Reset => {
                    deck.reset_task();
                    submissions = 0;
                }
            }

            prop_assert!(deck.current_index() < count);
            let tabbable = deck
                .progress()
                .members()
                .iter()
                .filter(|m| m.tab_stop == TabStop::Tabbable)
                .count();
            prop_assert_eq!(tabbable, 1);

            for event in deck.drain_events() {
                if matches!(event, DeckEvent::ResultsSubmitted { .. }) {
                    submissions += 1;
                }
                if let DeckEvent::TransitionStarted { from, to } = event {
                    prop_assert_ne!(from, to);
                }
            }
            prop_assert!(submissions <= 1);
        }
    }
}
