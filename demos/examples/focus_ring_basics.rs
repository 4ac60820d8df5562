// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus ring basics.
//!
//! Drive a roving-tabindex toolbar with the keyboard adapter, vetoing the
//! wrap-around from the last button back to the first.
//!
//! Run:
//! - `cargo run -p lectern_demos --example focus_ring_basics`

use std::ops::ControlFlow;

use lectern_focus::{FnListener, FocusRing, Key, KeyboardNav, Modifiers, RingAction, RingEvent};

fn main() {
    let mut ring = FocusRing::new();
    for button in ["bold", "italic", "underline"] {
        ring.add(button, None);
    }
    let nav = KeyboardNav::new();
    let mut no_wrap = FnListener(|event: &RingEvent<&str>| {
        if event.action == RingAction::Next && event.from == Some("underline") {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    for (key, mods) in [
        (Key::ArrowRight, Modifiers::empty()), // bold -> italic
        (Key::ArrowRight, Modifiers::empty()), // italic -> underline
        (Key::ArrowRight, Modifiers::empty()), // vetoed
        (Key::ArrowLeft, Modifiers::SHIFT),    // screen reader chord: pass through
        (Key::Home, Modifiers::empty()),       // underline -> bold
        (Key::Enter, Modifiers::empty()),      // select bold
    ] {
        let outcome = nav.handle_key(key, mods, &mut ring, &mut no_wrap);
        let stops: Vec<_> = ring
            .members()
            .iter()
            .map(|m| format!("{}={:?}", m.handle, m.tab_stop.tab_index()))
            .collect();
        println!("{key:?}: {outcome:?} [{}]", stops.join(", "));
    }
}
