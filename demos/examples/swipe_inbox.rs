// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-to-act inbox.
//!
//! Three message rows in a `SwipeList`: one is archived with a slow drag past
//! the threshold, one is deleted with a quick flick, and one is dragged a
//! little and released, so it snaps back.
//!
//! Run:
//! - `cargo run -p fingertip_demos --example swipe_inbox`

use fingertip_demos::{advance, init_logging, play};
use fingertip_gesture::GestureConfig;
use fingertip_gesture::synth::TouchSynth;
use fingertip_surface::{Capabilities, CapabilityContext, SwipeCallbacks, SwipeList};
use fingertip_swipe::SwipeConfig;

#[derive(Debug)]
struct Message {
    subject: &'static str,
}

impl SwipeCallbacks for Message {
    fn on_swipe_left(&mut self) {
        println!("  -> archived {:?}", self.subject);
    }

    fn on_swipe_right(&mut self) {
        println!("  -> deleted {:?}", self.subject);
    }
}

fn main() {
    init_logging();

    let mut inbox = SwipeList::new(
        GestureConfig::default(),
        SwipeConfig::default(),
        CapabilityContext::without_haptics(Capabilities::TOUCH),
    )
    .expect("default configuration is valid");
    for (row, subject) in ["Lunch on Friday?", "Your invoice", "Build failed"]
        .into_iter()
        .enumerate()
    {
        inbox.insert(row, Message { subject });
    }

    let mut touch = TouchSynth::new();
    let scripts = [
        (
            0,
            "slow drag left past the threshold",
            vec![
                touch.down(1, 300.0, 20.0, 0),
                touch.move_to(1, 260.0, 21.0, 150),
                touch.move_to(1, 200.0, 22.0, 400),
                touch.up(1, 900),
            ],
        ),
        (
            1,
            "fast flick right",
            vec![
                touch.down(1, 40.0, 80.0, 2_000),
                touch.move_to(1, 60.0, 80.0, 2_010),
                touch.move_to(1, 90.0, 81.0, 2_030),
                touch.up(1, 2_040),
            ],
        ),
        (
            2,
            "short drag, released slowly",
            vec![
                touch.down(1, 200.0, 140.0, 4_000),
                touch.move_to(1, 170.0, 140.0, 4_300),
                touch.up(1, 4_900),
            ],
        ),
    ];

    for (row, label, script) in &scripts {
        println!("row {row}: {label}");
        let Some(card) = inbox.get_mut(row) else {
            continue;
        };
        play(card, script, |card, event| {
            println!(
                "  t={:>5} {:?} transform={} transition={}",
                event.timestamp,
                card.visual_state(),
                card.transform(),
                card.transition()
            );
        });
        if let Some(deadline) = card.next_deadline() {
            advance(card, deadline + 1);
            println!("  settled: transform={}", card.transform());
        }
    }
}
