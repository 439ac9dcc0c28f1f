// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pull-to-refresh against a simulated feed.
//!
//! The first pull refreshes quickly, so the indicator is held for the minimum
//! visible duration. The second refresh fails and the error callback fires.
//! A pull while the feed is scrolled does nothing.
//!
//! Run:
//! - `cargo run -p fingertip_demos --example pull_to_refresh`

use fingertip_demos::{advance, init_logging, play};
use fingertip_gesture::synth::TouchSynth;
use fingertip_gesture::{GestureConfig, TouchEvent};
use fingertip_surface::{Capabilities, CapabilityContext, PullContainer, RefreshCallbacks};
use fingertip_swipe::{PullToRefreshConfig, RefreshError, RefreshTicket};

#[derive(Debug, Default)]
struct Feed {
    pending: Option<RefreshTicket>,
    items: u32,
}

impl RefreshCallbacks for Feed {
    fn on_pull_refresh(&mut self, ticket: RefreshTicket) {
        println!("  -> fetching ({ticket:?})");
        self.pending = Some(ticket);
    }

    fn on_refreshed(&mut self) {
        self.items += 10;
        println!("  -> feed now has {} items", self.items);
    }

    fn on_refresh_error(&mut self, error: &RefreshError) {
        println!("  -> {error}");
    }
}

fn pull(touch: &mut TouchSynth, t0: u64) -> Vec<TouchEvent> {
    vec![
        touch.down(1, 200.0, 20.0, t0),
        touch.move_to(1, 200.0, 70.0, t0 + 200),
        touch.move_to(1, 200.0, 120.0, t0 + 400),
        touch.move_to(1, 200.0, 170.0, t0 + 600),
        touch.up(1, t0 + 620),
    ]
}

fn show(container: &PullContainer<Feed>, event: &TouchEvent) {
    println!(
        "  t={:>5} {:?} progress={:.2} transform={} transition={}",
        event.timestamp,
        container.visual_state(),
        container.progress(),
        container.transform(),
        container.transition()
    );
}

fn finish(container: &mut PullContainer<Feed>, outcome: Result<(), RefreshError>, at: u64) {
    if let Some(ticket) = container.callbacks_mut().pending.take() {
        advance(container, at);
        container.resolve(ticket, outcome, at);
    }
    while let Some(deadline) = container.next_deadline() {
        advance(container, deadline + 1);
    }
    println!(
        "  closed: refreshing={} transform={}",
        container.is_refreshing(),
        container.transform()
    );
}

fn main() {
    init_logging();

    let mut container = PullContainer::new(
        GestureConfig::default(),
        PullToRefreshConfig::default(),
        Feed::default(),
        CapabilityContext::without_haptics(Capabilities::TOUCH),
    )
    .expect("default configuration is valid");
    let mut touch = TouchSynth::new();

    println!("fast refresh");
    container.set_at_top(true);
    play(&mut container, &pull(&mut touch, 0), |c, e| show(c, e));
    finish(&mut container, Ok(()), 700);

    println!("failing refresh");
    play(&mut container, &pull(&mut touch, 3_000), |c, e| show(c, e));
    finish(&mut container, Err(RefreshError::new("network unreachable")), 5_000);

    println!("pull while scrolled");
    container.set_at_top(false);
    play(&mut container, &pull(&mut touch, 8_000), |c, e| show(c, e));
}
