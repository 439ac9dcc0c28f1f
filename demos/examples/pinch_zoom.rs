// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch-to-zoom on a photo viewer.
//!
//! Pinches in, pans the zoomed photo, double taps back to the resting zoom,
//! then drives the zoom buttons programmatically. Every change the viewport
//! reports is printed.
//!
//! Run:
//! - `cargo run -p fingertip_demos --example pinch_zoom`

use fingertip_demos::{advance, init_logging, play};
use fingertip_gesture::GestureConfig;
use fingertip_gesture::synth::TouchSynth;
use fingertip_surface::{Capabilities, CapabilityContext, ZoomCallbacks, ZoomViewport};
use fingertip_zoom::{ZoomConfig, ZoomState};
use kurbo::Size;

#[derive(Debug, Default)]
struct Photo {
    changes: u32,
}

impl ZoomCallbacks for Photo {
    fn on_zoom_change(&mut self, state: &ZoomState) {
        self.changes += 1;
        println!(
            "  zoom {:.2} at ({:.1}, {:.1}){}",
            state.scale,
            state.translate.x,
            state.translate.y,
            if state.is_animating { " animating" } else { "" }
        );
    }
}

fn settle(viewport: &mut ZoomViewport<Photo>) {
    while let Some(deadline) = viewport.next_deadline() {
        advance(viewport, deadline + 1);
    }
}

fn main() {
    init_logging();

    let mut viewport = ZoomViewport::new(
        GestureConfig::default(),
        ZoomConfig::default(),
        Photo::default(),
        CapabilityContext::without_haptics(Capabilities::TOUCH),
    )
    .expect("default configuration is valid");
    viewport.set_container_size(Size::new(400.0, 300.0));
    viewport.set_content_size(Size::new(400.0, 300.0));
    let mut touch = TouchSynth::new();

    println!("pinch out around the upper left");
    let pinch = [
        touch.down(1, 100.0, 100.0, 0),
        touch.down(2, 160.0, 100.0, 10),
        touch.move_many(&[(1, 80.0, 100.0), (2, 180.0, 100.0)], 40),
        touch.move_many(&[(1, 60.0, 100.0), (2, 200.0, 100.0)], 70),
        touch.up(1, 100),
        touch.up(2, 110),
    ];
    play(&mut viewport, &pinch, |_, _| {});
    println!("  css: {}", viewport.transform());

    println!("pan the zoomed photo");
    let pan = [
        touch.down(1, 200.0, 150.0, 1_000),
        touch.move_to(1, 240.0, 170.0, 1_050),
        touch.move_to(1, 280.0, 190.0, 1_100),
        touch.up(1, 1_150),
    ];
    play(&mut viewport, &pan, |viewport, _| {
        println!("  {:?} {}", viewport.visual_state(), viewport.transition());
    });

    println!("double tap to reset");
    let double_tap = [
        touch.down(1, 200.0, 150.0, 2_000),
        touch.up(1, 2_040),
        touch.down(1, 201.0, 151.0, 2_150),
        touch.up(1, 2_190),
    ];
    play(&mut viewport, &double_tap, |_, _| {});
    settle(&mut viewport);

    println!("zoom buttons");
    viewport.zoom_in(3_000);
    settle(&mut viewport);
    viewport.zoom_in(4_000);
    settle(&mut viewport);
    viewport.reset_zoom(5_000);
    settle(&mut viewport);

    println!(
        "{} changes reported, final {}",
        viewport.callbacks().changes,
        viewport.transform()
    );
}
