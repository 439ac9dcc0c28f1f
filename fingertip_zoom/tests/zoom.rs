// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch-to-zoom driven through a `GestureRecognizer` with synthesized touches.

use fingertip_gesture::GestureRecognizer;
use fingertip_gesture::synth::TouchSynth;
use fingertip_zoom::{PinchZoom, ZoomConfig, ZoomEvent, ZoomState};
use kurbo::{Size, Vec2};

struct Harness {
    gestures: GestureRecognizer,
    zoom: PinchZoom,
    touch: TouchSynth,
    seen: Vec<ZoomState>,
}

impl Harness {
    fn new() -> Self {
        let mut zoom = PinchZoom::new(ZoomConfig::default()).unwrap();
        zoom.set_container_size(Size::new(400.0, 300.0));
        Self {
            gestures: GestureRecognizer::default(),
            zoom,
            touch: TouchSynth::new(),
            seen: Vec::new(),
        }
    }

    fn feed(&mut self, event: fingertip_gesture::TouchEvent) {
        for gesture in self.gestures.handle(&event) {
            for change in self.zoom.handle(&gesture, event.timestamp) {
                if let ZoomEvent::Changed(state) = change {
                    self.seen.push(state);
                }
            }
        }
    }

    /// Two fingers land `start_spread` apart around `(cx, cy)`, then spread to
    /// each value in `spreads` in turn, then lift.
    fn pinch(&mut self, t0: u64, (cx, cy): (f64, f64), start_spread: f64, spreads: &[f64]) {
        let half = start_spread / 2.0;
        let down1 = self.touch.down(1, cx - half, cy, t0);
        self.feed(down1);
        let down2 = self.touch.down(2, cx + half, cy, t0 + 1);
        self.feed(down2);
        let mut t = t0 + 1;
        for &spread in spreads {
            t += 16;
            let half = spread / 2.0;
            let moved = self
                .touch
                .move_many(&[(1, cx - half, cy), (2, cx + half, cy)], t);
            self.feed(moved);
        }
        let up1 = self.touch.up(1, t + 10);
        self.feed(up1);
        let up2 = self.touch.up(2, t + 20);
        self.feed(up2);
    }

    fn tap(&mut self, t: u64, x: f64, y: f64) {
        let down = self.touch.down(1, x, y, t);
        self.feed(down);
        let up = self.touch.up(1, t + 40);
        self.feed(up);
    }
}

#[test]
fn scale_stays_clamped_through_wild_pinches() {
    let mut h = Harness::new();
    h.pinch(
        0,
        (200.0, 150.0),
        100.0,
        &[150.0, 400.0, 900.0, 2_000.0, 60.0, 12.0, 30.0, 800.0],
    );
    h.pinch(1_000, (50.0, 20.0), 40.0, &[5.0, 1.0, 300.0, 600.0]);
    assert!(!h.seen.is_empty());
    for state in &h.seen {
        assert!(
            (0.5..=3.0).contains(&state.scale),
            "scale {} escaped its limits",
            state.scale
        );
        let bounds = Vec2::new(
            ((400.0 * state.scale - 400.0) / 2.0).max(0.0),
            ((300.0 * state.scale - 300.0) / 2.0).max(0.0),
        );
        assert!(state.translate.x.abs() <= bounds.x + 1e-9);
        assert!(state.translate.y.abs() <= bounds.y + 1e-9);
    }
    assert!(!h.zoom.state().is_zooming);
}

#[test]
fn zoom_level_persists_across_sessions() {
    let mut h = Harness::new();
    h.pinch(0, (200.0, 150.0), 100.0, &[150.0]);
    assert!((h.zoom.state().scale - 1.5).abs() < 1e-9);
    h.pinch(1_000, (200.0, 150.0), 100.0, &[150.0]);
    assert!((h.zoom.state().scale - 2.25).abs() < 1e-9);
}

#[test]
fn reset_zoom_converges_and_is_idempotent() {
    let mut h = Harness::new();
    h.pinch(0, (320.0, 40.0), 100.0, &[180.0, 250.0]);
    assert_ne!(h.zoom.state().translate, Vec2::ZERO);

    h.zoom.reset_zoom(2_000);
    let once = h.zoom.state();
    assert_eq!(once.scale, 1.0);
    assert_eq!(once.translate, Vec2::ZERO);
    assert!(once.is_animating);

    assert!(h.zoom.reset_zoom(2_010).is_empty());
    assert_eq!(h.zoom.state(), once);

    h.zoom.poll(2_300);
    assert!(h.zoom.reset_zoom(5_000).is_empty());
    let settled = h.zoom.state();
    assert_eq!(settled.scale, 1.0);
    assert_eq!(settled.translate, Vec2::ZERO);
    assert!(!settled.is_animating);
}

#[test]
fn double_tap_toggles_zoom() {
    let mut h = Harness::new();
    h.tap(0, 100.0, 100.0);
    h.tap(120, 102.0, 101.0);
    assert_eq!(h.zoom.state().scale, 2.0);
    assert!(h.zoom.state().is_animating);

    h.tap(2_000, 100.0, 100.0);
    h.tap(2_120, 100.0, 100.0);
    assert_eq!(h.zoom.state().scale, 1.0);
    assert_eq!(h.zoom.state().translate, Vec2::ZERO);
}

#[test]
fn pinch_interrupts_animation() {
    let mut h = Harness::new();
    h.zoom.zoom_in(0);
    assert!(h.zoom.state().is_animating);
    h.pinch(100, (200.0, 150.0), 100.0, &[120.0]);
    assert!(!h.zoom.state().is_animating);
    assert_eq!(h.zoom.next_deadline(), None);
    assert!((h.zoom.state().scale - 1.8).abs() < 1e-9);
}
