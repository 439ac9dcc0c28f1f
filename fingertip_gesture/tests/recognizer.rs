// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted touch streams against the public `GestureRecognizer` API.
//!
//! Each test drives one or more whole sessions and then counts what fired,
//! so the assertions read as "exactly one tap", "no long press", and so on.

use fingertip_gesture::synth::TouchSynth;
use fingertip_gesture::{GestureEvent, GestureFamily, GestureRecognizer};
use kurbo::Point;

#[derive(Debug, Default)]
struct Tally {
    taps: usize,
    double_taps: usize,
    long_presses: usize,
    pans: usize,
    pinches: usize,
}

impl Tally {
    fn add(&mut self, events: &[GestureEvent]) {
        for event in events {
            match event {
                GestureEvent::Tap { .. } => self.taps += 1,
                GestureEvent::DoubleTap { .. } => self.double_taps += 1,
                GestureEvent::LongPress { .. } => self.long_presses += 1,
                GestureEvent::Pan(_) | GestureEvent::PanStart { .. } => self.pans += 1,
                GestureEvent::Pinch(_) | GestureEvent::PinchStart { .. } => self.pinches += 1,
                _ => {}
            }
        }
    }
}

#[test]
fn single_taps_fire_exactly_once() {
    for wobble in [0.0, 3.0, 9.5] {
        for hold_ms in [10, 120, 450] {
            let mut rec = GestureRecognizer::default();
            let mut touch = TouchSynth::new();
            let mut tally = Tally::default();
            tally.add(&rec.handle(&touch.down(1, 40.0, 40.0, 1_000)));
            tally.add(&rec.handle(&touch.move_to(1, 40.0 + wobble, 40.0, 1_005)));
            tally.add(&rec.handle(&touch.up(1, 1_000 + hold_ms)));
            tally.add(&rec.poll(1_000 + hold_ms + 299));
            assert_eq!(tally.taps, 0, "tap fired inside the double-tap window");
            tally.add(&rec.poll(10_000));
            assert_eq!(tally.taps, 1, "wobble {wobble}, hold {hold_ms}");
            assert_eq!(tally.pans, 0);
            assert_eq!(tally.long_presses, 0);
            assert_eq!(tally.double_taps, 0);
        }
    }
}

#[test]
fn two_quick_taps_make_one_double_tap() {
    for gap in [0, 100, 290] {
        let mut rec = GestureRecognizer::default();
        let mut touch = TouchSynth::new();
        let mut tally = Tally::default();
        tally.add(&rec.handle(&touch.down(1, 10.0, 10.0, 0)));
        tally.add(&rec.handle(&touch.up(1, 5)));
        tally.add(&rec.handle(&touch.down(2, 12.0, 11.0, 5 + gap)));
        let second = rec.handle(&touch.up(2, 5 + gap + 4));
        tally.add(&second);
        tally.add(&rec.poll(10_000));
        assert_eq!(tally.double_taps, 1, "gap {gap}");
        assert_eq!(tally.taps, 0, "gap {gap}");
        assert_eq!(
            second,
            vec![GestureEvent::DoubleTap {
                point: Point::new(12.0, 11.0),
                interval_ms: gap + 4,
            }]
        );
    }
}

#[test]
fn slow_second_tap_is_two_single_taps() {
    let mut rec = GestureRecognizer::default();
    let mut touch = TouchSynth::new();
    let mut tally = Tally::default();
    tally.add(&rec.handle(&touch.down(1, 10.0, 10.0, 0)));
    tally.add(&rec.handle(&touch.up(1, 10)));
    tally.add(&rec.handle(&touch.down(1, 10.0, 10.0, 400)));
    tally.add(&rec.handle(&touch.up(1, 410)));
    tally.add(&rec.poll(10_000));
    assert_eq!(tally.taps, 2);
    assert_eq!(tally.double_taps, 0);
}

#[test]
fn third_quick_tap_starts_a_fresh_window() {
    let mut rec = GestureRecognizer::default();
    let mut touch = TouchSynth::new();
    let mut tally = Tally::default();
    for start in [0, 100, 200] {
        tally.add(&rec.handle(&touch.down(1, 0.0, 0.0, start)));
        tally.add(&rec.handle(&touch.up(1, start + 10)));
    }
    tally.add(&rec.poll(10_000));
    assert_eq!(tally.double_taps, 1);
    assert_eq!(tally.taps, 1);
}

#[test]
fn pan_before_long_press_suppresses_tap_and_long_press() {
    for (dy, at) in [(11.0, 30), (50.0, 50), (300.0, 499)] {
        let mut rec = GestureRecognizer::default();
        let mut touch = TouchSynth::new();
        let mut tally = Tally::default();
        tally.add(&rec.handle(&touch.down(1, 100.0, 100.0, 0)));
        tally.add(&rec.handle(&touch.move_to(1, 100.0, 100.0 + dy, at)));
        tally.add(&rec.handle(&touch.move_to(1, 100.0, 100.0, 900)));
        tally.add(&rec.poll(2_000));
        tally.add(&rec.handle(&touch.up(1, 2_100)));
        tally.add(&rec.poll(5_000));
        assert!(tally.pans > 0);
        assert_eq!(tally.long_presses, 0, "dy {dy}");
        assert_eq!(tally.taps + tally.double_taps, 0, "dy {dy}");
    }
}

#[test]
fn pan_scenario_reports_vertical_delta() {
    let mut rec = GestureRecognizer::default();
    let mut touch = TouchSynth::new();
    rec.handle(&touch.down(1, 100.0, 100.0, 0));
    let events = rec.handle(&touch.move_to(1, 100.0, 150.0, 50));
    assert_eq!(
        events[0],
        GestureEvent::PanStart {
            origin: Point::new(100.0, 100.0)
        }
    );
    let GestureEvent::Pan(pan) = events[1] else {
        panic!("expected pan, got {events:?}");
    };
    assert_eq!(pan.delta.x, 0.0);
    assert_eq!(pan.delta.y, 50.0);
    assert_eq!(pan.distance, 50.0);
    assert_eq!(pan.velocity, 1.0);
    assert_eq!(rec.active_family(), GestureFamily::Pan);
    assert!(rec.poll(600).is_empty());

    let end = rec.handle(&touch.up(1, 700));
    assert!(matches!(end.as_slice(), [GestureEvent::PanEnd(_)]));
}

#[test]
fn pinch_scenario_reports_scale() {
    let mut rec = GestureRecognizer::default();
    let mut touch = TouchSynth::new();
    rec.handle(&touch.down(1, 50.0, 50.0, 0));
    rec.handle(&touch.down(2, 150.0, 50.0, 0));
    assert_eq!(rec.active_family(), GestureFamily::Pinch);
    let events = rec.handle(&touch.move_many(&[(1, 30.0, 50.0), (2, 170.0, 50.0)], 30));
    assert_eq!(
        events[0],
        GestureEvent::PinchStart {
            center: Point::new(100.0, 50.0),
            distance: 100.0
        }
    );
    let GestureEvent::Pinch(pinch) = events[1] else {
        panic!("expected pinch, got {events:?}");
    };
    assert!((pinch.scale - 1.4).abs() < 1e-9);
    assert_eq!(pinch.center, Point::new(100.0, 50.0));
    assert_eq!(pinch.distance, 140.0);
}

#[test]
fn simultaneous_two_finger_start_is_a_pinch() {
    let mut rec = GestureRecognizer::default();
    let first = fingertip_gesture::TouchPoint::new(1, 0.0, 0.0, 0);
    let second = fingertip_gesture::TouchPoint::new(2, 100.0, 0.0, 0);
    let start = fingertip_gesture::TouchEvent::new(
        fingertip_gesture::TouchPhase::Start,
        0,
        [first, second],
        [first, second],
    );
    assert!(rec.handle(&start).is_empty());
    assert_eq!(rec.active_family(), GestureFamily::Pinch);
    assert_eq!(rec.next_deadline(), None);
}

#[test]
fn small_pinch_wobble_stays_quiet() {
    let mut rec = GestureRecognizer::default();
    let mut touch = TouchSynth::new();
    let mut tally = Tally::default();
    tally.add(&rec.handle(&touch.down(1, 0.0, 0.0, 0)));
    tally.add(&rec.handle(&touch.down(2, 100.0, 0.0, 5)));
    tally.add(&rec.handle(&touch.move_to(2, 105.0, 0.0, 20)));
    tally.add(&rec.handle(&touch.up(2, 40)));
    tally.add(&rec.handle(&touch.up(1, 50)));
    tally.add(&rec.poll(5_000));
    assert_eq!(tally.pinches, 0);
    assert_eq!(tally.taps + tally.long_presses + tally.double_taps, 0);
}

#[test]
fn second_finger_after_pan_is_ignored() {
    let mut rec = GestureRecognizer::default();
    let mut touch = TouchSynth::new();
    rec.handle(&touch.down(1, 0.0, 0.0, 0));
    rec.handle(&touch.move_to(1, 30.0, 0.0, 20));
    assert!(rec.handle(&touch.down(2, 100.0, 0.0, 30)).is_empty());
    assert_eq!(rec.active_family(), GestureFamily::Pan);
    assert!(rec.handle(&touch.up(2, 40)).is_empty());
    assert!(rec.is_active());
}

#[test]
fn mouse_synthesized_click_is_a_tap() {
    use fingertip_gesture::{TouchEvent, TouchPhase};

    let mut rec = GestureRecognizer::default();
    let at = Point::new(5.0, 5.0);
    rec.handle(&TouchEvent::mouse(TouchPhase::Start, at, 0));
    rec.handle(&TouchEvent::mouse(TouchPhase::End, at, 50));
    assert_eq!(rec.poll(350), vec![GestureEvent::Tap { point: at }]);
}
