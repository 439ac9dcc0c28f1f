// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fingertip_gesture::geometry::distance;
use fingertip_gesture::{TouchEvent, TouchPhase};
use fingertip_timing::TimerQueue;
use kurbo::Point;
use smallvec::SmallVec;

/// One expanding press ripple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    /// Unique within the owning [`PressFeedback`].
    pub id: u64,
    /// Where the finger landed.
    pub origin: Point,
    /// When the finger landed.
    pub started_at: u64,
}

/// Pressed flag and ripple records for a surface.
///
/// Driven by raw touch events, so it reacts the same way whatever gesture the
/// touch turns into.
#[derive(Clone, Debug)]
pub struct PressFeedback {
    ripple_ms: u64,
    pressed: bool,
    ripples: SmallVec<[Ripple; 2]>,
    next_id: u64,
    expiry: TimerQueue<u64>,
}

impl PressFeedback {
    /// Ripples live for `ripple_ms` after the finger lands.
    #[must_use]
    pub fn new(ripple_ms: u64) -> Self {
        Self {
            ripple_ms,
            pressed: false,
            ripples: SmallVec::new(),
            next_id: 0,
            expiry: TimerQueue::new(),
        }
    }

    /// Returns `true` while any finger is down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Live ripples, oldest first.
    #[must_use]
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// When the oldest ripple expires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.expiry.next_deadline()
    }

    /// Updates the pressed flag and starts a ripple for each landing finger.
    pub fn handle(&mut self, event: &TouchEvent) {
        self.poll(event.timestamp);
        match event.phase {
            TouchPhase::Start => {
                self.pressed = true;
                for point in &event.changed {
                    let ripple = Ripple {
                        id: self.next_id,
                        origin: point.position,
                        started_at: event.timestamp,
                    };
                    self.next_id += 1;
                    self.expiry
                        .schedule(ripple.id, event.timestamp.saturating_add(self.ripple_ms));
                    self.ripples.push(ripple);
                }
            }
            TouchPhase::Move => {}
            TouchPhase::End | TouchPhase::Cancel => {
                self.pressed = !event.touches.is_empty();
            }
        }
    }

    /// Drops ripples that expired by `now`. Returns `true` if any did.
    pub fn poll(&mut self, now: u64) -> bool {
        let mut expired = false;
        while let Some((id, _)) = self.expiry.pop_due(now) {
            self.ripples.retain(|r| r.id != id);
            expired = true;
        }
        expired
    }

    /// Clears the pressed flag and every ripple.
    pub fn clear(&mut self) {
        self.pressed = false;
        self.ripples.clear();
        self.expiry.clear();
    }
}

/// Decides whether the host's trailing click should be swallowed.
///
/// Browsers synthesize a click after a touch sequence even when the touch
/// became a swipe. The guard records how far the first finger travelled from
/// where it landed; if that ever reached the tap threshold, or a second
/// finger joined, the click is suppressed.
#[derive(Clone, Copy, Debug)]
pub struct ClickGuard {
    threshold: f64,
    origin: Option<(u64, Point)>,
    suppress: bool,
}

impl ClickGuard {
    /// Suppresses clicks once the finger moves `threshold` pixels or more.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            origin: None,
            suppress: false,
        }
    }

    /// Tracks one raw touch event.
    pub fn handle(&mut self, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Start if event.touches.len() <= event.changed.len() => {
                self.origin = event.changed.first().map(|p| (p.id, p.position));
                self.suppress = event.changed.len() > 1;
            }
            TouchPhase::Start => self.suppress = true,
            TouchPhase::Move | TouchPhase::End => {
                let Some((id, origin)) = self.origin else {
                    return;
                };
                let moved_away = event
                    .changed
                    .iter()
                    .find(|p| p.id == id)
                    .is_some_and(|p| distance(origin, p.position) >= self.threshold);
                if moved_away {
                    self.suppress = true;
                }
            }
            TouchPhase::Cancel => self.suppress = true,
        }
    }

    /// Returns `true` if the click after the latest touch sequence should be ignored.
    #[must_use]
    pub fn should_suppress(&self) -> bool {
        self.suppress
    }
}

#[cfg(test)]
mod tests {
    use fingertip_gesture::synth::TouchSynth;

    use super::*;

    #[test]
    fn ripples_expire_independently() {
        let mut press = PressFeedback::new(400);
        let mut touch = TouchSynth::new();
        press.handle(&touch.down(1, 10.0, 10.0, 0));
        press.handle(&touch.down(2, 90.0, 10.0, 100));
        assert_eq!(press.ripples().len(), 2);
        press.handle(&touch.up(1, 150));
        assert!(press.is_pressed());
        press.handle(&touch.up(2, 200));
        assert!(!press.is_pressed());

        assert!(press.poll(400));
        assert_eq!(press.ripples().len(), 1);
        assert_eq!(press.ripples()[0].origin, Point::new(90.0, 10.0));
        assert_eq!(press.next_deadline(), Some(500));
        assert!(press.poll(500));
        assert!(press.ripples().is_empty());
    }

    #[test]
    fn click_guard_trips_on_movement() {
        let mut guard = ClickGuard::new(10.0);
        let mut touch = TouchSynth::new();
        guard.handle(&touch.down(1, 0.0, 0.0, 0));
        guard.handle(&touch.move_to(1, 6.0, 0.0, 10));
        guard.handle(&touch.up(1, 20));
        assert!(!guard.should_suppress());

        guard.handle(&touch.down(1, 0.0, 0.0, 100));
        guard.handle(&touch.move_to(1, 40.0, 0.0, 110));
        // Coming back does not re-arm the click.
        guard.handle(&touch.move_to(1, 0.0, 0.0, 120));
        guard.handle(&touch.up(1, 130));
        assert!(guard.should_suppress());

        guard.handle(&touch.down(1, 0.0, 0.0, 200));
        assert!(!guard.should_suppress());
        guard.handle(&touch.down(2, 50.0, 0.0, 210));
        assert!(guard.should_suppress());
    }

    #[test]
    fn click_guard_trips_at_exact_threshold() {
        let mut guard = ClickGuard::new(10.0);
        let mut touch = TouchSynth::new();
        guard.handle(&touch.down(1, 0.0, 0.0, 0));
        guard.handle(&touch.move_to(1, 10.0, 0.0, 10));
        guard.handle(&touch.up(1, 20));
        assert!(guard.should_suppress());
    }

    #[test]
    fn unbounded_ripple_never_expires() {
        let mut press = PressFeedback::new(u64::MAX);
        let mut touch = TouchSynth::new();
        press.handle(&touch.down(1, 10.0, 10.0, 500));
        press.handle(&touch.up(1, 600));
        assert_eq!(press.next_deadline(), Some(u64::MAX));
        assert!(!press.poll(1_000_000));
        assert_eq!(press.ripples().len(), 1);
    }
}
