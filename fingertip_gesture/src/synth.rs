// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthesized touch streams for tests, demos, and mouse-driven hosts.
//!
//! [`TouchSynth`] remembers which fingers are down and produces correctly
//! shaped [`TouchEvent`]s, so callers only describe what each finger does.
//!
//! ```
//! use fingertip_gesture::synth::TouchSynth;
//! use fingertip_gesture::TouchPhase;
//!
//! let mut synth = TouchSynth::new();
//! let down = synth.down(1, 10.0, 10.0, 0);
//! assert_eq!(down.phase, TouchPhase::Start);
//! let second = synth.down(2, 50.0, 10.0, 5);
//! assert_eq!(second.touches.len(), 2);
//! assert_eq!(second.changed.len(), 1);
//! let up = synth.up(1, 20);
//! assert_eq!(up.touches.len(), 1);
//! ```

use smallvec::SmallVec;

use crate::event::{TouchEvent, TouchId, TouchPhase, TouchPoint};

/// Builds browser-shaped touch events from per-finger actions.
#[derive(Clone, Debug, Default)]
pub struct TouchSynth {
    down: SmallVec<[TouchPoint; 2]>,
}

impl TouchSynth {
    /// Creates a synthesizer with no fingers down.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finger `id` lands at `(x, y)`.
    pub fn down(&mut self, id: TouchId, x: f64, y: f64, timestamp: u64) -> TouchEvent {
        let point = TouchPoint::new(id, x, y, timestamp);
        self.down.retain(|p| p.id != id);
        self.down.push(point);
        self.event(TouchPhase::Start, timestamp, [point])
    }

    /// Finger `id` moves to `(x, y)`.
    pub fn move_to(&mut self, id: TouchId, x: f64, y: f64, timestamp: u64) -> TouchEvent {
        let point = TouchPoint::new(id, x, y, timestamp);
        if let Some(p) = self.down.iter_mut().find(|p| p.id == id) {
            *p = point;
        }
        self.event(TouchPhase::Move, timestamp, [point])
    }

    /// Several fingers move in one event.
    pub fn move_many(&mut self, moves: &[(TouchId, f64, f64)], timestamp: u64) -> TouchEvent {
        let mut changed = SmallVec::<[TouchPoint; 2]>::new();
        for &(id, x, y) in moves {
            let point = TouchPoint::new(id, x, y, timestamp);
            if let Some(p) = self.down.iter_mut().find(|p| p.id == id) {
                *p = point;
            }
            changed.push(point);
        }
        self.event(TouchPhase::Move, timestamp, changed)
    }

    /// Finger `id` lifts at its last known position.
    pub fn up(&mut self, id: TouchId, timestamp: u64) -> TouchEvent {
        let mut changed = SmallVec::<[TouchPoint; 2]>::new();
        if let Some(i) = self.down.iter().position(|p| p.id == id) {
            let mut point = self.down.remove(i);
            point.timestamp = timestamp;
            changed.push(point);
        } else {
            changed.push(TouchPoint::new(id, 0.0, 0.0, timestamp));
        }
        self.event(TouchPhase::End, timestamp, changed)
    }

    /// The platform cancels every finger.
    pub fn cancel(&mut self, timestamp: u64) -> TouchEvent {
        let changed: SmallVec<[TouchPoint; 2]> = self.down.drain(..).collect();
        self.event(TouchPhase::Cancel, timestamp, changed)
    }

    /// Fingers currently down.
    #[must_use]
    pub fn touches(&self) -> &[TouchPoint] {
        &self.down
    }

    fn event(
        &self,
        phase: TouchPhase,
        timestamp: u64,
        changed: impl IntoIterator<Item = TouchPoint>,
    ) -> TouchEvent {
        TouchEvent::new(phase, timestamp, self.down.iter().copied(), changed)
    }
}
