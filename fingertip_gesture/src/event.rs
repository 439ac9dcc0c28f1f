// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch input and gesture output types.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Identifier of one finger for the lifetime of its contact.
pub type TouchId = u64;

/// One finger sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Finger identifier, stable from touch start to touch end.
    pub id: TouchId,
    /// Position in surface coordinates.
    pub position: Point,
    /// Sample time in milliseconds.
    pub timestamp: u64,
}

impl TouchPoint {
    /// Creates a sample for finger `id` at `(x, y)`.
    #[must_use]
    pub fn new(id: TouchId, x: f64, y: f64, timestamp: u64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
            timestamp,
        }
    }
}

/// Phase of a raw touch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// One or more fingers landed.
    Start,
    /// One or more fingers moved.
    Move,
    /// One or more fingers lifted.
    End,
    /// The platform took the touches away (system gesture, scroll takeover, ...).
    Cancel,
}

/// A raw touch event in the browser's shape.
///
/// `touches` lists every finger still on the surface after the event;
/// `changed` lists the fingers this event is about (landed, moved, or lifted).
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Event phase.
    pub phase: TouchPhase,
    /// Fingers currently on the surface.
    pub touches: SmallVec<[TouchPoint; 2]>,
    /// Fingers that changed in this event.
    pub changed: SmallVec<[TouchPoint; 2]>,
    /// Event time in milliseconds.
    pub timestamp: u64,
}

impl TouchEvent {
    /// Creates an event from its parts.
    #[must_use]
    pub fn new(
        phase: TouchPhase,
        timestamp: u64,
        touches: impl IntoIterator<Item = TouchPoint>,
        changed: impl IntoIterator<Item = TouchPoint>,
    ) -> Self {
        Self {
            phase,
            touches: touches.into_iter().collect(),
            changed: changed.into_iter().collect(),
            timestamp,
        }
    }

    /// Synthesizes a single-pointer event from a mouse sample.
    ///
    /// The pointer is reported as finger `0`. On [`TouchPhase::End`] and
    /// [`TouchPhase::Cancel`] the `touches` list is empty.
    #[must_use]
    pub fn mouse(phase: TouchPhase, position: Point, timestamp: u64) -> Self {
        let point = TouchPoint {
            id: 0,
            position,
            timestamp,
        };
        let mut touches = SmallVec::new();
        if matches!(phase, TouchPhase::Start | TouchPhase::Move) {
            touches.push(point);
        }
        let mut changed = SmallVec::new();
        changed.push(point);
        Self {
            phase,
            touches,
            changed,
            timestamp,
        }
    }
}

/// The mutually exclusive classification of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureFamily {
    /// Not yet classified; still a tap candidate.
    #[default]
    None,
    /// Single-finger drag.
    Pan,
    /// Two-finger spread/squeeze.
    Pinch,
    /// Finger held still past the long-press delay.
    LongPress,
}

/// Continuous pan sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanUpdate {
    /// Current finger position.
    pub position: Point,
    /// Offset from the pan origin.
    pub delta: Vec2,
    /// Length of `delta`.
    pub distance: f64,
    /// `distance / elapsed`, in pixels per millisecond.
    pub velocity: f64,
}

/// Continuous pinch sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// `distance / start_distance`.
    pub scale: f64,
    /// Midpoint between the two fingers.
    pub center: Point,
    /// Current finger spread.
    pub distance: f64,
    /// Finger spread when the second finger landed.
    pub start_distance: f64,
}

/// A classified gesture emitted by a recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A single tap, reported once the double-tap window has passed.
    Tap {
        /// Where the finger lifted.
        point: Point,
    },
    /// Two taps within the double-tap window.
    DoubleTap {
        /// Where the second tap lifted.
        point: Point,
        /// Time between the two taps' releases.
        interval_ms: u64,
    },
    /// A finger held still for the long-press delay.
    LongPress {
        /// Where the finger is resting.
        point: Point,
        /// Time since the finger landed.
        duration_ms: u64,
    },
    /// The session became a pan.
    PanStart {
        /// Pan origin.
        origin: Point,
    },
    /// The pan moved.
    Pan(PanUpdate),
    /// The last finger lifted from a pan.
    PanEnd(PanUpdate),
    /// Pinch updates begin.
    PinchStart {
        /// Midpoint between the two fingers.
        center: Point,
        /// Finger spread when the second finger landed.
        distance: f64,
    },
    /// The pinch changed.
    Pinch(PinchUpdate),
    /// The pinch ended, either fully or by degrading to a pan.
    PinchEnd(PinchUpdate),
    /// The session was cancelled while a family was active.
    Cancelled {
        /// The family that was active.
        family: GestureFamily,
    },
}

impl GestureEvent {
    /// Invokes the matching [`GestureHandler`] method.
    pub fn dispatch<H: GestureHandler + ?Sized>(&self, handler: &mut H) {
        match *self {
            Self::Tap { point } => handler.on_tap(point),
            Self::DoubleTap { point, interval_ms } => handler.on_double_tap(point, interval_ms),
            Self::LongPress { point, duration_ms } => handler.on_long_press(point, duration_ms),
            Self::PanStart { origin } => handler.on_pan_start(origin),
            Self::Pan(update) => handler.on_pan(&update),
            Self::PanEnd(update) => handler.on_pan_end(&update),
            Self::PinchStart { center, distance } => handler.on_pinch_start(center, distance),
            Self::Pinch(update) => handler.on_pinch(&update),
            Self::PinchEnd(update) => handler.on_pinch_end(&update),
            Self::Cancelled { family } => handler.on_cancel(family),
        }
    }
}

/// Optional callbacks for classified gestures.
///
/// Every method defaults to a no-op; implement only the ones you need and
/// feed events through [`GestureEvent::dispatch`].
#[allow(unused_variables, reason = "default methods ignore their arguments")]
pub trait GestureHandler {
    /// A single tap.
    fn on_tap(&mut self, point: Point) {}
    /// A double tap.
    fn on_double_tap(&mut self, point: Point, interval_ms: u64) {}
    /// A long press.
    fn on_long_press(&mut self, point: Point, duration_ms: u64) {}
    /// A pan began at `origin`.
    fn on_pan_start(&mut self, origin: Point) {}
    /// A pan moved.
    fn on_pan(&mut self, update: &PanUpdate) {}
    /// A pan ended.
    fn on_pan_end(&mut self, update: &PanUpdate) {}
    /// A pinch began.
    fn on_pinch_start(&mut self, center: Point, distance: f64) {}
    /// A pinch changed.
    fn on_pinch(&mut self, update: &PinchUpdate) {}
    /// A pinch ended.
    fn on_pinch_end(&mut self, update: &PinchUpdate) {}
    /// An active session was cancelled.
    fn on_cancel(&mut self, family: GestureFamily) {}
}
