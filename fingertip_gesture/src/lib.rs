// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fingertip Gesture: multi-touch gesture recognition for one interactive surface.
//!
//! A [`GestureRecognizer`] consumes raw touch events and classifies each
//! touch session into exactly one gesture family:
//!
//! - tap and double tap,
//! - long press,
//! - pan (continuous, single finger),
//! - pinch (continuous, two fingers).
//!
//! The recognizer is a plain state machine. It does not own a clock, spawn
//! timers, or call back into the application. Every input returns the
//! resulting [`GestureEvent`]s, and time only advances through the timestamps
//! the host passes in (event timestamps and [`GestureRecognizer::poll`]).
//! Tests can therefore script whole interactions without sleeping.
//!
//! ## Minimal example
//!
//! ```rust
//! use fingertip_gesture::synth::TouchSynth;
//! use fingertip_gesture::{GestureEvent, GestureFamily, GestureRecognizer};
//!
//! let mut recognizer = GestureRecognizer::default();
//! let mut touch = TouchSynth::new();
//!
//! recognizer.handle(&touch.down(1, 100.0, 100.0, 0));
//! let events = recognizer.handle(&touch.move_to(1, 100.0, 150.0, 50));
//! assert!(matches!(events[0], GestureEvent::PanStart { .. }));
//! let GestureEvent::Pan(pan) = events[1] else { unreachable!() };
//! assert_eq!(pan.delta.y, 50.0);
//! assert_eq!(recognizer.active_family(), GestureFamily::Pan);
//!
//! // The long-press delay passes while panning: nothing fires.
//! assert!(recognizer.poll(1_000).is_empty());
//! ```
//!
//! ## Callbacks
//!
//! Applications that prefer callbacks implement [`GestureHandler`] (every
//! method is optional) and forward events with [`GestureEvent::dispatch`].
//!
//! ## Geometry
//!
//! The [`geometry`] module holds the small stateless helpers shared by the
//! recognizer and the swipe/zoom specializations built on top of it.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod error;
mod event;
pub mod geometry;
mod recognizer;
mod session;
pub mod synth;

pub use config::GestureConfig;
pub use error::{ConfigError, non_negative, positive};
pub use event::{
    GestureEvent, GestureFamily, GestureHandler, PanUpdate, PinchUpdate, TouchEvent, TouchId,
    TouchPhase, TouchPoint,
};
pub use recognizer::GestureRecognizer;
pub use session::GestureSession;
