// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fingertip Zoom: pinch-to-zoom state driven by classified gestures.
//!
//! [`PinchZoom`] owns a persistent [`ZoomState`] (scale, translation, and the
//! zooming/animating flags) that outlives individual touch sessions. It
//! consumes a recognizer's [`GestureEvent`](fingertip_gesture::GestureEvent)s:
//!
//! - `PinchStart`/`Pinch`/`PinchEnd` rescale around the container center.
//! - `DoubleTap` toggles between `initial_zoom` and `double_tap_zoom`.
//! - `Pan` moves the content while zoomed in.
//!
//! Programmatic [`zoom_in`](PinchZoom::zoom_in),
//! [`zoom_out`](PinchZoom::zoom_out), [`set_zoom`](PinchZoom::set_zoom) and
//! [`reset_zoom`](PinchZoom::reset_zoom) go through the same clamped update
//! as gestures, so consumers cannot tell them apart.
//!
//! ```rust
//! use fingertip_gesture::synth::TouchSynth;
//! use fingertip_gesture::GestureRecognizer;
//! use fingertip_zoom::{PinchZoom, ZoomConfig};
//! use kurbo::Size;
//!
//! let mut gestures = GestureRecognizer::default();
//! let mut zoom = PinchZoom::new(ZoomConfig::default()).unwrap();
//! zoom.set_container_size(Size::new(400.0, 400.0));
//! let mut touch = TouchSynth::new();
//!
//! let script = [
//!     touch.down(1, 100.0, 200.0, 0),
//!     touch.down(2, 300.0, 200.0, 5),
//!     touch.move_many(&[(1, 50.0, 200.0), (2, 350.0, 200.0)], 40),
//!     touch.up(1, 60),
//!     touch.up(2, 70),
//! ];
//! for event in &script {
//!     for gesture in gestures.handle(event) {
//!         zoom.handle(&gesture, event.timestamp);
//!     }
//! }
//! // Fingers spread from 200px to 300px apart.
//! assert!((zoom.state().scale - 1.5).abs() < 1e-9);
//! assert!(!zoom.state().is_zooming);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod zoom;

pub use config::ZoomConfig;
pub use zoom::{PinchZoom, ZoomEvent, ZoomState};
