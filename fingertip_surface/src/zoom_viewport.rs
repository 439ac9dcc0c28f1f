// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use fingertip_gesture::{ConfigError, GestureConfig, GestureRecognizer, TouchEvent};
use fingertip_zoom::{PinchZoom, ZoomConfig, ZoomEvent, ZoomState};
use kurbo::{Affine, Size};

use crate::callbacks::ZoomCallbacks;
use crate::capability::{CapabilityContext, Haptics, NoHaptics};
use crate::earliest;
use crate::transform::{Transform, Transition, VisualState};

/// A pinch-zoomable viewport.
///
/// [`transform`](Self::transform) assumes the content is centered in the
/// viewport and transformed about its center (CSS `transform-origin: center`);
/// [`content_transform`](Self::content_transform) gives the full map from
/// content to viewport coordinates.
#[derive(Debug)]
pub struct ZoomViewport<C, H = NoHaptics> {
    gestures: GestureRecognizer,
    zoom: PinchZoom,
    capabilities: CapabilityContext<H>,
    callbacks: C,
}

impl<C: ZoomCallbacks, H: Haptics> ZoomViewport<C, H> {
    /// Creates a viewport, rejecting invalid configurations.
    pub fn new(
        gesture: GestureConfig,
        zoom: ZoomConfig,
        callbacks: C,
        capabilities: CapabilityContext<H>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            gestures: GestureRecognizer::new(gesture)?,
            zoom: PinchZoom::new(zoom)?,
            capabilities,
            callbacks,
        })
    }

    /// Reports the measured viewport size.
    pub fn set_container_size(&mut self, size: Size) {
        let events = self.zoom.set_container_size(size);
        self.report(events);
    }

    /// Reports the measured content size.
    pub fn set_content_size(&mut self, size: Size) {
        let events = self.zoom.set_content_size(size);
        self.report(events);
    }

    /// Feeds one raw touch event.
    pub fn handle_touch(&mut self, event: &TouchEvent) {
        for gesture in self.gestures.handle(event) {
            let events = self.zoom.handle(&gesture, event.timestamp);
            self.report(events);
        }
    }

    /// Fires timers due at `now`.
    pub fn poll(&mut self, now: u64) {
        for gesture in self.gestures.poll(now) {
            let events = self.zoom.handle(&gesture, now);
            self.report(events);
        }
        let events = self.zoom.poll(now);
        self.report(events);
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        earliest([self.gestures.next_deadline(), self.zoom.next_deadline()])
    }

    /// Steps the zoom in, animated.
    pub fn zoom_in(&mut self, now: u64) {
        let events = self.zoom.zoom_in(now);
        self.report(events);
    }

    /// Steps the zoom out, animated.
    pub fn zoom_out(&mut self, now: u64) {
        let events = self.zoom.zoom_out(now);
        self.report(events);
    }

    /// Animates back to the initial zoom.
    pub fn reset_zoom(&mut self, now: u64) {
        let events = self.zoom.reset_zoom(now);
        self.report(events);
    }

    /// Animates to `scale`, clamped to the configured limits.
    pub fn set_zoom(&mut self, scale: f64, now: u64) {
        let events = self.zoom.set_zoom(scale, now);
        self.report(events);
    }

    /// Drops the session and any animation without callbacks; keeps the zoom level.
    pub fn teardown(&mut self) {
        self.gestures.reset();
        self.zoom.teardown();
    }

    /// Current zoom state.
    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.zoom.state()
    }

    /// Visual tri-state.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        let state = self.zoom.state();
        if state.is_zooming || self.zoom.is_panning() {
            VisualState::Dragging
        } else if state.is_animating {
            VisualState::Animating
        } else {
            VisualState::Idle
        }
    }

    /// Transform to apply to the centered content.
    #[must_use]
    pub fn transform(&self) -> Transform {
        let state = self.zoom.state();
        Transform {
            translate: state.translate,
            scale: state.scale,
        }
    }

    /// Map from content coordinates to viewport coordinates.
    #[must_use]
    pub fn content_transform(&self) -> Affine {
        self.zoom.content_transform()
    }

    /// Transition to apply to the content.
    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition::for_state(
            self.visual_state(),
            self.zoom.config().animation_ms,
            self.capabilities.reduced_motion(),
        )
    }

    /// The application callbacks.
    #[must_use]
    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    /// The application callbacks, mutably.
    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    /// The capability context.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilityContext<H> {
        &self.capabilities
    }

    fn report(&mut self, events: Vec<ZoomEvent>) {
        for event in events {
            if let ZoomEvent::Changed(state) = event {
                self.callbacks.on_zoom_change(&state);
            }
        }
    }
}
