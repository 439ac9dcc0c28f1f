// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use fingertip_gesture::geometry::clamp;
use fingertip_gesture::{ConfigError, GestureEvent, GestureFamily, PinchUpdate};
use fingertip_timing::TimerQueue;
use kurbo::{Affine, Point, Size, Vec2};

use crate::config::ZoomConfig;

/// Scales closer than this to `initial_zoom` count as "at rest" for the
/// double-tap toggle.
const REST_EPSILON: f64 = 1e-3;

/// Persistent zoom level of one viewport.
///
/// `translate` is the content offset from its centered position, in
/// container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    /// Current scale, always within `[min_zoom, max_zoom]`.
    pub scale: f64,
    /// Current translation, always within [`PinchZoom::translation_bounds`].
    pub translate: Vec2,
    /// A pinch is in progress.
    pub is_zooming: bool,
    /// An animated (programmatic or double-tap) change is running.
    pub is_animating: bool,
}

impl ZoomState {
    fn at_rest(scale: f64) -> Self {
        Self {
            scale,
            translate: Vec2::ZERO,
            is_zooming: false,
            is_animating: false,
        }
    }
}

/// Output of a [`PinchZoom`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomEvent {
    /// A pinch took over the viewport.
    PinchStarted,
    /// The state changed; carries the new state.
    Changed(ZoomState),
    /// The pinch ended.
    PinchEnded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ZoomTimer {
    Animation,
}

/// Scale and translation captured when a pinch or pan begins.
#[derive(Clone, Copy, Debug)]
struct Anchor {
    scale: f64,
    translate: Vec2,
}

/// Pinch-to-zoom on top of the recognizer's pinch classification.
///
/// Pinch updates set `scale = start_scale * pinch_ratio * zoom_speed` and
/// compensate translation for the scale change around the container center.
/// Every update, gesture-driven or programmatic, is clamped: the scale to
/// `[min_zoom, max_zoom]` and the translation so the scaled content never
/// leaves a gap inside the container. Touch positions are in container
/// coordinates, origin at the top-left corner.
#[derive(Clone, Debug)]
pub struct PinchZoom {
    config: ZoomConfig,
    state: ZoomState,
    container: Size,
    content: Option<Size>,
    pinch: Option<Anchor>,
    pan: Option<Anchor>,
    timers: TimerQueue<ZoomTimer>,
}

impl PinchZoom {
    /// Creates a viewport at `initial_zoom`, rejecting invalid configurations.
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: ZoomState::at_rest(config.initial_zoom),
            container: Size::ZERO,
            content: None,
            pinch: None,
            pan: None,
            timers: TimerQueue::new(),
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// The current zoom state.
    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    /// Measured size of the viewport.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Measured size of the unscaled content; defaults to the container size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content.unwrap_or(self.container)
    }

    /// Updates the measured viewport size and re-clamps the translation.
    pub fn set_container_size(&mut self, size: Size) -> Vec<ZoomEvent> {
        self.container = size;
        let mut out = Vec::new();
        self.reclamp(&mut out);
        out
    }

    /// Updates the measured content size and re-clamps the translation.
    pub fn set_content_size(&mut self, size: Size) -> Vec<ZoomEvent> {
        self.content = Some(size);
        let mut out = Vec::new();
        self.reclamp(&mut out);
        out
    }

    /// Largest allowed absolute translation on each axis at the current scale.
    #[must_use]
    pub fn translation_bounds(&self) -> Vec2 {
        self.bounds_at(self.state.scale)
    }

    /// Transform from unscaled content coordinates to container coordinates.
    #[must_use]
    pub fn content_transform(&self) -> Affine {
        let content = self.content_size();
        let scale = self.state.scale;
        let origin = Vec2::new(
            (self.container.width - content.width * scale) / 2.0,
            (self.container.height - content.height * scale) / 2.0,
        ) + self.state.translate;
        Affine::translate(origin) * Affine::scale(scale)
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Processes one classified gesture at time `now`.
    pub fn handle(&mut self, event: &GestureEvent, now: u64) -> Vec<ZoomEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        match event {
            GestureEvent::PinchStart { .. } => self.begin_pinch(&mut out),
            GestureEvent::Pinch(update) => self.pinch_to(update, &mut out),
            GestureEvent::PinchEnd(update) => {
                self.pinch_to(update, &mut out);
                self.end_pinch(&mut out);
            }
            GestureEvent::DoubleTap { .. } => {
                if (self.state.scale - self.config.initial_zoom).abs() < REST_EPSILON {
                    self.animate_to(self.config.double_tap_zoom, now, &mut out);
                } else {
                    self.apply(self.config.initial_zoom, Vec2::ZERO, Some(now), &mut out);
                }
            }
            GestureEvent::PanStart { .. } => {
                self.pan = (self.pinch.is_none() && self.is_zoomed_in()).then_some(Anchor {
                    scale: self.state.scale,
                    translate: self.state.translate,
                });
            }
            GestureEvent::Pan(update) => self.pan_to(update.delta, &mut out),
            GestureEvent::PanEnd(update) => {
                self.pan_to(update.delta, &mut out);
                self.pan = None;
            }
            GestureEvent::Cancelled { family } => match family {
                GestureFamily::Pinch => self.end_pinch(&mut out),
                GestureFamily::Pan => self.pan = None,
                _ => {}
            },
            _ => {}
        }
        out
    }

    /// Fires timers due at `now`.
    pub fn poll(&mut self, now: u64) -> Vec<ZoomEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        out
    }

    /// Steps the scale up by `zoom_step`, animated.
    pub fn zoom_in(&mut self, now: u64) -> Vec<ZoomEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        self.animate_to(self.state.scale + self.config.zoom_step, now, &mut out);
        out
    }

    /// Steps the scale down by `zoom_step`, animated.
    pub fn zoom_out(&mut self, now: u64) -> Vec<ZoomEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        self.animate_to(self.state.scale - self.config.zoom_step, now, &mut out);
        out
    }

    /// Animates back to `initial_zoom` with no translation.
    ///
    /// Calling it again once there is a no-op.
    pub fn reset_zoom(&mut self, now: u64) -> Vec<ZoomEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        self.apply(self.config.initial_zoom, Vec2::ZERO, Some(now), &mut out);
        out
    }

    /// Animates to `scale` (clamped), keeping the content under the container
    /// center in place.
    pub fn set_zoom(&mut self, scale: f64, now: u64) -> Vec<ZoomEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        self.animate_to(scale, now, &mut out);
        out
    }

    /// Returns `true` while a pan is moving the zoomed-in content.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Stops any pinch, pan, or animation without events. The zoom level is
    /// kept.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.pinch = None;
        self.pan = None;
        self.state.is_zooming = false;
        self.state.is_animating = false;
    }

    fn is_zoomed_in(&self) -> bool {
        self.state.scale > self.config.initial_zoom + REST_EPSILON
    }

    fn poll_into(&mut self, now: u64, out: &mut Vec<ZoomEvent>) {
        while let Some((ZoomTimer::Animation, _)) = self.timers.pop_due(now) {
            self.state.is_animating = false;
            out.push(ZoomEvent::Changed(self.state));
        }
    }

    fn begin_pinch(&mut self, out: &mut Vec<ZoomEvent>) {
        log::debug!("pinch zoom started at scale {}", self.state.scale);
        self.timers.cancel(&ZoomTimer::Animation);
        self.pinch = Some(Anchor {
            scale: self.state.scale,
            translate: self.state.translate,
        });
        self.pan = None;
        self.state.is_zooming = true;
        self.state.is_animating = false;
        out.push(ZoomEvent::PinchStarted);
        out.push(ZoomEvent::Changed(self.state));
    }

    fn pinch_to(&mut self, update: &PinchUpdate, out: &mut Vec<ZoomEvent>) {
        let Some(anchor) = self.pinch else {
            log::trace!("pinch update without a pinch start ignored");
            return;
        };
        let scale = self.clamp_scale(anchor.scale * update.scale * self.config.zoom_speed);
        let center = Point::new(self.container.width / 2.0, self.container.height / 2.0);
        let translate = anchor.translate + (update.center - center) * (1.0 - scale / anchor.scale);
        self.apply(scale, translate, None, out);
    }

    fn end_pinch(&mut self, out: &mut Vec<ZoomEvent>) {
        if self.pinch.take().is_none() {
            return;
        }
        log::debug!("pinch zoom ended at scale {}", self.state.scale);
        self.state.is_zooming = false;
        out.push(ZoomEvent::Changed(self.state));
        out.push(ZoomEvent::PinchEnded);
    }

    fn pan_to(&mut self, delta: Vec2, out: &mut Vec<ZoomEvent>) {
        if let Some(anchor) = self.pan {
            self.apply(anchor.scale, anchor.translate + delta, None, out);
        }
    }

    fn animate_to(&mut self, scale: f64, now: u64, out: &mut Vec<ZoomEvent>) {
        let scale = self.clamp_scale(scale);
        let translate = self.state.translate * (scale / self.state.scale);
        self.apply(scale, translate, Some(now), out);
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        clamp(scale, self.config.min_zoom, self.config.max_zoom)
    }

    fn bounds_at(&self, scale: f64) -> Vec2 {
        let content = self.content_size();
        Vec2::new(
            ((content.width * scale - self.container.width) / 2.0).max(0.0),
            ((content.height * scale - self.container.height) / 2.0).max(0.0),
        )
    }

    fn clamp_translate(&self, translate: Vec2, scale: f64) -> Vec2 {
        let bounds = self.bounds_at(scale);
        Vec2::new(
            clamp(translate.x, -bounds.x, bounds.x),
            clamp(translate.y, -bounds.y, bounds.y),
        )
    }

    /// Single clamped update path. `animate_at` starts an animation at that
    /// time when the scale or translation actually changes; `None` is an
    /// immediate update that stops any running animation.
    fn apply(
        &mut self,
        scale: f64,
        translate: Vec2,
        animate_at: Option<u64>,
        out: &mut Vec<ZoomEvent>,
    ) {
        let scale = self.clamp_scale(scale);
        let translate = self.clamp_translate(translate, scale);
        let moved = scale != self.state.scale || translate != self.state.translate;
        let is_animating = match animate_at {
            Some(now) if moved => {
                self.timers.schedule(
                    ZoomTimer::Animation,
                    now.saturating_add(self.config.animation_ms),
                );
                true
            }
            Some(_) => self.state.is_animating,
            None => {
                self.timers.cancel(&ZoomTimer::Animation);
                false
            }
        };
        let next = ZoomState {
            scale,
            translate,
            is_zooming: self.state.is_zooming,
            is_animating,
        };
        if next != self.state {
            self.state = next;
            out.push(ZoomEvent::Changed(next));
        }
    }

    fn reclamp(&mut self, out: &mut Vec<ZoomEvent>) {
        let translate = self.clamp_translate(self.state.translate, self.state.scale);
        if translate != self.state.translate {
            self.state.translate = translate;
            out.push(ZoomEvent::Changed(self.state));
        }
    }
}

#[cfg(test)]
mod tests {
    use fingertip_gesture::PanUpdate;

    use super::*;

    fn viewport() -> PinchZoom {
        let mut zoom = PinchZoom::new(ZoomConfig::default()).unwrap();
        zoom.set_container_size(Size::new(400.0, 400.0));
        zoom
    }

    fn pinch(scale: f64, center: Point) -> PinchUpdate {
        PinchUpdate {
            scale,
            center,
            distance: 100.0 * scale,
            start_distance: 100.0,
        }
    }

    fn start(zoom: &mut PinchZoom) {
        zoom.handle(
            &GestureEvent::PinchStart {
                center: Point::new(200.0, 200.0),
                distance: 100.0,
            },
            0,
        );
    }

    #[test]
    fn pinch_at_center_scales_without_translation() {
        let mut zoom = viewport();
        start(&mut zoom);
        assert!(zoom.state().is_zooming);
        zoom.handle(&GestureEvent::Pinch(pinch(2.0, Point::new(200.0, 200.0))), 10);
        assert_eq!(zoom.state().scale, 2.0);
        assert_eq!(zoom.state().translate, Vec2::ZERO);
    }

    #[test]
    fn off_center_pinch_compensates_translation() {
        let mut zoom = viewport();
        start(&mut zoom);
        zoom.handle(&GestureEvent::Pinch(pinch(2.0, Point::new(300.0, 200.0))), 10);
        assert_eq!(zoom.state().translate, Vec2::new(-100.0, 0.0));
        // The content point that was under the fingers stays there.
        let under = zoom.content_transform() * Point::new(300.0, 200.0);
        assert!((under - Point::new(300.0, 200.0)).hypot() < 1e-9);
    }

    #[test]
    fn translation_is_bounded_by_scaled_content() {
        let mut zoom = viewport();
        start(&mut zoom);
        zoom.handle(&GestureEvent::Pinch(pinch(1.5, Point::new(0.0, 0.0))), 10);
        // At 1.5x the 400px content overhangs by 100px on each side.
        assert_eq!(zoom.translation_bounds(), Vec2::new(100.0, 100.0));
        assert_eq!(zoom.state().translate, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn pinch_end_clears_zooming_flag() {
        let mut zoom = viewport();
        start(&mut zoom);
        let events = zoom.handle(
            &GestureEvent::PinchEnd(pinch(1.2, Point::new(200.0, 200.0))),
            20,
        );
        assert_eq!(events.last(), Some(&ZoomEvent::PinchEnded));
        assert!(!zoom.state().is_zooming);
        assert!((zoom.state().scale - 1.2).abs() < 1e-12);
    }

    #[test]
    fn programmatic_zoom_animates_until_deadline() {
        let mut zoom = viewport();
        zoom.zoom_in(1_000);
        assert_eq!(zoom.state().scale, 1.5);
        assert!(zoom.state().is_animating);
        assert_eq!(zoom.next_deadline(), Some(1_300));
        assert!(zoom.poll(1_299).is_empty());
        let events = zoom.poll(1_300);
        assert_eq!(events.len(), 1);
        assert!(!zoom.state().is_animating);
    }

    #[test]
    fn unbounded_animation_stays_pending() {
        let mut zoom = PinchZoom::new(ZoomConfig {
            animation_ms: u64::MAX,
            ..ZoomConfig::default()
        })
        .unwrap();
        zoom.zoom_in(1_000);
        assert_eq!(zoom.next_deadline(), Some(u64::MAX));
        assert!(zoom.poll(1_000_000).is_empty());
        assert!(zoom.state().is_animating);
    }

    #[test]
    fn zoom_steps_stop_at_limits() {
        let mut zoom = viewport();
        for t in 0..10 {
            zoom.zoom_out(t * 1_000);
        }
        assert_eq!(zoom.state().scale, 0.5);
        assert!(zoom.zoom_out(20_000).is_empty());
    }

    #[test]
    fn panning_only_moves_zoomed_content() {
        let mut zoom = viewport();
        let pan = |dx: f64| {
            GestureEvent::Pan(PanUpdate {
                position: Point::new(200.0 + dx, 200.0),
                delta: Vec2::new(dx, 0.0),
                distance: dx.abs(),
                velocity: 0.1,
            })
        };
        let pan_start = GestureEvent::PanStart {
            origin: Point::new(200.0, 200.0),
        };
        zoom.handle(&pan_start, 0);
        assert!(!zoom.is_panning());
        assert!(zoom.handle(&pan(50.0), 10).is_empty());

        zoom.set_zoom(2.0, 100);
        zoom.handle(&pan_start, 500);
        assert!(zoom.is_panning());
        zoom.handle(&pan(50.0), 510);
        assert_eq!(zoom.state().translate, Vec2::new(50.0, 0.0));
        assert!(!zoom.state().is_animating);
        zoom.handle(&pan(500.0), 520);
        assert_eq!(zoom.state().translate, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn shrinking_container_reclamps_translation() {
        let mut zoom = viewport();
        zoom.set_content_size(Size::new(400.0, 400.0));
        zoom.set_zoom(2.0, 0);
        zoom.handle(
            &GestureEvent::PanStart {
                origin: Point::ORIGIN,
            },
            500,
        );
        zoom.handle(
            &GestureEvent::PanEnd(PanUpdate {
                position: Point::new(150.0, 0.0),
                delta: Vec2::new(150.0, 0.0),
                distance: 150.0,
                velocity: 0.1,
            }),
            510,
        );
        assert_eq!(zoom.state().translate.x, 150.0);
        let events = zoom.set_container_size(Size::new(600.0, 400.0));
        assert_eq!(events.len(), 1);
        assert_eq!(zoom.state().translate.x, 100.0);
    }
}
