// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture recognizer state machine.
//!
//! ## Classification rules
//!
//! - A single finger that stays within `pan_threshold` and lifts with total
//!   movement under `tap_move_threshold` is a tap candidate. A second
//!   candidate released within `double_tap_window_ms` of the first produces
//!   [`GestureEvent::DoubleTap`]; otherwise [`GestureEvent::Tap`] fires when the
//!   window expires. A third quick tap starts a fresh window.
//! - A single finger that stays still for `long_press_delay_ms` becomes a long
//!   press. Moving beyond `tap_move_threshold` first disarms the long press.
//! - A single finger that travels beyond `pan_threshold` becomes a pan.
//! - A second finger landing while the family is undetermined makes the session
//!   a pinch. Pinch updates start once the spread changes by more than
//!   `pinch_threshold`. Lifting one finger of a pinch degrades the session to a
//!   pan re-based at the remaining finger.
//!
//! Families are terminal: once a session is a pan, pinch, or long press it
//! stays that way until every tracked finger lifts.
//!
//! ## Extra fingers
//!
//! A session tracks at most two fingers. A third finger, or a second finger
//! landing after the session became a pan or long press, is ignored for the
//! rest of the session; its moves and lifts are treated as untracked.

use alloc::vec::Vec;

use fingertip_timing::TimerQueue;
use kurbo::Point;

use crate::config::GestureConfig;
use crate::error::ConfigError;
use crate::event::{GestureEvent, GestureFamily, TouchEvent, TouchPhase, TouchPoint};
use crate::geometry::distance;
use crate::session::GestureSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GestureTimer {
    LongPress,
    TapWindow,
}

#[derive(Clone, Copy, Debug)]
struct PendingTap {
    point: Point,
    released_at: u64,
}

/// Classifies a raw touch stream for one surface into gestures.
///
/// Feed every [`TouchEvent`] to [`handle`](Self::handle) and call
/// [`poll`](Self::poll) once [`next_deadline`](Self::next_deadline) has passed,
/// so long presses and single taps fire even when no further input arrives.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    session: Option<GestureSession>,
    pending_tap: Option<PendingTap>,
    timers: TimerQueue<GestureTimer>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self {
            config: GestureConfig::default(),
            session: None,
            pending_tap: None,
            timers: TimerQueue::new(),
        }
    }
}

impl GestureRecognizer {
    /// Creates a recognizer, rejecting invalid configurations.
    pub fn new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The in-progress session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Family of the in-progress session, or [`GestureFamily::None`].
    #[must_use]
    pub fn active_family(&self) -> GestureFamily {
        self.session
            .as_ref()
            .map_or(GestureFamily::None, GestureSession::family)
    }

    /// Returns `true` while a session is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Number of taps waiting on the double-tap window (`0` or `1`).
    #[must_use]
    pub fn tap_count(&self) -> u8 {
        u8::from(self.pending_tap.is_some())
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Processes one raw touch event.
    ///
    /// Timers due at or before the event's timestamp fire first, so their
    /// gestures precede the ones caused by the event itself.
    pub fn handle(&mut self, event: &TouchEvent) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        self.poll_into(event.timestamp, &mut out);
        match event.phase {
            TouchPhase::Start => self.on_start(event, &mut out),
            TouchPhase::Move => self.on_move(event, &mut out),
            TouchPhase::End => self.on_end(event, &mut out),
            TouchPhase::Cancel => self.cancel_into(&mut out),
        }
        out
    }

    /// Fires every timer due at or before `now`.
    pub fn poll(&mut self, now: u64) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        out
    }

    /// Ends the current session without committing it.
    ///
    /// Emits [`GestureEvent::Cancelled`] if a family was active. A tap still
    /// waiting on its double-tap window belongs to an earlier session and is
    /// kept.
    pub fn cancel(&mut self) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        self.cancel_into(&mut out);
        out
    }

    /// Tears everything down silently: session, pending tap, and timers.
    ///
    /// Call this when the surface goes away so no late timer fires against it.
    pub fn reset(&mut self) {
        self.session = None;
        self.pending_tap = None;
        self.timers.clear();
    }

    fn poll_into(&mut self, now: u64, out: &mut Vec<GestureEvent>) {
        while let Some((timer, deadline)) = self.timers.pop_due(now) {
            match timer {
                GestureTimer::TapWindow => {
                    if let Some(tap) = self.pending_tap.take() {
                        out.push(GestureEvent::Tap { point: tap.point });
                    }
                }
                GestureTimer::LongPress => self.fire_long_press(deadline, out),
            }
        }
    }

    fn fire_long_press(&mut self, fired_at: u64, out: &mut Vec<GestureEvent>) {
        let undetermined = self.session.as_ref().is_some_and(|s| {
            s.family == GestureFamily::None && s.current_points().len() == 1
        });
        if !undetermined {
            return;
        }
        flush_pending_tap(&mut self.pending_tap, &mut self.timers, out);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(point) = session.primary_position() else {
            return;
        };
        session.family = GestureFamily::LongPress;
        log::debug!("long press at {point:?}");
        out.push(GestureEvent::LongPress {
            point,
            duration_ms: fired_at.saturating_sub(session.start_time()),
        });
    }

    fn on_start(&mut self, event: &TouchEvent, out: &mut Vec<GestureEvent>) {
        let now = event.timestamp;
        let landed = if event.changed.is_empty() {
            &event.touches
        } else {
            &event.changed
        };
        let Some(&first) = landed.first() else {
            log::trace!("touch start without points ignored");
            return;
        };

        if self.session.is_none() {
            self.session = Some(GestureSession::new(first, now));
            match landed.get(1) {
                Some(&second) => self.begin_pinch(second, out),
                None => self.timers.schedule(
                    GestureTimer::LongPress,
                    now.saturating_add(self.config.long_press_delay_ms),
                ),
            }
            return;
        }
        let Some(session) = self.session.as_ref() else {
            return;
        };

        let family = session.family;
        let single = session.current_points().len() == 1;
        let joining = landed.iter().copied().find(|p| !session.tracks(p.id));
        match joining {
            Some(second) if family == GestureFamily::None && single => {
                self.begin_pinch(second, out);
            }
            _ => log::trace!("extra finger ignored for {family:?} session"),
        }
    }

    fn begin_pinch(&mut self, second: TouchPoint, out: &mut Vec<GestureEvent>) {
        flush_pending_tap(&mut self.pending_tap, &mut self.timers, out);
        self.timers.cancel(&GestureTimer::LongPress);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.add_point(second);
        session.family = GestureFamily::Pinch;
        session.pinch_start_distance = match session.current_points() {
            [a, b, ..] => distance(a.position, b.position),
            _ => 0.0,
        };
        log::debug!(
            "pinch activated, start distance {}",
            session.pinch_start_distance
        );
    }

    fn on_move(&mut self, event: &TouchEvent, out: &mut Vec<GestureEvent>) {
        let now = event.timestamp;
        let Some(session) = self.session.as_mut() else {
            log::trace!("move without a session ignored");
            return;
        };
        let changed = if event.changed.is_empty() {
            &event.touches
        } else {
            &event.changed
        };
        for point in &event.touches {
            session.update_point(*point);
        }
        let mut tracked = false;
        for point in changed {
            tracked |= session.update_point(*point);
        }
        if !tracked {
            log::trace!("move for untracked touches ignored");
            return;
        }

        match session.family {
            GestureFamily::None => {
                let moved = session.primary_movement();
                if moved > self.config.pan_threshold {
                    let Some(position) = session.primary_position() else {
                        return;
                    };
                    let origin = session.start_points()[0].position;
                    let started = session.start_time();
                    session.begin_pan(origin, started);
                    log::debug!("pan activated after {moved}px");
                    let update = session.pan_update(position, now);
                    self.timers.cancel(&GestureTimer::LongPress);
                    flush_pending_tap(&mut self.pending_tap, &mut self.timers, out);
                    out.push(GestureEvent::PanStart { origin });
                    out.push(GestureEvent::Pan(update));
                } else if session.max_movement >= self.config.tap_move_threshold {
                    self.timers.cancel(&GestureTimer::LongPress);
                }
            }
            GestureFamily::Pan => {
                if let Some(position) = session.primary_position() {
                    out.push(GestureEvent::Pan(session.pan_update(position, now)));
                }
            }
            GestureFamily::Pinch => {
                let Some(mut update) = session.pinch_update() else {
                    return;
                };
                if !session.pinch_engaged
                    && (update.distance - update.start_distance).abs() > self.config.pinch_threshold
                {
                    session.pinch_engaged = true;
                    if session.pinch_start_distance <= 0.0 {
                        // Fingers landed on the same spot; scale from here instead.
                        session.pinch_start_distance = update.distance;
                        let Some(rebased) = session.pinch_update() else {
                            return;
                        };
                        update = rebased;
                    }
                    out.push(GestureEvent::PinchStart {
                        center: update.center,
                        distance: update.start_distance,
                    });
                }
                if session.pinch_engaged {
                    session.last_pinch = Some(update);
                    out.push(GestureEvent::Pinch(update));
                }
            }
            GestureFamily::LongPress => {}
        }
    }

    fn on_end(&mut self, event: &TouchEvent, out: &mut Vec<GestureEvent>) {
        let now = event.timestamp;
        let Some(session) = self.session.as_mut() else {
            log::trace!("end without a session ignored");
            return;
        };
        let mut lifted = None;
        for point in &event.changed {
            if let Some(removed) = session.remove_point(*point) {
                lifted = Some(removed);
            }
        }
        let Some(lifted) = lifted else {
            log::trace!("end for untracked touches ignored");
            return;
        };

        if !session.current_points().is_empty() {
            if session.family == GestureFamily::Pinch {
                if session.pinch_engaged {
                    if let Some(last) = session.last_pinch {
                        out.push(GestureEvent::PinchEnd(last));
                    }
                }
                if let Some(origin) = session.primary_position() {
                    session.begin_pan(origin, now);
                    log::debug!("pinch degraded to pan at {origin:?}");
                    out.push(GestureEvent::PanStart { origin });
                }
            }
            return;
        }

        self.timers.cancel(&GestureTimer::LongPress);
        if let Some(session) = self.session.take() {
            self.finish(&session, lifted, now, out);
        }
    }

    fn finish(
        &mut self,
        session: &GestureSession,
        lifted: TouchPoint,
        now: u64,
        out: &mut Vec<GestureEvent>,
    ) {
        match session.family {
            GestureFamily::Pan => {
                out.push(GestureEvent::PanEnd(
                    session.pan_update(lifted.position, now),
                ));
            }
            GestureFamily::Pinch => {
                if let Some(last) = session.last_pinch.filter(|_| session.pinch_engaged) {
                    out.push(GestureEvent::PinchEnd(last));
                }
            }
            GestureFamily::LongPress => {}
            GestureFamily::None => {
                if session.max_movement >= self.config.tap_move_threshold {
                    log::trace!("release after {}px is not a tap", session.max_movement);
                    return;
                }
                self.tap_released(lifted.position, now, out);
            }
        }
    }

    fn tap_released(&mut self, point: Point, now: u64, out: &mut Vec<GestureEvent>) {
        if let Some(previous) = self.pending_tap.take() {
            self.timers.cancel(&GestureTimer::TapWindow);
            let interval_ms = now.saturating_sub(previous.released_at);
            if interval_ms < self.config.double_tap_window_ms {
                out.push(GestureEvent::DoubleTap { point, interval_ms });
                return;
            }
            out.push(GestureEvent::Tap {
                point: previous.point,
            });
        }
        self.pending_tap = Some(PendingTap {
            point,
            released_at: now,
        });
        self.timers.schedule(
            GestureTimer::TapWindow,
            now.saturating_add(self.config.double_tap_window_ms),
        );
    }

    fn cancel_into(&mut self, out: &mut Vec<GestureEvent>) {
        self.timers.cancel(&GestureTimer::LongPress);
        if let Some(session) = self.session.take() {
            log::debug!("session cancelled during {:?}", session.family);
            if session.family != GestureFamily::None {
                out.push(GestureEvent::Cancelled {
                    family: session.family,
                });
            }
        }
    }
}

/// A pending single tap can no longer pair up once another family activates.
fn flush_pending_tap(
    pending: &mut Option<PendingTap>,
    timers: &mut TimerQueue<GestureTimer>,
    out: &mut Vec<GestureEvent>,
) {
    if let Some(tap) = pending.take() {
        timers.cancel(&GestureTimer::TapWindow);
        out.push(GestureEvent::Tap { point: tap.point });
    }
}
