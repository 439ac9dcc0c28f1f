// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

use crate::event::{GestureFamily, PanUpdate, PinchUpdate, TouchId, TouchPoint};
use crate::geometry::{distance, midpoint};

/// State of one continuous touch interaction, first finger down to last finger up.
///
/// A session tracks at most two fingers. It is owned by a single
/// [`GestureRecognizer`](crate::GestureRecognizer) and discarded when the last
/// tracked finger lifts or the session is cancelled.
#[derive(Clone, Debug)]
pub struct GestureSession {
    start_points: SmallVec<[TouchPoint; 2]>,
    current_points: SmallVec<[TouchPoint; 2]>,
    start_time: u64,
    pub(crate) family: GestureFamily,
    pub(crate) max_movement: f64,
    pub(crate) pan_origin: Point,
    pub(crate) pan_origin_time: u64,
    pub(crate) pinch_start_distance: f64,
    pub(crate) pinch_engaged: bool,
    pub(crate) last_pinch: Option<PinchUpdate>,
}

impl GestureSession {
    pub(crate) fn new(first: TouchPoint, start_time: u64) -> Self {
        let mut start_points = SmallVec::new();
        start_points.push(first);
        Self {
            current_points: start_points.clone(),
            start_points,
            start_time,
            family: GestureFamily::None,
            max_movement: 0.0,
            pan_origin: first.position,
            pan_origin_time: start_time,
            pinch_start_distance: 0.0,
            pinch_engaged: false,
            last_pinch: None,
        }
    }

    /// Where each tracked finger landed.
    #[must_use]
    pub fn start_points(&self) -> &[TouchPoint] {
        &self.start_points
    }

    /// Latest sample of each tracked finger.
    #[must_use]
    pub fn current_points(&self) -> &[TouchPoint] {
        &self.current_points
    }

    /// When the first finger landed.
    #[must_use]
    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    /// The family this session has committed to, if any.
    #[must_use]
    pub fn family(&self) -> GestureFamily {
        self.family
    }

    /// Largest distance the first finger has strayed from where it landed.
    #[must_use]
    pub fn max_movement(&self) -> f64 {
        self.max_movement
    }

    pub(crate) fn tracks(&self, id: TouchId) -> bool {
        self.current_points.iter().any(|p| p.id == id)
    }

    pub(crate) fn add_point(&mut self, point: TouchPoint) {
        self.start_points.push(point);
        self.current_points.push(point);
    }

    /// Records a new sample for a tracked finger. Returns `false` for untracked ids.
    pub(crate) fn update_point(&mut self, point: TouchPoint) -> bool {
        let Some(current) = self.current_points.iter_mut().find(|p| p.id == point.id) else {
            return false;
        };
        *current = point;
        if self.family != GestureFamily::None {
            return true;
        }
        if let Some(start) = self.start_points.iter().find(|p| p.id == point.id) {
            self.max_movement = self
                .max_movement
                .max(distance(start.position, point.position));
        }
        true
    }

    /// Records the final sample of a lifted finger and stops tracking it.
    pub(crate) fn remove_point(&mut self, point: TouchPoint) -> Option<TouchPoint> {
        if !self.update_point(point) {
            return None;
        }
        let i = self.current_points.iter().position(|p| p.id == point.id)?;
        let removed = self.current_points.remove(i);
        self.start_points.retain(|p| p.id != point.id);
        Some(removed)
    }

    /// Movement of the first tracked finger from where it landed.
    pub(crate) fn primary_movement(&self) -> f64 {
        match (self.start_points.first(), self.current_points.first()) {
            (Some(start), Some(current)) => distance(start.position, current.position),
            _ => 0.0,
        }
    }

    pub(crate) fn primary_position(&self) -> Option<Point> {
        self.current_points.first().map(|p| p.position)
    }

    pub(crate) fn begin_pan(&mut self, origin: Point, now: u64) {
        self.family = GestureFamily::Pan;
        self.pan_origin = origin;
        self.pan_origin_time = now;
        self.pinch_engaged = false;
        self.last_pinch = None;
    }

    pub(crate) fn pan_update(&self, position: Point, now: u64) -> PanUpdate {
        let delta = position - self.pan_origin;
        let distance = delta.hypot();
        let elapsed = now.saturating_sub(self.pan_origin_time).max(1);
        let velocity = distance / elapsed as f64;
        PanUpdate {
            position,
            delta,
            distance,
            velocity,
        }
    }

    pub(crate) fn pinch_update(&self) -> Option<PinchUpdate> {
        let [a, b] = [self.current_points.first()?, self.current_points.get(1)?];
        let current = distance(a.position, b.position);
        let scale = if self.pinch_start_distance > 0.0 {
            current / self.pinch_start_distance
        } else {
            1.0
        };
        Some(PinchUpdate {
            scale,
            center: midpoint(a.position, b.position),
            distance: current,
            start_distance: self.pinch_start_distance,
        })
    }
}
