// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use fingertip_gesture::geometry::{angle_degrees, resist};
use fingertip_gesture::{ConfigError, GestureEvent, PanUpdate};
use fingertip_timing::TimerQueue;
use kurbo::Point;

use crate::DragPhase;
use crate::commit::SwipeDirection;
use crate::config::SwipeConfig;

/// Offset and committed action of one swipeable surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeActionState {
    /// Current (resisted) horizontal offset.
    pub offset: f64,
    /// Set from commit until the exit animation settles.
    pub committed_action: Option<SwipeDirection>,
}

/// Output of a [`SwipeRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeEvent {
    /// A horizontal drag took over the surface.
    DragStarted,
    /// The offset changed while dragging.
    Moved {
        /// New resisted offset.
        offset: f64,
    },
    /// The release committed; the surface slides out.
    Committed {
        /// Which way it was swiped.
        direction: SwipeDirection,
        /// Release velocity in px/ms.
        velocity: f64,
    },
    /// The release did not commit; the surface snaps back to `0`.
    Cancelled,
    /// The commit or snap-back animation finished and the state reset.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tracking {
    Idle,
    Undecided,
    Active,
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SwipeTimer {
    Settle,
}

/// Horizontal swipe-to-act on top of the recognizer's pan classification.
///
/// Feed it the [`GestureEvent`]s of the surface's recognizer. Vertical-ish
/// pans are left alone so the host can scroll.
#[derive(Clone, Debug)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    phase: DragPhase,
    state: SwipeActionState,
    tracking: Tracking,
    timers: TimerQueue<SwipeTimer>,
}

impl SwipeRecognizer {
    /// Creates a swipe recognizer, rejecting invalid configurations.
    pub fn new(config: SwipeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: DragPhase::Idle,
            state: SwipeActionState::default(),
            tracking: Tracking::Idle,
            timers: TimerQueue::new(),
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current offset and committed action.
    #[must_use]
    pub fn state(&self) -> SwipeActionState {
        self.state
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Processes one classified gesture at time `now`.
    pub fn handle(&mut self, event: &GestureEvent, now: u64) -> Vec<SwipeEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        match event {
            GestureEvent::PanStart { .. } => {
                self.tracking = if self.phase == DragPhase::Idle {
                    Tracking::Undecided
                } else {
                    log::trace!("swipe ignored during {:?}", self.phase);
                    Tracking::Ignored
                };
            }
            GestureEvent::Pan(update) => self.drag(update, &mut out),
            GestureEvent::PanEnd(update) => {
                self.drag(update, &mut out);
                if self.tracking == Tracking::Active {
                    self.release(update.velocity, now, &mut out);
                }
                self.tracking = Tracking::Idle;
            }
            GestureEvent::Cancelled { .. } => {
                if self.tracking == Tracking::Active {
                    self.snap_back(now, &mut out);
                }
                self.tracking = Tracking::Idle;
            }
            _ => {}
        }
        out
    }

    /// Finishes a commit or snap-back animation that is due at `now`.
    pub fn poll(&mut self, now: u64) -> Vec<SwipeEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        out
    }

    /// Drops any drag or animation and returns to idle without events.
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.state = SwipeActionState::default();
        self.tracking = Tracking::Idle;
        self.timers.clear();
    }

    fn poll_into(&mut self, now: u64, out: &mut Vec<SwipeEvent>) {
        while let Some((SwipeTimer::Settle, _)) = self.timers.pop_due(now) {
            log::debug!("swipe settled from {:?}", self.phase);
            self.phase = DragPhase::Idle;
            self.state = SwipeActionState::default();
            out.push(SwipeEvent::Settled);
        }
    }

    fn drag(&mut self, update: &PanUpdate, out: &mut Vec<SwipeEvent>) {
        if self.tracking == Tracking::Undecided {
            let angle = angle_degrees(Point::ORIGIN, Point::ORIGIN + update.delta).abs();
            let lock = self.config.axis_lock_degrees;
            if angle <= lock || angle >= 180.0 - lock {
                self.tracking = Tracking::Active;
                self.phase = DragPhase::Dragging;
                out.push(SwipeEvent::DragStarted);
            } else {
                log::trace!("pan at {angle} degrees is not a horizontal swipe");
                self.tracking = Tracking::Ignored;
            }
        }
        if self.tracking != Tracking::Active {
            return;
        }
        let offset = resist(
            update.delta.x,
            self.config.threshold,
            self.config.resistance_factor,
        );
        if offset != self.state.offset {
            self.state.offset = offset;
            out.push(SwipeEvent::Moved { offset });
        }
    }

    fn release(&mut self, velocity: f64, now: u64, out: &mut Vec<SwipeEvent>) {
        let offset = self.state.offset;
        let direction = SwipeDirection::from_offset(offset);
        match direction {
            Some(direction) if self.config.commit_rule().should_commit(offset, velocity) => {
                log::debug!("swipe committed {direction:?} at {offset} ({velocity} px/ms)");
                self.phase = DragPhase::Committing;
                self.state = SwipeActionState {
                    offset: direction.sign() * self.config.exit_offset,
                    committed_action: Some(direction),
                };
                self.timers
                    .schedule(SwipeTimer::Settle, now.saturating_add(self.config.settle_ms));
                out.push(SwipeEvent::Committed {
                    direction,
                    velocity,
                });
            }
            _ => self.snap_back(now, out),
        }
    }

    fn snap_back(&mut self, now: u64, out: &mut Vec<SwipeEvent>) {
        self.phase = DragPhase::Cancelling;
        self.state = SwipeActionState::default();
        self.timers
            .schedule(SwipeTimer::Settle, now.saturating_add(self.config.settle_ms));
        out.push(SwipeEvent::Cancelled);
    }
}
