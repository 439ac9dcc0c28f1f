// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use fingertip_gesture::geometry::{clamp, resist};
use fingertip_gesture::{ConfigError, GestureEvent, PanUpdate};
use fingertip_timing::TimerQueue;

use crate::DragPhase;
use crate::config::PullToRefreshConfig;

/// Identifies one refresh request; pass it back to [`PullToRefresh::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Failure reported by the application's refresh work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshError {
    message: String,
}

impl RefreshError {
    /// Wraps a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "refresh failed: {}", self.message)
    }
}

impl core::error::Error for RefreshError {}

/// Output of a [`PullToRefresh`].
#[derive(Clone, Debug, PartialEq)]
pub enum PullEvent {
    /// A downward pull took over the surface.
    DragStarted,
    /// The pull offset changed.
    Moved {
        /// New resisted offset.
        offset: f64,
        /// `offset / threshold`, clamped to `[0, 1]`.
        progress: f64,
    },
    /// The release committed; run the refresh and report back with this ticket.
    RefreshRequested(RefreshTicket),
    /// The refresh succeeded and the indicator closed.
    Refreshed,
    /// The refresh failed and the indicator closed.
    RefreshFailed(RefreshError),
    /// The release did not commit; the indicator snaps back.
    Cancelled,
    /// The snap-back animation finished.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PullTimer {
    Close,
    Settle,
}

#[derive(Clone, Debug)]
struct InFlight {
    ticket: RefreshTicket,
    started_at: u64,
    outcome: Option<Result<(), RefreshError>>,
}

/// Vertical pull-to-refresh on top of the recognizer's pan classification.
///
/// The refresh itself is the application's asynchronous work. A committed
/// pull emits [`PullEvent::RefreshRequested`] and parks in
/// [`DragPhase::Resolving`] until [`resolve`](Self::resolve) is called with the
/// same ticket. The indicator stays open for at least `min_visible_ms` from
/// the start of the refresh so fast refreshes do not flash.
#[derive(Clone, Debug)]
pub struct PullToRefresh {
    config: PullToRefreshConfig,
    phase: DragPhase,
    offset: f64,
    at_top: bool,
    tracking: bool,
    in_flight: Option<InFlight>,
    next_ticket: u64,
    timers: TimerQueue<PullTimer>,
}

impl PullToRefresh {
    /// Creates a pull-to-refresh recognizer, rejecting invalid configurations.
    pub fn new(config: PullToRefreshConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: DragPhase::Idle,
            offset: 0.0,
            at_top: true,
            tracking: false,
            in_flight: None,
            next_ticket: 0,
            timers: TimerQueue::new(),
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &PullToRefreshConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current indicator offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// `offset / threshold`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        clamp(self.offset / self.config.threshold, 0.0, 1.0)
    }

    /// Returns `true` between commit and close.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.phase == DragPhase::Resolving
    }

    /// Returns `true` while any part of the indicator is showing.
    #[must_use]
    pub fn is_indicator_visible(&self) -> bool {
        self.is_refreshing() || self.offset > 0.0
    }

    /// Tells the recognizer whether the scroll container is at its top.
    ///
    /// Pulls only begin at the top; elsewhere the pan belongs to scrolling.
    pub fn set_at_top(&mut self, at_top: bool) {
        self.at_top = at_top;
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Processes one classified gesture at time `now`.
    pub fn handle(&mut self, event: &GestureEvent, now: u64) -> Vec<PullEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        match event {
            GestureEvent::PanStart { .. } => {
                self.tracking = false;
                if self.phase != DragPhase::Idle {
                    log::trace!("pull ignored during {:?}", self.phase);
                }
            }
            GestureEvent::Pan(update) => self.drag(update, &mut out),
            GestureEvent::PanEnd(update) => {
                self.drag(update, &mut out);
                if self.tracking {
                    self.release(update.velocity, now, &mut out);
                }
                self.tracking = false;
            }
            GestureEvent::Cancelled { .. } => {
                if self.tracking {
                    self.snap_back(now, &mut out);
                }
                self.tracking = false;
            }
            _ => {}
        }
        out
    }

    /// Reports the outcome of the refresh identified by `ticket`.
    ///
    /// Stale tickets (already resolved, or issued before a
    /// [`teardown`](Self::teardown)) are ignored. A failure still closes the
    /// indicator; it is surfaced as [`PullEvent::RefreshFailed`].
    pub fn resolve(
        &mut self,
        ticket: RefreshTicket,
        outcome: Result<(), RefreshError>,
        now: u64,
    ) -> Vec<PullEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        let Some(in_flight) = self
            .in_flight
            .as_mut()
            .filter(|f| f.ticket == ticket && f.outcome.is_none())
        else {
            log::warn!("stale refresh ticket {ticket:?} ignored");
            return out;
        };
        if let Err(err) = &outcome {
            log::warn!("{err}");
        }
        in_flight.outcome = Some(outcome);
        let close_at = in_flight.started_at.saturating_add(self.config.min_visible_ms);
        if now >= close_at {
            self.close(&mut out);
        } else {
            self.timers.schedule(PullTimer::Close, close_at);
        }
        out
    }

    /// Fires timers due at `now`.
    pub fn poll(&mut self, now: u64) -> Vec<PullEvent> {
        let mut out = Vec::new();
        self.poll_into(now, &mut out);
        out
    }

    /// Abandons any pull or in-flight refresh without events.
    ///
    /// Tickets issued before teardown become stale.
    pub fn teardown(&mut self) {
        self.phase = DragPhase::Idle;
        self.offset = 0.0;
        self.tracking = false;
        self.in_flight = None;
        self.timers.clear();
    }

    fn poll_into(&mut self, now: u64, out: &mut Vec<PullEvent>) {
        while let Some((timer, _)) = self.timers.pop_due(now) {
            match timer {
                PullTimer::Close => self.close(out),
                PullTimer::Settle => {
                    self.phase = DragPhase::Idle;
                    out.push(PullEvent::Settled);
                }
            }
        }
    }

    fn drag(&mut self, update: &PanUpdate, out: &mut Vec<PullEvent>) {
        if !self.tracking {
            let downward = update.delta.y > 0.0 && update.delta.y >= update.delta.x.abs();
            if self.phase != DragPhase::Idle || !self.at_top || !downward {
                return;
            }
            self.tracking = true;
            self.phase = DragPhase::Dragging;
            out.push(PullEvent::DragStarted);
        }
        let offset = resist(
            update.delta.y.max(0.0),
            self.config.max_pull_distance,
            self.config.resistance_factor,
        );
        if offset != self.offset {
            self.offset = offset;
            out.push(PullEvent::Moved {
                offset,
                progress: self.progress(),
            });
        }
    }

    fn release(&mut self, velocity: f64, now: u64, out: &mut Vec<PullEvent>) {
        let commit = self.offset > 0.0
            && self
                .config
                .commit_rule()
                .should_commit(self.offset, velocity);
        if !commit {
            self.snap_back(now, out);
            return;
        }
        let ticket = RefreshTicket(self.next_ticket);
        self.next_ticket += 1;
        log::debug!("pull committed at {}, refresh {ticket:?}", self.offset);
        self.phase = DragPhase::Resolving;
        self.offset = self.config.threshold;
        self.in_flight = Some(InFlight {
            ticket,
            started_at: now,
            outcome: None,
        });
        out.push(PullEvent::RefreshRequested(ticket));
    }

    fn snap_back(&mut self, now: u64, out: &mut Vec<PullEvent>) {
        self.phase = DragPhase::Cancelling;
        self.offset = 0.0;
        self.timers
            .schedule(PullTimer::Settle, now.saturating_add(self.config.settle_ms));
        out.push(PullEvent::Cancelled);
    }

    fn close(&mut self, out: &mut Vec<PullEvent>) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        self.phase = DragPhase::Idle;
        self.offset = 0.0;
        match in_flight.outcome {
            Some(Err(err)) => out.push(PullEvent::RefreshFailed(err)),
            _ => out.push(PullEvent::Refreshed),
        }
    }
}
