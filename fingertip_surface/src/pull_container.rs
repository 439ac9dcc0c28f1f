// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fingertip_gesture::{ConfigError, GestureConfig, GestureRecognizer, TouchEvent};
use fingertip_swipe::{
    DragPhase, PullEvent, PullToRefresh, PullToRefreshConfig, RefreshError, RefreshTicket,
};

use crate::callbacks::RefreshCallbacks;
use crate::capability::{CapabilityContext, HapticPattern, Haptics, NoHaptics};
use crate::earliest;
use crate::transform::{Transform, Transition, VisualState};

/// A scroll container with a pull-to-refresh indicator.
///
/// The host reports scroll position with [`set_at_top`](Self::set_at_top)
/// and completes refreshes with [`resolve`](Self::resolve). Until then the
/// container stays in [`DragPhase::Resolving`] and ignores new pulls.
#[derive(Debug)]
pub struct PullContainer<C, H = NoHaptics> {
    gestures: GestureRecognizer,
    pull: PullToRefresh,
    capabilities: CapabilityContext<H>,
    callbacks: C,
}

impl<C: RefreshCallbacks, H: Haptics> PullContainer<C, H> {
    /// Creates a container, rejecting invalid configurations.
    pub fn new(
        gesture: GestureConfig,
        pull: PullToRefreshConfig,
        callbacks: C,
        capabilities: CapabilityContext<H>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            gestures: GestureRecognizer::new(gesture)?,
            pull: PullToRefresh::new(pull)?,
            capabilities,
            callbacks,
        })
    }

    /// Tells the container whether its content is scrolled to the top.
    pub fn set_at_top(&mut self, at_top: bool) {
        self.pull.set_at_top(at_top);
    }

    /// Feeds one raw touch event.
    pub fn handle_touch(&mut self, event: &TouchEvent) {
        for gesture in self.gestures.handle(event) {
            for pull in self.pull.handle(&gesture, event.timestamp) {
                self.react(pull);
            }
        }
    }

    /// Completes the refresh identified by `ticket`.
    pub fn resolve(
        &mut self,
        ticket: RefreshTicket,
        outcome: Result<(), RefreshError>,
        now: u64,
    ) {
        for pull in self.pull.resolve(ticket, outcome, now) {
            self.react(pull);
        }
    }

    /// Fires timers due at `now`.
    pub fn poll(&mut self, now: u64) {
        for gesture in self.gestures.poll(now) {
            for pull in self.pull.handle(&gesture, now) {
                self.react(pull);
            }
        }
        for pull in self.pull.poll(now) {
            self.react(pull);
        }
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        earliest([self.gestures.next_deadline(), self.pull.next_deadline()])
    }

    /// Abandons the session and any in-flight refresh without callbacks.
    pub fn teardown(&mut self) {
        self.gestures.reset();
        self.pull.teardown();
    }

    /// Current drag phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.pull.phase()
    }

    /// Current indicator offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.pull.offset()
    }

    /// Indicator progress toward the refresh threshold, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.pull.progress()
    }

    /// Returns `true` while a refresh is in flight or closing.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.pull.is_refreshing()
    }

    /// Visual tri-state.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        self.phase().into()
    }

    /// Transform to apply to the content below the indicator.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::offset_y(self.offset())
    }

    /// Transition to apply to the content.
    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition::for_state(
            self.visual_state(),
            self.pull.config().settle_ms,
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

    fn react(&mut self, event: PullEvent) {
        match event {
            PullEvent::RefreshRequested(ticket) => {
                self.capabilities.vibrate(HapticPattern::Medium);
                self.callbacks.on_pull_refresh(ticket);
            }
            PullEvent::Refreshed => self.callbacks.on_refreshed(),
            PullEvent::RefreshFailed(error) => self.callbacks.on_refresh_error(&error),
            _ => {}
        }
    }
}
