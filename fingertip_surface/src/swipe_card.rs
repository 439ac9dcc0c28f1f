// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fingertip_gesture::geometry::clamp;
use fingertip_gesture::{ConfigError, GestureConfig, GestureEvent, GestureRecognizer, TouchEvent};
use fingertip_swipe::{DragPhase, SwipeConfig, SwipeDirection, SwipeEvent, SwipeRecognizer};

use crate::callbacks::SwipeCallbacks;
use crate::capability::{CapabilityContext, HapticPattern, Haptics, NoHaptics};
use crate::press::{ClickGuard, PressFeedback, Ripple};
use crate::transform::{Transform, Transition, VisualState};
use crate::{RIPPLE_MS, earliest};

/// The action panel exposed while a card is dragged.
///
/// Named after the swipe that would perform it: dragging the card to the left
/// uncovers the panel for [`RevealedAction::Left`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealedAction {
    /// The card is pulled left.
    Left,
    /// The card is pulled right.
    Right,
}

/// A card or list item that can be swiped away horizontally.
#[derive(Debug)]
pub struct SwipeCard<C, H = NoHaptics> {
    gestures: GestureRecognizer,
    swipe: SwipeRecognizer,
    press: PressFeedback,
    click: ClickGuard,
    capabilities: CapabilityContext<H>,
    callbacks: C,
}

impl<C: SwipeCallbacks, H: Haptics> SwipeCard<C, H> {
    /// Creates a card, rejecting invalid configurations.
    pub fn new(
        gesture: GestureConfig,
        swipe: SwipeConfig,
        callbacks: C,
        capabilities: CapabilityContext<H>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(
            GestureRecognizer::new(gesture)?,
            SwipeRecognizer::new(swipe)?,
            callbacks,
            capabilities,
        ))
    }

    pub(crate) fn from_parts(
        gestures: GestureRecognizer,
        swipe: SwipeRecognizer,
        callbacks: C,
        capabilities: CapabilityContext<H>,
    ) -> Self {
        let click = ClickGuard::new(gestures.config().tap_move_threshold);
        Self {
            gestures,
            swipe,
            press: PressFeedback::new(RIPPLE_MS),
            click,
            capabilities,
            callbacks,
        }
    }

    /// Feeds one raw touch event.
    pub fn handle_touch(&mut self, event: &TouchEvent) {
        self.press.handle(event);
        self.click.handle(event);
        for gesture in self.gestures.handle(event) {
            self.route(&gesture, event.timestamp);
        }
    }

    /// Fires timers due at `now`.
    pub fn poll(&mut self, now: u64) {
        self.press.poll(now);
        for gesture in self.gestures.poll(now) {
            self.route(&gesture, now);
        }
        for event in self.swipe.poll(now) {
            self.react(event);
        }
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        earliest([
            self.gestures.next_deadline(),
            self.swipe.next_deadline(),
            self.press.next_deadline(),
        ])
    }

    /// Drops the session, any animation, and all timers without callbacks.
    pub fn teardown(&mut self) {
        self.gestures.reset();
        self.swipe.reset();
        self.press.clear();
    }

    /// Current drag phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.swipe.phase()
    }

    /// Current horizontal offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.swipe.state().offset
    }

    /// The committed direction while the exit animation runs.
    #[must_use]
    pub fn committed_action(&self) -> Option<SwipeDirection> {
        self.swipe.state().committed_action
    }

    /// The action panel uncovered by the current drag, if any.
    #[must_use]
    pub fn revealed_action(&self) -> Option<RevealedAction> {
        if self.phase() != DragPhase::Dragging {
            return None;
        }
        match SwipeDirection::from_offset(self.offset())? {
            SwipeDirection::Left => Some(RevealedAction::Left),
            SwipeDirection::Right => Some(RevealedAction::Right),
        }
    }

    /// How far the revealed action is toward committing, in `[0, 1]`.
    #[must_use]
    pub fn reveal_progress(&self) -> f64 {
        clamp(
            self.offset().abs() / self.swipe.config().threshold,
            0.0,
            1.0,
        )
    }

    /// Visual tri-state.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        self.phase().into()
    }

    /// Transform to apply to the card.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::offset_x(self.offset())
    }

    /// Transition to apply to the card.
    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition::for_state(
            self.visual_state(),
            self.swipe.config().settle_ms,
            self.capabilities.reduced_motion(),
        )
    }

    /// Returns `true` while a finger is on the card.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_pressed()
    }

    /// Live press ripples.
    #[must_use]
    pub fn ripples(&self) -> &[Ripple] {
        self.press.ripples()
    }

    /// Returns `false` if the host's trailing click should be ignored.
    #[must_use]
    pub fn allows_click(&self) -> bool {
        !self.click.should_suppress()
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

    fn route(&mut self, gesture: &GestureEvent, now: u64) {
        if let GestureEvent::Tap { point } = *gesture {
            self.callbacks.on_tap(point);
        }
        for event in self.swipe.handle(gesture, now) {
            self.react(event);
        }
    }

    fn react(&mut self, event: SwipeEvent) {
        if let SwipeEvent::Committed { direction, .. } = event {
            self.capabilities.vibrate(HapticPattern::Medium);
            match direction {
                SwipeDirection::Left => self.callbacks.on_swipe_left(),
                SwipeDirection::Right => self.callbacks.on_swipe_right(),
            }
        }
    }
}
