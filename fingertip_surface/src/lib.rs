// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fingertip Surface: adapters that bind gesture recognition to a visual surface.
//!
//! Each adapter owns one surface's [`GestureRecognizer`](fingertip_gesture::GestureRecognizer)
//! and one specialization, takes raw [`TouchEvent`](fingertip_gesture::TouchEvent)s,
//! calls application callbacks, and exposes what the host needs to render:
//!
//! - [`SwipeCard`]: horizontal offset, revealed action, swipe callbacks.
//! - [`PullContainer`]: indicator offset and progress, refresh callbacks.
//! - [`ZoomViewport`]: scale and translation, zoom-change callbacks.
//! - [`SwipeList`]: many keyed cards, each with its own session.
//!
//! Every adapter reports a [`VisualState`], a CSS-equivalent [`Transform`], and
//! a [`Transition`] that is `none` while a finger drives the surface and eased
//! otherwise. Haptics and the reduced-motion preference come from the injected
//! [`CapabilityContext`].
//!
//! ```rust
//! use fingertip_gesture::synth::TouchSynth;
//! use fingertip_gesture::GestureConfig;
//! use fingertip_surface::{
//!     Capabilities, CapabilityContext, RevealedAction, SwipeCallbacks, SwipeCard, VisualState,
//! };
//! use fingertip_swipe::SwipeConfig;
//!
//! #[derive(Debug, Default)]
//! struct Archive {
//!     archived: bool,
//! }
//!
//! impl SwipeCallbacks for Archive {
//!     fn on_swipe_left(&mut self) {
//!         self.archived = true;
//!     }
//! }
//!
//! let mut card = SwipeCard::new(
//!     GestureConfig::default(),
//!     SwipeConfig::default(),
//!     Archive::default(),
//!     CapabilityContext::without_haptics(Capabilities::TOUCH),
//! )
//! .unwrap();
//! let mut touch = TouchSynth::new();
//!
//! card.handle_touch(&touch.down(1, 300.0, 40.0, 0));
//! card.handle_touch(&touch.move_to(1, 250.0, 40.0, 100));
//! assert_eq!(card.visual_state(), VisualState::Dragging);
//! assert_eq!(card.revealed_action(), Some(RevealedAction::Left));
//! assert_eq!(card.transition().to_string(), "none");
//!
//! card.handle_touch(&touch.move_to(1, 200.0, 40.0, 200));
//! card.handle_touch(&touch.up(1, 250));
//! assert!(card.callbacks().archived);
//! assert!(!card.allows_click());
//! assert_eq!(card.visual_state(), VisualState::Animating);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod callbacks;
mod capability;
mod press;
mod pull_container;
mod swipe_card;
mod swipe_list;
mod transform;
mod zoom_viewport;

pub use callbacks::{RefreshCallbacks, SwipeCallbacks, ZoomCallbacks};
pub use capability::{Capabilities, CapabilityContext, HapticPattern, Haptics, NoHaptics};
pub use press::{ClickGuard, PressFeedback, Ripple};
pub use pull_container::PullContainer;
pub use swipe_card::{RevealedAction, SwipeCard};
pub use swipe_list::SwipeList;
pub use transform::{Transform, Transition, VisualState};
pub use zoom_viewport::ZoomViewport;

/// How long a press ripple lives after the finger lands.
pub const RIPPLE_MS: u64 = 600;

fn earliest(deadlines: impl IntoIterator<Item = Option<u64>>) -> Option<u64> {
    deadlines.into_iter().flatten().min()
}
