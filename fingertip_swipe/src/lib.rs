// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fingertip Swipe: one-axis drag specializations built on pan classification.
//!
//! - [`SwipeRecognizer`]: horizontal swipe-to-act (dismiss a card, reveal a
//!   list-item action).
//! - [`PullToRefresh`]: vertical pull that triggers an asynchronous refresh.
//!
//! Both consume the [`GestureEvent`](fingertip_gesture::GestureEvent)s of a
//! surface's recognizer and add two things on top of the raw pan:
//!
//! - A **resistance curve**: past a soft limit the reported offset keeps
//!   growing, but only by `excess * resistance_factor`.
//! - A **commit decision** made at release, never during the drag
//!   ([`CommitRule`]): commit if the offset reached the threshold *or* the
//!   release was faster than the velocity threshold.
//!
//! Both walk the same [`DragPhase`] machine:
//!
//! ```text
//! Idle → Dragging → Committing → Idle            (swipe)
//!                 → Resolving  → Idle            (pull-to-refresh)
//!                 → Cancelling → Idle            (no commit)
//! ```
//!
//! ```rust
//! use fingertip_gesture::synth::TouchSynth;
//! use fingertip_gesture::GestureRecognizer;
//! use fingertip_swipe::{DragPhase, SwipeConfig, SwipeEvent, SwipeRecognizer};
//!
//! let mut gestures = GestureRecognizer::default();
//! let mut swipe = SwipeRecognizer::new(SwipeConfig::default()).unwrap();
//! let mut touch = TouchSynth::new();
//!
//! let mut out = Vec::new();
//! for (event, t) in [
//!     (touch.down(1, 200.0, 50.0, 0), 0),
//!     (touch.move_to(1, 150.0, 50.0, 100), 100),
//!     (touch.move_to(1, 110.0, 52.0, 400), 400),
//!     (touch.up(1, 800), 800),
//! ] {
//!     for gesture in gestures.handle(&event) {
//!         out.extend(swipe.handle(&gesture, t));
//!     }
//! }
//! assert!(out.iter().any(|e| matches!(e, SwipeEvent::Committed { .. })));
//! assert_eq!(swipe.phase(), DragPhase::Committing);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod commit;
mod config;
mod pull;
mod swipe;

pub use commit::{CommitRule, SwipeDirection};
pub use config::{PullToRefreshConfig, SwipeConfig};
pub use pull::{PullEvent, PullToRefresh, RefreshError, RefreshTicket};
pub use swipe::{SwipeActionState, SwipeEvent, SwipeRecognizer};

/// Phase of a one-axis drag specialization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// Nothing in progress; a new drag may start.
    #[default]
    Idle,
    /// Following the finger.
    Dragging,
    /// Released past the commit rule; the exit animation is running.
    Committing,
    /// Waiting on the application's refresh (pull-to-refresh only).
    Resolving,
    /// Released without committing; snapping back.
    Cancelling,
}
