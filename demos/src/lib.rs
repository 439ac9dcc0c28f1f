// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the headless Fingertip demos.
//!
//! A real host feeds touch events as they arrive and polls adapters when their
//! deadlines pass. [`play`] does the same for a scripted touch stream, in
//! timestamp order, so the demos show exactly what a UI would see.

use fingertip_gesture::TouchEvent;
use fingertip_surface::{
    Haptics, PullContainer, RefreshCallbacks, SwipeCallbacks, SwipeCard, ZoomCallbacks,
    ZoomViewport,
};

/// The host-facing surface of every adapter.
pub trait Surface {
    /// Feeds one raw touch event.
    fn handle_touch(&mut self, event: &TouchEvent);
    /// Fires timers due at `now`.
    fn poll(&mut self, now: u64);
    /// When [`poll`](Self::poll) should next be called.
    fn next_deadline(&self) -> Option<u64>;
}

impl<C: SwipeCallbacks, H: Haptics> Surface for SwipeCard<C, H> {
    fn handle_touch(&mut self, event: &TouchEvent) {
        Self::handle_touch(self, event);
    }

    fn poll(&mut self, now: u64) {
        Self::poll(self, now);
    }

    fn next_deadline(&self) -> Option<u64> {
        Self::next_deadline(self)
    }
}

impl<C: RefreshCallbacks, H: Haptics> Surface for PullContainer<C, H> {
    fn handle_touch(&mut self, event: &TouchEvent) {
        Self::handle_touch(self, event);
    }

    fn poll(&mut self, now: u64) {
        Self::poll(self, now);
    }

    fn next_deadline(&self) -> Option<u64> {
        Self::next_deadline(self)
    }
}

impl<C: ZoomCallbacks, H: Haptics> Surface for ZoomViewport<C, H> {
    fn handle_touch(&mut self, event: &TouchEvent) {
        Self::handle_touch(self, event);
    }

    fn poll(&mut self, now: u64) {
        Self::poll(self, now);
    }

    fn next_deadline(&self) -> Option<u64> {
        Self::next_deadline(self)
    }
}

/// Polls every deadline strictly before `until`.
pub fn advance<S: Surface + ?Sized>(surface: &mut S, until: u64) {
    while let Some(deadline) = surface.next_deadline() {
        if deadline >= until {
            break;
        }
        surface.poll(deadline);
    }
}

/// Plays `script` in order, firing timers that fall between events, and calls
/// `after` with each event once the surface has processed it.
pub fn play<S, F>(surface: &mut S, script: &[TouchEvent], mut after: F)
where
    S: Surface + ?Sized,
    F: FnMut(&mut S, &TouchEvent),
{
    for event in script {
        advance(surface, event.timestamp);
        surface.handle_touch(event);
        after(surface, event);
    }
}

/// Installs a logger that shows the library's `debug!` output unless
/// `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp(None)
        .init();
}
