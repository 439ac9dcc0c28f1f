// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fingertip_swipe::{RefreshError, RefreshTicket};
use fingertip_zoom::ZoomState;
use kurbo::Point;

/// Application hooks for a [`SwipeCard`](crate::SwipeCard).
#[allow(unused_variables, reason = "default implementations ignore their arguments")]
pub trait SwipeCallbacks {
    /// The card was swiped away to the left.
    fn on_swipe_left(&mut self) {}
    /// The card was swiped away to the right.
    fn on_swipe_right(&mut self) {}
    /// The card was tapped without moving.
    fn on_tap(&mut self, point: Point) {}
}

/// Application hooks for a [`PullContainer`](crate::PullContainer).
#[allow(unused_variables, reason = "default implementations ignore their arguments")]
pub trait RefreshCallbacks {
    /// A pull committed. Start the refresh and report back through
    /// [`PullContainer::resolve`](crate::PullContainer::resolve) with `ticket`.
    fn on_pull_refresh(&mut self, ticket: RefreshTicket);
    /// The refresh finished and the indicator closed.
    fn on_refreshed(&mut self) {}
    /// The refresh failed; the indicator closed without new data.
    fn on_refresh_error(&mut self, error: &RefreshError) {}
}

/// Application hooks for a [`ZoomViewport`](crate::ZoomViewport).
#[allow(unused_variables, reason = "default implementations ignore their arguments")]
pub trait ZoomCallbacks {
    /// Called after every change to the zoom state.
    fn on_zoom_change(&mut self, state: &ZoomState) {}
}

impl SwipeCallbacks for () {}

impl ZoomCallbacks for () {}
