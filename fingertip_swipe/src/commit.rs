// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Decides at release time whether a drag performs its action.
///
/// A release commits if the offset reached `threshold`, or if the finger was
/// moving faster than `velocity_threshold`. Either condition alone suffices:
/// a fast flick commits from a short offset, and a slow drag past the
/// threshold commits too.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommitRule {
    /// Minimum absolute offset.
    pub threshold: f64,
    /// Minimum release velocity, in pixels per millisecond.
    pub velocity_threshold: f64,
}

impl CommitRule {
    /// Applies the rule to a release at `offset` moving at `velocity`.
    #[must_use]
    pub fn should_commit(&self, offset: f64, velocity: f64) -> bool {
        offset.abs() >= self.threshold || velocity > self.velocity_threshold
    }
}

/// Direction of a committed horizontal swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Negative offset.
    Left,
    /// Positive offset.
    Right,
}

impl SwipeDirection {
    /// Direction of a non-zero offset.
    #[must_use]
    pub fn from_offset(offset: f64) -> Option<Self> {
        if offset < 0.0 {
            Some(Self::Left)
        } else if offset > 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// `-1.0` for left, `1.0` for right.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}
