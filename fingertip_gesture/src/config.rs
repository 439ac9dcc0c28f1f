// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::{ConfigError, non_negative};

/// Thresholds and delays for a [`GestureRecognizer`](crate::GestureRecognizer).
///
/// Distances are in pixels, durations in milliseconds. Override any subset
/// with struct-update syntax:
///
/// ```
/// use fingertip_gesture::GestureConfig;
///
/// let config = GestureConfig {
///     long_press_delay_ms: 700,
///     ..GestureConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Total movement below which a released touch still counts as a tap.
    pub tap_move_threshold: f64,
    /// Maximum time between two taps for them to form a double tap.
    pub double_tap_window_ms: u64,
    /// How long a still finger must stay down to become a long press.
    pub long_press_delay_ms: u64,
    /// Distance a single finger must travel before the session becomes a pan.
    pub pan_threshold: f64,
    /// Change in finger spread before pinch updates are reported.
    pub pinch_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_move_threshold: 10.0,
            double_tap_window_ms: 300,
            long_press_delay_ms: 500,
            pan_threshold: 10.0,
            pinch_threshold: 10.0,
        }
    }
}

impl GestureConfig {
    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("tap_move_threshold", self.tap_move_threshold)?;
        non_negative("pan_threshold", self.pan_threshold)?;
        non_negative("pinch_threshold", self.pinch_threshold)?;
        if self.double_tap_window_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "double_tap_window_ms",
                value: 0.0,
            });
        }
        if self.long_press_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "long_press_delay_ms",
                value: 0.0,
            });
        }
        Ok(())
    }
}
