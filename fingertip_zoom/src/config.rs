// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fingertip_gesture::{ConfigError, positive};

/// Configuration for a [`PinchZoom`](crate::PinchZoom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Smallest allowed scale.
    pub min_zoom: f64,
    /// Largest allowed scale.
    pub max_zoom: f64,
    /// Scale at rest; also the target of [`reset_zoom`](crate::PinchZoom::reset_zoom).
    pub initial_zoom: f64,
    /// Scale a double tap toggles to.
    pub double_tap_zoom: f64,
    /// Multiplier applied to the pinch ratio.
    pub zoom_speed: f64,
    /// Step used by [`zoom_in`](crate::PinchZoom::zoom_in) and
    /// [`zoom_out`](crate::PinchZoom::zoom_out).
    pub zoom_step: f64,
    /// Duration of animated (non-gesture) zoom changes.
    pub animation_ms: u64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.5,
            max_zoom: 3.0,
            initial_zoom: 1.0,
            double_tap_zoom: 2.0,
            zoom_speed: 1.0,
            zoom_step: 0.5,
            animation_ms: 300,
        }
    }
}

impl ZoomConfig {
    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("min_zoom", self.min_zoom)?;
        positive("max_zoom", self.max_zoom)?;
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvertedRange {
                lower: "min_zoom",
                upper: "max_zoom",
                lo: self.min_zoom,
                hi: self.max_zoom,
            });
        }
        self.within_limits("initial_zoom", self.initial_zoom)?;
        self.within_limits("double_tap_zoom", self.double_tap_zoom)?;
        positive("zoom_speed", self.zoom_speed)?;
        positive("zoom_step", self.zoom_step)
    }

    fn within_limits(&self, field: &'static str, value: f64) -> Result<(), ConfigError> {
        positive(field, value)?;
        if (self.min_zoom..=self.max_zoom).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                field,
                value,
                min: self.min_zoom,
                max: self.max_zoom,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ZoomConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let config = ZoomConfig {
            min_zoom: 4.0,
            ..ZoomConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedRange {
                lower: "min_zoom",
                upper: "max_zoom",
                lo: 4.0,
                hi: 3.0
            })
        );
    }

    #[test]
    fn double_tap_target_must_be_reachable() {
        let config = ZoomConfig {
            double_tap_zoom: 5.0,
            ..ZoomConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "double_tap_zoom",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let config = ZoomConfig {
            zoom_speed: f64::NAN,
            ..ZoomConfig::default()
        };
        assert!(config.validate().is_err());
        let config = ZoomConfig {
            max_zoom: f64::INFINITY,
            ..ZoomConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
