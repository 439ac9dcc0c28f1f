// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fingertip_gesture::{ConfigError, non_negative, positive};

use crate::commit::CommitRule;

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Configuration for a horizontal [`SwipeRecognizer`](crate::SwipeRecognizer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Offset at which a release commits; also where resistance begins.
    pub threshold: f64,
    /// Release velocity (px/ms) that commits regardless of offset.
    pub velocity_threshold: f64,
    /// Multiplier applied to drag distance beyond `threshold`.
    pub resistance_factor: f64,
    /// How far from horizontal (degrees) the first pan sample may point.
    pub axis_lock_degrees: f64,
    /// Duration of the commit/snap-back animation.
    pub settle_ms: u64,
    /// Offset a committed surface slides out to.
    pub exit_offset: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 80.0,
            velocity_threshold: 0.5,
            resistance_factor: 0.6,
            axis_lock_degrees: 30.0,
            settle_ms: 300,
            exit_offset: 320.0,
        }
    }
}

impl SwipeConfig {
    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("threshold", self.threshold)?;
        non_negative("velocity_threshold", self.velocity_threshold)?;
        unit_interval("resistance_factor", self.resistance_factor)?;
        if !(0.0..=90.0).contains(&self.axis_lock_degrees) {
            return Err(ConfigError::OutOfRange {
                field: "axis_lock_degrees",
                value: self.axis_lock_degrees,
                min: 0.0,
                max: 90.0,
            });
        }
        non_negative("exit_offset", self.exit_offset)
    }

    /// The release rule derived from this configuration.
    #[must_use]
    pub fn commit_rule(&self) -> CommitRule {
        CommitRule {
            threshold: self.threshold,
            velocity_threshold: self.velocity_threshold,
        }
    }
}

/// Configuration for a [`PullToRefresh`](crate::PullToRefresh).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullToRefreshConfig {
    /// Pull offset at which a release triggers a refresh.
    pub threshold: f64,
    /// Offset where resistance begins.
    pub max_pull_distance: f64,
    /// Multiplier applied to pull distance beyond `max_pull_distance`.
    pub resistance_factor: f64,
    /// Release velocity (px/ms) that triggers a refresh regardless of offset.
    pub velocity_threshold: f64,
    /// Minimum time the refresh indicator stays open once a refresh starts.
    pub min_visible_ms: u64,
    /// Duration of the snap-back animation after a cancelled pull.
    pub settle_ms: u64,
}

impl Default for PullToRefreshConfig {
    fn default() -> Self {
        Self {
            threshold: 80.0,
            max_pull_distance: 120.0,
            resistance_factor: 0.5,
            velocity_threshold: 0.5,
            min_visible_ms: 500,
            settle_ms: 300,
        }
    }
}

impl PullToRefreshConfig {
    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("threshold", self.threshold)?;
        positive("max_pull_distance", self.max_pull_distance)?;
        unit_interval("resistance_factor", self.resistance_factor)?;
        non_negative("velocity_threshold", self.velocity_threshold)
    }

    /// The release rule derived from this configuration.
    #[must_use]
    pub fn commit_rule(&self) -> CommitRule {
        CommitRule {
            threshold: self.threshold,
            velocity_threshold: self.velocity_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SwipeConfig::default().validate().is_ok());
        assert!(PullToRefreshConfig::default().validate().is_ok());
    }

    #[test]
    fn resistance_factor_must_be_a_fraction() {
        let config = SwipeConfig {
            resistance_factor: 1.5,
            ..SwipeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "resistance_factor",
                value: 1.5,
                min: 0.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let config = PullToRefreshConfig {
            threshold: 0.0,
            ..PullToRefreshConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
