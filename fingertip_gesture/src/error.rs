// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a configuration is rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A threshold, delay, or factor was negative, zero where forbidden, or not finite.
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A lower bound exceeds its upper bound.
    InvertedRange {
        /// Name of the lower-bound field.
        lower: &'static str,
        /// Name of the upper-bound field.
        upper: &'static str,
        /// The lower-bound value.
        lo: f64,
        /// The upper-bound value.
        hi: f64,
    },
    /// A value lies outside the range other fields allow.
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive minimum.
        min: f64,
        /// Inclusive maximum.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, value } => {
                write!(f, "`{field}` has invalid value {value}")
            }
            Self::InvertedRange { lower, upper, lo, hi } => {
                write!(f, "`{lower}` ({lo}) must not exceed `{upper}` ({hi})")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "`{field}` ({value}) must lie within [{min}, {max}]"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Checks that `value` is finite and `>= 0`.
pub fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

/// Checks that `value` is finite and `> 0`.
pub fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn helpers_reject_bad_values() {
        assert!(non_negative("a", 0.0).is_ok());
        assert!(non_negative("a", -1.0).is_err());
        assert!(non_negative("a", f64::NAN).is_err());
        assert!(positive("a", 0.0).is_err());
        assert!(positive("a", f64::INFINITY).is_err());
        assert!(positive("a", 0.5).is_ok());
    }

    #[test]
    fn display_names_fields() {
        let err = ConfigError::InvertedRange {
            lower: "min_zoom",
            upper: "max_zoom",
            lo: 4.0,
            hi: 2.0,
        };
        assert_eq!(err.to_string(), "`min_zoom` (4) must not exceed `max_zoom` (2)");
    }
}
