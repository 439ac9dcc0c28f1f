// Copyright 2025 the Fingertip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless geometry helpers shared by recognizers and specializations.

use kurbo::Point;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Angle of the vector `a → b` in degrees, in `(-180, 180]`.
///
/// `0` points along +x and `90` along +y (screen coordinates, so "down").
#[must_use]
pub fn angle_degrees(a: Point, b: Point) -> f64 {
    (b - a).atan2().to_degrees()
}

/// Midpoint between two points.
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Clamps `value` into `[lo, hi]`.
///
/// Unlike [`f64::clamp`] this never panics; if `lo > hi` the upper bound wins.
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Sign-preserving resistance curve.
///
/// Offsets within `limit` pass through unchanged; the part beyond `limit` is
/// scaled by `factor`, so the result keeps growing but sub-linearly.
#[must_use]
pub fn resist(offset: f64, limit: f64, factor: f64) -> f64 {
    let magnitude = offset.abs();
    if magnitude <= limit {
        return offset;
    }
    let resisted = limit + (magnitude - limit) * factor;
    if offset < 0.0 { -resisted } else { resisted }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn distance_and_midpoint() {
        let a = Point::new(50.0, 50.0);
        let b = Point::new(150.0, 50.0);
        assert_eq!(distance(a, b), 100.0);
        assert_eq!(midpoint(a, b), Point::new(100.0, 50.0));
    }

    #[test]
    fn angles_follow_screen_axes() {
        let o = Point::ORIGIN;
        assert!(angle_degrees(o, Point::new(10.0, 0.0)).abs() < 1e-9);
        assert!((angle_degrees(o, Point::new(0.0, 10.0)) - 90.0).abs() < 1e-9);
        assert!((angle_degrees(o, Point::new(-10.0, 0.0)).abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_tolerates_inverted_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn resistance_is_sub_linear_past_limit() {
        assert_eq!(resist(50.0, 80.0, 0.5), 50.0);
        assert_eq!(resist(100.0, 80.0, 0.5), 90.0);
        assert_eq!(resist(-100.0, 80.0, 0.5), -90.0);
        assert!(resist(200.0, 80.0, 0.5) < 200.0);
    }
}
