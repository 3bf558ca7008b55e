#![forbid(unsafe_code)]

//! Geometric primitives.

use serde::{Deserialize, Serialize};

/// A point (or offset) in logical pixels.
///
/// Origin is the centre of the carousel stage; positive `y` points down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

/// Viewport dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Precomputed 2D affine transform applied to carousel path offsets.
///
/// The transform shears first and then rotates:
///
/// ```text
/// sx = x + tan(skew_x) * y
/// sy = y + tan(skew_y) * x
/// x' = sx * cos(rotate) - sy * sin(rotate)
/// y' = sx * sin(rotate) + sy * cos(rotate)
/// ```
///
/// Angles are given in degrees. Trigonometry is evaluated once at
/// construction so per-item application is four multiplies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathTransform {
    cos: f64,
    sin: f64,
    tan_x: f64,
    tan_y: f64,
}

impl PathTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        cos: 1.0,
        sin: 0.0,
        tan_x: 0.0,
        tan_y: 0.0,
    };

    /// Build a transform from rotation and skew angles in degrees.
    ///
    /// Non-finite angles are treated as zero.
    #[must_use]
    pub fn from_degrees(rotate: f64, skew_x: f64, skew_y: f64) -> Self {
        let rotate = finite_radians(rotate);
        Self {
            cos: rotate.cos(),
            sin: rotate.sin(),
            tan_x: finite_radians(skew_x).tan(),
            tan_y: finite_radians(skew_y).tan(),
        }
    }

    /// Whether applying this transform is a no-op.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Apply shear then rotation to a point.
    #[inline]
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let skewed_x = point.x + self.tan_x * point.y;
        let skewed_y = point.y + self.tan_y * point.x;
        Point::new(
            skewed_x * self.cos - skewed_y * self.sin,
            skewed_x * self.sin + skewed_y * self.cos,
        )
    }
}

impl Default for PathTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn finite_radians(degrees: f64) -> f64 {
    if degrees.is_finite() {
        degrees.to_radians()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identity_leaves_points_untouched() {
        let t = PathTransform::from_degrees(0.0, 0.0, 0.0);
        assert!(t.is_identity());
        assert_eq!(t.apply(Point::new(12.5, -3.0)), Point::new(12.5, -3.0));
    }

    #[test]
    fn quarter_turn_rotates_x_into_y() {
        let t = PathTransform::from_degrees(90.0, 0.0, 0.0);
        let p = t.apply(Point::new(10.0, 0.0));
        assert!(approx(p.x, 0.0));
        assert!(approx(p.y, 10.0));
    }

    #[test]
    fn skew_x_shifts_by_y() {
        let t = PathTransform::from_degrees(0.0, 45.0, 0.0);
        let p = t.apply(Point::new(0.0, 20.0));
        assert!(approx(p.x, 20.0));
        assert!(approx(p.y, 20.0));
    }

    #[test]
    fn shear_happens_before_rotation() {
        let t = PathTransform::from_degrees(90.0, 45.0, 0.0);
        // shear: (0, 10) -> (10, 10); rotate 90: (-10, 10)
        let p = t.apply(Point::new(0.0, 10.0));
        assert!(approx(p.x, -10.0));
        assert!(approx(p.y, 10.0));
    }

    #[test]
    fn non_finite_angles_degrade_to_identity() {
        let t = PathTransform::from_degrees(f64::NAN, f64::INFINITY, f64::NEG_INFINITY);
        assert!(t.is_identity());
    }

    #[test]
    fn size_is_empty() {
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(!Size::new(1024.0, 768.0).is_empty());
    }
}
