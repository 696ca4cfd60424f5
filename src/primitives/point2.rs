//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::Sub;

/// A position in the plane.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the 2D cross product of the two points taken as position vectors.
    ///
    /// This is the `x1 * y2 - y1 * x2` term of a line's determinant form.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns `true` if the two points are within `eps` of each other on both axes.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: F) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross() {
        let a: Point2<f64> = Point2::new(2.0, 3.0);
        let b = Point2::new(5.0, 7.0);
        assert_eq!(a.cross(b), 2.0 * 7.0 - 3.0 * 5.0);
        assert_eq!(a.cross(a), 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point2::new(1.0_f64, -2.0).is_finite());
        assert!(!Point2::new(f64::NAN, 0.0).is_finite());
        assert!(!Point2::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_arithmetic() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        assert_eq!(b - a, Vec2::new(3.0, 4.0));
        assert_eq!(a - b, Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn test_approx_eq() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        assert!(a.approx_eq(Point2::new(1.0 + 1e-12, 1.0), 1e-9));
        assert!(!a.approx_eq(Point2::new(1.1, 1.0), 1e-9));
    }
}
