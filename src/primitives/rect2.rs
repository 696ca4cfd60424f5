//! Validated axis-aligned clip rectangle.

use super::Point2;
use crate::error::ClipError;
use num_traits::Float;

/// An axis-aligned rectangle used as a clip window.
///
/// Unlike a bounding box, a `Rect2` always has positive width and height:
/// `xmin < xmax` and `ymin < ymax` with all bounds finite. The constructors
/// reject anything else with [`ClipError::InvalidRectangle`], so clippers
/// never see an inverted or degenerate window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2<F> {
    min: Point2<F>,
    max: Point2<F>,
}

impl<F: Float> Rect2<F> {
    /// Creates a rectangle from its bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use clipum::{ClipError, Rect2};
    ///
    /// let rect: Rect2<f64> = Rect2::new(0.0, 0.0, 10.0, 5.0).unwrap();
    /// assert_eq!(rect.width(), 10.0);
    ///
    /// assert!(matches!(
    ///     Rect2::new(10.0, 0.0, 0.0, 5.0),
    ///     Err(ClipError::InvalidRectangle { .. })
    /// ));
    /// ```
    pub fn new(xmin: F, ymin: F, xmax: F, ymax: F) -> Result<Self, ClipError> {
        let finite = xmin.is_finite() && ymin.is_finite() && xmax.is_finite() && ymax.is_finite();
        if !finite || xmin >= xmax || ymin >= ymax {
            return Err(ClipError::InvalidRectangle {
                xmin: to_f64(xmin),
                ymin: to_f64(ymin),
                xmax: to_f64(xmax),
                ymax: to_f64(ymax),
            });
        }

        Ok(Self {
            min: Point2::new(xmin, ymin),
            max: Point2::new(xmax, ymax),
        })
    }

    #[inline]
    pub fn xmin(&self) -> F {
        self.min.x
    }

    #[inline]
    pub fn ymin(&self) -> F {
        self.min.y
    }

    #[inline]
    pub fn xmax(&self) -> F {
        self.max.x
    }

    #[inline]
    pub fn ymax(&self) -> F {
        self.max.y
    }

    #[inline]
    pub fn width(&self) -> F {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> F {
        self.max.y - self.min.y
    }

    /// Returns `true` if the point lies inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns the four corners in counter-clockwise order, starting at the minimum corner.
    pub fn corners(&self) -> [Point2<F>; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }
}

fn to_f64<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let r: Rect2<f64> = Rect2::new(0.0, 1.0, 10.0, 5.0).unwrap();
        assert_eq!(r.xmin(), 0.0);
        assert_eq!(r.ymin(), 1.0);
        assert_eq!(r.xmax(), 10.0);
        assert_eq!(r.ymax(), 5.0);
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 4.0);
    }

    #[test]
    fn test_new_rejects_inverted() {
        let err = Rect2::<f64>::new(10.0, 0.0, 0.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            ClipError::InvalidRectangle {
                xmin: 10.0,
                ymin: 0.0,
                xmax: 0.0,
                ymax: 10.0
            }
        );
    }

    #[test]
    fn test_new_rejects_degenerate() {
        assert!(Rect2::<f64>::new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Rect2::<f64>::new(0.0, 3.0, 10.0, 3.0).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Rect2::<f64>::new(0.0, 0.0, f64::INFINITY, 10.0).is_err());
        assert!(Rect2::<f64>::new(f64::NAN, 0.0, 1.0, 10.0).is_err());
    }

    #[test]
    fn test_contains_point_boundary_inclusive() {
        let r: Rect2<f64> = Rect2::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(r.contains_point(Point2::new(5.0, 5.0)));
        assert!(r.contains_point(Point2::new(0.0, 10.0)));
        assert!(!r.contains_point(Point2::new(-0.1, 5.0)));
    }

    #[test]
    fn test_corners_ccw() {
        let r: Rect2<f64> = Rect2::new(0.0, 0.0, 2.0, 1.0).unwrap();
        let c = r.corners();
        assert_eq!(c[0], Point2::new(0.0, 0.0));
        assert_eq!(c[1], Point2::new(2.0, 0.0));
        assert_eq!(c[2], Point2::new(2.0, 1.0));
        assert_eq!(c[3], Point2::new(0.0, 1.0));
    }
}
