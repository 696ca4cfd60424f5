//! Region classification of points against a clip rectangle.

use crate::primitives::{Point2, Rect2};
use bitflags::bitflags;
use num_traits::Float;

bitflags! {
    /// Which of the rectangle's four half-planes a point violates.
    ///
    /// An empty code ([`OutCode::INSIDE`]) means the point lies inside the
    /// rectangle or on its boundary.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OutCode: u8 {
        /// `x < xmin`
        const LEFT = 0b0001;
        /// `x > xmax`
        const RIGHT = 0b0010;
        /// `y < ymin`
        const BOTTOM = 0b0100;
        /// `y > ymax`
        const TOP = 0b1000;
    }
}

/// Order in which violated boundaries are resolved when a code has several bits set.
///
/// Changing this order changes which boundary is clipped first and with it the
/// rounding of the final endpoint on near-degenerate input.
pub const BOUNDARY_PRIORITY: [OutCode; 4] = [OutCode::TOP, OutCode::BOTTOM, OutCode::RIGHT, OutCode::LEFT];

impl OutCode {
    /// The code of a point inside or on the rectangle.
    pub const INSIDE: Self = Self::empty();

    /// Returns `true` if no boundary is violated.
    #[inline]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }

    /// Returns the single boundary to resolve next, following [`BOUNDARY_PRIORITY`].
    ///
    /// Returns `None` for [`OutCode::INSIDE`].
    #[inline]
    pub fn first_violated(self) -> Option<OutCode> {
        BOUNDARY_PRIORITY.into_iter().find(|&b| self.contains(b))
    }
}

/// Computes the outcode of `p` relative to `rect`.
///
/// Each axis is classified independently and the boundary itself counts as
/// inside, so a point can never be both `LEFT` and `RIGHT` (or `BOTTOM` and `TOP`).
///
/// # Example
///
/// ```
/// use clipum::segment::{classify, OutCode};
/// use clipum::{Point2, Rect2};
///
/// let rect: Rect2<f64> = Rect2::new(0.0, 0.0, 10.0, 10.0).unwrap();
/// assert_eq!(classify(Point2::new(5.0, 5.0), &rect), OutCode::INSIDE);
/// assert_eq!(classify(Point2::new(-1.0, 11.0), &rect), OutCode::LEFT | OutCode::TOP);
/// ```
#[inline]
pub fn classify<F: Float>(p: Point2<F>, rect: &Rect2<F>) -> OutCode {
    let mut code = OutCode::INSIDE;

    if p.x < rect.xmin() {
        code |= OutCode::LEFT;
    } else if p.x > rect.xmax() {
        code |= OutCode::RIGHT;
    }

    if p.y < rect.ymin() {
        code |= OutCode::BOTTOM;
    } else if p.y > rect.ymax() {
        code |= OutCode::TOP;
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_rect() -> Rect2<f64> {
        Rect2::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn test_classify_inside() {
        assert_eq!(classify(Point2::new(3.0, 7.0), &unit_rect()), OutCode::INSIDE);
    }

    #[test]
    fn test_classify_boundary_is_inside() {
        let rect = unit_rect();
        for p in rect.corners() {
            assert!(classify(p, &rect).is_inside());
        }
        assert!(classify(Point2::new(0.0, 5.0), &rect).is_inside());
        assert!(classify(Point2::new(5.0, 10.0), &rect).is_inside());
    }

    #[test]
    fn test_classify_single_sides() {
        let rect = unit_rect();
        assert_eq!(classify(Point2::new(-1.0, 5.0), &rect), OutCode::LEFT);
        assert_eq!(classify(Point2::new(11.0, 5.0), &rect), OutCode::RIGHT);
        assert_eq!(classify(Point2::new(5.0, -1.0), &rect), OutCode::BOTTOM);
        assert_eq!(classify(Point2::new(5.0, 11.0), &rect), OutCode::TOP);
    }

    #[test]
    fn test_classify_corners_regions() {
        let rect = unit_rect();
        assert_eq!(classify(Point2::new(-1.0, -1.0), &rect), OutCode::LEFT | OutCode::BOTTOM);
        assert_eq!(classify(Point2::new(11.0, 11.0), &rect), OutCode::RIGHT | OutCode::TOP);
    }

    #[test]
    fn test_bit_values() {
        assert_eq!(OutCode::LEFT.bits(), 1);
        assert_eq!(OutCode::RIGHT.bits(), 2);
        assert_eq!(OutCode::BOTTOM.bits(), 4);
        assert_eq!(OutCode::TOP.bits(), 8);
        assert_eq!(OutCode::INSIDE.bits(), 0);
    }

    #[test]
    fn test_first_violated_priority() {
        assert_eq!((OutCode::TOP | OutCode::LEFT).first_violated(), Some(OutCode::TOP));
        assert_eq!((OutCode::BOTTOM | OutCode::RIGHT).first_violated(), Some(OutCode::BOTTOM));
        assert_eq!((OutCode::RIGHT).first_violated(), Some(OutCode::RIGHT));
        assert_eq!(OutCode::INSIDE.first_violated(), None);
    }
}
