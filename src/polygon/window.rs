//! Validated convex clip windows.

use super::clip::clip_polygon;
use super::core::Polygon;
use crate::error::ClipError;
use crate::primitives::Rect2;
use num_traits::Float;

/// A convex, counter-clockwise clip window.
///
/// [`clip_polygon`] trusts its caller to supply a convex CCW window. This
/// wrapper checks the window once up front and reverses clockwise input, so
/// that every subsequent clip uses the winding the inside test expects.
///
/// # Example
///
/// ```
/// use clipum::polygon::{ClipWindow, Polygon};
/// use clipum::Point2;
///
/// // Clockwise input is accepted and normalized.
/// let window = ClipWindow::new(Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 4.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(4.0, 0.0),
/// ]))
/// .unwrap();
///
/// let subject = Polygon::new(vec![
///     Point2::new(2.0, 2.0),
///     Point2::new(6.0, 2.0),
///     Point2::new(6.0, 6.0),
///     Point2::new(2.0, 6.0),
/// ]);
///
/// let clipped = window.clip(&subject).unwrap();
/// assert_eq!(clipped.area(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClipWindow<F> {
    polygon: Polygon<F>,
}

impl<F: Float> ClipWindow<F> {
    /// Validates `polygon` as a clip window, normalizing its winding to CCW.
    ///
    /// # Errors
    ///
    /// - [`ClipError::NonFiniteCoordinate`] if a vertex is NaN or infinite.
    /// - [`ClipError::DegenerateWindow`] for fewer than three vertices or zero area.
    /// - [`ClipError::NonConvexWindow`] if the polygon is not convex.
    pub fn new(mut polygon: Polygon<F>) -> Result<Self, ClipError> {
        if !polygon.is_finite() {
            return Err(ClipError::NonFiniteCoordinate);
        }
        if polygon.len() < 3 || polygon.signed_area() == F::zero() {
            return Err(ClipError::DegenerateWindow {
                vertices: polygon.len(),
            });
        }
        if !polygon.is_convex() {
            return Err(ClipError::NonConvexWindow);
        }

        if !polygon.is_ccw() {
            log::debug!("reversing clockwise clip window");
            polygon.ensure_ccw();
        }

        Ok(Self { polygon })
    }

    /// The normalized window polygon.
    #[inline]
    pub fn polygon(&self) -> &Polygon<F> {
        &self.polygon
    }

    /// Clips `subject` against this window.
    ///
    /// # Errors
    ///
    /// [`ClipError::NonFiniteCoordinate`] if a subject vertex is NaN or infinite.
    pub fn clip(&self, subject: &Polygon<F>) -> Result<Polygon<F>, ClipError> {
        if !subject.is_finite() {
            return Err(ClipError::NonFiniteCoordinate);
        }
        Ok(clip_polygon(subject, &self.polygon))
    }
}

impl<F: Float> From<Rect2<F>> for ClipWindow<F> {
    fn from(rect: Rect2<F>) -> Self {
        Self {
            polygon: Polygon::from(rect),
        }
    }
}
