//! Core polygon type and winding helpers.

use crate::primitives::{Point2, Rect2};
use num_traits::Float;

/// A polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Subject polygons may have any winding; clip windows passed to
/// [`clip_polygon`](super::clip_polygon) must be counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the closed edge loop as `(start, end)` pairs.
    ///
    /// The first pair is `(last, first)`, matching the order in which
    /// Sutherland-Hodgman walks a vertex list.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<F>, Point2<F>)> + '_ {
        let prev = self.vertices.last().copied();
        self.vertices
            .iter()
            .scan(prev, |prev, &v| prev.replace(v).map(|p| (p, v)))
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns true if the vertices wind counter-clockwise (positive area).
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > F::zero()
    }

    /// Tests if the polygon is convex.
    pub fn is_convex(&self) -> bool {
        polygon_is_convex(&self.vertices)
    }

    /// Returns true if every vertex has finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(|v| v.is_finite())
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

impl<F: Float> From<Rect2<F>> for Polygon<F> {
    /// Builds the CCW window `[(xmin, ymin), (xmax, ymin), (xmax, ymax), (xmin, ymax)]`.
    fn from(rect: Rect2<F>) -> Self {
        Self::new(rect.corners().to_vec())
    }
}

impl<F: Float> FromIterator<Point2<F>> for Polygon<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let twice_area = (0..n).fold(F::zero(), |acc, i| {
        acc + vertices[i].cross(vertices[(i + 1) % n])
    });

    twice_area / (F::one() + F::one())
}

/// Tests if a polygon is convex.
///
/// Returns true if all non-negligible turns between consecutive edges have
/// the same sign. Fewer than three vertices count as convex.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    if vertices.len() < 3 {
        return true;
    }

    let n = vertices.len();
    let mut sign: Option<bool> = None;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let turn = (b - a).cross(c - b);

        if turn.abs() > F::epsilon() {
            let is_positive = turn > F::zero();
            match sign {
                None => sign = Some(is_positive),
                Some(s) if s != is_positive => return false,
                _ => {}
            }
        }
    }

    true
}
