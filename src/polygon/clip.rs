//! Sutherland-Hodgman polygon clipping.

use crate::polygon::core::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// Clips a polygon against a convex clipping polygon using Sutherland-Hodgman.
///
/// The subject is clipped against one window edge at a time, each pass
/// rebuilding the vertex list from the previous one. The result is a single
/// polygon, empty if the subject lies entirely outside the window.
///
/// # Winding
///
/// `window` must be convex and wound counter-clockwise (in a y-up frame):
/// a point is inside an edge `cp1 -> cp2` only if it lies strictly to its
/// left. A clockwise window is not detected and clips everything away; use
/// [`ClipWindow`](super::ClipWindow) to validate and normalize a window first.
///
/// # Degenerate input
///
/// - Windows with fewer than three vertices and empty subjects yield an empty polygon.
/// - An edge pair whose lines are exactly parallel contributes no intersection
///   vertex instead of a NaN or infinite one.
/// - Non-finite subject vertices are treated as outside every edge.
///
/// # Example
///
/// ```
/// use clipum::polygon::{clip_polygon, Polygon};
/// use clipum::Point2;
///
/// let subject = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ]);
///
/// let window = Polygon::new(vec![
///     Point2::new(5.0, 5.0),
///     Point2::new(15.0, 5.0),
///     Point2::new(15.0, 15.0),
///     Point2::new(5.0, 15.0),
/// ]);
///
/// let result = clip_polygon(&subject, &window);
/// assert_eq!(result.len(), 4);
/// assert_eq!(result.area(), 25.0);
/// ```
pub fn clip_polygon<F: Float>(subject: &Polygon<F>, window: &Polygon<F>) -> Polygon<F> {
    if subject.is_empty() || window.len() < 3 {
        return Polygon::empty();
    }

    let clipped = window
        .edges()
        .try_fold(subject.vertices.clone(), |input, (cp1, cp2)| {
            if input.is_empty() {
                None
            } else {
                Some(clip_against_edge(&input, cp1, cp2))
            }
        })
        .unwrap_or_default();

    log::debug!(
        "clipped {}-vertex subject against {}-vertex window: {} vertices",
        subject.len(),
        window.len(),
        clipped.len()
    );

    Polygon::new(clipped)
}

/// Runs one Sutherland-Hodgman pass against the directed edge `cp1 -> cp2`.
fn clip_against_edge<F: Float>(
    input: &[Point2<F>],
    cp1: Point2<F>,
    cp2: Point2<F>,
) -> Vec<Point2<F>> {
    let mut output = Vec::with_capacity(input.len() + 1);
    let Some(&last) = input.last() else {
        return output;
    };

    // A vertex on the edge line comes back as both an exit and an entry
    // intersection. Only the exit copy is kept.
    let mut leading_entry = false;
    let mut s = last;
    for &e in input {
        match (is_inside(s, cp1, cp2), is_inside(e, cp1, cp2)) {
            (true, true) => output.push(e),
            (false, true) => {
                if let Some(p) = intersection(cp1, cp2, s, e) {
                    if output.is_empty() {
                        leading_entry = true;
                        output.push(p);
                    } else if output.last() != Some(&p) {
                        output.push(p);
                    }
                }
                output.push(e);
            }
            (true, false) => output.extend(intersection(cp1, cp2, s, e)),
            (false, false) => {}
        }
        s = e;
    }

    if leading_entry && output.len() > 1 && output.first() == output.last() {
        output.remove(0);
    }

    output
}

/// Tests if a point lies strictly to the left of the directed edge `cp1 -> cp2`.
#[inline]
fn is_inside<F: Float>(p: Point2<F>, cp1: Point2<F>, cp2: Point2<F>) -> bool {
    p.is_finite() && (cp2 - cp1).cross(p - cp1) > F::zero()
}

/// Intersects the infinite lines through `cp1, cp2` and `s, e`.
///
/// Returns `None` when the lines are parallel or the result is not finite.
fn intersection<F: Float>(
    cp1: Point2<F>,
    cp2: Point2<F>,
    s: Point2<F>,
    e: Point2<F>,
) -> Option<Point2<F>> {
    let dc = cp1 - cp2;
    let dp = s - e;
    let n1 = cp1.cross(cp2);
    let n2 = s.cross(e);
    let denom = dc.cross(dp);

    if denom == F::zero() {
        log::trace!("skipping intersection of parallel edges");
        return None;
    }

    let p = Point2::new(
        (n1 * dp.x - n2 * dc.x) / denom,
        (n1 * dp.y - n2 * dc.y) / denom,
    );

    if p.is_finite() {
        Some(p)
    } else {
        log::trace!("skipping non-finite edge intersection");
        None
    }
}
