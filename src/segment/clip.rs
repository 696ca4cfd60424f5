//! Cohen-Sutherland segment clipping.

use super::outcode::{classify, OutCode};
use crate::error::ClipError;
use crate::primitives::{Point2, Rect2, Segment2};
use num_traits::Float;

/// Upper bound on boundary resolutions for one segment.
///
/// Exact arithmetic needs at most two per endpoint.
const MAX_RESOLUTIONS: usize = 8;

/// Clips a segment against an axis-aligned rectangle using Cohen-Sutherland.
///
/// Returns `Ok(None)` when no part of the segment lies inside the rectangle,
/// otherwise the sub-segment inside it (boundary inclusive). A segment that
/// is already inside comes back unchanged.
///
/// When an endpoint violates several boundaries they are resolved one per
/// iteration in the order TOP, BOTTOM, RIGHT, LEFT (see
/// [`BOUNDARY_PRIORITY`](super::BOUNDARY_PRIORITY)). The start endpoint is
/// moved first whenever it is outside.
///
/// # Errors
///
/// - [`ClipError::NonFiniteCoordinate`] if an endpoint is NaN or infinite.
/// - [`ClipError::DegenerateLine`] if a boundary intersection would divide by zero.
/// - [`ClipError::ConvergenceFailed`] if rounding prevents the endpoints from settling.
///
/// # Example
///
/// ```
/// use clipum::segment::clip_segment;
/// use clipum::{Point2, Rect2, Segment2};
///
/// let rect = Rect2::new(0.0, 0.0, 10.0, 10.0).unwrap();
///
/// let crossing = Segment2::from_coords(-5.0, 5.0, 15.0, 5.0);
/// let clipped = clip_segment(&crossing, &rect).unwrap().unwrap();
/// assert_eq!(clipped.start, Point2::new(0.0, 5.0));
/// assert_eq!(clipped.end, Point2::new(10.0, 5.0));
///
/// let outside = Segment2::from_coords(-5.0, -5.0, -1.0, -1.0);
/// assert_eq!(clip_segment(&outside, &rect).unwrap(), None);
/// ```
pub fn clip_segment<F: Float>(
    segment: &Segment2<F>,
    rect: &Rect2<F>,
) -> Result<Option<Segment2<F>>, ClipError> {
    clip_segment_bounded(segment, rect, MAX_RESOLUTIONS)
}

fn clip_segment_bounded<F: Float>(
    segment: &Segment2<F>,
    rect: &Rect2<F>,
    max_resolutions: usize,
) -> Result<Option<Segment2<F>>, ClipError> {
    if !segment.is_finite() {
        return Err(ClipError::NonFiniteCoordinate);
    }

    let mut start = segment.start;
    let mut end = segment.end;
    let mut code_start = classify(start, rect);
    let mut code_end = classify(end, rect);
    let mut resolutions = 0;

    loop {
        if (code_start | code_end).is_inside() {
            log::trace!("segment accepted: {:?} and {:?} inside", code_start, code_end);
            return Ok(Some(Segment2::new(start, end)));
        }

        if code_start.intersects(code_end) {
            log::trace!("segment rejected: shared outcode {:?}", code_start & code_end);
            return Ok(None);
        }

        if resolutions == max_resolutions {
            return Err(ClipError::ConvergenceFailed {
                iterations: resolutions,
            });
        }

        let move_start = !code_start.is_inside();
        let code_out = if move_start { code_start } else { code_end };
        let boundary = match code_out.first_violated() {
            Some(boundary) => boundary,
            None => return Err(ClipError::DegenerateLine),
        };

        let p = boundary_intersection(start, end, boundary, rect)?;
        log::trace!(
            "moved {} endpoint onto {:?} boundary",
            if move_start { "start" } else { "end" },
            boundary
        );

        if move_start {
            start = p;
            code_start = classify(start, rect);
        } else {
            end = p;
            code_end = classify(end, rect);
        }
        resolutions += 1;
    }
}

/// Intersects the infinite line through `a` and `b` with one rectangle boundary.
///
/// `boundary` must be a single flag, and the boundary line must lie between
/// `a` and `b` along its axis.
fn boundary_intersection<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    boundary: OutCode,
    rect: &Rect2<F>,
) -> Result<Point2<F>, ClipError> {
    let horizontal = boundary == OutCode::TOP || boundary == OutCode::BOTTOM;
    let level = if boundary == OutCode::TOP {
        rect.ymax()
    } else if boundary == OutCode::BOTTOM {
        rect.ymin()
    } else if boundary == OutCode::RIGHT {
        rect.xmax()
    } else {
        rect.xmin()
    };

    // Project onto the boundary axis: `along` is the coordinate being fixed,
    // `across` the one being solved for.
    let (along_a, along_b, across_a, across_b) = if horizontal {
        (a.y, b.y, a.x, b.x)
    } else {
        (a.x, b.x, a.y, b.y)
    };

    if along_b == along_a {
        return Err(ClipError::DegenerateLine);
    }

    let mut across =
        across_a + (across_b - across_a) * (level - along_a) / (along_b - along_a);

    if !across.is_finite() {
        // Differences of finite values can overflow; redo the solve at half scale.
        let two = F::one() + F::one();
        let t = (level / two - along_a / two) / (along_b / two - along_a / two);
        across = (across_a / two + (across_b / two - across_a / two) * t) * two;
    }

    if !across.is_finite() {
        return Err(ClipError::DegenerateLine);
    }

    Ok(if horizontal {
        Point2::new(across, level)
    } else {
        Point2::new(level, across)
    })
}
