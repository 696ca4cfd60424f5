//! Clipping many segments or polygons against one window.
//!
//! Every clip is independent, so with the `multithreading` feature the work
//! is spread over rayon's thread pool. Output order always matches input order.

use crate::error::ClipError;
use crate::polygon::{clip_polygon, Polygon};
use crate::primitives::{Rect2, Segment2};
use crate::segment::clip_segment;
use num_traits::Float;

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

/// Clips each segment against `rect`.
///
/// Fails with the first error any segment produces.
///
/// # Example
///
/// ```
/// use clipum::batch::clip_segments;
/// use clipum::{Rect2, Segment2};
///
/// let rect = Rect2::new(0.0, 0.0, 10.0, 10.0).unwrap();
/// let segments = [
///     Segment2::from_coords(-5.0, 5.0, 15.0, 5.0),
///     Segment2::from_coords(-5.0, -5.0, -1.0, -1.0),
/// ];
///
/// let clipped = clip_segments(&segments, &rect).unwrap();
/// assert!(clipped[0].is_some());
/// assert!(clipped[1].is_none());
/// ```
pub fn clip_segments<F>(
    segments: &[Segment2<F>],
    rect: &Rect2<F>,
) -> Result<Vec<Option<Segment2<F>>>, ClipError>
where
    F: Float + Send + Sync,
{
    log::debug!("clipping {} segments", segments.len());

    #[cfg(feature = "multithreading")]
    let clipped = segments.par_iter().map(|s| clip_segment(s, rect)).collect();

    #[cfg(not(feature = "multithreading"))]
    let clipped = segments.iter().map(|s| clip_segment(s, rect)).collect();

    clipped
}

/// Clips each subject polygon against the same convex CCW `window`.
pub fn clip_polygons<F>(subjects: &[Polygon<F>], window: &Polygon<F>) -> Vec<Polygon<F>>
where
    F: Float + Send + Sync,
{
    log::debug!("clipping {} polygons", subjects.len());

    #[cfg(feature = "multithreading")]
    let clipped = subjects.par_iter().map(|p| clip_polygon(p, window)).collect();

    #[cfg(not(feature = "multithreading"))]
    let clipped = subjects.iter().map(|p| clip_polygon(p, window)).collect();

    clipped
}
