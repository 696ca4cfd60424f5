//! Error types for clipping operations.

use thiserror::Error;

/// Errors that can occur while building clip inputs or clipping geometry.
///
/// A segment or polygon that lies entirely outside its window is not an
/// error: clippers report that as `None` or an empty polygon.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// Rectangle bounds are inverted, degenerate, or not finite.
    #[error("invalid rectangle: ({xmin}, {ymin}) - ({xmax}, {ymax}) requires xmin < xmax and ymin < ymax")]
    InvalidRectangle {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },

    /// A boundary intersection would divide by a zero denominator.
    #[error("degenerate line: boundary intersection has a zero denominator")]
    DegenerateLine,

    /// Segment clipping did not settle within the iteration limit.
    ///
    /// Only reachable when rounding keeps pushing a clipped endpoint back
    /// across a boundary it was already resolved against.
    #[error("segment clipping did not converge after {iterations} boundary resolutions")]
    ConvergenceFailed {
        /// Number of boundary resolutions attempted.
        iterations: usize,
    },

    /// An input coordinate is NaN or infinite.
    #[error("non-finite coordinate in clip input")]
    NonFiniteCoordinate,

    /// Clip window has too few vertices to enclose an area.
    #[error("degenerate clip window: {vertices} vertices, at least 3 required")]
    DegenerateWindow {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// Clip window is not convex.
    #[error("clip window is not convex")]
    NonConvexWindow,
}
