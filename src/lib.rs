//! clipum - Classical 2D clipping algorithms
//!
//! Two clippers over a shared set of floating-point primitives:
//!
//! - [`clip_segment`]: Cohen-Sutherland clipping of a line segment against an
//!   axis-aligned [`Rect2`], driven by per-endpoint [`OutCode`] bitmasks.
//! - [`clip_polygon`]: Sutherland-Hodgman clipping of any polygon against a
//!   convex, counter-clockwise window.
//!
//! Both are pure functions. Degenerate arithmetic (zero denominators,
//! non-finite input) is reported or skipped, never passed through as NaN.
//!
//! # Example
//!
//! ```
//! use clipum::{clip_polygon, clip_segment, Point2, Polygon, Rect2, Segment2};
//!
//! let rect = Rect2::new(0.0, 0.0, 10.0, 10.0).unwrap();
//!
//! let segment = Segment2::from_coords(-5.0, 5.0, 15.0, 5.0);
//! let clipped = clip_segment(&segment, &rect).unwrap().unwrap();
//! assert_eq!(clipped, Segment2::from_coords(0.0, 5.0, 10.0, 5.0));
//!
//! let subject = Polygon::new(vec![
//!     Point2::new(5.0, 5.0),
//!     Point2::new(15.0, 5.0),
//!     Point2::new(15.0, 15.0),
//!     Point2::new(5.0, 15.0),
//! ]);
//! let clipped = clip_polygon(&subject, &Polygon::from(rect));
//! assert_eq!(clipped.area(), 25.0);
//! ```

pub mod batch;
pub mod error;
pub mod io;
pub mod polygon;
pub mod primitives;
pub mod segment;

pub use error::ClipError;
pub use polygon::{clip_polygon, ClipWindow, Polygon};
pub use primitives::{Point2, Rect2, Segment2, Vec2};
pub use segment::{classify, clip_segment, OutCode};
