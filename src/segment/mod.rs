//! Cohen-Sutherland clipping of line segments against a rectangle.
//!
//! Each endpoint gets an [`OutCode`] describing which rectangle boundaries
//! it lies beyond. Segments whose codes are both empty are accepted as-is,
//! segments whose codes share a bit are rejected, and everything else is
//! shortened one boundary at a time until one of those two cases applies.
//!
//! # Example
//!
//! ```
//! use clipum::segment::clip_segment;
//! use clipum::{Rect2, Segment2};
//!
//! let rect = Rect2::new(0.0, 0.0, 10.0, 10.0).unwrap();
//! let segment = Segment2::from_coords(5.0, 5.0, 20.0, 5.0);
//!
//! let clipped = clip_segment(&segment, &rect).unwrap().unwrap();
//! assert_eq!(clipped.end.x, 10.0);
//! ```

mod clip;
mod outcode;

pub use clip::clip_segment;
pub use outcode::{classify, OutCode, BOUNDARY_PRIORITY};
