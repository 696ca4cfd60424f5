//! Sutherland-Hodgman clipping of polygons against convex windows.
//!
//! This module provides:
//! - The [`Polygon`] vertex-list type with area and winding helpers
//! - [`clip_polygon`], the raw Sutherland-Hodgman clipper
//! - [`ClipWindow`], a validated window that normalizes winding
//!
//! # Example
//!
//! ```
//! use clipum::polygon::{clip_polygon, Polygon};
//! use clipum::{Point2, Rect2};
//!
//! let triangle = Polygon::new(vec![
//!     Point2::new(-5.0, 0.0),
//!     Point2::new(5.0, 0.0),
//!     Point2::new(0.0, 5.0),
//! ]);
//!
//! let window = Polygon::from(Rect2::new(0.0, 0.0, 10.0, 10.0).unwrap());
//! let clipped = clip_polygon(&triangle, &window);
//! assert_eq!(clipped.area(), 12.5);
//! ```

mod clip;
mod core;
mod window;

pub use clip::clip_polygon;
pub use core::{polygon_is_convex, polygon_signed_area, Polygon};
pub use window::ClipWindow;
