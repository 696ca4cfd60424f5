//! Floating-point geometric primitives shared by the clippers.

mod point2;
mod rect2;
mod segment2;
mod vec2;

pub use point2::Point2;
pub use rect2::Rect2;
pub use segment2::Segment2;
pub use vec2::Vec2;
