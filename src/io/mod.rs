//! Input utilities for clip geometry.
//!
//! Reads the plain-text record files that feed the clippers: a record count,
//! that many segment or vertex lines, and a trailing clip rectangle line.

mod records;

pub use records::{
    parse_polygon, parse_segments, read_polygon, read_segments, ParseError, PolygonRecords,
    SegmentRecords,
};
