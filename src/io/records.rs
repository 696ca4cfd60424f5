//! Plain-text coordinate records.
//!
//! The format is line oriented:
//!
//! ```text
//! 3                 <- record count n
//! -5 5 15 5         <- n records: "x1 y1 x2 y2" per segment, or "x y" per vertex
//! 2 2 8 8
//! -5 -5 -1 -1
//! 0 0 10 10         <- clip rectangle "xmin ymin xmax ymax"
//! ```
//!
//! Fields are separated by whitespace and blank lines are ignored.

use crate::error::ClipError;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Rect2, Segment2};
use num_traits::Float;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Error type for record parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input has no count line.
    #[error("missing record count")]
    MissingCount,

    /// The count line is not a non-negative integer.
    #[error("line {line}: invalid record count {value:?}")]
    InvalidCount { line: usize, value: String },

    /// A line has the wrong number of fields.
    #[error("line {line}: expected {expected} numbers, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A field is not a number.
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },

    /// Input ended before all announced records were read.
    #[error("expected {expected} records, found {found}")]
    MissingRecords { expected: usize, found: usize },

    /// Input ended before the clip rectangle line.
    #[error("missing clip rectangle line")]
    MissingRectangle,

    /// The clip rectangle line does not describe a valid rectangle.
    #[error("line {line}: {source}")]
    InvalidRectangle {
        line: usize,
        #[source]
        source: ClipError,
    },

    /// The input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Segments and the rectangle to clip them against.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRecords<F> {
    pub segments: Vec<Segment2<F>>,
    pub rect: Rect2<F>,
}

/// A subject polygon and the rectangle to clip it against.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRecords<F> {
    pub subject: Polygon<F>,
    pub rect: Rect2<F>,
}

impl<F: Float> PolygonRecords<F> {
    /// The rectangle as a CCW clip window for [`clip_polygon`](crate::polygon::clip_polygon).
    pub fn window(&self) -> Polygon<F> {
        Polygon::from(self.rect)
    }
}

/// Parses segment records (`x1 y1 x2 y2` per line).
///
/// # Example
///
/// ```
/// use clipum::io::parse_segments;
///
/// let records = parse_segments::<f64>("2\n-5 5 15 5\n1 1 2 2\n0 0 10 10\n").unwrap();
/// assert_eq!(records.segments.len(), 2);
/// assert_eq!(records.rect.xmax(), 10.0);
/// ```
pub fn parse_segments<F: Float + FromStr>(input: &str) -> Result<SegmentRecords<F>, ParseError> {
    let mut reader = RecordReader::new(input);
    let count = reader.count()?;

    let segments = (0..count)
        .map(|found| {
            let [x1, y1, x2, y2]: [F; 4] = reader.record(count, found)?;
            Ok(Segment2::from_coords(x1, y1, x2, y2))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    let rect = reader.rectangle()?;
    reader.finish();

    Ok(SegmentRecords { segments, rect })
}

/// Parses polygon records (`x y` per vertex line).
pub fn parse_polygon<F: Float + FromStr>(input: &str) -> Result<PolygonRecords<F>, ParseError> {
    let mut reader = RecordReader::new(input);
    let count = reader.count()?;

    let subject = (0..count)
        .map(|found| {
            let [x, y]: [F; 2] = reader.record(count, found)?;
            Ok(Point2::new(x, y))
        })
        .collect::<Result<Polygon<_>, ParseError>>()?;

    let rect = reader.rectangle()?;
    reader.finish();

    Ok(PolygonRecords { subject, rect })
}

/// Reads and parses a segment record file.
pub fn read_segments<F: Float + FromStr>(
    path: impl AsRef<Path>,
) -> Result<SegmentRecords<F>, ParseError> {
    parse_segments(&read_file(path.as_ref())?)
}

/// Reads and parses a polygon record file.
pub fn read_polygon<F: Float + FromStr>(
    path: impl AsRef<Path>,
) -> Result<PolygonRecords<F>, ParseError> {
    parse_polygon(&read_file(path.as_ref())?)
}

fn read_file(path: &Path) -> Result<String, ParseError> {
    log::debug!("reading records from {}", path.display());
    fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Walks the non-blank lines of a record file, tracking 1-based line numbers.
struct RecordReader<'a> {
    lines: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
}

impl<'a> RecordReader<'a> {
    fn new(input: &'a str) -> Self {
        let lines = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        Self {
            lines: Box::new(lines),
        }
    }

    fn count(&mut self) -> Result<usize, ParseError> {
        let (line, text) = self.lines.next().ok_or(ParseError::MissingCount)?;
        text.parse().map_err(|_| ParseError::InvalidCount {
            line,
            value: text.to_string(),
        })
    }

    fn record<F: Float + FromStr, const N: usize>(
        &mut self,
        expected: usize,
        found: usize,
    ) -> Result<[F; N], ParseError> {
        let (line, text) = self
            .lines
            .next()
            .ok_or(ParseError::MissingRecords { expected, found })?;
        parse_fields(line, text)
    }

    fn rectangle<F: Float + FromStr>(&mut self) -> Result<Rect2<F>, ParseError> {
        let (line, text) = self.lines.next().ok_or(ParseError::MissingRectangle)?;
        let [xmin, ymin, xmax, ymax]: [F; 4] = parse_fields(line, text)?;
        Rect2::new(xmin, ymin, xmax, ymax)
            .map_err(|source| ParseError::InvalidRectangle { line, source })
    }

    fn finish(self) {
        let trailing = self.lines.count();
        if trailing > 0 {
            log::warn!("ignoring {} lines after the clip rectangle", trailing);
        }
    }
}

fn parse_fields<F: Float + FromStr, const N: usize>(
    line: usize,
    text: &str,
) -> Result<[F; N], ParseError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != N {
        return Err(ParseError::FieldCount {
            line,
            expected: N,
            found: fields.len(),
        });
    }

    let mut values = [F::zero(); N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = field.parse().map_err(|_| ParseError::InvalidNumber {
            line,
            value: field.to_string(),
        })?;
    }

    Ok(values)
}
