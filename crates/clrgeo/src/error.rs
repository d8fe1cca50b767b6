//! Decoder error type.

use clrgeo_buffers::BufferError;
use std::fmt;
use thiserror::Error;

use crate::tags::TagKind;

/// Coordinate axis named by [`DecodeError::CoordinateOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First ordinate of a geography point.
    Longitude,
    /// Second ordinate of a geography point.
    Latitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitude => write!(f, "longitude"),
            Axis::Latitude => write!(f, "latitude"),
        }
    }
}

/// Which cross-reference an [`DecodeError::InvalidOffset`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetKind {
    /// A figure's point offset is past the end of the point array.
    FigurePoint,
    /// A figure's point offset is smaller than the previous figure's.
    FigureOrder,
    /// A shape's figure offset is neither `-1` nor a figure index.
    ShapeFigure,
    /// A shape's parent offset is neither `-1` nor an earlier shape.
    ShapeParent,
}

impl fmt::Display for OffsetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetKind::FigurePoint => write!(f, "figure point"),
            OffsetKind::FigureOrder => write!(f, "non-monotonic figure point"),
            OffsetKind::ShapeFigure => write!(f, "shape figure"),
            OffsetKind::ShapeParent => write!(f, "shape parent"),
        }
    }
}

/// Error type for decoding a spatial value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),
    #[error("malformed serialization flags {0:#04x}: single point and single line are both set")]
    MalformedFlags(u8),
    #[error("truncated input: {0}")]
    TruncatedInput(#[from] BufferError),
    #[error("invalid SRID {0}")]
    InvalidSrid(i32),
    #[error("{axis} {value} of point {index} is outside [{min}, {max}]")]
    CoordinateOutOfRange {
        axis: Axis,
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("invalid {kind} offset {offset} at index {index}")]
    InvalidOffset {
        kind: OffsetKind,
        index: usize,
        offset: i64,
    },
    #[error("invalid {kind} tag {value} at index {index}")]
    InvalidTag {
        kind: TagKind,
        index: usize,
        value: u8,
    },
    #[error("segment array does not match composite figure {figure}: {reason}")]
    InvalidSegments { figure: usize, reason: &'static str },
    #[error("{0} segments left after the last composite figure")]
    UnusedSegments(usize),
    #[error("{0} trailing bytes after the last section")]
    TrailingBytes(usize),
}
