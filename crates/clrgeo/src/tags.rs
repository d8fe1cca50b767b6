//! Byte tags of the format: version, figure attributes, shape types and
//! segment types.
//!
//! Figure and shape tags are version dependent. The extended version redefines
//! the figure attribute values and adds the curve shape types, so every lookup
//! takes the [`FormatVersion`] it was read under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialization format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatVersion {
    /// Version 1: points, figures and shapes only.
    Basic,
    /// Version 2: adds curve figures, curve shapes and the segment array.
    Extended,
}

impl FormatVersion {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(FormatVersion::Basic),
            2 => Some(FormatVersion::Extended),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            FormatVersion::Basic => 1,
            FormatVersion::Extended => 2,
        }
    }
}

/// What a tag lookup failed on, carried by [`DecodeError::InvalidTag`](crate::DecodeError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Figure,
    Shape,
    Segment,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Figure => write!(f, "figure attribute"),
            TagKind::Shape => write!(f, "shape type"),
            TagKind::Segment => write!(f, "segment type"),
        }
    }
}

/// Figure attribute.
///
/// Version 1 values describe ring roles; version 2 values describe how the
/// figure's points are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FigureAttribute {
    /// v1 `0x00`.
    InteriorRing,
    /// v1 `0x01`.
    Stroke,
    /// v1 `0x02`.
    ExteriorRing,
    /// v2 `0x00`.
    Point,
    /// v2 `0x01`.
    Line,
    /// v2 `0x02`: a circular string.
    Arc,
    /// v2 `0x03`: a compound curve, described by the segment array.
    CompositeCurve,
}

impl FigureAttribute {
    pub fn from_byte(version: FormatVersion, byte: u8) -> Option<Self> {
        match (version, byte) {
            (FormatVersion::Basic, 0) => Some(FigureAttribute::InteriorRing),
            (FormatVersion::Basic, 1) => Some(FigureAttribute::Stroke),
            (FormatVersion::Basic, 2) => Some(FigureAttribute::ExteriorRing),
            (FormatVersion::Extended, 0) => Some(FigureAttribute::Point),
            (FormatVersion::Extended, 1) => Some(FigureAttribute::Line),
            (FormatVersion::Extended, 2) => Some(FigureAttribute::Arc),
            (FormatVersion::Extended, 3) => Some(FigureAttribute::CompositeCurve),
            _ => None,
        }
    }

    /// The attribute implied for the single figure of a shortcut encoding.
    pub fn shortcut(version: FormatVersion) -> Self {
        match version {
            FormatVersion::Basic => FigureAttribute::Stroke,
            FormatVersion::Extended => FigureAttribute::Line,
        }
    }

    /// Whether the figure contains circular arcs.
    pub fn has_arcs(self) -> bool {
        matches!(
            self,
            FigureAttribute::Arc | FigureAttribute::CompositeCurve
        )
    }
}

/// OpenGIS type of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Unknown,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    CircularString,
    CompoundCurve,
    CurvePolygon,
    FullGlobe,
}

impl ShapeType {
    pub fn from_byte(version: FormatVersion, byte: u8) -> Option<Self> {
        let shape_type = match byte {
            0 => ShapeType::Unknown,
            1 => ShapeType::Point,
            2 => ShapeType::LineString,
            3 => ShapeType::Polygon,
            4 => ShapeType::MultiPoint,
            5 => ShapeType::MultiLineString,
            6 => ShapeType::MultiPolygon,
            7 => ShapeType::GeometryCollection,
            8 => ShapeType::CircularString,
            9 => ShapeType::CompoundCurve,
            10 => ShapeType::CurvePolygon,
            11 => ShapeType::FullGlobe,
            _ => return None,
        };
        if version == FormatVersion::Basic && shape_type.is_curve() {
            return None;
        }
        Some(shape_type)
    }

    /// Types only the extended version can express.
    pub fn is_curve(self) -> bool {
        matches!(
            self,
            ShapeType::CircularString
                | ShapeType::CompoundCurve
                | ShapeType::CurvePolygon
                | ShapeType::FullGlobe
        )
    }

    /// Multi-variants and collections, whose parts are child shapes.
    pub fn is_collection(self) -> bool {
        matches!(
            self,
            ShapeType::MultiPoint
                | ShapeType::MultiLineString
                | ShapeType::MultiPolygon
                | ShapeType::GeometryCollection
        )
    }
}

/// Segment type of the extended version's segment array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentType {
    /// `0x00`: a straight edge continuing the current sub-curve.
    Line,
    /// `0x01`: a circular arc continuing the current sub-curve.
    Arc,
    /// `0x02`: a straight edge starting a new sub-curve.
    FirstLine,
    /// `0x03`: a circular arc starting a new sub-curve.
    FirstArc,
}

impl SegmentType {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(SegmentType::Line),
            1 => Some(SegmentType::Arc),
            2 => Some(SegmentType::FirstLine),
            3 => Some(SegmentType::FirstArc),
            _ => None,
        }
    }

    pub fn is_arc(self) -> bool {
        matches!(self, SegmentType::Arc | SegmentType::FirstArc)
    }

    pub fn starts_sub_curve(self) -> bool {
        matches!(self, SegmentType::FirstLine | SegmentType::FirstArc)
    }

    /// Points the segment adds after the point it starts from.
    pub fn points_consumed(self) -> usize {
        if self.is_arc() {
            2
        } else {
            1
        }
    }
}
