//! Decoder for the binary serialization a relational database engine uses for
//! its geography and geometry columns.
//!
//! The input is a compact little-endian layout: an optional SRID, a version
//! byte, a flags byte, then a point array and, unless a single-point or
//! single-line shortcut applies, figure, shape and (version 2) segment arrays
//! that reference each other by offset. Decoding copies everything into an
//! owned [`SpatialValue`] and validates it once at the end.
//!
//! # Example
//!
//! ```
//! use clrgeo::{read_geography, ShapeType};
//!
//! // POINT (20 40), SRID 4326, single-point shortcut
//! let mut data = vec![0xE6, 0x10, 0x00, 0x00, 0x01, 0x0C];
//! data.extend_from_slice(&20.0f64.to_le_bytes());
//! data.extend_from_slice(&40.0f64.to_le_bytes());
//!
//! let value = read_geography(&data).unwrap();
//! assert_eq!(value.srid, 4326);
//! assert_eq!(value.points.len(), 1);
//! assert_eq!(value.shape_type(), Some(ShapeType::Point));
//! ```

mod decoder;
mod error;
mod figures;
mod header;
mod model;
mod options;
mod points;
mod segments;
mod shapes;
mod srid;
mod tags;
mod validate;

pub use decoder::{decode, read_geography, read_geometry, read_geometry_with_srid};
pub use error::{Axis, DecodeError, OffsetKind};
pub use header::{Header, SerializationFlags, NO_SRID};
pub use model::{
    Figure, Point, Segment, SegmentRun, Shape, SpatialValue, NO_FIGURE, NO_PARENT,
};
pub use options::{DecodeOptions, SpatialKind};
pub use srid::{is_geography_srid, GEOGRAPHY_SRIDS, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use tags::{FigureAttribute, FormatVersion, SegmentType, ShapeType, TagKind};
pub use validate::validate;
