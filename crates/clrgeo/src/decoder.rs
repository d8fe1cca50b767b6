//! Decode pipeline: header, then either the shortcut or the full section
//! sequence, then validation.

use clrgeo_buffers::Reader;
use log::{debug, trace};

use crate::error::DecodeError;
use crate::figures::read_figures;
use crate::header::{Header, SerializationFlags};
use crate::model::{Figure, Shape, SpatialValue, NO_PARENT};
use crate::options::{DecodeOptions, SpatialKind};
use crate::points::{read_point_count, read_points};
use crate::segments::read_segments;
use crate::shapes::read_shapes;
use crate::tags::{FigureAttribute, FormatVersion, ShapeType};
use crate::validate::validate;

/// Decodes `data` and validates it according to `options`.
///
/// Either the whole value decodes and validates, or the first error found is
/// returned.
pub fn decode(data: &[u8], options: &DecodeOptions) -> Result<SpatialValue, DecodeError> {
    let result = decode_sections(data, options).and_then(|value| {
        validate(&value, options.kind)?;
        Ok(value)
    });
    if let Err(err) = &result {
        debug!(
            "rejected {} byte {:?} value: {}",
            data.len(),
            options.kind,
            err
        );
    }
    result
}

/// Decodes a geography value: SRID prefix, catalog SRID, lon/lat bounds.
pub fn read_geography(data: &[u8]) -> Result<SpatialValue, DecodeError> {
    decode(data, &DecodeOptions::geography())
}

/// Decodes a geometry value that carries no SRID field.
pub fn read_geometry(data: &[u8]) -> Result<SpatialValue, DecodeError> {
    decode(data, &DecodeOptions::geometry())
}

/// Decodes a geometry value with its leading SRID field, accepting any SRID.
pub fn read_geometry_with_srid(data: &[u8]) -> Result<SpatialValue, DecodeError> {
    decode(data, &DecodeOptions::geometry_with_srid())
}

fn decode_sections(data: &[u8], options: &DecodeOptions) -> Result<SpatialValue, DecodeError> {
    let mut reader = Reader::new(data);
    let header = Header::read(&mut reader, options.srid_prefix)?;
    trace!(
        "header: srid={} version={:?} flags={:?}",
        header.srid,
        header.version,
        header.flags
    );

    let count = read_point_count(&mut reader, &header.flags)?;
    let points = read_points(&mut reader, count, &header.flags)?;

    let (figures, shapes, segments) = if header.flags.is_shortcut() {
        let (figures, shapes) = shortcut_structure(header.version, &header.flags);
        (figures, shapes, Vec::new())
    } else if points.is_empty() && reader.is_eof() {
        (Vec::new(), Vec::new(), Vec::new())
    } else {
        let figures = read_figures(&mut reader, header.version)?;
        let shapes = read_shapes(&mut reader, header.version)?;
        let segments = read_segments(&mut reader, header.version, &figures)?;
        (figures, shapes, segments)
    };

    if !options.allow_trailing_bytes && !reader.is_eof() {
        return Err(DecodeError::TrailingBytes(reader.size()));
    }

    Ok(SpatialValue {
        srid: header.srid,
        version: header.version,
        flags: header.flags,
        points,
        figures,
        shapes,
        segments,
    })
}

/// The single figure and shape a shortcut encoding leaves implicit.
fn shortcut_structure(
    version: FormatVersion,
    flags: &SerializationFlags,
) -> (Vec<Figure>, Vec<Shape>) {
    let shape_type = if flags.single_point {
        ShapeType::Point
    } else {
        ShapeType::LineString
    };
    let figure = Figure {
        attribute: FigureAttribute::shortcut(version),
        point_offset: 0,
    };
    let shape = Shape {
        parent_offset: NO_PARENT,
        figure_offset: 0,
        shape_type,
    };
    (vec![figure], vec![shape])
}

impl SpatialKind {
    /// Decodes `data` with this kind's default options.
    pub fn decode(self, data: &[u8]) -> Result<SpatialValue, DecodeError> {
        match self {
            SpatialKind::Geography => read_geography(data),
            SpatialKind::Geometry => read_geometry(data),
        }
    }
}
