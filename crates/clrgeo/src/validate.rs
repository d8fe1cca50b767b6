//! Checks run once a value is fully decoded.

use crate::error::{Axis, DecodeError, OffsetKind};
use crate::model::{SpatialValue, NO_FIGURE, NO_PARENT};
use crate::options::SpatialKind;
use crate::segments::walk_segments;
use crate::srid::{is_geography_srid, LATITUDE_RANGE, LONGITUDE_RANGE};

/// Validates a decoded value, stopping at the first violation.
pub fn validate(value: &SpatialValue, kind: SpatialKind) -> Result<(), DecodeError> {
    if kind == SpatialKind::Geography {
        validate_srid(value.srid)?;
    }
    validate_figures(value)?;
    validate_shapes(value)?;
    walk_segments(value, |_, _| {})?;
    if kind == SpatialKind::Geography {
        validate_coordinates(value)?;
    }
    Ok(())
}

pub fn validate_srid(srid: i32) -> Result<(), DecodeError> {
    if !is_geography_srid(srid) {
        return Err(DecodeError::InvalidSrid(srid));
    }
    Ok(())
}

pub fn validate_coordinates(value: &SpatialValue) -> Result<(), DecodeError> {
    for (index, point) in value.points.iter().enumerate() {
        for (axis, ordinate, range) in [
            (Axis::Longitude, point.x, &LONGITUDE_RANGE),
            (Axis::Latitude, point.y, &LATITUDE_RANGE),
        ] {
            if !range.contains(&ordinate) {
                return Err(DecodeError::CoordinateOutOfRange {
                    axis,
                    index,
                    value: ordinate,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
    }
    Ok(())
}

pub fn validate_figures(value: &SpatialValue) -> Result<(), DecodeError> {
    let mut previous = 0;
    for (index, figure) in value.figures.iter().enumerate() {
        let offset = figure.point_offset;
        if offset as usize >= value.points.len() {
            return Err(DecodeError::InvalidOffset {
                kind: OffsetKind::FigurePoint,
                index,
                offset: offset.into(),
            });
        }
        if offset < previous {
            return Err(DecodeError::InvalidOffset {
                kind: OffsetKind::FigureOrder,
                index,
                offset: offset.into(),
            });
        }
        previous = offset;
    }
    Ok(())
}

pub fn validate_shapes(value: &SpatialValue) -> Result<(), DecodeError> {
    for (index, shape) in value.shapes.iter().enumerate() {
        let figure_ok = shape.figure_offset == NO_FIGURE
            || shape
                .first_figure()
                .is_some_and(|figure| figure < value.figures.len());
        if !figure_ok {
            return Err(DecodeError::InvalidOffset {
                kind: OffsetKind::ShapeFigure,
                index,
                offset: shape.figure_offset.into(),
            });
        }
        let parent_ok = shape.parent_offset == NO_PARENT
            || shape.parent().is_some_and(|parent| parent < index);
        if !parent_ok {
            return Err(DecodeError::InvalidOffset {
                kind: OffsetKind::ShapeParent,
                index,
                offset: shape.parent_offset.into(),
            });
        }
    }
    Ok(())
}
