//! Point array.
//!
//! All XY pairs come first, then one Z per point when `has_z`, then one M per
//! point when `has_m`.

use clrgeo_buffers::Reader;
use log::trace;

use crate::error::DecodeError;
use crate::header::SerializationFlags;
use crate::model::Point;

/// Reads the stored point count, or the count a shortcut flag implies.
pub fn read_point_count(
    reader: &mut Reader<'_>,
    flags: &SerializationFlags,
) -> Result<usize, DecodeError> {
    match flags.implied_point_count() {
        Some(count) => Ok(count),
        None => Ok(reader.u32()? as usize),
    }
}

/// Reads `count` points. The whole array is bounds-checked before allocating.
pub fn read_points(
    reader: &mut Reader<'_>,
    count: usize,
    flags: &SerializationFlags,
) -> Result<Vec<Point>, DecodeError> {
    reader.ensure_items(count, flags.point_width())?;
    trace!("reading {} points ({} bytes each)", count, flags.point_width());

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let x = reader.f64()?;
        let y = reader.f64()?;
        points.push(Point::xy(x, y));
    }
    if flags.has_z {
        for point in points.iter_mut() {
            point.z = Some(reader.f64()?);
        }
    }
    if flags.has_m {
        for point in points.iter_mut() {
            point.m = Some(reader.f64()?);
        }
    }
    Ok(points)
}
