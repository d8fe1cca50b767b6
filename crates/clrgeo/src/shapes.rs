//! Shape array: a count, then parent offset, figure offset and type per shape.

use clrgeo_buffers::Reader;
use log::trace;

use crate::error::DecodeError;
use crate::model::Shape;
use crate::tags::{FormatVersion, ShapeType, TagKind};

const SHAPE_WIDTH: usize = 9;

pub fn read_shapes(
    reader: &mut Reader<'_>,
    version: FormatVersion,
) -> Result<Vec<Shape>, DecodeError> {
    let count = reader.u32()? as usize;
    reader.ensure_items(count, SHAPE_WIDTH)?;
    trace!("reading {} shapes", count);

    let mut shapes = Vec::with_capacity(count);
    for index in 0..count {
        let parent_offset = reader.i32()?;
        let figure_offset = reader.i32()?;
        let tag = reader.u8()?;
        let shape_type = ShapeType::from_byte(version, tag).ok_or(DecodeError::InvalidTag {
            kind: TagKind::Shape,
            index,
            value: tag,
        })?;
        shapes.push(Shape {
            parent_offset,
            figure_offset,
            shape_type,
        });
    }
    Ok(shapes)
}
