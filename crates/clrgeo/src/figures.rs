//! Figure array: a count, then one attribute byte and one point offset per figure.

use clrgeo_buffers::Reader;
use log::trace;

use crate::error::DecodeError;
use crate::model::Figure;
use crate::tags::{FigureAttribute, FormatVersion, TagKind};

const FIGURE_WIDTH: usize = 5;

pub fn read_figures(
    reader: &mut Reader<'_>,
    version: FormatVersion,
) -> Result<Vec<Figure>, DecodeError> {
    let count = reader.u32()? as usize;
    reader.ensure_items(count, FIGURE_WIDTH)?;
    trace!("reading {} figures", count);

    let mut figures = Vec::with_capacity(count);
    for index in 0..count {
        let tag = reader.u8()?;
        let attribute =
            FigureAttribute::from_byte(version, tag).ok_or(DecodeError::InvalidTag {
                kind: TagKind::Figure,
                index,
                value: tag,
            })?;
        let point_offset = reader.u32()?;
        figures.push(Figure {
            attribute,
            point_offset,
        });
    }
    Ok(figures)
}
