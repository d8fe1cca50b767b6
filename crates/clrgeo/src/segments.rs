//! Segment array of the extended version.
//!
//! Only stored when some figure is a composite curve. Segments are assigned to
//! composite figures in figure order; inside a figure the first segment starts
//! at the figure's first point and each segment ends where the next begins.

use clrgeo_buffers::Reader;
use log::trace;

use crate::error::DecodeError;
use crate::model::{Figure, Segment, SegmentRun, SpatialValue};
use crate::tags::{FigureAttribute, FormatVersion, SegmentType, TagKind};

/// Whether a segment array follows the shape array.
pub fn has_segment_array(version: FormatVersion, figures: &[Figure]) -> bool {
    version == FormatVersion::Extended
        && figures
            .iter()
            .any(|figure| figure.attribute == FigureAttribute::CompositeCurve)
}

pub fn read_segments(
    reader: &mut Reader<'_>,
    version: FormatVersion,
    figures: &[Figure],
) -> Result<Vec<Segment>, DecodeError> {
    if !has_segment_array(version, figures) {
        return Ok(Vec::new());
    }
    let count = reader.u32()? as usize;
    reader.ensure_items(count, 1)?;
    trace!("reading {} segments", count);

    let mut segments = Vec::with_capacity(count);
    for index in 0..count {
        let tag = reader.u8()?;
        let segment_type = SegmentType::from_byte(tag).ok_or(DecodeError::InvalidTag {
            kind: TagKind::Segment,
            index,
            value: tag,
        })?;
        segments.push(Segment { segment_type });
    }
    Ok(segments)
}

/// Resolves every segment against the points of its composite figure and
/// calls `visit(figure_index, run)` in order.
///
/// Fails unless the segments exactly cover every composite figure and none
/// are left over.
pub(crate) fn walk_segments<F>(value: &SpatialValue, mut visit: F) -> Result<(), DecodeError>
where
    F: FnMut(usize, SegmentRun),
{
    let mut next = 0;
    for (index, figure) in value.figures.iter().enumerate() {
        if figure.attribute != FigureAttribute::CompositeCurve {
            continue;
        }
        let range = value
            .figure_point_range(index)
            .ok_or(DecodeError::InvalidSegments {
                figure: index,
                reason: "figure points are out of bounds",
            })?;
        if range.len() < 2 {
            return Err(DecodeError::InvalidSegments {
                figure: index,
                reason: "fewer than two points",
            });
        }
        let mut point = range.start;
        while point + 1 < range.end {
            let segment = value
                .segments
                .get(next)
                .ok_or(DecodeError::InvalidSegments {
                    figure: index,
                    reason: "segment array ends inside the figure",
                })?;
            next += 1;
            let end = point + segment.segment_type.points_consumed();
            if end >= range.end {
                return Err(DecodeError::InvalidSegments {
                    figure: index,
                    reason: "segment runs past the last point",
                });
            }
            visit(
                index,
                SegmentRun {
                    segment_type: segment.segment_type,
                    points: point..end + 1,
                },
            );
            point = end;
        }
    }
    if next != value.segments.len() {
        return Err(DecodeError::UnusedSegments(value.segments.len() - next));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::SerializationFlags;
    use crate::model::{Point, Shape, NO_PARENT};
    use crate::tags::ShapeType;

    fn compound(points: usize, segments: &[SegmentType]) -> SpatialValue {
        SpatialValue {
            srid: 4326,
            version: FormatVersion::Extended,
            flags: SerializationFlags::default(),
            points: (0..points).map(|i| Point::xy(i as f64, 0.0)).collect(),
            figures: vec![Figure {
                attribute: FigureAttribute::CompositeCurve,
                point_offset: 0,
            }],
            shapes: vec![Shape {
                parent_offset: NO_PARENT,
                figure_offset: 0,
                shape_type: ShapeType::CompoundCurve,
            }],
            segments: segments
                .iter()
                .map(|&segment_type| Segment { segment_type })
                .collect(),
        }
    }

    #[test]
    fn lines_then_arc_cover_five_points() {
        let value = compound(
            5,
            &[
                SegmentType::FirstLine,
                SegmentType::Line,
                SegmentType::FirstArc,
            ],
        );
        let mut runs = Vec::new();
        walk_segments(&value, |figure, run| runs.push((figure, run))).unwrap();
        assert_eq!(
            runs,
            vec![
                (
                    0,
                    SegmentRun {
                        segment_type: SegmentType::FirstLine,
                        points: 0..2,
                    }
                ),
                (
                    0,
                    SegmentRun {
                        segment_type: SegmentType::Line,
                        points: 1..3,
                    }
                ),
                (
                    0,
                    SegmentRun {
                        segment_type: SegmentType::FirstArc,
                        points: 2..5,
                    }
                ),
            ]
        );
    }

    #[test]
    fn arc_overrunning_the_figure() {
        let value = compound(3, &[SegmentType::FirstLine, SegmentType::FirstArc]);
        assert_eq!(
            walk_segments(&value, |_, _| {}),
            Err(DecodeError::InvalidSegments {
                figure: 0,
                reason: "segment runs past the last point",
            })
        );
    }

    #[test]
    fn too_few_segments() {
        let value = compound(3, &[SegmentType::FirstLine]);
        assert_eq!(
            walk_segments(&value, |_, _| {}),
            Err(DecodeError::InvalidSegments {
                figure: 0,
                reason: "segment array ends inside the figure",
            })
        );
    }

    #[test]
    fn leftover_segments() {
        let value = compound(
            2,
            &[SegmentType::FirstLine, SegmentType::Line, SegmentType::Line],
        );
        assert_eq!(
            walk_segments(&value, |_, _| {}),
            Err(DecodeError::UnusedSegments(2))
        );
    }

    #[test]
    fn segment_array_needs_composite_figure() {
        let arc = [Figure {
            attribute: FigureAttribute::Arc,
            point_offset: 0,
        }];
        assert!(!has_segment_array(FormatVersion::Extended, &arc));
        let data = [0x01, 0x00, 0x00, 0x00, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(
            read_segments(&mut reader, FormatVersion::Extended, &arc),
            Ok(Vec::new())
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn rejects_unknown_segment_tag() {
        let figures = [Figure {
            attribute: FigureAttribute::CompositeCurve,
            point_offset: 0,
        }];
        let data = [0x02, 0x00, 0x00, 0x00, 0x02, 0x07];
        let mut reader = Reader::new(&data);
        assert_eq!(
            read_segments(&mut reader, FormatVersion::Extended, &figures),
            Err(DecodeError::InvalidTag {
                kind: TagKind::Segment,
                index: 1,
                value: 7,
            })
        );
    }
}
