//! Decoded spatial value and its arena-indexed parts.
//!
//! Figures index into the point array, shapes index into the figure array and
//! into earlier shapes. Nothing is shared with the input buffer.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::header::SerializationFlags;
use crate::segments::walk_segments;
use crate::tags::{FigureAttribute, FormatVersion, SegmentType, ShapeType};

/// Sentinel for "no parent shape".
pub const NO_PARENT: i32 = -1;
/// Sentinel for "shape has no figures".
pub const NO_FIGURE: i32 = -1;

/// A coordinate. `x`/`y` are longitude/latitude for geography.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Point {
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }
}

/// A line or ring: its attribute and where its points begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub attribute: FigureAttribute,
    pub point_offset: u32,
}

/// A node of the shape tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub parent_offset: i32,
    pub figure_offset: i32,
    pub shape_type: ShapeType,
}

impl Shape {
    pub fn parent(&self) -> Option<usize> {
        usize::try_from(self.parent_offset).ok()
    }

    pub fn first_figure(&self) -> Option<usize> {
        usize::try_from(self.figure_offset).ok()
    }
}

/// One entry of the segment array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub segment_type: SegmentType,
}

/// A segment resolved against the point array.
///
/// `points` covers the segment's own points; consecutive runs share their
/// joining point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRun {
    pub segment_type: SegmentType,
    pub points: Range<usize>,
}

/// A decoded geography or geometry value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialValue {
    pub srid: i32,
    pub version: FormatVersion,
    pub flags: SerializationFlags,
    pub points: Vec<Point>,
    pub figures: Vec<Figure>,
    pub shapes: Vec<Shape>,
    pub segments: Vec<Segment>,
}

impl SpatialValue {
    /// Type of the root shape, which classifies the whole value.
    pub fn shape_type(&self) -> Option<ShapeType> {
        self.shapes.first().map(|shape| shape.shape_type)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Range of point indices belonging to figure `index`.
    pub fn figure_point_range(&self, index: usize) -> Option<Range<usize>> {
        let figure = self.figures.get(index)?;
        let start = figure.point_offset as usize;
        let end = self
            .figures
            .get(index + 1)
            .map_or(self.points.len(), |next| next.point_offset as usize);
        (start <= end && end <= self.points.len()).then_some(start..end)
    }

    pub fn figure_points(&self, index: usize) -> Option<&[Point]> {
        self.figure_point_range(index)
            .map(|range| &self.points[range])
    }

    /// Whether shape `index` sits below shape `ancestor` in the tree.
    pub fn is_descendant(&self, index: usize, ancestor: usize) -> bool {
        let mut child = index;
        while let Some(parent) = self.shapes.get(child).and_then(Shape::parent) {
            if parent == ancestor {
                return true;
            }
            // parents always precede their children
            if parent >= child {
                return false;
            }
            child = parent;
        }
        false
    }

    /// Direct children of shape `index`, in order.
    pub fn shape_children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.shapes
            .iter()
            .enumerate()
            .skip(index + 1)
            .filter(move |(_, shape)| shape.parent() == Some(index))
            .map(|(child, _)| child)
    }

    /// Figures owned by shape `index` and its descendants.
    ///
    /// The range ends where the next shape outside the subtree begins its
    /// figures.
    pub fn shape_figures(&self, index: usize) -> Option<Range<usize>> {
        let start = self.shapes.get(index)?.first_figure()?;
        let end = self
            .shapes
            .iter()
            .enumerate()
            .skip(index + 1)
            .filter(|(other, _)| !self.is_descendant(*other, index))
            .find_map(|(_, shape)| shape.first_figure())
            .unwrap_or(self.figures.len());
        (start <= end && end <= self.figures.len()).then_some(start..end)
    }

    /// Segments of figure `index`, resolved to point ranges.
    ///
    /// Returns `None` for figures that are not composite curves.
    pub fn segment_runs(&self, index: usize) -> Option<Vec<SegmentRun>> {
        let figure = self.figures.get(index)?;
        if figure.attribute != FigureAttribute::CompositeCurve {
            return None;
        }
        let mut runs = Vec::new();
        walk_segments(self, |figure_index, run| {
            if figure_index == index {
                runs.push(run);
            }
        })
        .ok()?;
        Some(runs)
    }
}
