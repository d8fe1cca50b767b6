//! Shared fixtures for the clrgeo integration tests.

#![allow(dead_code)]

/// Decodes an uppercase or lowercase hex string.
pub fn hex(s: &str) -> Vec<u8> {
    assert!(s.len() % 2 == 0, "odd hex length");
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("hex digit"))
        .collect()
}

/// Little-endian byte builder for hand-made inputs.
#[derive(Default)]
pub struct Fixture {
    bytes: Vec<u8>,
}

impl Fixture {
    /// Header with an SRID field.
    pub fn with_srid(srid: i32, version: u8, flags: u8) -> Self {
        Self::default().i32(srid).u8(version).u8(flags)
    }

    /// Header without an SRID field.
    pub fn without_srid(version: u8, flags: u8) -> Self {
        Self::default().u8(version).u8(flags)
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.bytes.push(value);
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn i32(mut self, value: i32) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn f64(mut self, value: f64) -> Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn points(self, points: &[(f64, f64)]) -> Self {
        let with_count = self.u32(points.len() as u32);
        points
            .iter()
            .fold(with_count, |fixture, &(x, y)| fixture.f64(x).f64(y))
    }

    pub fn figures(self, figures: &[(u8, u32)]) -> Self {
        let with_count = self.u32(figures.len() as u32);
        figures
            .iter()
            .fold(with_count, |fixture, &(tag, offset)| fixture.u8(tag).u32(offset))
    }

    pub fn shapes(self, shapes: &[(i32, i32, u8)]) -> Self {
        let with_count = self.u32(shapes.len() as u32);
        shapes.iter().fold(with_count, |fixture, &(parent, figure, tag)| {
            fixture.i32(parent).i32(figure).u8(tag)
        })
    }

    pub fn segments(self, segments: &[u8]) -> Self {
        let with_count = self.u32(segments.len() as u32);
        segments
            .iter()
            .fold(with_count, |fixture, &tag| fixture.u8(tag))
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

// POINT (20 40), SRID 4326
pub const POINT: &str = "E6100000010C00000000000044400000000000003440";
// LINESTRING (21 45, -45 20), SRID 4326
pub const LINE: &str = "E6100000011400000000008046400000000000003540000000000000344000000000008046C0";
// LINESTRING (100 100, 20 180, 180 180), planar coordinates with SRID 4326
pub const PLANAR_LINE: &str = "E610000001040300000000000000000059400000000000005940000000000000344000000000008066400000000000806640000000000080664001000000010000000001000000FFFFFFFF0000000002";
// POLYGON with one 5-point ring, SRID 4326
pub const POLYGON: &str = "E61000000104050000004ED1915CFE6324C08195438B6C875240736891ED7C0F46C0696FF085C9745240736891ED7C0F46C0711B0DE02D8C5440448B6CE7FB0924C08D28ED0DBE9054404ED1915CFE6324C08195438B6C87524001000000020000000001000000FFFFFFFF0000000003";
// MULTIPOLYGON of two polygons, the second with a hole, SRID 4326
pub const MULTIPOLYGON: &str = "E610000001040E000000000000000000444000000000000044400000000000003440000000000080464000000000008046400000000000003E400000000000004440000000000000444000000000000034400000000000804140000000000080464000000000000034400000000000003E4000000000000014400000000000002440000000000000244000000000000024400000000000003E40000000000000344000000000008041400000000000003E4000000000000034400000000000003440000000000000394000000000000034400000000000002E400000000000003E4000000000000034400300000002000000000204000000000A00000003000000FFFFFFFF0000000006000000000000000003000000000100000003";
// GEOMETRYCOLLECTION (POINT (4 6), LINESTRING (4 6, 7 10)), SRID 4326
pub const COLLECTION: &str = "E6100000010403000000000000000000184000000000000010400000000000001840000000000000104000000000000024400000000000001C40020000000100000000010100000003000000FFFFFFFF0000000007000000000000000001000000000100000002";
// CURVEPOLYGON (COMPOUNDCURVE ((0 0, 0 2, 2 2), CIRCULARSTRING (2 2, 1 0, 0 0))), SRID 4326
pub const CURVE_POLYGON: &str = "E61000000224050000000000000000000000000000000000000000000000000000400000000000000000000000000000004000000000000000400000000000000000000000000000F03F0000000000000000000000000000000001000000030000000001000000FFFFFFFF000000000A03000000020003";
// The same curve polygon as a geometry column value, SRID 0
pub const CURVE_POLYGON_GEOMETRY: &str = "00000000020405000000000000000000000000000000000000000000000000000000000000000000004000000000000000400000000000000040000000000000F03F00000000000000000000000000000000000000000000000001000000030000000001000000FFFFFFFF000000000A03000000020003";
