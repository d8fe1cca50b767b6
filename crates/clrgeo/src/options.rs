//! Decoder configuration.

/// Which column type the bytes come from. Controls SRID and coordinate policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpatialKind {
    /// Ellipsoidal: SRID must be in the catalog, coordinates must be lon/lat.
    #[default]
    Geography,
    /// Planar: any SRID, any coordinates.
    Geometry,
}

/// Options for [`decode`](crate::decode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    pub kind: SpatialKind,
    /// Whether a 4-byte SRID precedes the version byte.
    pub srid_prefix: bool,
    /// Accept input that continues past the last section.
    pub allow_trailing_bytes: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::geography()
    }
}

impl DecodeOptions {
    pub fn geography() -> Self {
        Self {
            kind: SpatialKind::Geography,
            srid_prefix: true,
            allow_trailing_bytes: false,
        }
    }

    /// Geometry bytes without an SRID field.
    pub fn geometry() -> Self {
        Self {
            kind: SpatialKind::Geometry,
            srid_prefix: false,
            allow_trailing_bytes: false,
        }
    }

    /// Geometry bytes as stored in a column, SRID field first.
    pub fn geometry_with_srid() -> Self {
        Self {
            srid_prefix: true,
            ..Self::geometry()
        }
    }

    pub fn with_trailing_bytes(mut self, allow: bool) -> Self {
        self.allow_trailing_bytes = allow;
        self
    }
}
