//! Header: SRID, version and serialization properties.

use clrgeo_buffers::Reader;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::tags::FormatVersion;

/// SRID reported when the input carries no SRID field.
pub const NO_SRID: i32 = 0;

const HAS_Z: u8 = 0x01;
const HAS_M: u8 = 0x02;
const IS_VALID: u8 = 0x04;
const SINGLE_POINT: u8 = 0x08;
const SINGLE_LINE: u8 = 0x10;
const LARGER_THAN_HEMISPHERE: u8 = 0x20;

/// The serialization-properties byte, decoded once into named flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializationFlags {
    pub has_z: bool,
    pub has_m: bool,
    pub is_valid: bool,
    pub single_point: bool,
    pub single_line: bool,
    /// Only defined for the extended version; always `false` for version 1.
    pub larger_than_hemisphere: bool,
}

impl SerializationFlags {
    /// Decodes the properties byte. Bits 6 and 7 are reserved and ignored.
    pub fn from_byte(version: FormatVersion, byte: u8) -> Result<Self, DecodeError> {
        let flags = Self {
            has_z: byte & HAS_Z != 0,
            has_m: byte & HAS_M != 0,
            is_valid: byte & IS_VALID != 0,
            single_point: byte & SINGLE_POINT != 0,
            single_line: byte & SINGLE_LINE != 0,
            larger_than_hemisphere: version == FormatVersion::Extended
                && byte & LARGER_THAN_HEMISPHERE != 0,
        };
        if flags.single_point && flags.single_line {
            return Err(DecodeError::MalformedFlags(byte));
        }
        Ok(flags)
    }

    /// Whether the figure and shape arrays are implied rather than stored.
    pub fn is_shortcut(&self) -> bool {
        self.single_point || self.single_line
    }

    /// Point count implied by a shortcut flag.
    pub fn implied_point_count(&self) -> Option<usize> {
        if self.single_point {
            Some(1)
        } else if self.single_line {
            Some(2)
        } else {
            None
        }
    }

    /// Bytes occupied by one point across the XY, Z and M arrays.
    pub fn point_width(&self) -> usize {
        let mut width = 16;
        if self.has_z {
            width += 8;
        }
        if self.has_m {
            width += 8;
        }
        width
    }
}

/// Decoded header of a spatial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub srid: i32,
    pub version: FormatVersion,
    pub flags: SerializationFlags,
}

impl Header {
    /// Reads the header. Without `srid_prefix` the value reports [`NO_SRID`].
    pub fn read(reader: &mut Reader<'_>, srid_prefix: bool) -> Result<Self, DecodeError> {
        let srid = if srid_prefix { reader.i32()? } else { NO_SRID };
        let version_byte = reader.u8()?;
        let version = FormatVersion::from_byte(version_byte)
            .ok_or(DecodeError::UnsupportedVersion(version_byte))?;
        let flags = SerializationFlags::from_byte(version, reader.u8()?)?;
        Ok(Self {
            srid,
            version,
            flags,
        })
    }
}
