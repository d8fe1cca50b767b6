//! Binary buffer utilities for clrgeo.
//!
//! The spatial column format is little-endian throughout, and every input is
//! untrusted, so the [`Reader`] here checks every access against the end of the
//! buffer and reports a shortfall as a [`BufferError`] instead of panicking.
//!
//! # Example
//!
//! ```
//! use clrgeo_buffers::Reader;
//!
//! let data = [0xE6, 0x10, 0x00, 0x00, 0x01];
//! let mut reader = Reader::new(&data);
//!
//! assert_eq!(reader.i32().unwrap(), 4326);
//! assert_eq!(reader.u8().unwrap(), 1);
//! assert!(reader.is_eof());
//! ```

mod reader;

pub use reader::Reader;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: needed {needed} bytes at offset {offset}, {available} available")]
    EndOfBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// A size computation overflowed `usize`.
    #[error("buffer size overflow")]
    Overflow,
}
