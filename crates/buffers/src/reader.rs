//! Little-endian binary reader with cursor tracking.

use crate::BufferError;

/// A binary buffer reader over a borrowed byte slice.
///
/// The reader keeps a cursor position and provides checked, little-endian
/// reads of the fixed-width types the spatial format uses. A failed read
/// leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use clrgeo_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.size(), 3);
/// assert!(reader.u32().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the current cursor position.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len().saturating_sub(self.x)
    }

    /// Returns `true` when every byte has been consumed.
    pub fn is_eof(&self) -> bool {
        self.size() == 0
    }

    /// Fails unless at least `needed` bytes remain.
    pub fn ensure(&self, needed: usize) -> Result<(), BufferError> {
        if self.size() < needed {
            return Err(BufferError::EndOfBuffer {
                offset: self.x,
                needed,
                available: self.size(),
            });
        }
        Ok(())
    }

    /// Fails unless `count` items of `width` bytes each remain.
    pub fn ensure_items(&self, count: usize, width: usize) -> Result<(), BufferError> {
        let needed = count.checked_mul(width).ok_or(BufferError::Overflow)?;
        self.ensure(needed)
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.ensure(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let start = self.x;
        self.x += size;
        Ok(&self.uint8[start..self.x])
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let bytes = self.buf(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.uint8.get(self.x).copied()
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.array::<1>()?[0])
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        self.array().map(u32::from_le_bytes)
    }

    /// Reads a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        self.array().map(i32::from_le_bytes)
    }

    /// Reads a 64-bit floating point number (little-endian).
    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        self.array().map(f64::from_le_bytes)
    }
}
