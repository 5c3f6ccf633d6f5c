//! Bounds-checked byte reader for ledger records.

use crate::error::{Error, Result};

/// A position-tracking reader over a record window.
///
/// Every read is bounds-checked; running past the end reports
/// [`Error::ShortRecord`] with the length of the underlying window.
///
/// # Example
///
/// ```
/// use chance_core::ledger::ByteBuffer;
///
/// let data = [0xE8, 0x03, 0x00, 0x00, 0x9C, 0xFF, 0xFF, 0xFF];
/// let mut buf = ByteBuffer::new(&data);
///
/// assert_eq!(buf.read_u32().unwrap(), 1000);
/// assert_eq!(buf.read_i32().unwrap(), -100);
/// assert_eq!(buf.remaining(), 0);
/// ```
pub struct ByteBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Reads the specified number of bytes and advances the position.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|&end| end <= self.data.len())
            .ok_or(Error::ShortRecord {
                len: self.data.len(),
            })?;

        let result = &self.data[self.pos..end];
        self.pos = end;
        Ok(result)
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a signed 32-bit integer (little-endian).
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a `size`-byte buffer holding a zero-terminated UTF-8 string.
    ///
    /// At most `size - 1` content bytes are considered, so a buffer missing its
    /// terminator still yields the leading content.
    pub fn read_zstring(&mut self, size: usize) -> Result<&'a str> {
        let bytes = self.read_bytes(size)?;
        let content = &bytes[..size.saturating_sub(1)];
        let len = content.iter().position(|&b| b == 0).unwrap_or(content.len());
        std::str::from_utf8(&content[..len]).map_err(|_| Error::InvalidName)
    }
}
