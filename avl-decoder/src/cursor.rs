//! Big-endian byte cursor
//!
//! Sequential reader over a borrowed buffer. Every read checks the remaining
//! length first, so a failed read reports where it happened and leaves the
//! cursor where it was.

use crate::types::{DecoderError, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

/// Stateful read position into a byte buffer
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    inner: Cursor<&'a [u8]>,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            inner: Cursor::new(data),
        }
    }

    /// Create a cursor positioned at `offset`
    pub fn at(data: &'a [u8], offset: usize) -> Result<Self> {
        if offset > data.len() {
            return Err(DecoderError::TruncatedInput {
                offset: 0,
                needed: offset,
                remaining: data.len(),
            });
        }

        let mut inner = Cursor::new(data);
        inner.set_position(offset as u64);
        Ok(Self { inner })
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.inner.position() as usize
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.inner.get_ref().len().saturating_sub(self.position())
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(DecoderError::TruncatedInput {
                offset: self.position(),
                needed,
                remaining,
            });
        }
        Ok(())
    }

    /// Run a fixed-width read after checking that `width` bytes are available
    fn read_fixed<T>(
        &mut self,
        width: usize,
        read: impl FnOnce(&mut Cursor<&'a [u8]>) -> std::io::Result<T>,
    ) -> Result<T> {
        self.ensure(width)?;
        Ok(read(&mut self.inner)?)
    }

    /// Read `n` raw bytes, borrowed from the underlying buffer
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let data: &'a [u8] = *self.inner.get_ref();
        let start = self.position();
        self.inner.set_position((start + n) as u64);
        Ok(&data[start..start + n])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_fixed(1, |c| c.read_u8())
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_fixed(1, |c| c.read_i8())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_fixed(2, |c| c.read_u16::<BigEndian>())
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_fixed(2, |c| c.read_i16::<BigEndian>())
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_fixed(4, |c| c.read_u32::<BigEndian>())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_fixed(4, |c| c.read_i32::<BigEndian>())
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_fixed(8, |c| c.read_u64::<BigEndian>())
    }

    /// IEEE 754 double, big-endian
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_fixed(8, |c| c.read_f64::<BigEndian>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_big_endian() {
        let data = [0x01, 0x02, 0xFF, 0xFE, 0x80, 0x00, 0x00, 0x01];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u16().unwrap(), 0x0102);
        assert_eq!(cursor.read_i16().unwrap(), -2);
        assert_eq!(cursor.read_u32().unwrap(), 0x8000_0001);
        assert_eq!(cursor.position(), 8);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_read_f64() {
        let data = 12.5f64.to_be_bytes();
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_f64().unwrap(), 12.5);
    }

    #[test]
    fn test_read_bytes_borrows_buffer() {
        let data = [0xAA, 0xBB, 0xCC];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[0xAA, 0xBB]);
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.read_bytes(0).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_short_read_fails_without_advancing() {
        let data = [0x00, 0x01, 0x02];
        let mut cursor = ByteCursor::at(&data, 1).unwrap();

        match cursor.read_u32() {
            Err(DecoderError::TruncatedInput {
                offset,
                needed,
                remaining,
            }) => {
                assert_eq!(offset, 1);
                assert_eq!(needed, 4);
                assert_eq!(remaining, 2);
            }
            other => panic!("expected TruncatedInput, got {:?}", other),
        }
        assert_eq!(cursor.position(), 1);
        assert!(cursor.read_bytes(3).is_err());
        assert_eq!(cursor.read_u16().unwrap(), 0x0102);
    }

    #[test]
    fn test_offset_past_end_rejected() {
        let data = [0u8; 4];
        assert!(ByteCursor::at(&data, 4).is_ok());
        assert!(ByteCursor::at(&data, 5).is_err());
    }
}
