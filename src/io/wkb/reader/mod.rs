//! Decoding WKB and EWKB byte sequences into the geometry model.

use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::error::{PpgeError, Result};

pub use geometry::Endianness;
pub(crate) use geometry::read_geometry;

mod geometry;
mod geometry_collection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

/// A bounds-checked cursor over a WKB buffer.
///
/// Every read first checks that enough bytes remain, so malformed input surfaces as
/// [`PpgeError::TruncatedInput`] instead of a panic.
pub(crate) struct WKBReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> WKBReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
        }
    }

    /// The number of bytes not yet consumed.
    pub(crate) fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len();
        len.saturating_sub(self.position())
    }

    pub(crate) fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < needed {
            Err(PpgeError::TruncatedInput { needed, remaining })
        } else {
            Ok(())
        }
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub(crate) fn read_u32(&mut self, byte_order: Endianness) -> Result<u32> {
        self.ensure(4)?;
        let value = match byte_order {
            Endianness::BigEndian => self.cursor.read_u32::<BigEndian>()?,
            Endianness::LittleEndian => self.cursor.read_u32::<LittleEndian>()?,
        };
        Ok(value)
    }

    pub(crate) fn read_i32(&mut self, byte_order: Endianness) -> Result<i32> {
        self.ensure(4)?;
        let value = match byte_order {
            Endianness::BigEndian => self.cursor.read_i32::<BigEndian>()?,
            Endianness::LittleEndian => self.cursor.read_i32::<LittleEndian>()?,
        };
        Ok(value)
    }

    pub(crate) fn read_f64(&mut self, byte_order: Endianness) -> Result<f64> {
        self.ensure(8)?;
        let value = match byte_order {
            Endianness::BigEndian => self.cursor.read_f64::<BigEndian>()?,
            Endianness::LittleEndian => self.cursor.read_f64::<LittleEndian>()?,
        };
        Ok(value)
    }

    /// Read an element count and check that `count * min_item_size` bytes could follow.
    ///
    /// The returned count is therefore safe to use as an allocation capacity.
    pub(crate) fn read_count(&mut self, byte_order: Endianness, min_item_size: usize) -> Result<usize> {
        let count = self.read_u32(byte_order)? as usize;
        self.ensure(count.saturating_mul(min_item_size))?;
        Ok(count)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn truncated_reads() {
        let buf = [1u8, 2, 3];
        let mut reader = WKBReader::new(&buf);
        assert_eq!(reader.read_u8().unwrap(), 1);
        assert!(matches!(
            reader.read_u32(Endianness::LittleEndian),
            Err(PpgeError::TruncatedInput {
                needed: 4,
                remaining: 2
            })
        ));
        // a failed read consumes nothing
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn byte_orders() {
        let buf = [0u8, 0, 0x10, 0xe6, 0xe6, 0x10, 0, 0];
        let mut reader = WKBReader::new(&buf);
        assert_eq!(reader.read_i32(Endianness::BigEndian).unwrap(), 4326);
        assert_eq!(reader.read_i32(Endianness::LittleEndian).unwrap(), 4326);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn implausible_counts() {
        // u32::MAX points cannot fit in the 0 bytes that follow
        let buf = [0xff, 0xff, 0xff, 0xff];
        let mut reader = WKBReader::new(&buf);
        assert!(matches!(
            reader.read_count(Endianness::LittleEndian, 16),
            Err(PpgeError::TruncatedInput { .. })
        ));
    }
}
