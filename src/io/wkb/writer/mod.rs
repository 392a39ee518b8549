//! Encoding the geometry model as WKB or EWKB.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{PpgeError, Result};
use crate::geometry::Coord;
use crate::io::wkb::common::{WKBTypeCode, WkbFlavor};
use crate::io::wkb::reader::Endianness;

pub(crate) use geometry::{geometry_wkb_size, write_geometry_as_wkb};

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

/// The byte length of a header without SRID: byte order + type code.
pub(crate) const HEADER_SIZE: usize = 1 + 4;

/// The byte length of an SRID field.
pub(crate) const SRID_SIZE: usize = 4;

/// An in-memory WKB sink with a fixed byte order and flavor.
///
/// Writing into a `Vec` cannot fail. The only error is a count too large for its 32-bit field.
pub(crate) struct WKBWriter {
    buf: Vec<u8>,
    byte_order: Endianness,
    flavor: WkbFlavor,
}

impl WKBWriter {
    pub(crate) fn with_capacity(capacity: usize, byte_order: Endianness, flavor: WkbFlavor) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            byte_order,
            flavor,
        }
    }

    fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    fn write_u32(&mut self, value: u32) {
        let mut bytes = [0u8; 4];
        match self.byte_order {
            Endianness::BigEndian => BigEndian::write_u32(&mut bytes, value),
            Endianness::LittleEndian => LittleEndian::write_u32(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    fn write_i32(&mut self, value: i32) {
        let mut bytes = [0u8; 4];
        match self.byte_order {
            Endianness::BigEndian => BigEndian::write_i32(&mut bytes, value),
            Endianness::LittleEndian => LittleEndian::write_i32(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    fn write_f64(&mut self, value: f64) {
        let mut bytes = [0u8; 8];
        match self.byte_order {
            Endianness::BigEndian => BigEndian::write_f64(&mut bytes, value),
            Endianness::LittleEndian => LittleEndian::write_f64(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    /// Write a count field. WKB counts are 32 bits wide, so larger counts fail with
    /// [`PpgeError::TooManyElements`].
    fn write_count(&mut self, count: usize) -> Result<()> {
        let count32 = u32::try_from(count).map_err(|_| PpgeError::TooManyElements(count))?;
        self.write_u32(count32);
        Ok(())
    }

    /// Write byte order, type code and, for a root geometry in EWKB, the SRID.
    fn write_header(&mut self, geometry_type: GeometryType, dim: Dimension, srid: Option<i32>) {
        let srid = srid.filter(|_| self.flavor == WkbFlavor::Extended);
        let code = WKBTypeCode {
            geometry_type,
            dim,
            has_srid: srid.is_some(),
        };
        self.write_u8(self.byte_order.into());
        self.write_u32(code.to_code(self.flavor));
        if let Some(srid) = srid {
            self.write_i32(srid);
        }
    }

    fn write_coord(&mut self, coord: &Coord) {
        for ordinate in coord.ordinates() {
            self.write_f64(ordinate);
        }
    }

    fn write_coords(&mut self, coords: &[Coord]) -> Result<()> {
        self.write_count(coords.len())?;
        coords.iter().for_each(|coord| self.write_coord(coord));
        Ok(())
    }

    pub(crate) fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn counts_beyond_u32_fail() {
        let mut writer = WKBWriter::with_capacity(4, Endianness::BigEndian, WkbFlavor::Iso);
        writer.write_count(u32::MAX as usize).unwrap();
        assert_eq!(writer.into_inner(), vec![0xff; 4]);

        let mut writer = WKBWriter::with_capacity(4, Endianness::BigEndian, WkbFlavor::Iso);
        let too_many = u32::MAX as usize + 1;
        assert!(matches!(
            writer.write_count(too_many),
            Err(PpgeError::TooManyElements(n)) if n == too_many
        ));
        assert!(writer.into_inner().is_empty());
    }
}
