use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::Polygon;
use crate::io::wkb::reader::linestring::read_coords;
use crate::io::wkb::reader::{Endianness, WKBReader};

/// Read the body of a Polygon: a ring count, then each ring as a point count and coordinates.
pub(super) fn read_polygon(
    reader: &mut WKBReader,
    byte_order: Endianness,
    dim: Dimension,
) -> Result<Polygon> {
    let num_rings = reader.read_count(byte_order, 4)?;
    let rings = (0..num_rings)
        .map(|_| read_coords(reader, byte_order, dim))
        .collect::<Result<Vec<_>>>()?;
    Polygon::try_from_rings(rings, dim)
}
