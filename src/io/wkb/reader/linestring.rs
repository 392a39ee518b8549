use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{Coord, LineString};
use crate::io::wkb::reader::point::read_coord;
use crate::io::wkb::reader::{Endianness, WKBReader};

/// Read a point count followed by that many coordinates.
pub(super) fn read_coords(
    reader: &mut WKBReader,
    byte_order: Endianness,
    dim: Dimension,
) -> Result<Vec<Coord>> {
    let num_points = reader.read_count(byte_order, dim.size() * 8)?;
    (0..num_points)
        .map(|_| read_coord(reader, byte_order, dim))
        .collect()
}

/// Read the body of a LineString.
pub(super) fn read_line_string(
    reader: &mut WKBReader,
    byte_order: Endianness,
    dim: Dimension,
) -> Result<LineString> {
    LineString::try_new(read_coords(reader, byte_order, dim)?, dim)
}
