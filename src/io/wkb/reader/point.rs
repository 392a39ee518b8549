use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{Coord, Point};
use crate::io::wkb::reader::{Endianness, WKBReader};

/// Read `dim.size()` consecutive doubles as one coordinate.
pub(super) fn read_coord(
    reader: &mut WKBReader,
    byte_order: Endianness,
    dim: Dimension,
) -> Result<Coord> {
    let mut ordinates = [0f64; 4];
    for ordinate in ordinates.iter_mut().take(dim.size()) {
        *ordinate = reader.read_f64(byte_order)?;
    }
    Coord::from_ordinates(&ordinates[..dim.size()], dim)
}

/// Read the body of a Point.
///
/// A point whose ordinates are all NaN is the WKB spelling of an empty point.
pub(super) fn read_point(
    reader: &mut WKBReader,
    byte_order: Endianness,
    dim: Dimension,
) -> Result<Point> {
    let coord = read_coord(reader, byte_order, dim)?;
    if coord.ordinates().all(f64::is_nan) {
        Ok(Point::empty(dim))
    } else {
        Point::try_new(Some(coord), dim)
    }
}
