use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;
use crate::geometry::Point;
use crate::io::wkb::writer::{WKBWriter, HEADER_SIZE};

/// The byte length of a WKBPoint
pub(crate) fn point_wkb_size(dim: Dimension) -> usize {
    HEADER_SIZE + dim.size() * 8
}

/// Write a Point encoded as WKB.
///
/// An empty point is written with every ordinate set to NaN.
pub(crate) fn write_point_as_wkb(
    writer: &mut WKBWriter,
    geom: &Point,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_header(GeometryType::Point, geom.dimension(), srid);
    match geom.coord() {
        Some(coord) => writer.write_coord(coord),
        None => (0..geom.dimension().size()).for_each(|_| writer.write_f64(f64::NAN)),
    }
    Ok(())
}
