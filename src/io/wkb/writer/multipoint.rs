use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::MultiPoint;
use crate::io::wkb::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::io::wkb::writer::{WKBWriter, HEADER_SIZE};

/// The byte length of a WKBMultiPoint
pub(crate) fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_SIZE + 4 + geom.points().len() * point_wkb_size(geom.dimension())
}

/// Write a MultiPoint encoded as WKB
pub(crate) fn write_multi_point_as_wkb(
    writer: &mut WKBWriter,
    geom: &MultiPoint,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_header(GeometryType::MultiPoint, geom.dimension(), srid);
    writer.write_count(geom.points().len())?;
    for point in geom.points() {
        write_point_as_wkb(writer, point, None)?;
    }
    Ok(())
}
