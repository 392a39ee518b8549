use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::MultiPolygon;
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};
use crate::io::wkb::writer::{WKBWriter, HEADER_SIZE};

/// The byte length of a WKBMultiPolygon
pub(crate) fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    HEADER_SIZE + 4 + geom.polygons().iter().map(polygon_wkb_size).sum::<usize>()
}

/// Write a MultiPolygon encoded as WKB
pub(crate) fn write_multi_polygon_as_wkb(
    writer: &mut WKBWriter,
    geom: &MultiPolygon,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_header(GeometryType::MultiPolygon, geom.dimension(), srid);
    writer.write_count(geom.polygons().len())?;
    for polygon in geom.polygons() {
        write_polygon_as_wkb(writer, polygon, None)?;
    }
    Ok(())
}
