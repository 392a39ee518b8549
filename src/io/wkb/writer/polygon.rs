use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::Polygon;
use crate::io::wkb::writer::linestring::coords_wkb_size;
use crate::io::wkb::writer::{WKBWriter, HEADER_SIZE};

/// The byte length of a WKBPolygon
pub(crate) fn polygon_wkb_size(geom: &Polygon) -> usize {
    HEADER_SIZE + 4 + geom.rings().iter().map(coords_wkb_size).sum::<usize>()
}

/// Write a Polygon encoded as WKB. An empty polygon has zero rings.
pub(crate) fn write_polygon_as_wkb(
    writer: &mut WKBWriter,
    geom: &Polygon,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_header(GeometryType::Polygon, geom.dimension(), srid);
    writer.write_count(geom.rings().len())?;
    for ring in geom.rings() {
        writer.write_coords(ring.coords())?;
    }
    Ok(())
}
