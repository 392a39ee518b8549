use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::GeometryCollection;
use crate::io::wkb::writer::geometry::{geometry_wkb_size, write_geometry_as_wkb};
use crate::io::wkb::writer::{WKBWriter, HEADER_SIZE};

/// The byte length of a WKBGeometryCollection
pub(crate) fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    HEADER_SIZE
        + 4
        + geom
            .geometries()
            .iter()
            .map(geometry_wkb_size)
            .sum::<usize>()
}

/// Write a GeometryCollection encoded as WKB.
///
/// Members are written with their own dimension and never with an SRID.
pub(crate) fn write_geometry_collection_as_wkb(
    writer: &mut WKBWriter,
    geom: &GeometryCollection,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_header(GeometryType::GeometryCollection, geom.dimension(), srid);
    writer.write_count(geom.num_geometries())?;
    for member in geom.geometries() {
        write_geometry_as_wkb(writer, member, None)?;
    }
    Ok(())
}
