use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::LineString;
use crate::io::wkb::writer::{WKBWriter, HEADER_SIZE};

/// The byte length of the point count and coordinates of a line string or ring
pub(crate) fn coords_wkb_size(geom: &LineString) -> usize {
    4 + geom.num_coords() * geom.dimension().size() * 8
}

/// The byte length of a WKBLineString
pub(crate) fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_SIZE + coords_wkb_size(geom)
}

/// Write a LineString encoded as WKB
pub(crate) fn write_line_string_as_wkb(
    writer: &mut WKBWriter,
    geom: &LineString,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_header(GeometryType::LineString, geom.dimension(), srid);
    writer.write_coords(geom.coords())
}
