use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;
use crate::geometry::MultiPolygon;
use crate::io::wkb::reader::geometry::read_member_header;
use crate::io::wkb::reader::polygon::read_polygon;
use crate::io::wkb::reader::{Endianness, WKBReader};

pub(super) fn read_multi_polygon(
    reader: &mut WKBReader,
    byte_order: Endianness,
    dim: Dimension,
) -> Result<MultiPolygon> {
    let num_polygons = reader.read_count(byte_order, 5)?;
    let mut polygons = Vec::with_capacity(num_polygons);
    for _ in 0..num_polygons {
        let header = read_member_header(reader, GeometryType::Polygon, dim)?;
        polygons.push(read_polygon(reader, header.byte_order, header.dim)?);
    }
    MultiPolygon::try_new(polygons, dim)
}
