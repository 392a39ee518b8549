use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;
use crate::geometry::MultiPoint;
use crate::io::wkb::reader::geometry::read_member_header;
use crate::io::wkb::reader::point::read_point;
use crate::io::wkb::reader::{Endianness, WKBReader};

pub(super) fn read_multi_point(
    reader: &mut WKBReader,
    byte_order: Endianness,
    dim: Dimension,
) -> Result<MultiPoint> {
    let num_points = reader.read_count(byte_order, 5)?;
    let mut points = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        let header = read_member_header(reader, GeometryType::Point, dim)?;
        points.push(read_point(reader, header.byte_order, header.dim)?);
    }
    MultiPoint::try_new(points, dim)
}
