use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;
use crate::geometry::MultiLineString;
use crate::io::wkb::reader::geometry::read_member_header;
use crate::io::wkb::reader::linestring::read_line_string;
use crate::io::wkb::reader::{Endianness, WKBReader};

pub(super) fn read_multi_line_string(
    reader: &mut WKBReader,
    byte_order: Endianness,
    dim: Dimension,
) -> Result<MultiLineString> {
    let num_line_strings = reader.read_count(byte_order, 5)?;
    let mut line_strings = Vec::with_capacity(num_line_strings);
    for _ in 0..num_line_strings {
        let header = read_member_header(reader, GeometryType::LineString, dim)?;
        line_strings.push(read_line_string(reader, header.byte_order, header.dim)?);
    }
    MultiLineString::try_new(line_strings, dim)
}
