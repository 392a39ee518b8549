use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::MultiLineString;
use crate::io::wkb::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};
use crate::io::wkb::writer::{WKBWriter, HEADER_SIZE};

/// The byte length of a WKBMultiLineString
pub(crate) fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    HEADER_SIZE
        + 4
        + geom
            .line_strings()
            .iter()
            .map(line_string_wkb_size)
            .sum::<usize>()
}

/// Write a MultiLineString encoded as WKB
pub(crate) fn write_multi_line_string_as_wkb(
    writer: &mut WKBWriter,
    geom: &MultiLineString,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_header(GeometryType::MultiLineString, geom.dimension(), srid);
    writer.write_count(geom.line_strings().len())?;
    for line_string in geom.line_strings() {
        write_line_string_as_wkb(writer, line_string, None)?;
    }
    Ok(())
}
