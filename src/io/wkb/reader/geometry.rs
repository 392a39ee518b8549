use log::warn;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{PpgeError, Result};
use crate::geometry::Geometry;
use crate::io::wkb::common::WKBTypeCode;
use crate::io::wkb::reader::geometry_collection::read_geometry_collection;
use crate::io::wkb::reader::linestring::read_line_string;
use crate::io::wkb::reader::multilinestring::read_multi_line_string;
use crate::io::wkb::reader::multipoint::read_multi_point;
use crate::io::wkb::reader::multipolygon::read_multi_polygon;
use crate::io::wkb::reader::point::read_point;
use crate::io::wkb::reader::polygon::read_polygon;
use crate::io::wkb::reader::WKBReader;

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = PpgeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(PpgeError::InvalidByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// The byte order, type code and optional SRID that open every WKB geometry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WKBHeader {
    pub(crate) byte_order: Endianness,
    pub(crate) geometry_type: GeometryType,
    pub(crate) dim: Dimension,
    pub(crate) srid: Option<i32>,
}

fn read_header(reader: &mut WKBReader) -> Result<WKBHeader> {
    let byte_order = Endianness::try_from(reader.read_u8()?)?;
    let code = WKBTypeCode::try_from_code(reader.read_u32(byte_order)?)?;
    let srid = if code.has_srid {
        Some(reader.read_i32(byte_order)?)
    } else {
        None
    };
    Ok(WKBHeader {
        byte_order,
        geometry_type: code.geometry_type,
        dim: code.dim,
        srid,
    })
}

/// Read the header of a geometry nested inside a Multi* or collection.
///
/// Nested geometries never own an SRID. One written anyway is consumed and dropped.
pub(super) fn read_child_header(reader: &mut WKBReader) -> Result<WKBHeader> {
    let offset = reader.position();
    let mut header = read_header(reader)?;
    if let Some(srid) = header.srid.take() {
        warn!("ignoring SRID {srid} on nested WKB geometry at byte {offset}");
    }
    Ok(header)
}

/// Read a child of a Multi* geometry, which must be of `expected` kind and share the
/// parent's dimension.
pub(super) fn read_member_header(
    reader: &mut WKBReader,
    expected: GeometryType,
    parent: Dimension,
) -> Result<WKBHeader> {
    let header = read_child_header(reader)?;
    if header.geometry_type != expected {
        return Err(PpgeError::IncorrectGeometryType {
            expected,
            found: header.geometry_type,
        });
    }
    if header.dim != parent {
        return Err(PpgeError::InconsistentDimensionality {
            parent,
            child: header.dim,
        });
    }
    Ok(header)
}

/// Read one complete root geometry, returning it with the SRID found in its header.
pub(crate) fn read_geometry(reader: &mut WKBReader) -> Result<(Geometry, Option<i32>)> {
    let header = read_header(reader)?;
    let geometry = read_body(reader, &header, 0)?;
    Ok((geometry, header.srid))
}

/// Read the part of a geometry that follows its header.
///
/// `depth` is the number of collections enclosing this geometry.
pub(super) fn read_body(
    reader: &mut WKBReader,
    header: &WKBHeader,
    depth: usize,
) -> Result<Geometry> {
    let WKBHeader { byte_order, dim, .. } = *header;
    let geometry = match header.geometry_type {
        GeometryType::Point => read_point(reader, byte_order, dim)?.into(),
        GeometryType::LineString => read_line_string(reader, byte_order, dim)?.into(),
        GeometryType::Polygon => read_polygon(reader, byte_order, dim)?.into(),
        GeometryType::MultiPoint => read_multi_point(reader, byte_order, dim)?.into(),
        GeometryType::MultiLineString => read_multi_line_string(reader, byte_order, dim)?.into(),
        GeometryType::MultiPolygon => read_multi_polygon(reader, byte_order, dim)?.into(),
        GeometryType::GeometryCollection => {
            read_geometry_collection(reader, byte_order, dim, depth)?.into()
        }
    };
    Ok(geometry)
}
