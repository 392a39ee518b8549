use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::wkb::writer::geometrycollection::{
    geometry_collection_wkb_size, write_geometry_collection_as_wkb,
};
use crate::io::wkb::writer::linestring::{line_string_wkb_size, write_line_string_as_wkb};
use crate::io::wkb::writer::multilinestring::{
    multi_line_string_wkb_size, write_multi_line_string_as_wkb,
};
use crate::io::wkb::writer::multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
use crate::io::wkb::writer::multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
use crate::io::wkb::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};
use crate::io::wkb::writer::WKBWriter;

/// The byte length of a Geometry, excluding any SRID field
pub(crate) fn geometry_wkb_size(geom: &Geometry) -> usize {
    match geom {
        Geometry::Point(p) => point_wkb_size(p.dimension()),
        Geometry::LineString(ls) => line_string_wkb_size(ls),
        Geometry::Polygon(p) => polygon_wkb_size(p),
        Geometry::MultiPoint(mp) => multi_point_wkb_size(mp),
        Geometry::MultiLineString(ml) => multi_line_string_wkb_size(ml),
        Geometry::MultiPolygon(mp) => multi_polygon_wkb_size(mp),
        Geometry::GeometryCollection(gc) => geometry_collection_wkb_size(gc),
    }
}

/// Write a Geometry encoded as WKB.
///
/// `srid` is only ever passed for the root; nested geometries are written without one.
pub(crate) fn write_geometry_as_wkb(
    writer: &mut WKBWriter,
    geom: &Geometry,
    srid: Option<i32>,
) -> Result<()> {
    match geom {
        Geometry::Point(p) => write_point_as_wkb(writer, p, srid),
        Geometry::LineString(ls) => write_line_string_as_wkb(writer, ls, srid),
        Geometry::Polygon(p) => write_polygon_as_wkb(writer, p, srid),
        Geometry::MultiPoint(mp) => write_multi_point_as_wkb(writer, mp, srid),
        Geometry::MultiLineString(ml) => write_multi_line_string_as_wkb(writer, ml, srid),
        Geometry::MultiPolygon(mp) => write_multi_polygon_as_wkb(writer, mp, srid),
        Geometry::GeometryCollection(gc) => write_geometry_collection_as_wkb(writer, gc, srid),
    }
}
