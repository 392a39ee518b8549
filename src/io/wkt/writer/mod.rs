//! Printing the geometry model as WKT and EWKT.

use itertools::Itertools;
use lexical_core::FormattedSize;

use crate::datatypes::Dimension;
use crate::geometry::{Coord, Geometry, LineString, Point, Polygon, SpatialGeometry};

/// Format one ordinate.
///
/// With no precision this is the shortest text that parses back to the same `f64`, switching
/// to an exponent for very large or small magnitudes.
fn format_ordinate(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(precision) => format!("{value:.precision$}"),
        None => shortest(value),
    }
}

fn shortest(value: f64) -> String {
    let mut buffer = [0u8; f64::FORMATTED_SIZE_DECIMAL];
    let text = String::from_utf8_lossy(lexical_core::write(value, &mut buffer)).into_owned();
    // lexical writes integral values as `1.0` and `1.0e300`
    let text = text.replacen(".0e", "e", 1);
    match text.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => text,
    }
}

fn format_coord(coord: &Coord, precision: Option<usize>) -> String {
    coord
        .ordinates()
        .map(|ordinate| format_ordinate(ordinate, precision))
        .join(" ")
}

fn format_coords(coords: &[Coord], precision: Option<usize>) -> String {
    if coords.is_empty() {
        return "EMPTY".to_string();
    }
    let coords = coords
        .iter()
        .map(|coord| format_coord(coord, precision))
        .join(", ");
    format!("({coords})")
}

fn format_point(point: &Point, precision: Option<usize>) -> String {
    match point.coord() {
        Some(coord) => format!("({})", format_coord(coord, precision)),
        None => "EMPTY".to_string(),
    }
}

fn format_line_string(line_string: &LineString, precision: Option<usize>) -> String {
    format_coords(line_string.coords(), precision)
}

fn format_polygon(polygon: &Polygon, precision: Option<usize>) -> String {
    format_members(polygon.rings(), |ring| format_line_string(ring, precision))
}

fn format_members<T>(members: &[T], format_member: impl Fn(&T) -> String) -> String {
    if members.is_empty() {
        return "EMPTY".to_string();
    }
    format!("({})", members.iter().map(format_member).join(", "))
}

fn dimension_tag(dim: Dimension) -> &'static str {
    match dim {
        Dimension::XY => "",
        Dimension::XYZ => " Z",
        Dimension::XYM => " M",
        Dimension::XYZM => " ZM",
    }
}

/// Format a geometry as WKT: `<TYPE>[ Z| M| ZM] <body>`.
pub(crate) fn format_geometry(geometry: &Geometry, precision: Option<usize>) -> String {
    let body = match geometry {
        Geometry::Point(g) => format_point(g, precision),
        Geometry::LineString(g) => format_line_string(g, precision),
        Geometry::Polygon(g) => format_polygon(g, precision),
        Geometry::MultiPoint(g) => format_members(g.points(), |p| format_point(p, precision)),
        Geometry::MultiLineString(g) => {
            format_members(g.line_strings(), |ls| format_line_string(ls, precision))
        }
        Geometry::MultiPolygon(g) => {
            format_members(g.polygons(), |p| format_polygon(p, precision))
        }
        Geometry::GeometryCollection(g) => {
            format_members(g.geometries(), |child| format_geometry(child, precision))
        }
    };
    format!(
        "{}{} {}",
        geometry.geometry_type().wkt_keyword(),
        dimension_tag(geometry.dimension()),
        body
    )
}

/// Format a geometry as EWKT, with an `SRID=<n>;` prefix when the root has an SRID.
pub(crate) fn format_spatial_geometry(geom: &SpatialGeometry, precision: Option<usize>) -> String {
    let wkt = format_geometry(geom.geometry(), precision);
    match geom.srid() {
        Some(srid) => format!("SRID={srid};{wkt}"),
        None => wkt,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{GeometryCollection, MultiPoint, MultiPolygon};
    use crate::test::{gc_nested, ls_z, mp0, mp_zm, mpoly0, p0, p_m, p_z, p_zm, poly0};

    fn wkt(geometry: impl Into<Geometry>) -> String {
        format_geometry(&geometry.into(), None)
    }

    #[test]
    fn points() {
        assert_eq!(wkt(p0()), "POINT (0 1)");
        assert_eq!(wkt(p_z()), "POINT Z (1 2 3)");
        assert_eq!(wkt(p_m()), "POINT M (1 2 4)");
        assert_eq!(wkt(p_zm()), "POINT ZM (-0.5 -1 -2 -4)");
        assert_eq!(wkt(Point::empty(Dimension::XY)), "POINT EMPTY");
        assert_eq!(wkt(Point::empty(Dimension::XYZ)), "POINT Z EMPTY");
    }

    #[test]
    fn nested() {
        assert_eq!(wkt(ls_z()), "LINESTRING Z (100 0 -60, 101 1 -65.25)");
        assert_eq!(
            wkt(poly0()),
            "POLYGON ((-111 45, -111 41, -104 41, -104 45, -111 45), \
             (-108 43, -107 43, -107 44, -108 43))"
        );
        assert_eq!(wkt(mp0()), "MULTIPOINT ((0 1), (1 2))");
        assert_eq!(wkt(mp_zm()), "MULTIPOINT ZM ((100 3.1 1 0), (101 2.1 2 0))");
        assert!(wkt(mpoly0()).starts_with("MULTIPOLYGON (((-111 45, "));
        assert_eq!(
            wkt(gc_nested()),
            "GEOMETRYCOLLECTION (GEOMETRYCOLLECTION (MULTIPOINT ((0 1), (1 2))), POINT Z (1 2 3))"
        );
    }

    #[test]
    fn empty_members() {
        let mp =
            MultiPoint::try_new(vec![Point::empty(Dimension::XY), p0()], Dimension::XY).unwrap();
        assert_eq!(wkt(mp), "MULTIPOINT (EMPTY, (0 1))");
        assert_eq!(
            wkt(MultiPolygon::try_new(vec![Polygon::empty(Dimension::XY)], Dimension::XY).unwrap()),
            "MULTIPOLYGON (EMPTY)"
        );
        assert_eq!(
            wkt(GeometryCollection::empty(Dimension::XYZM)),
            "GEOMETRYCOLLECTION ZM EMPTY"
        );
    }

    #[test]
    fn shortest_round_trip_numbers() {
        let point = Point::new(Coord::new_xy(0.1 + 0.2, -1.5)).unwrap();
        assert_eq!(wkt(point), "POINT (0.30000000000000004 -1.5)");

        for value in [1e-7, 1e300, -1e-300, f64::MAX, f64::MIN_POSITIVE, 123456789.5] {
            let text = shortest(value);
            assert!(text.len() <= 24, "{text}");
            assert_eq!(text.parse::<f64>().unwrap(), value, "{text}");
        }
    }

    #[test]
    fn extreme_magnitudes_stay_short() {
        let point = Point::new(Coord::new_xy(1e300, 1e-300)).unwrap();
        let text = wkt(point);
        assert!(text.len() < 32, "{text}");
        assert_eq!(text.to_ascii_lowercase(), "point (1e300 1e-300)");
    }

    #[test]
    fn fixed_precision() {
        let point = Point::new(Coord::new_xy(1.0 / 3.0, 2.)).unwrap();
        assert_eq!(
            format_geometry(&point.into(), Some(3)),
            "POINT (0.333 2.000)"
        );
    }

    #[test]
    fn srid_prefix() {
        let geom = SpatialGeometry::with_srid(p0().into(), 4326);
        assert_eq!(format_spatial_geometry(&geom, None), "SRID=4326;POINT (0 1)");
        assert_eq!(format_spatial_geometry(&p0().into(), None), "POINT (0 1)");
    }
}
