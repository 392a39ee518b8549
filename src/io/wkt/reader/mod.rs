//! Parsing WKT and EWKT through the [`wkt`] crate.
//!
//! The `SRID=<n>;` prefix is split off here; the rest is parsed by [`wkt::Wkt`] and mapped into
//! the geometry model through the [`geo_traits`] accessors.

use std::str::FromStr;

use geo_traits::{
    CoordTrait, Dimensions, GeometryCollectionTrait, GeometryTrait, GeometryType as WktType,
    LineStringTrait, MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait,
    PolygonTrait,
};
use wkt::Wkt;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{PpgeError, Result};
use crate::geometry::{
    arity_dimension, Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, SpatialGeometry,
};
use crate::io::MAX_NESTING_DEPTH;

/// Parse a complete (E)WKT string, including an optional `SRID=<n>;` prefix.
pub(crate) fn parse_wkt(text: &str) -> Result<SpatialGeometry> {
    let (srid, body) = split_srid(text)?;
    check_nesting(body)?;
    let root = RootTag::scan(body);

    let parsed =
        Wkt::<f64>::from_str(body).map_err(|message| parse_error(body, &root, message))?;
    let geometry = geometry(&parsed, 0)?;
    let geometry = root.apply(geometry)?;
    Ok(SpatialGeometry::from_parts(geometry, srid))
}

fn syntax(message: impl Into<String>) -> PpgeError {
    PpgeError::Syntax(message.into())
}

/// Split an optional `SRID=<n>;` prefix, matched without regard to case, from the geometry.
fn split_srid(text: &str) -> Result<(Option<i32>, &str)> {
    let text = text.trim_start();
    let rest = text
        .get(..4)
        .filter(|keyword| keyword.eq_ignore_ascii_case("SRID"))
        .and(text.get(4..));
    let Some(rest) = rest else {
        return Ok((None, text));
    };
    let Some(rest) = rest.trim_start().strip_prefix('=') else {
        return Err(syntax("expected '=' after SRID"));
    };
    let Some((value, body)) = rest.split_once(';') else {
        return Err(syntax("expected ';' after the SRID value"));
    };
    let value = value.trim();
    let srid = lexical_core::parse::<i32>(value.as_bytes())
        .map_err(|_| syntax(format!("invalid SRID '{value}'")))?;
    Ok((Some(srid), body.trim_start()))
}

/// Reject parentheses nested deeper than collections within [`MAX_NESTING_DEPTH`] can produce.
fn check_nesting(body: &str) -> Result<()> {
    // a multipolygon opens three levels below the innermost collection
    let limit = MAX_NESTING_DEPTH + 3;
    let mut depth = 0usize;
    for byte in body.bytes() {
        match byte {
            b'(' => {
                depth += 1;
                if depth > limit {
                    return Err(PpgeError::NestingTooDeep(MAX_NESTING_DEPTH));
                }
            }
            b')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// The kind and dimension tag written at the start of the root geometry.
#[derive(Debug, Clone, Copy, Default)]
struct RootTag {
    geometry_type: Option<GeometryType>,
    /// `None` when no `Z`, `M` or `ZM` follows the keyword.
    dim: Option<Dimension>,
}

impl RootTag {
    fn scan(body: &str) -> Self {
        let head = body.split('(').next().unwrap_or(body);
        let mut words = head.split_whitespace();
        let geometry_type = words.next().and_then(GeometryType::from_wkt_keyword);
        let dim = match words.next().map(str::to_ascii_uppercase).as_deref() {
            Some("Z") => Some(Dimension::XYZ),
            Some("M") => Some(Dimension::XYM),
            Some("ZM") => Some(Dimension::XYZM),
            _ => None,
        };
        Self { geometry_type, dim }
    }

    fn declared(&self) -> Dimension {
        self.dim.unwrap_or_default()
    }

    fn is_collection(&self) -> bool {
        self.geometry_type == Some(GeometryType::GeometryCollection)
    }

    /// Give an empty root its declared dimension and check a collection against its tag.
    ///
    /// An untagged collection takes the dimension its members derive.
    fn apply(&self, geometry: Geometry) -> Result<Geometry> {
        if geometry.is_empty() {
            return Ok(empty(geometry.geometry_type(), self.declared()));
        }
        match (self.dim, &geometry) {
            (Some(expected), Geometry::GeometryCollection(gc)) if gc.dimension() != expected => {
                Err(PpgeError::DimensionMismatch {
                    expected,
                    found: gc.dimension(),
                })
            }
            _ => Ok(geometry),
        }
    }
}

fn empty(geometry_type: GeometryType, dim: Dimension) -> Geometry {
    match geometry_type {
        GeometryType::Point => Point::empty(dim).into(),
        GeometryType::LineString => LineString::empty(dim).into(),
        GeometryType::Polygon => Polygon::empty(dim).into(),
        GeometryType::MultiPoint => MultiPoint::empty(dim).into(),
        GeometryType::MultiLineString => MultiLineString::empty(dim).into(),
        GeometryType::MultiPolygon => MultiPolygon::empty(dim).into(),
        GeometryType::GeometryCollection => GeometryCollection::empty(dim).into(),
    }
}

/// Turn a failure from the `wkt` crate into a crate error.
///
/// When a coordinate of a non-collection root has a different ordinate count than the root's
/// tag prescribes the failure is a [`PpgeError::DimensionMismatch`], otherwise
/// [`PpgeError::Syntax`].
fn parse_error(body: &str, root: &RootTag, message: &str) -> PpgeError {
    if root.geometry_type.is_some() && !root.is_collection() {
        let expected = root.declared();
        if let Some(arity) = coordinate_arities(body).find(|arity| *arity != expected.size()) {
            return PpgeError::DimensionMismatch {
                expected,
                found: arity_dimension(arity),
            };
        }
    }
    syntax(message)
}

/// The number of ordinates in each coordinate of the innermost parenthesized lists.
fn coordinate_arities(body: &str) -> impl Iterator<Item = usize> + '_ {
    body.split('(')
        .filter_map(|chunk| chunk.split_once(')').map(|(list, _)| list))
        .flat_map(|list| list.split(','))
        .map(|coord| coord.split_whitespace().count())
        .filter(|arity| (2..=4).contains(arity))
}

fn dimension(dims: Dimensions) -> Result<Dimension> {
    match dims {
        Dimensions::Xy | Dimensions::Unknown(2) => Ok(Dimension::XY),
        Dimensions::Xyz | Dimensions::Unknown(3) => Ok(Dimension::XYZ),
        Dimensions::Xym => Ok(Dimension::XYM),
        Dimensions::Xyzm | Dimensions::Unknown(4) => Ok(Dimension::XYZM),
        Dimensions::Unknown(n) => {
            Err(syntax(format!("unsupported coordinate with {n} ordinates")))
        }
    }
}

fn coord(coord: &impl CoordTrait<T = f64>) -> Result<Coord> {
    let dim = dimension(coord.dim())?;
    let ordinates = (0..dim.size())
        .map(|n| coord.nth_or_panic(n))
        .collect::<Vec<_>>();
    Coord::from_ordinates(&ordinates, dim)
}

fn point(point: &impl PointTrait<T = f64>) -> Result<Point> {
    let dim = dimension(point.dim())?;
    match point.coord() {
        Some(c) => Point::try_new(Some(coord(&c)?), dim),
        None => Ok(Point::empty(dim)),
    }
}

fn line_string(line_string: &impl LineStringTrait<T = f64>) -> Result<LineString> {
    let dim = dimension(line_string.dim())?;
    let coords = line_string
        .coords()
        .map(|c| coord(&c))
        .collect::<Result<Vec<_>>>()?;
    LineString::try_new(coords, dim)
}

fn polygon(polygon: &impl PolygonTrait<T = f64>) -> Result<Polygon> {
    let dim = dimension(polygon.dim())?;
    let mut rings = vec![];
    if let Some(exterior) = polygon.exterior() {
        rings.push(line_string(&exterior)?);
    }
    for interior in polygon.interiors() {
        rings.push(line_string(&interior)?);
    }
    Polygon::try_new(rings, dim)
}

fn multi_point(multi_point: &impl MultiPointTrait<T = f64>) -> Result<MultiPoint> {
    let dim = dimension(multi_point.dim())?;
    let points = multi_point
        .points()
        .map(|p| point(&p))
        .collect::<Result<Vec<_>>>()?;
    MultiPoint::try_new(points, dim)
}

fn multi_line_string(
    multi_line_string: &impl MultiLineStringTrait<T = f64>,
) -> Result<MultiLineString> {
    let dim = dimension(multi_line_string.dim())?;
    let line_strings = multi_line_string
        .line_strings()
        .map(|ls| line_string(&ls))
        .collect::<Result<Vec<_>>>()?;
    MultiLineString::try_new(line_strings, dim)
}

fn multi_polygon(multi_polygon: &impl MultiPolygonTrait<T = f64>) -> Result<MultiPolygon> {
    let dim = dimension(multi_polygon.dim())?;
    let polygons = multi_polygon
        .polygons()
        .map(|p| polygon(&p))
        .collect::<Result<Vec<_>>>()?;
    MultiPolygon::try_new(polygons, dim)
}

/// Map a collection found inside `depth` enclosing collections.
fn geometry_collection(
    geometry_collection: &impl GeometryCollectionTrait<T = f64>,
    depth: usize,
) -> Result<GeometryCollection> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(PpgeError::NestingTooDeep(MAX_NESTING_DEPTH));
    }
    let geometries = geometry_collection
        .geometries()
        .map(|g| geometry(&g, depth + 1))
        .collect::<Result<Vec<_>>>()?;
    Ok(GeometryCollection::new(geometries))
}

fn geometry(geometry: &impl GeometryTrait<T = f64>, depth: usize) -> Result<Geometry> {
    let geometry = match geometry.as_type() {
        WktType::Point(g) => point(g)?.into(),
        WktType::LineString(g) => line_string(g)?.into(),
        WktType::Polygon(g) => polygon(g)?.into(),
        WktType::MultiPoint(g) => multi_point(g)?.into(),
        WktType::MultiLineString(g) => multi_line_string(g)?.into(),
        WktType::MultiPolygon(g) => multi_polygon(g)?.into(),
        WktType::GeometryCollection(g) => geometry_collection(g, depth)?.into(),
        WktType::Rect(_) | WktType::Triangle(_) | WktType::Line(_) => {
            return Err(syntax("unsupported geometry kind"));
        }
    };
    Ok(geometry)
}
