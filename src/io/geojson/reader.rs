use serde_json::Value as JsonValue;

use crate::datatypes::Dimension;
use crate::error::{PpgeError, Result};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use crate::io::geojson::GeoJsonOptions;
use crate::io::MAX_NESTING_DEPTH;

/// Turns GeoJSON positions into coordinates, enforcing one arity per geometry.
struct Positions<'a> {
    options: &'a GeoJsonOptions,
    dim: Option<Dimension>,
}

impl<'a> Positions<'a> {
    fn new(options: &'a GeoJsonOptions) -> Self {
        Self { options, dim: None }
    }

    fn coord(&mut self, position: &[f64]) -> Result<Coord> {
        let dim = match position.len() {
            2 => Dimension::XY,
            3 => Dimension::XYZ,
            4 if self.options.allow_m_extension => Dimension::XYZM,
            4 => {
                return Err(PpgeError::UnsupportedDimension(
                    "a fourth position element requires allow_m_extension".to_string(),
                ))
            }
            n => {
                return Err(PpgeError::UnsupportedDimension(format!(
                    "position has {n} elements, expected 2 to 4"
                )))
            }
        };
        match self.dim {
            Some(expected) if expected != dim => {
                return Err(PpgeError::UnsupportedDimension(format!(
                    "mixed position sizes: {expected} and {dim}"
                )))
            }
            _ => self.dim = Some(dim),
        }
        Coord::from_ordinates(position, dim)
    }

    /// An empty position list stands for an empty point.
    fn point(&mut self, position: &[f64]) -> Result<Option<Coord>> {
        if position.is_empty() {
            Ok(None)
        } else {
            self.coord(position).map(Some)
        }
    }

    fn line(&mut self, positions: &[Vec<f64>]) -> Result<Vec<Coord>> {
        positions.iter().map(|p| self.coord(p)).collect()
    }

    fn rings(&mut self, rings: &[Vec<Vec<f64>>]) -> Result<Vec<Vec<Coord>>> {
        rings.iter().map(|ring| self.line(ring)).collect()
    }

    /// GeoJSON has no dimension tag, so geometries without positions are XY.
    fn dimension(&self) -> Dimension {
        self.dim.unwrap_or_default()
    }
}

fn build_point(position: &[f64], options: &GeoJsonOptions) -> Result<Point> {
    let mut positions = Positions::new(options);
    let coord = positions.point(position)?;
    Point::try_new(coord, positions.dimension())
}

fn build_line_string(line: &[Vec<f64>], options: &GeoJsonOptions) -> Result<LineString> {
    let mut positions = Positions::new(options);
    let coords = positions.line(line)?;
    LineString::try_new(coords, positions.dimension())
}

fn build_polygon(rings: &[Vec<Vec<f64>>], options: &GeoJsonOptions) -> Result<Polygon> {
    let mut positions = Positions::new(options);
    let rings = positions.rings(rings)?;
    Polygon::try_from_rings(rings, positions.dimension())
}

fn build_multi_point(points: &[Vec<f64>], options: &GeoJsonOptions) -> Result<MultiPoint> {
    let mut positions = Positions::new(options);
    let coords = points
        .iter()
        .map(|p| positions.point(p))
        .collect::<Result<Vec<_>>>()?;
    let dim = positions.dimension();
    let points = coords
        .into_iter()
        .map(|coord| Point::try_new(coord, dim))
        .collect::<Result<Vec<_>>>()?;
    MultiPoint::try_new(points, dim)
}

fn build_multi_line_string(
    lines: &[Vec<Vec<f64>>],
    options: &GeoJsonOptions,
) -> Result<MultiLineString> {
    let mut positions = Positions::new(options);
    let lines = positions.rings(lines)?;
    let dim = positions.dimension();
    let line_strings = lines
        .into_iter()
        .map(|coords| LineString::try_new(coords, dim))
        .collect::<Result<Vec<_>>>()?;
    MultiLineString::try_new(line_strings, dim)
}

fn build_multi_polygon(
    polygons: &[Vec<Vec<Vec<f64>>>],
    options: &GeoJsonOptions,
) -> Result<MultiPolygon> {
    let mut positions = Positions::new(options);
    let polygons = polygons
        .iter()
        .map(|rings| positions.rings(rings))
        .collect::<Result<Vec<_>>>()?;
    let dim = positions.dimension();
    let polygons = polygons
        .into_iter()
        .map(|rings| Polygon::try_from_rings(rings, dim))
        .collect::<Result<Vec<_>>>()?;
    MultiPolygon::try_new(polygons, dim)
}

/// Decode a GeoJSON geometry object through [`geojson::Geometry`].
pub(crate) fn read_geometry(value: &JsonValue, options: &GeoJsonOptions) -> Result<Geometry> {
    check_nesting(value, 0)?;
    let geometry = geojson::Geometry::from_json_value(value.clone()).map_err(|err| match err {
        geojson::Error::GeometryUnknownType(name) => PpgeError::UnsupportedGeometryType(name),
        err => PpgeError::InvalidGeoJson(err.to_string()),
    })?;
    read_geojson_geometry(&geometry, options)
}

/// Fail before decoding if `geometries` members nest more than [`MAX_NESTING_DEPTH`] deep.
fn check_nesting(value: &JsonValue, depth: usize) -> Result<()> {
    let Some(geometries) = value.get("geometries").and_then(JsonValue::as_array) else {
        return Ok(());
    };
    if depth >= MAX_NESTING_DEPTH {
        return Err(PpgeError::NestingTooDeep(MAX_NESTING_DEPTH));
    }
    geometries
        .iter()
        .try_for_each(|child| check_nesting(child, depth + 1))
}

/// Convert a [`geojson::Geometry`] into the geometry model.
pub(crate) fn read_geojson_geometry(
    geometry: &geojson::Geometry,
    options: &GeoJsonOptions,
) -> Result<Geometry> {
    read_nested(geometry, options, 0)
}

/// Convert a geometry found inside `depth` enclosing collections.
fn read_nested(
    geometry: &geojson::Geometry,
    options: &GeoJsonOptions,
    depth: usize,
) -> Result<Geometry> {
    use geojson::Value;

    let geometry = match &geometry.value {
        Value::Point(position) => build_point(position, options)?.into(),
        Value::LineString(line) => build_line_string(line, options)?.into(),
        Value::Polygon(rings) => build_polygon(rings, options)?.into(),
        Value::MultiPoint(points) => build_multi_point(points, options)?.into(),
        Value::MultiLineString(lines) => build_multi_line_string(lines, options)?.into(),
        Value::MultiPolygon(polygons) => build_multi_polygon(polygons, options)?.into(),
        Value::GeometryCollection(geometries) => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(PpgeError::NestingTooDeep(MAX_NESTING_DEPTH));
            }
            let geometries = geometries
                .iter()
                .map(|child| read_nested(child, options, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            GeometryCollection::new(geometries).into()
        }
    };
    Ok(geometry)
}
