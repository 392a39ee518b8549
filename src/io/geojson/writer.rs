use serde_json::{json, Value as JsonValue};

use crate::datatypes::Dimension;
use crate::error::{PpgeError, Result};
use crate::geometry::{Coord, Geometry, LineString, Point, Polygon};
use crate::io::geojson::GeoJsonOptions;

/// The largest magnitude below which every integral f64 is exactly an i64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Turn a coordinate into a GeoJSON position, rejecting dimensions GeoJSON cannot carry.
fn position(coord: &Coord, options: &GeoJsonOptions) -> Result<Vec<f64>> {
    match coord.dimension() {
        Dimension::XYM => Err(PpgeError::UnsupportedDimension(
            "GeoJSON cannot represent M without Z".to_string(),
        )),
        Dimension::XYZM if !options.allow_m_extension => Err(PpgeError::UnsupportedDimension(
            "writing M requires allow_m_extension".to_string(),
        )),
        _ => Ok(coord.ordinates().collect()),
    }
}

fn point_position(point: &Point, options: &GeoJsonOptions) -> Result<Vec<f64>> {
    // an empty point is an empty position
    point
        .coord()
        .map_or(Ok(vec![]), |coord| position(coord, options))
}

fn line_positions(line_string: &LineString, options: &GeoJsonOptions) -> Result<Vec<Vec<f64>>> {
    line_string
        .coords()
        .iter()
        .map(|coord| position(coord, options))
        .collect()
}

fn polygon_positions(polygon: &Polygon, options: &GeoJsonOptions) -> Result<Vec<Vec<Vec<f64>>>> {
    polygon
        .rings()
        .iter()
        .map(|ring| line_positions(ring, options))
        .collect()
}

/// Check a geometry without coordinates against the same dimension rules as its positions.
fn check_dimension(dim: Dimension, options: &GeoJsonOptions) -> Result<()> {
    let sample = Coord::from_ordinates(&[0.; 4][..dim.size()], dim)?;
    position(&sample, options).map(|_| ())
}

/// Convert the model into the geojson crate's representation.
pub(crate) fn write_geojson_geometry(
    geometry: &Geometry,
    options: &GeoJsonOptions,
) -> Result<geojson::Geometry> {
    use geojson::Value;

    check_dimension(geometry.dimension(), options)?;
    let value = match geometry {
        Geometry::Point(g) => Value::Point(point_position(g, options)?),
        Geometry::LineString(g) => Value::LineString(line_positions(g, options)?),
        Geometry::Polygon(g) => Value::Polygon(polygon_positions(g, options)?),
        Geometry::MultiPoint(g) => Value::MultiPoint(
            g.points()
                .iter()
                .map(|p| point_position(p, options))
                .collect::<Result<_>>()?,
        ),
        Geometry::MultiLineString(g) => Value::MultiLineString(
            g.line_strings()
                .iter()
                .map(|ls| line_positions(ls, options))
                .collect::<Result<_>>()?,
        ),
        Geometry::MultiPolygon(g) => Value::MultiPolygon(
            g.polygons()
                .iter()
                .map(|p| polygon_positions(p, options))
                .collect::<Result<_>>()?,
        ),
        Geometry::GeometryCollection(g) => Value::GeometryCollection(
            g.geometries()
                .iter()
                .map(|child| write_geojson_geometry(child, options))
                .collect::<Result<_>>()?,
        ),
    };
    Ok(geojson::Geometry::new(value))
}

/// Integral values are written as JSON integers, everything else as floats.
///
/// Non-finite values have no JSON spelling and become `null`.
fn number(value: f64) -> JsonValue {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        JsonValue::from(value as i64)
    } else {
        JsonValue::from(value)
    }
}

fn json_position(position: &[f64]) -> JsonValue {
    position.iter().copied().map(number).collect()
}

fn json_positions(positions: &[Vec<f64>]) -> JsonValue {
    positions.iter().map(|p| json_position(p)).collect()
}

fn json_rings(rings: &[Vec<Vec<f64>>]) -> JsonValue {
    rings.iter().map(|ring| json_positions(ring)).collect()
}

fn json_geometry(geometry: &geojson::Geometry) -> JsonValue {
    use geojson::Value;

    match &geometry.value {
        Value::Point(p) => json!({"type": "Point", "coordinates": json_position(p)}),
        Value::LineString(ls) => json!({"type": "LineString", "coordinates": json_positions(ls)}),
        Value::Polygon(rings) => json!({"type": "Polygon", "coordinates": json_rings(rings)}),
        Value::MultiPoint(points) => {
            json!({"type": "MultiPoint", "coordinates": json_positions(points)})
        }
        Value::MultiLineString(lines) => {
            json!({"type": "MultiLineString", "coordinates": json_rings(lines)})
        }
        Value::MultiPolygon(polygons) => {
            let coordinates: JsonValue = polygons.iter().map(|p| json_rings(p)).collect();
            json!({"type": "MultiPolygon", "coordinates": coordinates})
        }
        Value::GeometryCollection(geometries) => {
            let geometries: JsonValue = geometries.iter().map(json_geometry).collect();
            json!({"type": "GeometryCollection", "geometries": geometries})
        }
    }
}

/// Encode a geometry as a GeoJSON geometry object.
pub(crate) fn write_geometry(geometry: &Geometry, options: &GeoJsonOptions) -> Result<JsonValue> {
    let geometry = write_geojson_geometry(geometry, options)?;
    Ok(json_geometry(&geometry))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{GeometryCollection, MultiPoint};
    use crate::test::{gc_nested, ls0, mp_zm, p_m, p_z, p_zm, poly1};

    fn write(geometry: impl Into<Geometry>) -> Result<JsonValue> {
        write_geometry(&geometry.into(), &Default::default())
    }

    #[test]
    fn point_z() {
        assert_eq!(
            write(p_z()).unwrap(),
            json!({"type": "Point", "coordinates": [1, 2, 3]})
        );
    }

    #[test]
    fn fractional_numbers() {
        assert_eq!(
            write(poly1()).unwrap(),
            json!({
                "type": "Polygon",
                "coordinates": [[
                    [-109.05, 41], [-109.05, 37], [-102.05, 37], [-102.05, 41], [-109.05, 41]
                ]]
            })
        );
    }

    #[test]
    fn empty() {
        assert_eq!(
            write(Point::empty(Dimension::XY)).unwrap(),
            json!({"type": "Point", "coordinates": []})
        );
        assert_eq!(
            write(GeometryCollection::empty(Dimension::XY)).unwrap(),
            json!({"type": "GeometryCollection", "geometries": []})
        );
    }

    #[test]
    fn nested_collection() {
        assert_eq!(
            write(gc_nested()).unwrap(),
            json!({
                "type": "GeometryCollection",
                "geometries": [
                    {
                        "type": "GeometryCollection",
                        "geometries": [{"type": "MultiPoint", "coordinates": [[0, 1], [1, 2]]}]
                    },
                    {"type": "Point", "coordinates": [1, 2, 3]}
                ]
            })
        );
    }

    #[test]
    fn m_requires_extension() {
        assert!(matches!(write(p_zm()), Err(PpgeError::UnsupportedDimension(_))));
        assert!(matches!(write(mp_zm()), Err(PpgeError::UnsupportedDimension(_))));

        let options = GeoJsonOptions {
            allow_m_extension: true,
        };
        assert_eq!(
            write_geometry(&p_zm().into(), &options).unwrap(),
            json!({"type": "Point", "coordinates": [-0.5, -1, -2, -4]})
        );
    }

    #[test]
    fn xym_never_encodes() {
        let options = GeoJsonOptions {
            allow_m_extension: true,
        };
        assert!(matches!(
            write_geometry(&p_m().into(), &options),
            Err(PpgeError::UnsupportedDimension(_))
        ));
        assert!(matches!(
            write_geometry(&MultiPoint::empty(Dimension::XYM).into(), &options),
            Err(PpgeError::UnsupportedDimension(_))
        ));
    }

    #[test]
    fn to_geojson_crate() {
        let geometry = write_geojson_geometry(&ls0().into(), &Default::default()).unwrap();
        assert_eq!(
            geometry.value,
            geojson::Value::LineString(vec![vec![0., 1.], vec![1., 2.]])
        );
    }
}
