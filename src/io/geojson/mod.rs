//! Read and write [GeoJSON](https://geojson.org/) geometry objects.
//!
//! GeoJSON has no SRID and no M axis. Decoded geometries never carry an SRID. A fourth
//! position element is read as M only when [`GeoJsonOptions::allow_m_extension`] is set, and
//! XYM geometries cannot be written at all.

use log::debug;
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::geometry::Geometry;

mod reader;
mod writer;

/// Options for reading and writing GeoJSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonOptions {
    /// Accept and emit a fourth position element as the M ordinate.
    pub allow_m_extension: bool,
}

impl GeoJsonOptions {
    pub fn new(allow_m_extension: bool) -> Self {
        Self { allow_m_extension }
    }
}

/// Decode a GeoJSON geometry object.
pub fn from_geojson(value: &JsonValue, options: &GeoJsonOptions) -> Result<Geometry> {
    let geometry = reader::read_geometry(value, options)?;
    debug!(
        "decoded {} {} from GeoJSON",
        geometry.geometry_type(),
        geometry.dimension()
    );
    Ok(geometry)
}

/// Encode a geometry as a GeoJSON geometry object.
pub fn to_geojson(geometry: &Geometry, options: &GeoJsonOptions) -> Result<JsonValue> {
    let value = writer::write_geometry(geometry, options)?;
    debug!(
        "encoded {} {} as GeoJSON",
        geometry.geometry_type(),
        geometry.dimension()
    );
    Ok(value)
}

/// Parse GeoJSON text holding a single geometry object.
pub fn from_geojson_str(text: &str, options: &GeoJsonOptions) -> Result<Geometry> {
    let value: JsonValue = serde_json::from_str(text)?;
    from_geojson(&value, options)
}

/// Encode a geometry as compact GeoJSON text.
pub fn to_geojson_string(geometry: &Geometry, options: &GeoJsonOptions) -> Result<String> {
    Ok(serde_json::to_string(&to_geojson(geometry, options)?)?)
}

/// Convert a [`geojson::Geometry`] into the geometry model.
///
/// Any bounding box or foreign members are ignored.
pub fn from_geojson_geometry(
    geometry: &geojson::Geometry,
    options: &GeoJsonOptions,
) -> Result<Geometry> {
    reader::read_geojson_geometry(geometry, options)
}

/// Convert a geometry into a [`geojson::Geometry`].
pub fn to_geojson_geometry(
    geometry: &Geometry,
    options: &GeoJsonOptions,
) -> Result<geojson::Geometry> {
    writer::write_geojson_geometry(geometry, options)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::error::PpgeError;
    use crate::geometry::Point;
    use crate::test::{gc0, gc_nested, ls_z, ml1, mpoly0, p0, poly_z};

    #[test]
    fn round_trip() {
        let geoms: Vec<Geometry> = vec![
            p0().into(),
            Point::empty(Dimension::XY).into(),
            ls_z().into(),
            poly_z().into(),
            ml1().into(),
            mpoly0().into(),
            gc0().into(),
            gc_nested().into(),
        ];
        let options = GeoJsonOptions::default();
        for geom in geoms {
            let text = to_geojson_string(&geom, &options).unwrap();
            assert_eq!(from_geojson_str(&text, &options).unwrap(), geom, "{text}");

            let geometry = to_geojson_geometry(&geom, &options).unwrap();
            assert_eq!(from_geojson_geometry(&geometry, &options).unwrap(), geom);
        }
    }

    #[test]
    fn string_helpers() {
        let text = to_geojson_string(&p0().into(), &Default::default()).unwrap();
        assert!(!text.contains(char::is_whitespace));
        let value: JsonValue = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "Point", "coordinates": [0, 1]})
        );
        assert!(matches!(
            from_geojson_str("{\"type\": ", &Default::default()),
            Err(PpgeError::Json(_))
        ));
    }
}
