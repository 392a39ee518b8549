//! Export rows of warehouse query results, each holding one geometry value plus plain
//! columns, as CSV with a WKT geometry column or as a GeoJSON `FeatureCollection`.
//!
//! Rows are JSON objects. The schema names the columns to export and how each value is
//! converted. The geometry is taken from the row under `geom_key` and may be WKT text, GeoJSON
//! text or an already parsed GeoJSON object.
//!
//! ```
//! use ppge::io::export::{export_to_csv_from_rows, Field, FieldType, GeometryFormat};
//! use serde_json::json;
//!
//! let schema = [
//!     Field::new("name", FieldType::Str, false),
//!     Field::new("geom", FieldType::Geog, true),
//! ];
//! let rows = [json!({"name": "a", "geom": "POINT (1 2)"})]
//!     .into_iter()
//!     .filter_map(|row| row.as_object().cloned());
//!
//! let mut out = vec![];
//! export_to_csv_from_rows(&schema, rows, &mut out, "geom", GeometryFormat::Wkt).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "name,geometry\na,POINT (1 2)\n");
//! ```

use std::collections::HashSet;
use std::io::Write;

use geojson::{Feature, FeatureCollection};
use log::debug;
use serde_json::{Map, Value as JsonValue};

use crate::error::{PpgeError, Result};
use crate::geometry::SpatialGeometry;
use crate::io::geojson::{from_geojson, from_geojson_str, to_geojson, GeoJsonOptions};
use crate::io::wkt::{from_wkt, to_wkt};

mod field;

pub use field::{Field, FieldType};

/// One row of input, keyed by column name.
pub type Row = Map<String, JsonValue>;

/// Encoding of geometry values given as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    Wkt,
    GeoJson,
}

/// Warehouses whose row layout is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSource {
    /// Geometry under `geom` as WKT.
    BigQuery,
    /// Geometry under `GEOM` as GeoJSON.
    Snowflake,
}

impl RowSource {
    pub fn geom_key(&self) -> &'static str {
        match self {
            RowSource::BigQuery => "geom",
            RowSource::Snowflake => "GEOM",
        }
    }

    pub fn geometry_format(&self) -> GeometryFormat {
        match self {
            RowSource::BigQuery => GeometryFormat::Wkt,
            RowSource::Snowflake => GeometryFormat::GeoJson,
        }
    }

    pub fn rows_to_csv<I, W>(&self, schema: &[Field], rows: I, writer: W) -> Result<()>
    where
        I: IntoIterator<Item = Row>,
        W: Write,
    {
        export_to_csv_from_rows(schema, rows, writer, self.geom_key(), self.geometry_format())
    }

    pub fn rows_to_geojson<I, W>(&self, schema: &[Field], rows: I, writer: W) -> Result<()>
    where
        I: IntoIterator<Item = Row>,
        W: Write,
    {
        export_to_geojson_from_rows(schema, rows, writer, self.geom_key(), self.geometry_format())
    }
}

/// Write rows as CSV with a header line.
///
/// Columns are the schema fields other than `geom_key`, in schema order, followed by the
/// geometry as WKT. The geometry column is named `geometry`, or `WKT` if the schema already
/// uses that name, or the first free `geometry_<n>`. A null geometry leaves the cell empty.
pub fn export_to_csv_from_rows<I, W>(
    schema: &[Field],
    rows: I,
    writer: W,
    geom_key: &str,
    geom_format: GeometryFormat,
) -> Result<()>
where
    I: IntoIterator<Item = Row>,
    W: Write,
{
    let geometry_column = geometry_column_name(schema);
    let fields = schema
        .iter()
        .filter(|field| field.name != geom_key)
        .collect::<Vec<_>>();

    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(
        fields
            .iter()
            .map(|field| field.name.as_str())
            .chain([geometry_column.as_str()]),
    )?;

    let mut num_rows = 0;
    for row in rows {
        let geometry = row_geometry(&row, geom_key, geom_format)?;
        let mut record = fields
            .iter()
            .map(|field| Ok(field::to_text(&field.convert(row.get(&field.name))?)))
            .collect::<Result<Vec<_>>>()?;
        record.push(geometry.map(|g| to_wkt(&g)).unwrap_or_default());
        writer.write_record(&record)?;
        num_rows += 1;
    }
    writer.flush()?;
    debug!("exported {num_rows} rows as CSV with geometry column '{geometry_column}'");
    Ok(())
}

/// Write rows as a pretty-printed GeoJSON `FeatureCollection`.
///
/// Every schema field other than `geom_key` becomes a feature property. A null geometry gives
/// a feature whose geometry is null.
pub fn export_to_geojson_from_rows<I, W>(
    schema: &[Field],
    rows: I,
    mut writer: W,
    geom_key: &str,
    geom_format: GeometryFormat,
) -> Result<()>
where
    I: IntoIterator<Item = Row>,
    W: Write,
{
    let options = GeoJsonOptions::default();
    let fields = schema
        .iter()
        .filter(|field| field.name != geom_key)
        .collect::<Vec<_>>();

    let mut features = vec![];
    for row in rows {
        let geometry = match row_geometry(&row, geom_key, geom_format)? {
            Some(geom) => {
                let value = to_geojson(geom.geometry(), &options)?;
                Some(
                    geojson::Geometry::from_json_value(value)
                        .map_err(|err| PpgeError::InvalidGeoJson(err.to_string()))?,
                )
            }
            None => None,
        };
        let properties = fields
            .iter()
            .map(|field| Ok((field.name.clone(), field.convert(row.get(&field.name))?)))
            .collect::<Result<Map<_, _>>>()?;
        features.push(Feature {
            bbox: None,
            geometry,
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    let num_rows = features.len();
    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    serde_json::to_writer_pretty(&mut writer, &collection)?;
    writer.flush()?;
    debug!("exported {num_rows} rows as a GeoJSON FeatureCollection");
    Ok(())
}

fn geometry_column_name(schema: &[Field]) -> String {
    let existing = schema
        .iter()
        .map(|field| field.name.as_str())
        .collect::<HashSet<_>>();
    if !existing.contains("geometry") {
        return "geometry".to_string();
    }
    if !existing.contains("WKT") {
        return "WKT".to_string();
    }
    (1..)
        .map(|n| format!("geometry_{n}"))
        .find(|name| !existing.contains(name.as_str()))
        .unwrap_or_default()
}

/// Decode the row's geometry. Text is read as `geom_format`; an object is read as GeoJSON.
fn row_geometry(
    row: &Row,
    geom_key: &str,
    geom_format: GeometryFormat,
) -> Result<Option<SpatialGeometry>> {
    let options = GeoJsonOptions::default();
    let geometry = match row.get(geom_key) {
        None => {
            return Err(PpgeError::FieldConversion {
                field: geom_key.to_string(),
                message: "row has no geometry".to_string(),
            })
        }
        Some(JsonValue::Null) => return Ok(None),
        Some(JsonValue::String(text)) => match geom_format {
            GeometryFormat::Wkt => from_wkt(text)?,
            GeometryFormat::GeoJson => from_geojson_str(text, &options)?.into(),
        },
        Some(value @ JsonValue::Object(_)) => from_geojson(value, &options)?.into(),
        Some(other) => {
            return Err(PpgeError::FieldConversion {
                field: geom_key.to_string(),
                message: format!("{other} is not a geometry"),
            })
        }
    };
    Ok(Some(geometry))
}
