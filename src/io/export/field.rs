use std::fmt;
use std::str::FromStr;

use serde_json::{Number, Value as JsonValue};

use crate::error::{PpgeError, Result};

/// Declared type of an exported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    Float,
    Str,
    Bytes,
    Bool,
    /// Planar geometry column.
    Geom,
    /// Geodesic geometry column.
    Geog,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Str => "str",
            FieldType::Bytes => "bytes",
            FieldType::Bool => "bool",
            FieldType::Geom => "geom",
            FieldType::Geog => "geog",
        }
    }

    pub fn is_geometry(&self) -> bool {
        matches!(self, FieldType::Geom | FieldType::Geog)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = PpgeError;

    fn from_str(s: &str) -> Result<Self> {
        let field_type = match s.to_ascii_lowercase().as_str() {
            "int" => FieldType::Int,
            "float" => FieldType::Float,
            "str" => FieldType::Str,
            "bytes" => FieldType::Bytes,
            "bool" => FieldType::Bool,
            "geom" => FieldType::Geom,
            "geog" => FieldType::Geog,
            _ => {
                return Err(PpgeError::FieldConversion {
                    field: s.to_string(),
                    message: "unknown field type".to_string(),
                })
            }
        };
        Ok(field_type)
    }
}

/// One column of an export schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable,
        }
    }

    /// Convert a row value to this field's type.
    ///
    /// A missing value is treated as null. Null passes through for nullable fields and is an
    /// error otherwise.
    pub fn convert(&self, value: Option<&JsonValue>) -> Result<JsonValue> {
        let value = match value {
            None | Some(JsonValue::Null) if self.nullable => return Ok(JsonValue::Null),
            None | Some(JsonValue::Null) => {
                return Err(self.error("is not nullable but value is None"))
            }
            Some(value) => value,
        };
        match self.field_type {
            FieldType::Int => self.to_int(value),
            FieldType::Float => self.to_float(value),
            FieldType::Str => Ok(JsonValue::String(to_text(value))),
            FieldType::Bool => Ok(JsonValue::Bool(truthy(value))),
            FieldType::Bytes => self.to_bytes(value),
            FieldType::Geom | FieldType::Geog => Ok(value.clone()),
        }
    }

    fn to_int(&self, value: &JsonValue) -> Result<JsonValue> {
        match value {
            JsonValue::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
            JsonValue::Number(n) => {
                let float = n.as_f64().unwrap_or(f64::NAN);
                let truncated = float.trunc();
                if truncated.is_finite() && truncated.abs() < i64::MAX as f64 {
                    Ok(JsonValue::from(truncated as i64))
                } else {
                    Err(self.error(format!("cannot convert {n} to int")))
                }
            }
            JsonValue::String(s) => s
                .trim()
                .parse::<i64>()
                .map(JsonValue::from)
                .map_err(|e| self.error(format!("cannot convert '{s}' to int: {e}"))),
            JsonValue::Bool(b) => Ok(JsonValue::from(*b as i64)),
            _ => Err(self.error(format!("cannot convert {value} to int"))),
        }
    }

    fn to_float(&self, value: &JsonValue) -> Result<JsonValue> {
        let float = match value {
            JsonValue::Number(n) => n.as_f64(),
            JsonValue::String(s) => s.trim().parse::<f64>().ok(),
            JsonValue::Bool(b) => Some(if *b { 1. } else { 0. }),
            _ => None,
        };
        float
            .and_then(Number::from_f64)
            .map(JsonValue::Number)
            .ok_or_else(|| self.error(format!("cannot convert {value} to a finite float")))
    }

    // Byte arrays are hex encoded so that every output format can hold them as text.
    fn to_bytes(&self, value: &JsonValue) -> Result<JsonValue> {
        match value {
            JsonValue::String(_) => Ok(value.clone()),
            JsonValue::Array(items) => {
                let bytes = items
                    .iter()
                    .map(|item| {
                        item.as_u64()
                            .and_then(|b| u8::try_from(b).ok())
                            .ok_or_else(|| self.error(format!("{item} is not a byte")))
                    })
                    .collect::<Result<Vec<u8>>>()?;
                Ok(JsonValue::String(hex::encode(bytes)))
            }
            _ => Err(self.error(format!("cannot convert {value} to bytes"))),
        }
    }

    fn error(&self, message: impl Into<String>) -> PpgeError {
        PpgeError::FieldConversion {
            field: self.name.clone(),
            message: message.into(),
        }
    }
}

/// Text form of a value: strings verbatim, null as empty, everything else as JSON.
pub(crate) fn to_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(a) => !a.is_empty(),
        JsonValue::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_field_type() {
        assert_eq!("geog".parse::<FieldType>().unwrap(), FieldType::Geog);
        assert_eq!("INT".parse::<FieldType>().unwrap(), FieldType::Int);
        assert!(FieldType::Geom.is_geometry());
        assert!(!FieldType::Str.is_geometry());
        assert!(matches!(
            "timestamp".parse::<FieldType>(),
            Err(PpgeError::FieldConversion { .. })
        ));
    }

    #[test]
    fn convert_values() {
        let int = Field::new("n", FieldType::Int, false);
        assert_eq!(int.convert(Some(&json!(7))).unwrap(), json!(7));
        assert_eq!(int.convert(Some(&json!(2.7))).unwrap(), json!(2));
        assert_eq!(int.convert(Some(&json!(" 12 "))).unwrap(), json!(12));
        assert_eq!(int.convert(Some(&json!(true))).unwrap(), json!(1));
        assert!(int.convert(Some(&json!("3.5"))).is_err());

        let float = Field::new("x", FieldType::Float, false);
        assert_eq!(float.convert(Some(&json!("1.5"))).unwrap(), json!(1.5));
        assert_eq!(float.convert(Some(&json!(2))).unwrap(), json!(2.0));
        assert!(float.convert(Some(&json!("inf"))).is_err());

        let text = Field::new("s", FieldType::Str, false);
        assert_eq!(text.convert(Some(&json!(42))).unwrap(), json!("42"));
        assert_eq!(text.convert(Some(&json!("abc"))).unwrap(), json!("abc"));

        let flag = Field::new("b", FieldType::Bool, false);
        assert_eq!(flag.convert(Some(&json!(0))).unwrap(), json!(false));
        assert_eq!(flag.convert(Some(&json!("no"))).unwrap(), json!(true));
        assert_eq!(flag.convert(Some(&json!(""))).unwrap(), json!(false));

        let bytes = Field::new("raw", FieldType::Bytes, false);
        assert_eq!(bytes.convert(Some(&json!([1, 255]))).unwrap(), json!("01ff"));
        assert!(bytes.convert(Some(&json!([256]))).is_err());
    }

    #[test]
    fn null_handling() {
        let nullable = Field::new("n", FieldType::Int, true);
        assert_eq!(nullable.convert(None).unwrap(), JsonValue::Null);
        assert_eq!(nullable.convert(Some(&JsonValue::Null)).unwrap(), JsonValue::Null);

        let required = Field::new("n", FieldType::Int, false);
        let err = required.convert(None).unwrap_err();
        assert_eq!(err.to_string(), "Field 'n': is not nullable but value is None");
    }
}
