//! Defines [`PpgeError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::datatypes::{Dimension, GeometryType};
use crate::geometry::Coord;

/// Enum with all errors in this crate.
///
/// Every failure is reported as its own variant so that callers can branch on the cause.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PpgeError {
    /// WKT grammar violation.
    #[error("WKT syntax error: {0}")]
    Syntax(String),

    /// A geometry type keyword or `type` member that is not one of the seven supported kinds.
    #[error("Unsupported geometry type '{0}'")]
    UnsupportedGeometryType(String),

    /// Declared dimension disagrees with the coordinates that were found.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },

    /// Fewer bytes remain than a WKB field requires.
    #[error("Truncated WKB input: needed {needed} bytes but only {remaining} remain")]
    TruncatedInput { needed: usize, remaining: usize },

    /// WKB type code whose base kind is not recognized.
    #[error("Unknown WKB type code {0:#010x}")]
    UnknownTypeCode(u32),

    /// WKB byte order flag other than 0 or 1.
    #[error("Invalid WKB byte order flag {0}")]
    InvalidByteOrder(u8),

    /// A child of a Multi* geometry declares a dimension its parent does not.
    #[error("Inconsistent dimensionality: parent is {parent}, child is {child}")]
    InconsistentDimensionality { parent: Dimension, child: Dimension },

    /// A child of a Multi* geometry is of the wrong kind.
    #[error("Incorrect geometry type: expected {expected}, found {found}")]
    IncorrectGeometryType {
        expected: GeometryType,
        found: GeometryType,
    },

    /// Bytes left over after a WKB geometry when exact consumption was requested.
    #[error("{0} trailing bytes after WKB geometry")]
    TrailingBytes(usize),

    /// The dimension cannot be represented in GeoJSON under the current options.
    #[error("Unsupported dimension: {0}")]
    UnsupportedDimension(String),

    /// Structurally invalid GeoJSON geometry object.
    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    /// Polygon ring that is too short, unclosed or degenerate.
    #[error("Invalid ring: {0}")]
    InvalidRing(String),

    /// A coordinate with a NaN or infinite ordinate.
    #[error("Non-finite coordinate {0:?}")]
    NonFiniteCoordinate(Coord),

    /// Collections nested deeper than the decoder allows.
    #[error("Geometry collections nested deeper than {0} levels")]
    NestingTooDeep(usize),

    /// A WKB element count that does not fit the 32-bit count field.
    #[error("{0} elements do not fit a WKB count")]
    TooManyElements(usize),

    /// A row value that cannot be exported as its declared field type.
    #[error("Field '{field}': {message}")]
    FieldConversion { field: String, message: String },

    /// Failure reported by an external geometry engine.
    #[error("Engine error: {0}")]
    EngineError(String),

    /// The external geometry engine cannot perform the requested operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// [csv::Error]
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// [hex::FromHexError]
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, PpgeError>;
