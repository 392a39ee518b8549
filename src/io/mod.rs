//! Encoders and decoders between the geometry model and its interchange formats, plus
//! conversion to and from [`geo`] geometries, and row export to CSV and GeoJSON.

pub mod codec;
pub mod export;
pub mod geo;
pub mod geojson;
pub mod wkb;
pub mod wkt;

/// The deepest chain of geometry collections nested inside one another that any decoder
/// accepts. Deeper input fails with [`PpgeError::NestingTooDeep`](crate::error::PpgeError).
pub const MAX_NESTING_DEPTH: usize = 64;

pub use codec::{GeoJsonCodec, GeometryCodec, WkbCodec, WktCodec};
