//! Convert spatial geometries between WKT, WKB and GeoJSON.
//!
//! Every format decodes into one in-memory [`Geometry`] model and encodes back out of it,
//! keeping the coordinate dimension (XY, XYZ, XYM, XYZM) and, where the format can carry it,
//! the spatial reference identifier (SRID). The PostGIS extensions EWKT and EWKB are supported.
//!
//! ```
//! use ppge::io::geojson::{to_geojson, GeoJsonOptions};
//! use ppge::io::wkb::{from_wkb, to_wkb};
//! use ppge::io::wkt::from_wkt;
//!
//! let geom = from_wkt("POINT Z (1 2 3)").unwrap();
//! let wkb = to_wkb(&geom, &Default::default()).unwrap();
//! assert_eq!(&wkb[..5], &[0x01, 0x01, 0x00, 0x00, 0x80]);
//!
//! let geom = from_wkb(&wkb, &Default::default()).unwrap();
//! let json = to_geojson(geom.geometry(), &GeoJsonOptions::default()).unwrap();
//! assert_eq!(json, serde_json::json!({"type": "Point", "coordinates": [1, 2, 3]}));
//! ```
//!
//! Geometries can also be transformed by external engines through
//! [`algorithm::transform`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{PpgeError, Result};
pub use geometry::{Geometry, SpatialGeometry};

pub mod algorithm;
pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
