//! Geometry transforms delegated to external engines.
//!
//! [`transform`] marshals a geometry into an engine, runs one operation and marshals the
//! result back. [`GeoEngine`] is always available; the GEOS and PROJ engines are behind the
//! `geos` and `proj` features.

pub mod geo;
#[cfg(feature = "geos")]
pub mod geos;
#[cfg(feature = "proj")]
pub mod proj;
pub mod transform;

pub use self::geo::{GeoEngine, GeoOperation};
#[cfg(feature = "geos")]
pub use self::geos::{GeosEngine, GeosOperation};
#[cfg(feature = "proj")]
pub use self::proj::{ProjEngine, Reprojection};
pub use transform::{transform, EngineFailure, EngineResult, TransformEngine};
