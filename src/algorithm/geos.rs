//! An engine backed by the GEOS C library, through the [`geos`] crate.
//!
//! Geometries cross the boundary as WKT, so Z values survive the round trip.

use geos::{Geom, OutputDimension, WKTWriter};

use crate::algorithm::transform::{EngineFailure, EngineResult, TransformEngine};
use crate::geometry::{Geometry, SpatialGeometry};
use crate::io::wkt::{from_wkt, to_wkt};

/// Operations supported by [`GeosEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeosOperation {
    /// Buffer by `width`, approximating a quarter circle with `quadsegs` segments.
    Buffer { width: f64, quadsegs: i32 },
    ConvexHull,
    Centroid,
    /// Simplify while preserving topology.
    Simplify { tolerance: f64 },
}

/// Transforms geometries with GEOS.
///
/// GEOS drops M values, so XYM and XYZM input is an unsupported operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeosEngine;

fn failed(err: geos::Error) -> EngineFailure {
    EngineFailure::Failed(err.to_string())
}

impl TransformEngine for GeosEngine {
    type Geometry = geos::Geometry;
    type Operation = GeosOperation;

    fn name(&self) -> &'static str {
        "geos"
    }

    fn import(&self, geometry: &Geometry) -> EngineResult<geos::Geometry> {
        if geometry.dimension().has_m() {
            return Err(EngineFailure::Unsupported(format!(
                "GEOS cannot carry M values ({})",
                geometry.dimension()
            )));
        }
        let wkt = to_wkt(&SpatialGeometry::new(geometry.clone()));
        geos::Geometry::new_from_wkt(&wkt).map_err(failed)
    }

    fn run(
        &self,
        geometry: geos::Geometry,
        operation: &GeosOperation,
    ) -> EngineResult<geos::Geometry> {
        let result = match *operation {
            GeosOperation::Buffer { width, quadsegs } => geometry.buffer(width, quadsegs),
            GeosOperation::ConvexHull => geometry.convex_hull(),
            GeosOperation::Centroid => geometry.get_centroid(),
            GeosOperation::Simplify { tolerance } => geometry.topology_preserve_simplify(tolerance),
        };
        result.map_err(failed)
    }

    fn export(&self, geometry: geos::Geometry) -> EngineResult<Geometry> {
        let mut writer = WKTWriter::new().map_err(failed)?;
        writer.set_trim(true);
        writer.set_output_dimension(OutputDimension::Three);
        let wkt = writer.write(&geometry).map_err(failed)?;
        from_wkt(&wkt)
            .map(SpatialGeometry::into_inner)
            .map_err(|err| EngineFailure::Failed(err.to_string()))
    }
}
