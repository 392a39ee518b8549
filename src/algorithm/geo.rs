//! A pure-Rust engine backed by the [`geo`] crate.

use geo::{Centroid, ConvexHull, Rotate, Scale, Simplify, Translate};

use crate::algorithm::transform::{EngineFailure, EngineResult, TransformEngine};
use crate::error::PpgeError;
use crate::geometry::Geometry;
use crate::io::geo::{geometry_from_geo, geometry_to_geo};

/// Operations supported by [`GeoEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoOperation {
    /// Move every coordinate by the given offsets.
    Translate { x_offset: f64, y_offset: f64 },
    /// Scale about the center of the bounding box.
    Scale { x_factor: f64, y_factor: f64 },
    /// Rotate about the centroid. Positive angles are counter-clockwise.
    Rotate { degrees: f64 },
    ConvexHull,
    Centroid,
    /// Ramer-Douglas-Peucker simplification. Points are returned unchanged.
    Simplify { epsilon: f64 },
}

/// Transforms XY geometries with the `geo` crate.
///
/// `geo` has no Z, M or empty point, so such input is an unsupported operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoEngine;

fn simplify(geometry: geo::Geometry, epsilon: f64) -> geo::Geometry {
    match geometry {
        geo::Geometry::LineString(g) => geo::Geometry::LineString(g.simplify(&epsilon)),
        geo::Geometry::Polygon(g) => geo::Geometry::Polygon(g.simplify(&epsilon)),
        geo::Geometry::MultiLineString(g) => geo::Geometry::MultiLineString(g.simplify(&epsilon)),
        geo::Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(g.simplify(&epsilon)),
        geo::Geometry::GeometryCollection(gc) => geo::Geometry::GeometryCollection(
            gc.into_iter().map(|g| simplify(g, epsilon)).collect(),
        ),
        other => other,
    }
}

impl TransformEngine for GeoEngine {
    type Geometry = geo::Geometry;
    type Operation = GeoOperation;

    fn name(&self) -> &'static str {
        "geo"
    }

    fn import(&self, geometry: &Geometry) -> EngineResult<geo::Geometry> {
        geometry_to_geo(geometry).map_err(|err| match err {
            PpgeError::UnsupportedDimension(message) | PpgeError::UnsupportedOperation(message) => {
                EngineFailure::Unsupported(message)
            }
            other => EngineFailure::Failed(other.to_string()),
        })
    }

    fn run(&self, geometry: geo::Geometry, operation: &GeoOperation) -> EngineResult<geo::Geometry> {
        let result = match *operation {
            GeoOperation::Translate { x_offset, y_offset } => {
                geometry.translate(x_offset, y_offset)
            }
            GeoOperation::Scale { x_factor, y_factor } => geometry.scale_xy(x_factor, y_factor),
            GeoOperation::Rotate { degrees } => geometry.rotate_around_centroid(degrees),
            GeoOperation::ConvexHull => geo::Geometry::Polygon(geometry.convex_hull()),
            GeoOperation::Centroid => geo::Geometry::Point(geometry.centroid().ok_or_else(|| {
                EngineFailure::Unsupported("an empty geometry has no centroid".to_string())
            })?),
            GeoOperation::Simplify { epsilon } => simplify(geometry, epsilon),
        };
        Ok(result)
    }

    fn export(&self, geometry: geo::Geometry) -> EngineResult<Geometry> {
        geometry_from_geo(&geometry).map_err(|err| EngineFailure::Failed(err.to_string()))
    }
}
