//! Reprojection with the PROJ C library, through the [`proj`] crate.

use proj::Proj;

use crate::algorithm::transform::{EngineFailure, EngineResult, TransformEngine};
use crate::error::PpgeError;
use crate::geometry::{Coord, Geometry};

/// Reproject from one coordinate reference system to another.
///
/// `from` and `to` are anything PROJ accepts, typically `"EPSG:<code>"`. Coordinates are in
/// traditional GIS order (longitude, latitude).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reprojection {
    pub from: String,
    pub to: String,
}

impl Reprojection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The EPSG code of the target system, if it is given as `EPSG:<code>`.
    fn target_epsg(&self) -> Option<i32> {
        let (authority, code) = self.to.split_once(':')?;
        if authority.trim().eq_ignore_ascii_case("EPSG") {
            code.trim().parse().ok()
        } else {
            None
        }
    }
}

/// Reprojects X and Y of every coordinate. Z and M are passed through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjEngine;

impl TransformEngine for ProjEngine {
    type Geometry = Geometry;
    type Operation = Reprojection;

    fn name(&self) -> &'static str {
        "proj"
    }

    fn import(&self, geometry: &Geometry) -> EngineResult<Geometry> {
        Ok(geometry.clone())
    }

    fn run(&self, geometry: Geometry, operation: &Reprojection) -> EngineResult<Geometry> {
        let proj = Proj::new_known_crs(&operation.from, &operation.to, None).map_err(|err| {
            EngineFailure::Unsupported(format!(
                "cannot reproject from {} to {}: {err}",
                operation.from, operation.to
            ))
        })?;

        geometry
            .try_map_coords(&mut |coord: &Coord| {
                let (x, y) = proj
                    .convert((coord.x, coord.y))
                    .map_err(|err| PpgeError::EngineError(err.to_string()))?;
                Ok(Coord { x, y, ..*coord })
            })
            .map_err(|err| match err {
                PpgeError::EngineError(message) => EngineFailure::Failed(message),
                other => EngineFailure::Failed(other.to_string()),
            })
    }

    fn export(&self, geometry: Geometry) -> EngineResult<Geometry> {
        Ok(geometry)
    }

    /// `EPSG:<code>` targets become the SRID of the result. Any other target leaves the
    /// result without an SRID.
    fn output_srid(&self, operation: &Reprojection, _input: Option<i32>) -> Option<i32> {
        operation.target_epsg()
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::algorithm::transform::transform;
    use crate::geometry::{Point, SpatialGeometry};
    use crate::test::{p0, p_z};

    #[test]
    fn point_to_web_mercator() {
        let input = SpatialGeometry::with_srid(p0().into(), 4326);
        let operation = Reprojection::new("EPSG:4326", "EPSG:3857");

        // You can verify this with PROJ on the command line:
        // echo 1 0 | cs2cs EPSG:4326 EPSG:3857
        // 0.00	111325.14 0.00
        let output = transform(&ProjEngine, &input, &operation).unwrap();
        assert_eq!(output.srid(), Some(3857));
        let Geometry::Point(point) = output.geometry() else {
            panic!("expected a point");
        };
        let coord = point.coord().unwrap();
        assert_eq!(coord.x, 0.0);
        assert_relative_eq!(coord.y, 111325.1428663851);
    }

    #[test]
    fn z_passes_through() {
        let operation = Reprojection::new("EPSG:4326", "EPSG:3857");
        let output = transform(&ProjEngine, &p_z().into(), &operation).unwrap();
        let Geometry::Point(point) = output.geometry() else {
            panic!("expected a point");
        };
        assert_eq!(point.coord().unwrap().z, Some(3.));
    }

    #[test]
    fn empty_point() {
        let operation = Reprojection::new("EPSG:4326", "EPSG:3857");
        let empty = Point::empty(crate::datatypes::Dimension::XY);
        let output = transform(&ProjEngine, &empty.clone().into(), &operation).unwrap();
        assert_eq!(output.geometry(), &Geometry::from(empty));
    }

    #[test]
    fn unknown_crs() {
        let operation = Reprojection::new("EPSG:4326", "EPSG:999999");
        assert!(matches!(
            transform(&ProjEngine, &p0().into(), &operation),
            Err(PpgeError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn target_srid() {
        assert_eq!(Reprojection::new("EPSG:4326", "epsg:32618").target_epsg(), Some(32618));
        assert_eq!(Reprojection::new("EPSG:4326", "+proj=merc").target_epsg(), None);
    }
}
