//! The boundary between the geometry model and external geometry engines.

use log::trace;
use thiserror::Error;

use crate::error::{PpgeError, Result};
use crate::geometry::{Geometry, SpatialGeometry};

/// Why an engine did not produce a result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineFailure {
    /// The engine cannot perform the operation on this input at all.
    #[error("{0}")]
    Unsupported(String),

    /// The engine attempted the operation and reported an error.
    #[error("{0}")]
    Failed(String),
}

impl From<EngineFailure> for PpgeError {
    fn from(value: EngineFailure) -> Self {
        match value {
            EngineFailure::Unsupported(message) => PpgeError::UnsupportedOperation(message),
            EngineFailure::Failed(message) => PpgeError::EngineError(message),
        }
    }
}

pub type EngineResult<T> = std::result::Result<T, EngineFailure>;

/// An external engine that geometries are marshalled into, transformed by, and marshalled
/// back out of.
///
/// The engine owns all geometry logic. Engines hold no per-call state, so a shared reference
/// can serve concurrent calls.
pub trait TransformEngine {
    /// The engine's own geometry representation.
    type Geometry;

    /// The operations this engine understands.
    type Operation;

    /// A short name for diagnostics.
    fn name(&self) -> &'static str;

    fn import(&self, geometry: &Geometry) -> EngineResult<Self::Geometry>;

    fn run(
        &self,
        geometry: Self::Geometry,
        operation: &Self::Operation,
    ) -> EngineResult<Self::Geometry>;

    fn export(&self, geometry: Self::Geometry) -> EngineResult<Geometry>;

    /// The SRID of the result. Engines that do not change the reference system keep the
    /// input's.
    fn output_srid(&self, _operation: &Self::Operation, input: Option<i32>) -> Option<i32> {
        input
    }
}

/// Run `operation` on `geometry` with `engine`, returning a new geometry.
///
/// Failures the engine reports surface as [`PpgeError::EngineError`], and operations it
/// cannot perform as [`PpgeError::UnsupportedOperation`]. Nothing is retried.
pub fn transform<E: TransformEngine>(
    engine: &E,
    geometry: &SpatialGeometry,
    operation: &E::Operation,
) -> Result<SpatialGeometry> {
    let name = engine.name();
    let input = geometry.geometry();

    trace!(
        "{name}: importing {} {}",
        input.geometry_type(),
        input.dimension()
    );
    let imported = engine.import(input)?;

    trace!("{name}: running operation");
    let result = engine.run(imported, operation)?;

    let exported = engine.export(result)?;
    trace!(
        "{name}: exported {} {}",
        exported.geometry_type(),
        exported.dimension()
    );

    let srid = engine.output_srid(operation, geometry.srid());
    Ok(SpatialGeometry::from_parts(exported, srid))
}
