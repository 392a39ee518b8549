use crate::datatypes::Dimension;
use crate::error::{PpgeError, Result};
use crate::geometry::Geometry;

/// A heterogeneous collection of geometries, possibly nested.
///
/// Members keep their own dimension tag. The collection's dimension is derived from them: the
/// dimension every member shares, or XY when members disagree. An empty collection keeps the
/// dimension it was created with.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    dim: Dimension,
}

impl GeometryCollection {
    /// Create a collection whose dimension is derived from its members.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        let dim = shared_dimension(&geometries).unwrap_or_default();
        Self { geometries, dim }
    }

    /// Create a collection that must end up with dimension `dim`.
    ///
    /// Fails with [`PpgeError::DimensionMismatch`] if the members derive a different dimension.
    pub fn try_new(geometries: Vec<Geometry>, dim: Dimension) -> Result<Self> {
        if geometries.is_empty() {
            return Ok(Self::empty(dim));
        }
        let collection = Self::new(geometries);
        if collection.dim != dim {
            return Err(PpgeError::DimensionMismatch {
                expected: dim,
                found: collection.dim,
            });
        }
        Ok(collection)
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            geometries: vec![],
            dim,
        }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

/// The dimension all members agree on, XY if they disagree, or `None` without members.
fn shared_dimension(geometries: &[Geometry]) -> Option<Dimension> {
    let first = geometries.first()?.dimension();
    if geometries.iter().all(|g| g.dimension() == first) {
        Some(first)
    } else {
        Some(Dimension::XY)
    }
}
