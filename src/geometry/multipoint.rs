use crate::datatypes::Dimension;
use crate::error::{PpgeError, Result};
use crate::geometry::Point;

/// A collection of points sharing one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    dim: Dimension,
}

impl MultiPoint {
    pub fn try_new(points: Vec<Point>, dim: Dimension) -> Result<Self> {
        check_members(points.iter().map(Point::dimension), dim)?;
        Ok(Self { points, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            points: vec![],
            dim,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Multi* members must all carry their parent's dimension.
pub(crate) fn check_members(
    mut dims: impl Iterator<Item = Dimension>,
    expected: Dimension,
) -> Result<()> {
    match dims.find(|dim| *dim != expected) {
        Some(found) => Err(PpgeError::DimensionMismatch { expected, found }),
        None => Ok(()),
    }
}
