use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::multipoint::check_members;
use crate::geometry::Polygon;

/// A collection of polygons sharing one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    dim: Dimension,
}

impl MultiPolygon {
    pub fn try_new(polygons: Vec<Polygon>, dim: Dimension) -> Result<Self> {
        check_members(polygons.iter().map(Polygon::dimension), dim)?;
        Ok(Self { polygons, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            polygons: vec![],
            dim,
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
