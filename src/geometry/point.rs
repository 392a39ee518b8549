use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::Coord;

/// A single position, or an empty point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
    dim: Dimension,
}

impl Point {
    /// Create a point whose dimension is taken from `coord`.
    ///
    /// Fails with [`PpgeError::NonFiniteCoordinate`](crate::error::PpgeError) if any ordinate
    /// is NaN or infinite.
    pub fn new(coord: Coord) -> Result<Self> {
        Self::try_new(Some(coord), coord.dimension())
    }

    /// Create a point, checking that `coord` matches `dim` and is finite.
    pub fn try_new(coord: Option<Coord>, dim: Dimension) -> Result<Self> {
        if let Some(coord) = &coord {
            coord.validate(dim)?;
        }
        Ok(Self { coord, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self { coord: None, dim }
    }

    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::PpgeError;

    #[test]
    fn non_finite_point_is_rejected() {
        let err = Point::new(Coord::new_xy(f64::INFINITY, 1.)).unwrap_err();
        assert!(matches!(err, PpgeError::NonFiniteCoordinate(_)));

        let err = Point::try_new(Some(Coord::new_xyz(0., 1., f64::NAN)), Dimension::XYZ)
            .unwrap_err();
        assert!(matches!(err, PpgeError::NonFiniteCoordinate(_)));
    }
}
