use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::Coord;

/// An ordered sequence of coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coords: Vec<Coord>,
    dim: Dimension,
}

impl LineString {
    /// Create a line string, checking that every coordinate matches `dim` and is finite.
    pub fn try_new(coords: Vec<Coord>, dim: Dimension) -> Result<Self> {
        coords
            .iter()
            .try_for_each(|coord| coord.validate(dim))?;
        Ok(Self { coords, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            coords: vec![],
            dim,
        }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Whether the first and last coordinates are equal.
    ///
    /// An empty line string is not closed.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.coords
    }
}
