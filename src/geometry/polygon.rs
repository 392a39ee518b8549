use crate::datatypes::Dimension;
use crate::error::{PpgeError, Result};
use crate::geometry::{Coord, LineString};

/// A polygon: an exterior ring followed by zero or more holes.
///
/// A polygon without rings is empty. Every ring of a non-empty polygon holds at least four
/// coordinates, is closed and spans at least three distinct positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    dim: Dimension,
}

impl Polygon {
    /// Create a polygon from its rings, exterior first.
    ///
    /// Rings are never closed automatically; an unclosed ring is an [`PpgeError::InvalidRing`].
    pub fn try_new(rings: Vec<LineString>, dim: Dimension) -> Result<Self> {
        for (i, ring) in rings.iter().enumerate() {
            if ring.dimension() != dim {
                return Err(PpgeError::DimensionMismatch {
                    expected: dim,
                    found: ring.dimension(),
                });
            }
            validate_ring(ring.coords()).map_err(|msg| {
                PpgeError::InvalidRing(format!("ring {i}: {msg}"))
            })?;
        }
        Ok(Self { rings, dim })
    }

    /// Create a polygon from raw coordinate rings.
    pub fn try_from_rings(rings: Vec<Vec<Coord>>, dim: Dimension) -> Result<Self> {
        let rings = rings
            .into_iter()
            .map(|ring| LineString::try_new(ring, dim))
            .collect::<Result<Vec<_>>>()?;
        Self::try_new(rings, dim)
    }

    pub fn empty(dim: Dimension) -> Self {
        Self { rings: vec![], dim }
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

fn validate_ring(coords: &[Coord]) -> std::result::Result<(), String> {
    if coords.len() < 4 {
        return Err(format!(
            "{} coordinates, at least 4 are required",
            coords.len()
        ));
    }
    if coords.first() != coords.last() {
        return Err("first and last coordinates differ".to_string());
    }

    let first = &coords[0];
    let Some(second) = coords.iter().find(|c| *c != first) else {
        return Err("fewer than 3 distinct positions".to_string());
    };
    if !coords.iter().any(|c| c != first && c != second) {
        return Err("fewer than 3 distinct positions".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Vec<Coord> {
        coords.iter().map(|(x, y)| Coord::new_xy(*x, *y)).collect()
    }

    #[test]
    fn valid_polygon_with_hole() {
        let polygon = Polygon::try_from_rings(
            vec![
                ring(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]),
                ring(&[(2., 2.), (3., 2.), (3., 3.), (2., 2.)]),
            ],
            Dimension::XY,
        )
        .unwrap();
        assert_eq!(polygon.exterior().unwrap().num_coords(), 5);
        assert_eq!(polygon.interiors().len(), 1);
        assert!(!polygon.is_empty());
    }

    #[test]
    fn too_short() {
        let err = Polygon::try_from_rings(vec![ring(&[(0., 0.), (1., 1.)])], Dimension::XY)
            .unwrap_err();
        assert!(matches!(err, PpgeError::InvalidRing(_)));
    }

    #[test]
    fn unclosed() {
        let err = Polygon::try_from_rings(
            vec![ring(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)])],
            Dimension::XY,
        )
        .unwrap_err();
        assert!(matches!(err, PpgeError::InvalidRing(_)));
    }

    #[test]
    fn degenerate() {
        let err = Polygon::try_from_rings(
            vec![ring(&[(0., 0.), (1., 1.), (0., 0.), (1., 1.), (0., 0.)])],
            Dimension::XY,
        )
        .unwrap_err();
        assert!(matches!(err, PpgeError::InvalidRing(_)));
    }

    #[test]
    fn empty_ring_in_polygon() {
        let err = Polygon::try_from_rings(vec![vec![]], Dimension::XY).unwrap_err();
        assert!(matches!(err, PpgeError::InvalidRing(_)));
        assert!(Polygon::empty(Dimension::XY).is_empty());
    }

    #[test]
    fn ring_dimension_checked() {
        let err = Polygon::try_from_rings(
            vec![ring(&[(0., 0.), (1., 0.), (1., 1.), (0., 0.)])],
            Dimension::XYZ,
        )
        .unwrap_err();
        assert!(matches!(err, PpgeError::DimensionMismatch { .. }));
    }
}
