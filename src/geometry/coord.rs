use crate::datatypes::Dimension;
use crate::error::{PpgeError, Result};

/// A single position: `x`, `y` and the optional `z` and `m` ordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub fn new_xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    pub fn new_xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    pub fn new_xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// Build a coordinate from a flat ordinate slice laid out as `dim` prescribes.
    pub fn from_ordinates(ordinates: &[f64], dim: Dimension) -> Result<Self> {
        if ordinates.len() != dim.size() {
            return Err(PpgeError::DimensionMismatch {
                expected: dim,
                found: arity_dimension(ordinates.len()),
            });
        }
        let coord = match dim {
            Dimension::XY => Coord::new_xy(ordinates[0], ordinates[1]),
            Dimension::XYZ => Coord::new_xyz(ordinates[0], ordinates[1], ordinates[2]),
            Dimension::XYM => Coord::new_xym(ordinates[0], ordinates[1], ordinates[2]),
            Dimension::XYZM => {
                Coord::new_xyzm(ordinates[0], ordinates[1], ordinates[2], ordinates[3])
            }
        };
        Ok(coord)
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// Access the nth present ordinate, in `x, y, z, m` order.
    pub fn nth(&self, n: usize) -> Option<f64> {
        self.ordinates().nth(n)
    }

    /// Iterate over the ordinates that are present, in `x, y, z, m` order.
    pub fn ordinates(&self) -> impl Iterator<Item = f64> {
        [Some(self.x), Some(self.y), self.z, self.m]
            .into_iter()
            .flatten()
    }

    /// Whether every present ordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.ordinates().all(f64::is_finite)
    }

    /// Check that this coordinate has dimension `expected` and only finite ordinates.
    pub(crate) fn validate(&self, expected: Dimension) -> Result<()> {
        let found = self.dimension();
        if found != expected {
            return Err(PpgeError::DimensionMismatch { expected, found });
        }
        if !self.is_finite() {
            return Err(PpgeError::NonFiniteCoordinate(*self));
        }
        Ok(())
    }
}

/// The dimension implied by a bare ordinate count, reading 3 ordinates as XYZ.
pub(crate) fn arity_dimension(arity: usize) -> Dimension {
    match arity {
        3 => Dimension::XYZ,
        4 => Dimension::XYZM,
        _ => Dimension::XY,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordinates_skip_missing_axes() {
        let coord = Coord::new_xym(1., 2., 5.);
        assert_eq!(coord.ordinates().collect::<Vec<_>>(), vec![1., 2., 5.]);
        assert_eq!(coord.nth(2), Some(5.));
        assert_eq!(coord.nth(3), None);
        assert_eq!(coord.dimension(), Dimension::XYM);
    }

    #[test]
    fn from_ordinates_checks_arity() {
        let coord = Coord::from_ordinates(&[1., 2., 3., 4.], Dimension::XYZM).unwrap();
        assert_eq!(coord, Coord::new_xyzm(1., 2., 3., 4.));

        let err = Coord::from_ordinates(&[1., 2.], Dimension::XYZ).unwrap_err();
        assert!(matches!(
            err,
            PpgeError::DimensionMismatch {
                expected: Dimension::XYZ,
                found: Dimension::XY
            }
        ));
    }

    #[test]
    fn validate_rejects_non_finite_ordinates() {
        assert!(Coord::new_xy(1e300, -1e-300).validate(Dimension::XY).is_ok());
        for coord in [
            Coord::new_xy(f64::NAN, 0.),
            Coord::new_xy(0., f64::INFINITY),
            Coord::new_xym(0., 0., f64::NEG_INFINITY),
        ] {
            assert!(!coord.is_finite());
            let err = coord.validate(coord.dimension()).unwrap_err();
            assert!(matches!(err, PpgeError::NonFiniteCoordinate(_)));
        }
    }
}
