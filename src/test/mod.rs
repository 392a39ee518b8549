//! Shared fixtures for unit tests.

pub(crate) use geometrycollection::*;
pub(crate) use linestring::*;
pub(crate) use multilinestring::*;
pub(crate) use multipoint::*;
pub(crate) use multipolygon::*;
pub(crate) use point::*;
pub(crate) use polygon::*;

mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use crate::geometry::Coord;

pub(crate) fn xy(coords: &[(f64, f64)]) -> Vec<Coord> {
    coords.iter().map(|(x, y)| Coord::new_xy(*x, *y)).collect()
}

pub(crate) fn xyz(coords: &[(f64, f64, f64)]) -> Vec<Coord> {
    coords
        .iter()
        .map(|(x, y, z)| Coord::new_xyz(*x, *y, *z))
        .collect()
}
