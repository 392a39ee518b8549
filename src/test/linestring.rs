use crate::datatypes::Dimension;
use crate::geometry::LineString;
use crate::test::{xy, xyz};

pub(crate) fn ls0() -> LineString {
    LineString::try_new(xy(&[(0., 1.), (1., 2.)]), Dimension::XY).unwrap()
}

pub(crate) fn ls1() -> LineString {
    LineString::try_new(xy(&[(3., 4.), (5., 6.)]), Dimension::XY).unwrap()
}

pub(crate) fn ls_z() -> LineString {
    LineString::try_new(
        xyz(&[(100., 0., -60.), (101., 1., -65.25)]),
        Dimension::XYZ,
    )
    .unwrap()
}
