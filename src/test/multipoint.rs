use crate::datatypes::Dimension;
use crate::geometry::{Coord, MultiPoint, Point};
use crate::test::{p0, p1};

pub(crate) fn mp0() -> MultiPoint {
    MultiPoint::try_new(vec![p0(), p1()], Dimension::XY).unwrap()
}

pub(crate) fn mp_zm() -> MultiPoint {
    MultiPoint::try_new(
        vec![
            Point::new(Coord::new_xyzm(100., 3.1, 1., 0.)).unwrap(),
            Point::new(Coord::new_xyzm(101., 2.1, 2., 0.)).unwrap(),
        ],
        Dimension::XYZM,
    )
    .unwrap()
}
