use crate::geometry::{Coord, Point};

pub(crate) fn p0() -> Point {
    Point::new(Coord::new_xy(0., 1.)).unwrap()
}

pub(crate) fn p1() -> Point {
    Point::new(Coord::new_xy(1., 2.)).unwrap()
}

pub(crate) fn p_z() -> Point {
    Point::new(Coord::new_xyz(1., 2., 3.)).unwrap()
}

pub(crate) fn p_m() -> Point {
    Point::new(Coord::new_xym(1., 2., 4.)).unwrap()
}

pub(crate) fn p_zm() -> Point {
    Point::new(Coord::new_xyzm(-0.5, -1., -2., -4.)).unwrap()
}
