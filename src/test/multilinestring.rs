use crate::datatypes::Dimension;
use crate::geometry::{LineString, MultiLineString};
use crate::test::{ls0, ls1, xy};

pub(crate) fn ml0() -> MultiLineString {
    MultiLineString::try_new(
        vec![LineString::try_new(
            xy(&[(-111., 45.), (-111., 41.), (-104., 41.), (-104., 45.)]),
            Dimension::XY,
        )
        .unwrap()],
        Dimension::XY,
    )
    .unwrap()
}

pub(crate) fn ml1() -> MultiLineString {
    MultiLineString::try_new(vec![ls0(), ls1()], Dimension::XY).unwrap()
}
