use crate::datatypes::Dimension;
use crate::geometry::Polygon;
use crate::test::{xy, xyz};

/// Wyoming, with a hole.
pub(crate) fn poly0() -> Polygon {
    Polygon::try_from_rings(
        vec![
            xy(&[
                (-111., 45.),
                (-111., 41.),
                (-104., 41.),
                (-104., 45.),
                (-111., 45.),
            ]),
            xy(&[(-108., 43.), (-107., 43.), (-107., 44.), (-108., 43.)]),
        ],
        Dimension::XY,
    )
    .unwrap()
}

/// Colorado.
pub(crate) fn poly1() -> Polygon {
    Polygon::try_from_rings(
        vec![xy(&[
            (-109.05, 41.),
            (-109.05, 37.),
            (-102.05, 37.),
            (-102.05, 41.),
            (-109.05, 41.),
        ])],
        Dimension::XY,
    )
    .unwrap()
}

pub(crate) fn poly_z() -> Polygon {
    Polygon::try_from_rings(
        vec![xyz(&[
            (100., 0., 3.1),
            (101., 0., 2.1),
            (101., 1., 1.1),
            (100., 0., 3.1),
        ])],
        Dimension::XYZ,
    )
    .unwrap()
}
