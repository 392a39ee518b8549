use crate::datatypes::Dimension;
use crate::geometry::MultiPolygon;
use crate::test::{poly0, poly1};

/// Wyoming and Colorado.
pub(crate) fn mpoly0() -> MultiPolygon {
    MultiPolygon::try_new(vec![poly0(), poly1()], Dimension::XY).unwrap()
}
