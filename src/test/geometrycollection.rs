use crate::geometry::{Geometry, GeometryCollection};
use crate::test::{ls0, mp0, p0, p_z, poly0};

pub(crate) fn gc0() -> GeometryCollection {
    GeometryCollection::new(vec![p0().into(), ls0().into(), poly0().into()])
}

/// A collection holding a nested collection and a member of another dimension.
pub(crate) fn gc_nested() -> GeometryCollection {
    let inner = GeometryCollection::new(vec![mp0().into()]);
    GeometryCollection::new(vec![Geometry::GeometryCollection(inner), p_z().into()])
}
