//! The in-memory geometry model shared by every codec.
//!
//! A [`Geometry`] is a plain owned tree: collections own their members by value, so no cycles
//! are possible. Values are immutable once built; codecs and transforms always produce new
//! instances. The spatial reference identifier lives only on the root, in [`SpatialGeometry`].

pub use coord::Coord;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

pub(crate) use coord::arity_dimension;

mod coord;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;

/// Any of the seven geometry kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

macro_rules! delegate {
    ($self:ident, $method:ident) => {
        match $self {
            Geometry::Point(g) => g.$method(),
            Geometry::LineString(g) => g.$method(),
            Geometry::Polygon(g) => g.$method(),
            Geometry::MultiPoint(g) => g.$method(),
            Geometry::MultiLineString(g) => g.$method(),
            Geometry::MultiPolygon(g) => g.$method(),
            Geometry::GeometryCollection(g) => g.$method(),
        }
    };
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn dimension(&self) -> Dimension {
        delegate!(self, dimension)
    }

    pub fn is_empty(&self) -> bool {
        delegate!(self, is_empty)
    }

    /// The total number of coordinates in this geometry, including collection members.
    pub fn num_coords(&self) -> usize {
        match self {
            Geometry::Point(g) => usize::from(!g.is_empty()),
            Geometry::LineString(g) => g.num_coords(),
            Geometry::Polygon(g) => g.rings().iter().map(LineString::num_coords).sum(),
            Geometry::MultiPoint(g) => g.points().iter().filter(|p| !p.is_empty()).count(),
            Geometry::MultiLineString(g) => g
                .line_strings()
                .iter()
                .map(LineString::num_coords)
                .sum(),
            Geometry::MultiPolygon(g) => g
                .polygons()
                .iter()
                .flat_map(Polygon::rings)
                .map(LineString::num_coords)
                .sum(),
            Geometry::GeometryCollection(g) => {
                g.geometries().iter().map(Geometry::num_coords).sum()
            }
        }
    }

    /// Build a new geometry by applying `f` to every coordinate.
    ///
    /// The structure and dimension tags are kept, so `f` must not change a coordinate's arity.
    /// Polygon rings are validated again after mapping.
    pub fn try_map_coords<F>(&self, f: &mut F) -> Result<Geometry>
    where
        F: FnMut(&Coord) -> Result<Coord>,
    {
        let geometry = match self {
            Geometry::Point(g) => Geometry::Point(map_point(g, f)?),
            Geometry::LineString(g) => Geometry::LineString(map_line_string(g, f)?),
            Geometry::Polygon(g) => Geometry::Polygon(map_polygon(g, f)?),
            Geometry::MultiPoint(g) => {
                let points = g
                    .points()
                    .iter()
                    .map(|p| map_point(p, f))
                    .collect::<Result<Vec<_>>>()?;
                Geometry::MultiPoint(MultiPoint::try_new(points, g.dimension())?)
            }
            Geometry::MultiLineString(g) => {
                let line_strings = g
                    .line_strings()
                    .iter()
                    .map(|ls| map_line_string(ls, f))
                    .collect::<Result<Vec<_>>>()?;
                Geometry::MultiLineString(MultiLineString::try_new(line_strings, g.dimension())?)
            }
            Geometry::MultiPolygon(g) => {
                let polygons = g
                    .polygons()
                    .iter()
                    .map(|p| map_polygon(p, f))
                    .collect::<Result<Vec<_>>>()?;
                Geometry::MultiPolygon(MultiPolygon::try_new(polygons, g.dimension())?)
            }
            Geometry::GeometryCollection(g) => {
                let geometries = g
                    .geometries()
                    .iter()
                    .map(|child| child.try_map_coords(f))
                    .collect::<Result<Vec<_>>>()?;
                Geometry::GeometryCollection(GeometryCollection::try_new(
                    geometries,
                    g.dimension(),
                )?)
            }
        };
        Ok(geometry)
    }
}

fn map_point<F>(point: &Point, f: &mut F) -> Result<Point>
where
    F: FnMut(&Coord) -> Result<Coord>,
{
    let coord = point.coord().map(|c| f(c)).transpose()?;
    Point::try_new(coord, point.dimension())
}

fn map_line_string<F>(line_string: &LineString, f: &mut F) -> Result<LineString>
where
    F: FnMut(&Coord) -> Result<Coord>,
{
    let coords = line_string
        .coords()
        .iter()
        .map(|c| f(c))
        .collect::<Result<Vec<_>>>()?;
    LineString::try_new(coords, line_string.dimension())
}

fn map_polygon<F>(polygon: &Polygon, f: &mut F) -> Result<Polygon>
where
    F: FnMut(&Coord) -> Result<Coord>,
{
    let rings = polygon
        .rings()
        .iter()
        .map(|ring| map_line_string(ring, f))
        .collect::<Result<Vec<_>>>()?;
    Polygon::try_new(rings, polygon.dimension())
}

macro_rules! impl_into_geometry {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )*
    };
}

impl_into_geometry!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

/// A root geometry together with its optional spatial reference identifier.
///
/// Only the root carries an SRID; members of a collection never do. An SRID of `0` means
/// "unspecified" and is stored as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGeometry {
    geometry: Geometry,
    srid: Option<i32>,
}

impl SpatialGeometry {
    /// Wrap a geometry without an SRID.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            srid: None,
        }
    }

    /// Wrap a geometry with an SRID. `0` is treated as unspecified.
    pub fn with_srid(geometry: Geometry, srid: i32) -> Self {
        Self {
            geometry,
            srid: (srid != 0).then_some(srid),
        }
    }

    pub(crate) fn from_parts(geometry: Geometry, srid: Option<i32>) -> Self {
        Self::with_srid(geometry, srid.unwrap_or(0))
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub fn into_inner(self) -> Geometry {
        self.geometry
    }
}

macro_rules! impl_into_spatial_geometry {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SpatialGeometry {
                fn from(value: $t) -> Self {
                    SpatialGeometry::new(value.into())
                }
            }
        )*
    };
}

impl_into_spatial_geometry!(
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::PpgeError;
    use crate::test::{gc0, ls0, p0, poly0};

    #[test]
    fn accessors() {
        let geom: Geometry = poly0().into();
        assert_eq!(geom.geometry_type(), GeometryType::Polygon);
        assert_eq!(geom.dimension(), Dimension::XY);
        assert!(!geom.is_empty());
        assert_eq!(geom.num_coords(), 9);
        assert!(Geometry::Point(Point::empty(Dimension::XYZ)).is_empty());
    }

    #[test]
    fn structural_equality_is_order_sensitive() {
        let a: Geometry = ls0().into();
        let reversed = LineString::try_new(
            ls0().coords().iter().rev().copied().collect(),
            Dimension::XY,
        )
        .unwrap();
        assert_ne!(a, Geometry::LineString(reversed));
        assert_eq!(a, Geometry::LineString(ls0()));
    }

    #[test]
    fn empty_variants_stay_distinct() {
        let point: Geometry = Point::empty(Dimension::XY).into();
        let line: Geometry = LineString::empty(Dimension::XY).into();
        assert_ne!(point, line);
    }

    #[test]
    fn zero_srid_is_unspecified() {
        assert_eq!(SpatialGeometry::with_srid(p0().into(), 0).srid(), None);
        assert_eq!(SpatialGeometry::with_srid(p0().into(), 4326).srid(), Some(4326));
        assert_eq!(SpatialGeometry::from(p0()).srid(), None);
    }

    #[test]
    fn map_coords_builds_new_tree() {
        let geom: Geometry = gc0().into();
        let shifted = geom
            .try_map_coords(&mut |c| Ok(Coord { x: c.x + 1., ..*c }))
            .unwrap();
        assert_eq!(shifted.num_coords(), geom.num_coords());
        assert_ne!(shifted, geom);
        let Geometry::GeometryCollection(gc) = &shifted else {
            panic!("expected a collection");
        };
        let Geometry::Point(point) = &gc.geometries()[0] else {
            panic!("expected a point");
        };
        assert_eq!(point.coord().unwrap().x, p0().coord().unwrap().x + 1.);
    }

    #[test]
    fn map_coords_rejects_arity_change() {
        let geom: Geometry = p0().into();
        let err = geom
            .try_map_coords(&mut |c| Ok(Coord::new_xyz(c.x, c.y, 0.)))
            .unwrap_err();
        assert!(matches!(err, PpgeError::DimensionMismatch { .. }));
    }
}
