use crate::datatypes::Dimension;
use crate::error::{PpgeError, Result};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

fn check_xy(dim: Dimension) -> Result<()> {
    if dim == Dimension::XY {
        Ok(())
    } else {
        Err(PpgeError::UnsupportedDimension(format!(
            "geo geometries are XY only, found {dim}"
        )))
    }
}

/// Convert a coordinate to a [`geo::Coord`]. Fails for anything but XY.
pub fn coord_to_geo(coord: &Coord) -> Result<geo::Coord> {
    check_xy(coord.dimension())?;
    Ok(geo::Coord {
        x: coord.x,
        y: coord.y,
    })
}

/// Convert a Point to a [`geo::Point`].
///
/// An empty point has no `geo` equivalent and fails with
/// [`PpgeError::UnsupportedOperation`].
pub fn point_to_geo(point: &Point) -> Result<geo::Point> {
    let coord = point.coord().ok_or_else(|| {
        PpgeError::UnsupportedOperation("geo cannot represent an empty point".to_string())
    })?;
    Ok(geo::Point(coord_to_geo(coord)?))
}

pub fn line_string_to_geo(line_string: &LineString) -> Result<geo::LineString> {
    check_xy(line_string.dimension())?;
    line_string
        .coords()
        .iter()
        .map(coord_to_geo)
        .collect::<Result<Vec<_>>>()
        .map(geo::LineString::new)
}

/// Convert a Polygon to a [`geo::Polygon`]. An empty polygon becomes one with an empty
/// exterior.
pub fn polygon_to_geo(polygon: &Polygon) -> Result<geo::Polygon> {
    check_xy(polygon.dimension())?;
    let exterior = match polygon.exterior() {
        Some(exterior) => line_string_to_geo(exterior)?,
        None => geo::LineString::new(vec![]),
    };
    let interiors = polygon
        .interiors()
        .iter()
        .map(line_string_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::Polygon::new(exterior, interiors))
}

pub fn multi_point_to_geo(multi_point: &MultiPoint) -> Result<geo::MultiPoint> {
    check_xy(multi_point.dimension())?;
    multi_point
        .points()
        .iter()
        .map(point_to_geo)
        .collect::<Result<Vec<_>>>()
        .map(geo::MultiPoint::new)
}

pub fn multi_line_string_to_geo(
    multi_line_string: &MultiLineString,
) -> Result<geo::MultiLineString> {
    check_xy(multi_line_string.dimension())?;
    multi_line_string
        .line_strings()
        .iter()
        .map(line_string_to_geo)
        .collect::<Result<Vec<_>>>()
        .map(geo::MultiLineString::new)
}

pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> Result<geo::MultiPolygon> {
    check_xy(multi_polygon.dimension())?;
    multi_polygon
        .polygons()
        .iter()
        .map(polygon_to_geo)
        .collect::<Result<Vec<_>>>()
        .map(geo::MultiPolygon::new)
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`].
///
/// Every member must be convertible on its own.
pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> Result<geo::GeometryCollection> {
    check_xy(geometry_collection.dimension())?;
    geometry_collection
        .geometries()
        .iter()
        .map(geometry_to_geo)
        .collect::<Result<Vec<_>>>()
        .map(geo::GeometryCollection::new_from)
}

/// Convert any Geometry to a [`geo::Geometry`].
pub fn geometry_to_geo(geometry: &Geometry) -> Result<geo::Geometry> {
    let geometry = match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)?),
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)?),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)?),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)?),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g)?)
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)?),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g)?)
        }
    };
    Ok(geometry)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{gc0, p0, p_z, poly0};

    #[test]
    fn polygon() {
        let polygon = polygon_to_geo(&poly0()).unwrap();
        assert_eq!(polygon.exterior().0.len(), 5);
        assert_eq!(polygon.interiors().len(), 1);
        assert_eq!(polygon.exterior().0[1], geo::coord! { x: -111., y: 41. });
    }

    #[test]
    fn collection() {
        let geo::Geometry::GeometryCollection(gc) = geometry_to_geo(&gc0().into()).unwrap() else {
            panic!("expected a collection");
        };
        assert_eq!(gc.0.len(), 3);
        assert_eq!(gc.0[0], geo::Geometry::Point(geo::point! { x: 0., y: 1. }));
    }

    #[test]
    fn rejects_z_and_empty() {
        assert!(matches!(
            point_to_geo(&p_z()),
            Err(PpgeError::UnsupportedDimension(_))
        ));
        assert!(matches!(
            point_to_geo(&Point::empty(Dimension::XY)),
            Err(PpgeError::UnsupportedOperation(_))
        ));
        assert!(point_to_geo(&p0()).is_ok());
    }
}
