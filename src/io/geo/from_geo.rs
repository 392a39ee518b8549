use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

fn coords_from_geo(line_string: &geo::LineString) -> Vec<Coord> {
    line_string
        .coords()
        .map(|c| Coord::new_xy(c.x, c.y))
        .collect()
}

fn polygon_from_geo(polygon: &geo::Polygon) -> Result<Polygon> {
    if polygon.exterior().0.is_empty() {
        return Ok(Polygon::empty(Dimension::XY));
    }
    let rings = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(coords_from_geo)
        .collect();
    Polygon::try_from_rings(rings, Dimension::XY)
}

/// Convert a [`geo::Geometry`] into the geometry model.
///
/// `Line`, `Rect` and `Triangle` become a LineString and Polygons respectively. The result is
/// XY. Polygon rings are validated, so a degenerate `geo` polygon fails with
/// [`crate::error::PpgeError::InvalidRing`], and NaN or infinite coordinates fail with
/// [`crate::error::PpgeError::NonFiniteCoordinate`].
pub fn geometry_from_geo(geometry: &geo::Geometry) -> Result<Geometry> {
    let dim = Dimension::XY;
    let geometry = match geometry {
        geo::Geometry::Point(p) => Point::new(Coord::new_xy(p.x(), p.y()))?.into(),
        geo::Geometry::Line(line) => LineString::try_new(
            vec![
                Coord::new_xy(line.start.x, line.start.y),
                Coord::new_xy(line.end.x, line.end.y),
            ],
            dim,
        )?
        .into(),
        geo::Geometry::LineString(ls) => LineString::try_new(coords_from_geo(ls), dim)?.into(),
        geo::Geometry::Polygon(p) => polygon_from_geo(p)?.into(),
        geo::Geometry::MultiPoint(mp) => MultiPoint::try_new(
            mp.iter()
                .map(|p| Point::new(Coord::new_xy(p.x(), p.y())))
                .collect::<Result<Vec<_>>>()?,
            dim,
        )?
        .into(),
        geo::Geometry::MultiLineString(ml) => MultiLineString::try_new(
            ml.iter()
                .map(|ls| LineString::try_new(coords_from_geo(ls), dim))
                .collect::<Result<Vec<_>>>()?,
            dim,
        )?
        .into(),
        geo::Geometry::MultiPolygon(mp) => MultiPolygon::try_new(
            mp.iter()
                .map(polygon_from_geo)
                .collect::<Result<Vec<_>>>()?,
            dim,
        )?
        .into(),
        geo::Geometry::GeometryCollection(gc) => GeometryCollection::new(
            gc.iter()
                .map(geometry_from_geo)
                .collect::<Result<Vec<_>>>()?,
        )
        .into(),
        geo::Geometry::Rect(rect) => polygon_from_geo(&rect.to_polygon())?.into(),
        geo::Geometry::Triangle(triangle) => polygon_from_geo(&triangle.to_polygon())?.into(),
    };
    Ok(geometry)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geo::geometry_to_geo;
    use crate::test::{gc0, ml1, mp0, mpoly0};

    #[test]
    fn round_trip() {
        for geom in [
            Geometry::from(gc0()),
            mp0().into(),
            ml1().into(),
            mpoly0().into(),
        ] {
            let converted = geometry_from_geo(&geometry_to_geo(&geom).unwrap()).unwrap();
            assert_eq!(converted, geom);
        }
    }

    #[test]
    fn rect() {
        let rect = geo::Rect::new(geo::coord! { x: 0., y: 0. }, geo::coord! { x: 2., y: 1. });
        let geom = geometry_from_geo(&geo::Geometry::Rect(rect)).unwrap();
        let Geometry::Polygon(polygon) = geom else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.rings().len(), 1);
        assert_eq!(polygon.exterior().unwrap().num_coords(), 5);
    }

    #[test]
    fn degenerate_polygon() {
        let polygon = geo::Polygon::new(
            geo::LineString::from(vec![(0., 0.), (1., 1.)]),
            vec![],
        );
        assert!(geometry_from_geo(&geo::Geometry::Polygon(polygon)).is_err());
    }

    #[test]
    fn non_finite_point() {
        let point = geo::Point::new(f64::NAN, 0.);
        assert!(matches!(
            geometry_from_geo(&geo::Geometry::Point(point)),
            Err(crate::error::PpgeError::NonFiniteCoordinate(_))
        ));
    }
}
