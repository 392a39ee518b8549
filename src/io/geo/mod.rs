//! Convert between the geometry model and [`geo`] geometries.
//!
//! `geo` geometries are always two-dimensional and cannot hold an empty point, so conversion
//! into `geo` fails for Z/M input and for empty points.

mod from_geo;
mod to_geo;

pub use from_geo::geometry_from_geo;
pub use to_geo::{
    coord_to_geo, geometry_collection_to_geo, geometry_to_geo, line_string_to_geo,
    multi_line_string_to_geo, multi_point_to_geo, multi_polygon_to_geo, point_to_geo,
    polygon_to_geo,
};
