//! Read and write geometries as Well-Known Text, including the PostGIS `SRID=<n>;` extension.
//!
//! ```
//! use ppge::io::wkt::{from_wkt, to_wkt};
//!
//! let geom = from_wkt("SRID=4326;point z (1 2 3)").unwrap();
//! assert_eq!(geom.srid(), Some(4326));
//! assert_eq!(to_wkt(&geom), "SRID=4326;POINT Z (1 2 3)");
//! ```

use std::io::{Read, Write};

use log::debug;

use crate::error::Result;
use crate::geometry::SpatialGeometry;

mod reader;
mod writer;

/// Options for formatting WKT.
#[derive(Debug, Clone, Copy, Default)]
pub struct WktOptions {
    /// Number of decimal places for every ordinate.
    ///
    /// `None` (the default) writes the shortest text that parses back to the identical value.
    /// `Some(n)` rounds to exactly `n` decimals and does not round-trip in general.
    pub precision: Option<usize>,
}

impl WktOptions {
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: Some(precision),
        }
    }
}

/// Parse WKT or EWKT text.
pub fn from_wkt(text: &str) -> Result<SpatialGeometry> {
    let geom = reader::parse_wkt(text)?;
    debug!(
        "decoded {} {} from WKT (srid: {:?})",
        geom.geometry().geometry_type(),
        geom.geometry().dimension(),
        geom.srid()
    );
    Ok(geom)
}

/// Read all of `reader` and parse it as WKT or EWKT.
pub fn read_wkt<R: Read>(mut reader: R) -> Result<SpatialGeometry> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_wkt(&text)
}

/// Format a geometry as WKT with shortest round-trip numbers.
///
/// An `SRID=<n>;` prefix is written when the geometry has an SRID.
pub fn to_wkt(geom: &SpatialGeometry) -> String {
    to_wkt_with_options(geom, &WktOptions::default())
}

pub fn to_wkt_with_options(geom: &SpatialGeometry, options: &WktOptions) -> String {
    let text = writer::format_spatial_geometry(geom, options.precision);
    debug!(
        "encoded {} {} as {} bytes of WKT",
        geom.geometry().geometry_type(),
        geom.geometry().dimension(),
        text.len()
    );
    text
}

/// Format a geometry as WKT into a writer.
pub fn write_wkt<W: Write>(
    mut writer: W,
    geom: &SpatialGeometry,
    options: &WktOptions,
) -> Result<()> {
    writer.write_all(to_wkt_with_options(geom, options).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::error::PpgeError;
    use crate::geometry::{Coord, Geometry, Point};
    use crate::test::{gc0, gc_nested, ls_z, mp_zm, mpoly0, p_m, poly_z};

    #[test]
    fn round_trip() {
        let geoms: Vec<Geometry> = vec![
            Point::empty(Dimension::XY).into(),
            Point::empty(Dimension::XYM).into(),
            p_m().into(),
            ls_z().into(),
            poly_z().into(),
            mp_zm().into(),
            mpoly0().into(),
            gc0().into(),
            gc_nested().into(),
        ];
        for geom in geoms {
            let spatial = SpatialGeometry::with_srid(geom, 3857);
            let text = to_wkt(&spatial);
            assert_eq!(from_wkt(&text).unwrap(), spatial, "{text}");
        }
    }

    #[test]
    fn point_empty() {
        let geom = from_wkt("POINT EMPTY").unwrap();
        assert!(geom.geometry().is_empty());
        assert_eq!(to_wkt(&geom), "POINT EMPTY");
    }

    #[test]
    fn full_precision_survives() {
        for (x, y) in [
            (std::f64::consts::PI, -123456789.00000001),
            (1e300, -1e-300),
            (f64::MAX, f64::MIN_POSITIVE),
        ] {
            let point = Point::new(Coord::new_xy(x, y)).unwrap();
            let geom = SpatialGeometry::from(point);
            assert_eq!(from_wkt(&to_wkt(&geom)).unwrap(), geom);
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(Point::new(Coord::new_xy(f64::NAN, 0.)).is_err());
        assert!(from_wkt("POINT (NaN 0)").is_err());
        assert!(from_wkt("POINT (0 inf)").is_err());
    }

    #[test]
    fn options() {
        let geom = from_wkt("LINESTRING (0.123456 1, 2 3.5)").unwrap();
        assert_eq!(
            to_wkt_with_options(&geom, &WktOptions::with_precision(2)),
            "LINESTRING (0.12 1.00, 2.00 3.50)"
        );
    }

    #[test]
    fn io_helpers() {
        let geom = read_wkt("SRID=4326;POINT(1 2)".as_bytes()).unwrap();
        let mut out = Vec::new();
        write_wkt(&mut out, &geom, &Default::default()).unwrap();
        assert_eq!(out, b"SRID=4326;POINT (1 2)");

        let invalid_utf8: &[u8] = &[0xff, 0xfe];
        assert!(matches!(read_wkt(invalid_utf8), Err(PpgeError::IOError(_))));
    }
}
