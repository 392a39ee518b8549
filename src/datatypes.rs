//! Canonical tags shared by every codec: coordinate [`Dimension`] and [`GeometryType`].

use std::fmt::Display;

/// The dimension of a geometry.
///
/// Dimensionality is a property of a whole geometry, not of individual coordinates: every
/// coordinate of a geometry carries exactly the ordinates its dimension names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Build a dimension from the presence of the Z and M axes.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of ordinates per coordinate.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The seven geometry kinds.
///
/// Format-specific spellings (WKT keywords, WKB type codes, GeoJSON `type` strings) are all
/// resolved into this one tag at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The GeoJSON `type` member for this kind.
    pub fn name(&self) -> &'static str {
        use GeometryType::*;
        match self {
            Point => "Point",
            LineString => "LineString",
            Polygon => "Polygon",
            MultiPoint => "MultiPoint",
            MultiLineString => "MultiLineString",
            MultiPolygon => "MultiPolygon",
            GeometryCollection => "GeometryCollection",
        }
    }

    /// The upper-case WKT keyword for this kind.
    pub fn wkt_keyword(&self) -> &'static str {
        use GeometryType::*;
        match self {
            Point => "POINT",
            LineString => "LINESTRING",
            Polygon => "POLYGON",
            MultiPoint => "MULTIPOINT",
            MultiLineString => "MULTILINESTRING",
            MultiPolygon => "MULTIPOLYGON",
            GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Look up a kind from a WKT keyword, ignoring case.
    pub fn from_wkt_keyword(keyword: &str) -> Option<Self> {
        use GeometryType::*;
        [
            Point,
            LineString,
            Polygon,
            MultiPoint,
            MultiLineString,
            MultiPolygon,
            GeometryCollection,
        ]
        .into_iter()
        .find(|t| t.wkt_keyword().eq_ignore_ascii_case(keyword))
    }

    /// The single-part kind a Multi* kind is made of.
    pub fn member_type(&self) -> Option<Self> {
        use GeometryType::*;
        match self {
            MultiPoint => Some(Point),
            MultiLineString => Some(LineString),
            MultiPolygon => Some(Polygon),
            _ => None,
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_flags() {
        assert_eq!(Dimension::from_flags(false, false), Dimension::XY);
        assert_eq!(Dimension::from_flags(true, false), Dimension::XYZ);
        assert_eq!(Dimension::from_flags(false, true), Dimension::XYM);
        assert_eq!(Dimension::from_flags(true, true), Dimension::XYZM);
    }

    #[test]
    fn sizes() {
        assert_eq!(Dimension::XY.size(), 2);
        assert_eq!(Dimension::XYM.size(), 3);
        assert_eq!(Dimension::XYZM.size(), 4);
        assert!(Dimension::XYZM.has_z() && Dimension::XYZM.has_m());
        assert!(!Dimension::XYM.has_z());
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(
            GeometryType::from_wkt_keyword("multiLineString"),
            Some(GeometryType::MultiLineString)
        );
        assert_eq!(GeometryType::from_wkt_keyword("TETRAHEDRON"), None);
    }

    #[test]
    fn display_uses_geojson_names() {
        assert_eq!(GeometryType::Polygon.to_string(), "Polygon");
        assert_eq!(GeometryType::GeometryCollection.to_string(), "GeometryCollection");
    }
}
