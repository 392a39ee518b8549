use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{PpgeError, Result};

/// EWKB flag: coordinates carry a Z ordinate.
pub(crate) const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// EWKB flag: coordinates carry an M ordinate.
pub(crate) const EWKB_M_FLAG: u32 = 0x4000_0000;
/// EWKB flag: a 4-byte SRID follows the type code.
pub(crate) const EWKB_SRID_FLAG: u32 = 0x2000_0000;

const EWKB_FLAGS: u32 = EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG;

/// The base WKB geometry kinds, before any dimension or SRID markers.
#[derive(Clone, Copy, Debug, PartialEq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl From<WKBType> for GeometryType {
    fn from(value: WKBType) -> Self {
        match value {
            WKBType::Point => GeometryType::Point,
            WKBType::LineString => GeometryType::LineString,
            WKBType::Polygon => GeometryType::Polygon,
            WKBType::MultiPoint => GeometryType::MultiPoint,
            WKBType::MultiLineString => GeometryType::MultiLineString,
            WKBType::MultiPolygon => GeometryType::MultiPolygon,
            WKBType::GeometryCollection => GeometryType::GeometryCollection,
        }
    }
}

impl From<GeometryType> for WKBType {
    fn from(value: GeometryType) -> Self {
        match value {
            GeometryType::Point => WKBType::Point,
            GeometryType::LineString => WKBType::LineString,
            GeometryType::Polygon => WKBType::Polygon,
            GeometryType::MultiPoint => WKBType::MultiPoint,
            GeometryType::MultiLineString => WKBType::MultiLineString,
            GeometryType::MultiPolygon => WKBType::MultiPolygon,
            GeometryType::GeometryCollection => WKBType::GeometryCollection,
        }
    }
}

/// How dimension and SRID are spelled in the type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WkbFlavor {
    /// PostGIS EWKB: Z, M and SRID as high bits of the type code.
    #[default]
    Extended,

    /// ISO WKB: Z and M as `1000`/`2000`/`3000` offsets. Cannot carry an SRID.
    Iso,
}

/// A decoded type code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WKBTypeCode {
    pub(crate) geometry_type: GeometryType,
    pub(crate) dim: Dimension,
    pub(crate) has_srid: bool,
}

impl WKBTypeCode {
    /// Resolve a raw type code, accepting both EWKB flags and ISO offsets.
    pub(crate) fn try_from_code(code: u32) -> Result<Self> {
        let base = code & !EWKB_FLAGS;
        let (iso_z, iso_m) = match base / 1000 {
            0 => (false, false),
            1 => (true, false),
            2 => (false, true),
            3 => (true, true),
            _ => return Err(PpgeError::UnknownTypeCode(code)),
        };
        let wkb_type =
            WKBType::try_from(base % 1000).map_err(|_| PpgeError::UnknownTypeCode(code))?;

        Ok(Self {
            geometry_type: wkb_type.into(),
            dim: Dimension::from_flags(
                iso_z || code & EWKB_Z_FLAG != 0,
                iso_m || code & EWKB_M_FLAG != 0,
            ),
            has_srid: code & EWKB_SRID_FLAG != 0,
        })
    }

    /// Encode this type code in the given flavor.
    ///
    /// The SRID flag is only representable in [`WkbFlavor::Extended`].
    pub(crate) fn to_code(self, flavor: WkbFlavor) -> u32 {
        let base: u32 = WKBType::from(self.geometry_type).into();
        match flavor {
            WkbFlavor::Extended => {
                let mut code = base;
                if self.dim.has_z() {
                    code |= EWKB_Z_FLAG;
                }
                if self.dim.has_m() {
                    code |= EWKB_M_FLAG;
                }
                if self.has_srid {
                    code |= EWKB_SRID_FLAG;
                }
                code
            }
            WkbFlavor::Iso => {
                let offset = match self.dim {
                    Dimension::XY => 0,
                    Dimension::XYZ => 1000,
                    Dimension::XYM => 2000,
                    Dimension::XYZM => 3000,
                };
                base + offset
            }
        }
    }
}
