//! A common interface over the three text and binary encodings.

use log::debug;
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::geometry::SpatialGeometry;
use crate::io::geojson::{from_geojson, to_geojson, GeoJsonOptions};
use crate::io::wkb::{from_wkb, to_wkb, WkbReadOptions, WkbWriteOptions};
use crate::io::wkt::{from_wkt, to_wkt_with_options, WktOptions};

/// Decodes one encoding into the geometry model and encodes back.
///
/// Codecs hold only their options, so one value can be shared freely across threads.
pub trait GeometryCodec {
    /// The encoded form, e.g. `String` for WKT.
    type Encoded;

    fn decode(&self, input: &Self::Encoded) -> Result<SpatialGeometry>;

    fn encode(&self, geometry: &SpatialGeometry) -> Result<Self::Encoded>;
}

/// WKT and EWKT text.
#[derive(Debug, Clone, Copy, Default)]
pub struct WktCodec {
    pub options: WktOptions,
}

impl GeometryCodec for WktCodec {
    type Encoded = String;

    fn decode(&self, input: &String) -> Result<SpatialGeometry> {
        from_wkt(input)
    }

    fn encode(&self, geometry: &SpatialGeometry) -> Result<String> {
        Ok(to_wkt_with_options(geometry, &self.options))
    }
}

/// WKB and EWKB bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WkbCodec {
    pub read_options: WkbReadOptions,
    pub write_options: WkbWriteOptions,
}

impl GeometryCodec for WkbCodec {
    type Encoded = Vec<u8>;

    fn decode(&self, input: &Vec<u8>) -> Result<SpatialGeometry> {
        from_wkb(input, &self.read_options)
    }

    fn encode(&self, geometry: &SpatialGeometry) -> Result<Vec<u8>> {
        to_wkb(geometry, &self.write_options)
    }
}

/// GeoJSON geometry objects. SRIDs are dropped on encode and never produced on decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonCodec {
    pub options: GeoJsonOptions,
}

impl GeometryCodec for GeoJsonCodec {
    type Encoded = JsonValue;

    fn decode(&self, input: &JsonValue) -> Result<SpatialGeometry> {
        from_geojson(input, &self.options).map(SpatialGeometry::new)
    }

    fn encode(&self, geometry: &SpatialGeometry) -> Result<JsonValue> {
        if let Some(srid) = geometry.srid() {
            debug!("GeoJSON has no SRID; dropping SRID {srid}");
        }
        to_geojson(geometry.geometry(), &self.options)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::poly0;

    /// Re-encode through any codec.
    fn round_trip<C: GeometryCodec>(codec: &C, geometry: &SpatialGeometry) -> SpatialGeometry {
        let encoded = codec.encode(geometry).unwrap();
        codec.decode(&encoded).unwrap()
    }

    #[test]
    fn codecs_share_one_interface() {
        let geom = SpatialGeometry::with_srid(poly0().into(), 4326);
        assert_eq!(round_trip(&WktCodec::default(), &geom), geom);
        assert_eq!(round_trip(&WkbCodec::default(), &geom), geom);

        let from_json = round_trip(&GeoJsonCodec::default(), &geom);
        assert_eq!(from_json.srid(), None);
        assert_eq!(from_json.geometry(), geom.geometry());
    }
}
