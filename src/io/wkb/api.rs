use std::io::Write;

use log::debug;

use crate::error::{PpgeError, Result};
use crate::geometry::SpatialGeometry;
use crate::io::wkb::common::WkbFlavor;
use crate::io::wkb::reader::{read_geometry, Endianness, WKBReader};
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry_as_wkb, WKBWriter, SRID_SIZE};

/// Options for decoding WKB.
#[derive(Debug, Clone, Copy, Default)]
pub struct WkbReadOptions {
    /// Fail with [`PpgeError::TrailingBytes`] when input continues past the geometry.
    ///
    /// The geometry's own structure determines its length, so extra bytes are ignored when
    /// this is `false`.
    pub strict_length: bool,
}

impl WkbReadOptions {
    pub fn new(strict_length: bool) -> Self {
        Self { strict_length }
    }
}

/// Options for encoding WKB.
#[derive(Debug, Clone, Copy, Default)]
pub struct WkbWriteOptions {
    /// Byte order of every header and value. Little-endian by default.
    pub byte_order: Endianness,

    /// Whether to write PostGIS EWKB (default) or ISO WKB.
    ///
    /// ISO WKB has no SRID field, so the SRID is dropped in that flavor.
    pub flavor: WkbFlavor,
}

impl WkbWriteOptions {
    pub fn new(byte_order: Endianness, flavor: WkbFlavor) -> Self {
        Self { byte_order, flavor }
    }
}

/// Parse a WKB or EWKB byte sequence into a geometry.
///
/// The SRID, if any, is taken from the root header.
pub fn from_wkb(buf: &[u8], options: &WkbReadOptions) -> Result<SpatialGeometry> {
    let mut reader = WKBReader::new(buf);
    let (geometry, srid) = read_geometry(&mut reader)?;

    let trailing = reader.remaining();
    if trailing > 0 {
        if options.strict_length {
            return Err(PpgeError::TrailingBytes(trailing));
        }
        debug!("ignoring {trailing} trailing bytes after WKB geometry");
    }

    debug!(
        "decoded {} {} from {} WKB bytes (srid: {:?})",
        geometry.geometry_type(),
        geometry.dimension(),
        reader.position(),
        srid
    );
    Ok(SpatialGeometry::from_parts(geometry, srid))
}

/// Encode a geometry as WKB.
///
/// In the EWKB flavor an SRID field is written in the root header only, and only when the
/// geometry has an SRID. Fails with [`PpgeError::TooManyElements`] if any count exceeds
/// `u32::MAX`.
pub fn to_wkb(geom: &SpatialGeometry, options: &WkbWriteOptions) -> Result<Vec<u8>> {
    let geometry = geom.geometry();
    let srid = geom.srid().filter(|_| options.flavor == WkbFlavor::Extended);
    let capacity = geometry_wkb_size(geometry) + srid.map_or(0, |_| SRID_SIZE);

    let mut writer = WKBWriter::with_capacity(capacity, options.byte_order, options.flavor);
    write_geometry_as_wkb(&mut writer, geometry, srid)?;
    let buf = writer.into_inner();

    debug!(
        "encoded {} {} as {} WKB bytes ({:?}, {:?})",
        geometry.geometry_type(),
        geometry.dimension(),
        buf.len(),
        options.byte_order,
        options.flavor
    );
    Ok(buf)
}

/// Encode a geometry as WKB into a writer.
pub fn write_wkb<W: Write>(
    mut writer: W,
    geom: &SpatialGeometry,
    options: &WkbWriteOptions,
) -> Result<()> {
    writer.write_all(&to_wkb(geom, options)?)?;
    Ok(())
}

/// Parse hex-encoded WKB, as printed by PostGIS. Either case is accepted.
pub fn from_hex_wkb(hex_str: &str, options: &WkbReadOptions) -> Result<SpatialGeometry> {
    let buf = hex::decode(hex_str.trim())?;
    from_wkb(&buf, options)
}

/// Encode a geometry as upper-case hex WKB, as printed by PostGIS.
pub fn to_hex_wkb(geom: &SpatialGeometry, options: &WkbWriteOptions) -> Result<String> {
    Ok(hex::encode_upper(to_wkb(geom, options)?))
}
