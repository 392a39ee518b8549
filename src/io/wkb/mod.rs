//! Reading and writing WKB, including the PostGIS EWKB extensions for Z, M and SRID.
//!
//! Each geometry starts with a one-byte byte order flag (0 = big-endian, 1 = little-endian) and
//! a four-byte type code. The low bits of the type code select the geometry kind; EWKB high
//! bits or ISO `1000`-style offsets select the dimension. When the EWKB SRID flag is set, a
//! four-byte SRID follows the type code. Only the root geometry ever carries an SRID.

mod api;
pub(crate) mod common;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{
    from_hex_wkb, from_wkb, to_hex_wkb, to_wkb, write_wkb, WkbReadOptions, WkbWriteOptions,
};
pub use common::{WKBType, WkbFlavor};
pub use reader::Endianness;
