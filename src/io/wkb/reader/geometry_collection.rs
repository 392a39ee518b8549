use crate::datatypes::Dimension;
use crate::error::{PpgeError, Result};
use crate::geometry::GeometryCollection;
use crate::io::wkb::reader::geometry::{read_body, read_child_header};
use crate::io::wkb::reader::{Endianness, WKBReader};
use crate::io::MAX_NESTING_DEPTH;

/// Read the body of a GeometryCollection found inside `depth` enclosing collections.
///
/// Each member's own header is trusted. The collection's header must then agree with the
/// dimension its members derive.
pub(super) fn read_geometry_collection(
    reader: &mut WKBReader,
    byte_order: Endianness,
    dim: Dimension,
    depth: usize,
) -> Result<GeometryCollection> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(PpgeError::NestingTooDeep(MAX_NESTING_DEPTH));
    }
    let num_geometries = reader.read_count(byte_order, 5)?;
    let mut geometries = Vec::with_capacity(num_geometries);
    for _ in 0..num_geometries {
        let header = read_child_header(reader)?;
        geometries.push(read_body(reader, &header, depth + 1)?);
    }
    GeometryCollection::try_new(geometries, dim).map_err(|err| match err {
        PpgeError::DimensionMismatch { expected, found } => {
            PpgeError::InconsistentDimensionality {
                parent: expected,
                child: found,
            }
        }
        err => err,
    })
}
