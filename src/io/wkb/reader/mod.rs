mod coord;
mod linearring;
mod linestring;
mod point;
mod polygon;

pub use coord::WKBCoord;
pub use linearring::WKBLinearRing;
pub use linestring::WKBLineString;
pub use point::WKBPoint;
pub use polygon::WKBPolygon;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{DseError, Result};
use crate::io::wkb::common::{Endianness, WKBType};

/// Check the header of a WKB buffer against the expected geometry type and return its byte
/// order.
pub(crate) fn read_header(buf: &[u8], expected: WKBType) -> Result<Endianness> {
    let wkb_type = WKBType::from_buffer(buf)?;
    if wkb_type != expected {
        return Err(DseError::Wkb(format!(
            "Expected {expected:?}, found {wkb_type:?}"
        )));
    }
    Endianness::try_from(buf[0])
}

/// Read a `u32` count at `offset`, failing if the buffer ends first.
pub(crate) fn read_count(buf: &[u8], byte_order: Endianness, offset: usize) -> Result<usize> {
    ensure_len(buf, offset + 4)?;
    let count = match byte_order {
        Endianness::BigEndian => BigEndian::read_u32(&buf[offset..]),
        Endianness::LittleEndian => LittleEndian::read_u32(&buf[offset..]),
    };
    Ok(count as usize)
}

/// The byte length of `num_points` XY coordinates, or `None` when it cannot be addressed.
pub(crate) fn coords_size(num_points: usize) -> Option<usize> {
    num_points.checked_mul(2 * 8)
}

pub(crate) fn ensure_len(buf: &[u8], len: usize) -> Result<()> {
    if buf.len() < len {
        return Err(DseError::NotEnoughData {
            expected: len,
            found: buf.len(),
        });
    }
    Ok(())
}

/// Reject bytes left over after a complete geometry.
pub(crate) fn ensure_consumed(buf: &[u8], size: usize) -> Result<()> {
    if buf.len() > size {
        return Err(DseError::Wkb(format!(
            "{} trailing bytes after geometry",
            buf.len() - size
        )));
    }
    Ok(())
}
