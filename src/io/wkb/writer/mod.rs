mod linestring;
mod point;
mod polygon;

pub use linestring::{encode_line_string, line_string_wkb_size, write_line_string_as_wkb};
pub use point::{encode_point, point_wkb_size, write_point_as_wkb};
pub use polygon::{encode_polygon, polygon_wkb_size, write_polygon_as_wkb};

use bytes::BufMut;

use crate::error::{DseError, Result};
use crate::io::wkb::common::{Endianness, WKBType};

/// Write the byte order flag and geometry type that open every WKB geometry.
pub(crate) fn write_header(buf: &mut impl BufMut, wkb_type: WKBType) {
    buf.put_u8(Endianness::LittleEndian.into());
    buf.put_u32_le(wkb_type.into());
}

pub(crate) fn write_coord(buf: &mut impl BufMut, x: f64, y: f64) {
    buf.put_f64_le(x);
    buf.put_f64_le(y);
}

/// Convert a geometry part count to its `u32` wire field.
///
/// WKB cannot describe more than `u32::MAX` parts.
pub(crate) fn wkb_count(count: usize) -> Result<u32> {
    u32::try_from(count)
        .map_err(|_| DseError::InvalidData(format!("{count} parts do not fit a WKB count")))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_fit_u32() {
        assert_eq!(wkb_count(0).unwrap(), 0);
        assert_eq!(wkb_count(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn count_overflow() {
        assert!(matches!(
            wkb_count(u32::MAX as usize + 1),
            Err(DseError::InvalidData(_))
        ));
    }
}
