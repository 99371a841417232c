//! Reading and writing the ISO-flavored WKB that DSE's geometry codecs expect.
//!
//! Writers always emit little-endian WKB. Readers accept either byte order, as indicated by the
//! first byte of every geometry.

mod common;
pub(crate) mod reader;
pub(crate) mod writer;

pub use common::{Endianness, WKBType, WKB_HEADER_SIZE};
pub use reader::{WKBCoord, WKBLineString, WKBLinearRing, WKBPoint, WKBPolygon};
pub use writer::{
    encode_line_string, encode_point, encode_polygon, line_string_wkb_size, point_wkb_size,
    polygon_wkb_size, write_line_string_as_wkb, write_point_as_wkb, write_polygon_as_wkb,
};

/// Decode a WKB point into its `(x, y)` coordinates.
pub fn decode_point(buf: &[u8]) -> crate::error::Result<(f64, f64)> {
    let point = WKBPoint::try_new(buf)?;
    Ok((point.x(), point.y()))
}
