use bytes::{BufMut, Bytes, BytesMut};

use crate::io::wkb::common::{WKBType, WKB_HEADER_SIZE};
use crate::io::wkb::writer::{write_coord, write_header};

/// The byte length of a WKBPoint
pub const fn point_wkb_size() -> usize {
    WKB_HEADER_SIZE + 2 * 8
}

/// Write a Point geometry to a buffer encoded as WKB
pub fn write_point_as_wkb(buf: &mut impl BufMut, x: f64, y: f64) {
    write_header(buf, WKBType::Point);
    write_coord(buf, x, y);
}

/// Encode a point as the buffer bound for the point custom type.
///
/// The output is always [`point_wkb_size`] bytes long. Non-finite coordinates are written
/// bit-for-bit and left for the server to reject.
pub fn encode_point(x: f64, y: f64) -> Bytes {
    let mut buf = BytesMut::with_capacity(point_wkb_size());
    write_point_as_wkb(&mut buf, x, y);
    buf.freeze()
}
