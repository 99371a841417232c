use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Result;
use crate::io::wkb::common::{WKBType, WKB_HEADER_SIZE};
use crate::io::wkb::writer::{wkb_count, write_coord, write_header};

/// The byte length of a WKBLineString
pub const fn line_string_wkb_size(num_points: usize) -> usize {
    WKB_HEADER_SIZE + 4 + num_points * 2 * 8
}

/// Write a LineString geometry to a buffer encoded as WKB
///
/// Nothing is written when the point count does not fit a WKB count.
pub fn write_line_string_as_wkb<I>(buf: &mut impl BufMut, points: I) -> Result<()>
where
    I: IntoIterator<Item = (f64, f64)>,
    I::IntoIter: ExactSizeIterator,
{
    let points = points.into_iter();
    let num_points = wkb_count(points.len())?;

    write_header(buf, WKBType::LineString);
    buf.put_u32_le(num_points);

    for (x, y) in points {
        write_coord(buf, x, y);
    }
    Ok(())
}

/// Encode a sequence of points as a WKB line string.
pub fn encode_line_string<I>(points: I) -> Result<Bytes>
where
    I: IntoIterator<Item = (f64, f64)>,
    I::IntoIter: ExactSizeIterator,
{
    let points = points.into_iter();
    let mut buf = BytesMut::with_capacity(line_string_wkb_size(points.len()));
    write_line_string_as_wkb(&mut buf, points)?;
    Ok(buf.freeze())
}
