use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Result;
use crate::io::wkb::common::{WKBType, WKB_HEADER_SIZE};
use crate::io::wkb::writer::{wkb_count, write_coord, write_header};

/// The byte length of a WKBPolygon whose rings hold the given number of points
pub fn polygon_wkb_size(ring_sizes: impl IntoIterator<Item = usize>) -> usize {
    let mut sum = WKB_HEADER_SIZE + 4;
    for num_points in ring_sizes {
        sum += 4 + num_points * 2 * 8;
    }
    sum
}

/// Write a Polygon geometry to a buffer encoded as WKB
///
/// The first ring is the exterior, the rest are interiors. Every count is checked before
/// anything is written.
pub fn write_polygon_as_wkb<R>(buf: &mut impl BufMut, rings: &[R]) -> Result<()>
where
    R: AsRef<[(f64, f64)]>,
{
    let num_rings = wkb_count(rings.len())?;
    let ring_sizes = rings
        .iter()
        .map(|ring| wkb_count(ring.as_ref().len()))
        .collect::<Result<Vec<_>>>()?;

    write_header(buf, WKBType::Polygon);
    buf.put_u32_le(num_rings);

    for (ring, num_points) in rings.iter().zip(ring_sizes) {
        buf.put_u32_le(num_points);
        for (x, y) in ring.as_ref() {
            write_coord(buf, *x, *y);
        }
    }
    Ok(())
}

/// Encode a sequence of rings as a WKB polygon.
pub fn encode_polygon<R>(rings: &[R]) -> Result<Bytes>
where
    R: AsRef<[(f64, f64)]>,
{
    let size = polygon_wkb_size(rings.iter().map(|ring| ring.as_ref().len()));
    let mut buf = BytesMut::with_capacity(size);
    write_polygon_as_wkb(&mut buf, rings)?;
    Ok(buf.freeze())
}
