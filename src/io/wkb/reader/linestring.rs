use crate::error::{DseError, Result};
use crate::io::wkb::common::{Endianness, WKBType, WKB_HEADER_SIZE};
use crate::io::wkb::reader::{
    coords_size, ensure_consumed, ensure_len, read_count, read_header, WKBCoord,
};

const HEADER_BYTES: usize = WKB_HEADER_SIZE + 4;

/// A 2D LineString in WKB
#[derive(Debug, Clone, Copy)]
pub struct WKBLineString<'a> {
    buf: &'a [u8],
    byte_order: Endianness,

    /// The number of points in this LineString WKB
    num_points: usize,
}

impl<'a> WKBLineString<'a> {
    /// Validate a buffer holding exactly one WKB line string.
    pub fn try_new(buf: &'a [u8]) -> Result<Self> {
        let byte_order = read_header(buf, WKBType::LineString)?;
        let num_points = read_count(buf, byte_order, WKB_HEADER_SIZE)?;

        let size = coords_size(num_points)
            .and_then(|coords| coords.checked_add(HEADER_BYTES))
            .ok_or_else(|| DseError::Wkb(format!("Too many points: {num_points}")))?;
        ensure_len(buf, size)?;
        ensure_consumed(buf, size)?;

        Ok(Self {
            buf,
            byte_order,
            num_points,
        })
    }

    /// The number of bytes in this object, including any header
    ///
    /// Note that this is not the same as the length of the underlying buffer
    pub fn size(&self) -> u64 {
        // - 1: byteOrder
        // - 4: wkbType
        // - 4: numPoints
        // - 2 * 8 * self.num_points: two f64s for each coordinate
        1 + 4 + 4 + (2 * 8 * self.num_points as u64)
    }

    /// The offset into this buffer of any given coordinate
    fn coord_offset(&self, i: usize) -> usize {
        HEADER_BYTES + (2 * 8 * i)
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn coord(&self, i: usize) -> Option<WKBCoord<'a>> {
        (i < self.num_points)
            .then(|| WKBCoord::new(self.buf, self.byte_order, self.coord_offset(i)))
    }

    pub fn coords(&self) -> impl ExactSizeIterator<Item = WKBCoord<'a>> {
        let geom = *self;
        (0..self.num_points)
            .map(move |i| WKBCoord::new(geom.buf, geom.byte_order, geom.coord_offset(i)))
    }

    pub fn to_geo(&self) -> geo::LineString {
        geo::LineString::new(self.coords().map(geo::Coord::from).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::encode_line_string;
    use crate::test::linestring::{ls0, ls1};

    fn encode(geom: &geo::LineString) -> bytes::Bytes {
        let points: Vec<_> = geom.coords().map(|c| (c.x, c.y)).collect();
        encode_line_string(points).unwrap()
    }

    #[test]
    fn line_string_round_trip() {
        for geom in [ls0(), ls1()] {
            let buf = encode(&geom);
            let wkb_geom = WKBLineString::try_new(&buf).unwrap();

            assert_eq!(wkb_geom.num_points(), geom.0.len());
            assert_eq!(wkb_geom.to_geo(), geom);
        }
    }

    #[test]
    fn test_size() {
        let buf = encode(&ls1());
        let wkb_geom = WKBLineString::try_new(&buf).unwrap();

        assert_eq!(wkb_geom.size(), buf.len() as u64);
    }

    #[test]
    fn coord_out_of_range() {
        let buf = encode(&ls0());
        let wkb_geom = WKBLineString::try_new(&buf).unwrap();

        assert_eq!(wkb_geom.coord(1).unwrap().xy(), (1., 2.));
        assert!(wkb_geom.coord(2).is_none());
    }

    #[test]
    fn count_larger_than_buffer() {
        let mut buf = encode(&ls0()).to_vec();
        buf[5] = 3;
        assert!(matches!(
            WKBLineString::try_new(&buf),
            Err(DseError::NotEnoughData { .. })
        ));
    }
}
