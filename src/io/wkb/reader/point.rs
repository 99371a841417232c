use crate::error::Result;
use crate::io::wkb::common::{Endianness, WKBType, WKB_HEADER_SIZE};
use crate::io::wkb::reader::{ensure_consumed, ensure_len, read_header, WKBCoord};

/// A 2D Point in WKB
///
/// See page 66 of <https://portal.ogc.org/files/?artifact_id=25355>.
#[derive(Debug, Clone, Copy)]
pub struct WKBPoint<'a> {
    /// The coordinate inside this WKBPoint
    coord: WKBCoord<'a>,
}

impl<'a> WKBPoint<'a> {
    /// Validate a buffer holding exactly one WKB point.
    pub fn try_new(buf: &'a [u8]) -> Result<Self> {
        let byte_order: Endianness = read_header(buf, WKBType::Point)?;
        ensure_len(buf, Self::size() as usize)?;
        ensure_consumed(buf, Self::size() as usize)?;

        let coord = WKBCoord::new(buf, byte_order, WKB_HEADER_SIZE);
        Ok(Self { coord })
    }

    /// The number of bytes in this object, including any header
    pub fn size() -> u64 {
        // - 1: byteOrder
        // - 4: wkbType
        // - 2 * 8: two f64s
        1 + 4 + (2 * 8)
    }

    pub fn x(&self) -> f64 {
        self.coord.x()
    }

    pub fn y(&self) -> f64 {
        self.coord.y()
    }

    pub fn to_geo(&self) -> geo::Point {
        geo::Point::new(self.x(), self.y())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::DseError;
    use crate::io::wkb::encode_point;
    use crate::test::point::{p0, p1};

    #[test]
    fn point_round_trip() {
        for point in [p0(), p1()] {
            let buf = encode_point(point.x(), point.y());
            let wkb_point = WKBPoint::try_new(&buf).unwrap();

            assert_eq!(wkb_point.to_geo(), point);
        }
    }

    #[test]
    fn big_endian_point() {
        let mut buf = vec![0, 0, 0, 0, 1];
        buf.extend_from_slice(&1.5f64.to_be_bytes());
        buf.extend_from_slice(&(-2.25f64).to_be_bytes());

        let point = WKBPoint::try_new(&buf).unwrap();
        assert_eq!((point.x(), point.y()), (1.5, -2.25));
    }

    #[test]
    fn truncated_point() {
        let buf = encode_point(1., 2.);
        assert!(matches!(
            WKBPoint::try_new(&buf[..12]),
            Err(DseError::NotEnoughData {
                expected: 21,
                found: 12
            })
        ));
    }

    #[test]
    fn wrong_geometry_type() {
        let buf = [1, 2, 0, 0, 0, 0, 0, 0, 0];
        assert!(matches!(WKBPoint::try_new(&buf), Err(DseError::Wkb(_))));
    }

    #[test]
    fn trailing_bytes() {
        let mut buf = encode_point(1., 2.).to_vec();
        buf.push(0);
        assert!(matches!(WKBPoint::try_new(&buf), Err(DseError::Wkb(_))));
    }
}
