use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{DseError, Result};
use crate::io::wkb::writer::{write_coord, write_header};
use crate::io::wkb::{line_string_wkb_size, WKBLineString, WKBType, WKB_HEADER_SIZE};
use crate::scalar::write_wkt_coords;

/// A line string, stored as the WKB buffer that is bound for the line string custom type.
///
/// Points are appended with [`add_point`](Self::add_point) and the value is sealed with
/// [`finish`](Self::finish). The point count in the buffer is kept current, so [`bytes`](Self::bytes)
/// is well-formed WKB at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineString {
    buf: BytesMut,
    num_points: u32,
    finished: bool,
}

impl LineString {
    pub fn new() -> Self {
        let mut buf = BytesMut::with_capacity(line_string_wkb_size(0));
        write_header(&mut buf, WKBType::LineString);
        // numPoints
        buf.put_u32_le(0);

        Self {
            buf,
            num_points: 0,
            finished: false,
        }
    }

    /// Reserve space for `num_points` more points.
    pub fn reserve(&mut self, num_points: usize) {
        self.buf.reserve(num_points * 2 * 8);
    }

    /// Append a point.
    ///
    /// Fails once the line string is finished.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<()> {
        if self.finished {
            return Err(DseError::InvalidState(
                "cannot add a point to a finished line string".into(),
            ));
        }

        let num_points = self.num_points.checked_add(1).ok_or_else(|| {
            DseError::InvalidState("a line string holds at most u32::MAX points".into())
        })?;

        write_coord(&mut self.buf, x, y);
        self.num_points = num_points;
        self.buf[WKB_HEADER_SIZE..WKB_HEADER_SIZE + 4]
            .copy_from_slice(&self.num_points.to_le_bytes());
        Ok(())
    }

    /// Seal the line string.
    ///
    /// A line string needs zero points (empty) or at least two.
    pub fn finish(&mut self) -> Result<()> {
        if self.num_points == 1 {
            return Err(DseError::InvalidState(
                "a line string must have zero or at least two points".into(),
            ));
        }
        self.finished = true;
        Ok(())
    }

    /// Drop every point so the value can be built again.
    pub fn reset(&mut self) {
        self.buf.truncate(line_string_wkb_size(0));
        self.buf[WKB_HEADER_SIZE..WKB_HEADER_SIZE + 4].copy_from_slice(&0u32.to_le_bytes());
        self.num_points = 0;
        self.finished = false;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn num_points(&self) -> usize {
        self.num_points as usize
    }

    /// The WKB encoding of this line string.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A shareable copy of the WKB encoding.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buf)
    }

    /// The points of this line string, in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.buf[line_string_wkb_size(0)..]
            .chunks_exact(2 * 8)
            .map(|chunk| {
                let (x, y) = chunk.split_at(8);
                (f64_le(x), f64_le(y))
            })
    }

    /// Decode a WKB line string into a finished value.
    pub fn from_wkb(buf: &[u8]) -> Result<Self> {
        let geom = WKBLineString::try_new(buf)?;
        Self::from_points(geom.coords().map(|coord| coord.xy()))
    }

    /// Build a finished line string from its points.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let points = points.into_iter();
        let mut line_string = Self::new();
        line_string.reserve(points.size_hint().0);
        for (x, y) in points {
            line_string.add_point(x, y)?;
        }
        line_string.finish()?;
        Ok(line_string)
    }

    /// Parse a `LINESTRING (...)` WKT string into a finished value.
    #[cfg(feature = "wkt")]
    pub fn from_wkt(wkt_str: &str) -> Result<Self> {
        let geom: geo::LineString = crate::io::wkt::parse_wkt(wkt_str)?;
        Self::try_from(&geom)
    }

    pub fn to_geo(&self) -> geo::LineString {
        self.points().map(geo::Coord::from).collect()
    }
}

impl Default for LineString {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn f64_le(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    f64::from_le_bytes(buf)
}

impl TryFrom<&geo::LineString> for LineString {
    type Error = DseError;

    fn try_from(value: &geo::LineString) -> Result<Self> {
        Self::from_points(value.coords().map(|c| (c.x, c.y)))
    }
}

impl From<&LineString> for geo::LineString {
    fn from(value: &LineString) -> Self {
        value.to_geo()
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_points == 0 {
            return f.write_str("LINESTRING EMPTY");
        }
        f.write_str("LINESTRING (")?;
        write_wkt_coords(f, self.points())?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::encode_line_string;
    use crate::test::linestring::{ls0, ls1};

    #[test]
    fn builder_matches_encoder() {
        let mut line_string = LineString::new();
        line_string.reserve(3);
        line_string.add_point(3., 4.).unwrap();
        line_string.add_point(5., 6.).unwrap();
        line_string.add_point(-7.5, 8.25).unwrap();
        line_string.finish().unwrap();

        let expected = encode_line_string(vec![(3., 4.), (5., 6.), (-7.5, 8.25)]).unwrap();
        assert_eq!(line_string.bytes(), expected.as_ref());
        assert_eq!(line_string.to_geo(), ls1());
    }

    #[test]
    fn bytes_are_valid_while_building() {
        let mut line_string = LineString::new();
        line_string.add_point(0., 1.).unwrap();

        let geom = WKBLineString::try_new(line_string.bytes()).unwrap();
        assert_eq!(geom.num_points(), 1);
    }

    #[test]
    fn single_point_is_rejected() {
        let mut line_string = LineString::new();
        line_string.add_point(0., 1.).unwrap();
        assert!(matches!(
            line_string.finish(),
            Err(DseError::InvalidState(_))
        ));
        assert!(!line_string.is_finished());
    }

    #[test]
    fn empty_line_string() {
        let mut line_string = LineString::new();
        line_string.finish().unwrap();
        assert_eq!(line_string.num_points(), 0);
        assert_eq!(line_string.to_string(), "LINESTRING EMPTY");
    }

    #[test]
    fn add_after_finish() {
        let mut line_string = LineString::try_from(&ls0()).unwrap();
        assert!(matches!(
            line_string.add_point(9., 9.),
            Err(DseError::InvalidState(_))
        ));

        line_string.reset();
        assert_eq!(line_string, LineString::new());
        line_string.add_point(9., 9.).unwrap();
    }

    #[test]
    fn point_count_overflow() {
        let mut line_string = LineString::new();
        line_string.num_points = u32::MAX;
        let before = line_string.bytes().to_vec();

        assert!(matches!(
            line_string.add_point(0., 0.),
            Err(DseError::InvalidState(_))
        ));
        assert_eq!(line_string.num_points, u32::MAX);
        assert_eq!(line_string.bytes(), before.as_slice());
    }

    #[test]
    fn wkb_round_trip() {
        let line_string = LineString::try_from(&ls1()).unwrap();
        let decoded = LineString::from_wkb(line_string.bytes()).unwrap();
        assert_eq!(decoded, line_string);
    }

    #[test]
    fn wkt() {
        let line_string = LineString::try_from(&ls0()).unwrap();
        assert_eq!(line_string.to_string(), "LINESTRING (0 1, 1 2)");

        #[cfg(feature = "wkt")]
        {
            let parsed = LineString::from_wkt("LINESTRING (0 1, 1 2)").unwrap();
            assert_eq!(parsed, line_string);
            assert!(LineString::from_wkt("LINESTRING (0 1)").is_err());
        }
    }
}
