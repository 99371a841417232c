use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::WKBCoord;

/// A linear ring in a WKB buffer.
///
/// See page 65 of <https://portal.ogc.org/files/?artifact_id=25355>.
#[derive(Debug, Clone, Copy)]
pub struct WKBLinearRing<'a> {
    /// The underlying WKB buffer
    buf: &'a [u8],

    /// The byte order of this WKB buffer
    byte_order: Endianness,

    /// The offset into the buffer where this linear ring is located
    ///
    /// This points at the ring's `numPoints` field, not at a WKB header: rings only appear
    /// inside polygons.
    offset: usize,

    /// The number of points in this linear ring
    num_points: usize,
}

impl<'a> WKBLinearRing<'a> {
    /// The caller has already checked that `num_points` coordinates follow `offset`.
    pub(crate) fn new(
        buf: &'a [u8],
        byte_order: Endianness,
        offset: usize,
        num_points: usize,
    ) -> Self {
        Self {
            buf,
            byte_order,
            offset,
            num_points,
        }
    }

    /// The number of bytes in this object, including any header
    ///
    /// Note that this is not the same as the length of the underlying buffer
    pub fn size(&self) -> u64 {
        // - 4: numPoints
        // - 2 * 8 * self.num_points: two f64s for each coordinate
        4 + (2 * 8 * self.num_points as u64)
    }

    /// The offset into this buffer of any given coordinate
    fn coord_offset(&self, i: usize) -> usize {
        self.offset + 4 + (2 * 8 * i)
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
