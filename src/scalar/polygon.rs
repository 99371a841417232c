use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{DseError, Result};
use crate::io::wkb::writer::{write_coord, write_header};
use crate::io::wkb::{WKBPolygon, WKBType, WKB_HEADER_SIZE};
use crate::scalar::linestring::f64_le;
use crate::scalar::write_wkt_coords;

/// The fewest points a ring can close over.
const MIN_RING_POINTS: u32 = 3;

const HEADER_BYTES: usize = WKB_HEADER_SIZE + 4;

/// A polygon, stored as the WKB buffer that is bound for the polygon custom type.
///
/// Each ring is opened with [`start_ring`](Self::start_ring) and filled with
/// [`add_point`](Self::add_point); the first ring is the exterior. Counts in the buffer are
/// kept current, so [`bytes`](Self::bytes) is well-formed WKB at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    buf: BytesMut,
    num_rings: u32,
    /// Offset of the open ring's `numPoints` field
    ring_offset: usize,
    ring_points: u32,
    finished: bool,
}

impl Polygon {
    pub fn new() -> Self {
        let mut buf = BytesMut::with_capacity(HEADER_BYTES);
        write_header(&mut buf, WKBType::Polygon);
        // numRings
        buf.put_u32_le(0);

        Self {
            buf,
            num_rings: 0,
            ring_offset: 0,
            ring_points: 0,
            finished: false,
        }
    }

    /// Reserve space for `num_rings` more rings holding `num_points` points in total.
    pub fn reserve(&mut self, num_rings: usize, num_points: usize) {
        self.buf.reserve(num_rings * 4 + num_points * 2 * 8);
    }

    fn check_open(&self) -> Result<()> {
        if self.finished {
            return Err(DseError::InvalidState(
                "cannot modify a finished polygon".into(),
            ));
        }
        Ok(())
    }

    fn check_ring(&self) -> Result<()> {
        if self.num_rings > 0 && self.ring_points < MIN_RING_POINTS {
            return Err(DseError::InvalidState(
                format!(
                    "ring {} has {} points, a ring needs at least {MIN_RING_POINTS}",
                    self.num_rings - 1,
                    self.ring_points
                )
                .into(),
            ));
        }
        Ok(())
    }

    fn patch_u32(&mut self, offset: usize, value: u32) {
        self.buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Close the current ring, if any, and open a new one.
    pub fn start_ring(&mut self) -> Result<()> {
        self.check_open()?;
        self.check_ring()?;
        let num_rings = self.num_rings.checked_add(1).ok_or_else(|| {
            DseError::InvalidState("a polygon holds at most u32::MAX rings".into())
        })?;

        self.ring_offset = self.buf.len();
        self.ring_points = 0;
        // numPoints
        self.buf.put_u32_le(0);

        self.num_rings = num_rings;
        self.patch_u32(WKB_HEADER_SIZE, self.num_rings);
        Ok(())
    }

    /// Append a point to the current ring.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<()> {
        self.check_open()?;
        if self.num_rings == 0 {
            return Err(DseError::InvalidState(
                "start_ring must be called before adding points".into(),
            ));
        }

        let ring_points = self.ring_points.checked_add(1).ok_or_else(|| {
            DseError::InvalidState("a ring holds at most u32::MAX points".into())
        })?;

        write_coord(&mut self.buf, x, y);
        self.ring_points = ring_points;
        self.patch_u32(self.ring_offset, self.ring_points);
        Ok(())
    }

    /// Seal the polygon.
    ///
    /// A polygon with no rings is empty; otherwise the last ring needs at least three points.
    pub fn finish(&mut self) -> Result<()> {
        self.check_ring()?;
        self.finished = true;
        Ok(())
    }

    /// Drop every ring so the value can be built again.
    pub fn reset(&mut self) {
        self.buf.truncate(HEADER_BYTES);
        self.patch_u32(WKB_HEADER_SIZE, 0);
        self.num_rings = 0;
        self.ring_offset = 0;
        self.ring_points = 0;
        self.finished = false;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn num_rings(&self) -> usize {
        self.num_rings as usize
    }

    /// The WKB encoding of this polygon.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A shareable copy of the WKB encoding.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buf)
    }

    /// The points of each ring, exterior first.
    pub fn rings(&self) -> Vec<Vec<(f64, f64)>> {
        let mut rings = Vec::with_capacity(self.num_rings as usize);
        let mut offset = HEADER_BYTES;
        for _ in 0..self.num_rings {
            let mut count = [0u8; 4];
            count.copy_from_slice(&self.buf[offset..offset + 4]);
            let num_points = u32::from_le_bytes(count) as usize;
            offset += 4;

            let end = offset + num_points * 2 * 8;
            let ring = self.buf[offset..end]
                .chunks_exact(2 * 8)
                .map(|chunk| {
                    let (x, y) = chunk.split_at(8);
                    (f64_le(x), f64_le(y))
                })
                .collect();
            rings.push(ring);
            offset = end;
        }
        rings
    }

    /// Decode a WKB polygon into a finished value.
    pub fn from_wkb(buf: &[u8]) -> Result<Self> {
        let geom = WKBPolygon::try_new(buf)?;
        Self::from_rings(
            geom.rings()
                .iter()
                .map(|ring| ring.coords().map(|coord| coord.xy())),
        )
    }

    /// Build a finished polygon from its rings, exterior first.
    pub fn from_rings<R>(rings: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = (f64, f64)>,
    {
        let mut polygon = Self::new();
        for ring in rings {
            polygon.start_ring()?;
            for (x, y) in ring {
                polygon.add_point(x, y)?;
            }
        }
        polygon.finish()?;
        Ok(polygon)
    }

    /// Parse a `POLYGON (...)` WKT string into a finished value.
    #[cfg(feature = "wkt")]
    pub fn from_wkt(wkt_str: &str) -> Result<Self> {
        let geom: geo::Polygon = crate::io::wkt::parse_wkt(wkt_str)?;
        Self::try_from(&geom)
    }

    /// Convert to a `geo` polygon.
    ///
    /// `geo` closes every ring, so a ring whose last point differs from its first gains a
    /// closing point. [`rings`](Self::rings) returns the points as they were added.
    pub fn to_geo(&self) -> geo::Polygon {
        let mut rings = self
            .rings()
            .into_iter()
            .map(|ring| ring.into_iter().map(geo::Coord::from).collect::<geo::LineString>());
        let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
        geo::Polygon::new(exterior, rings.collect())
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&geo::Polygon> for Polygon {
    type Error = DseError;

    /// An empty exterior with no interiors becomes an empty polygon. Otherwise every ring is
    /// kept in place, so an empty exterior with holes or an empty hole is rejected.
    fn try_from(value: &geo::Polygon) -> Result<Self> {
        if value.exterior().0.is_empty() {
            if value.interiors().is_empty() {
                return Self::from_rings(std::iter::empty::<Vec<(f64, f64)>>());
            }
            return Err(DseError::InvalidState(
                "a polygon with interior rings needs an exterior ring".into(),
            ));
        }

        let rings = std::iter::once(value.exterior())
            .chain(value.interiors())
            .map(|ring| ring.coords().map(|c| (c.x, c.y)));
        Self::from_rings(rings)
    }
}

impl From<&Polygon> for geo::Polygon {
    fn from(value: &Polygon) -> Self {
        value.to_geo()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_rings == 0 {
            return f.write_str("POLYGON EMPTY");
        }
        f.write_str("POLYGON (")?;
        for (i, ring) in self.rings().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            write_wkt_coords(f, ring)?;
            f.write_str(")")?;
        }
        f.write_str(")")
    }
}
