use crate::error::{DseError, Result};
use crate::io::wkb::common::{Endianness, WKBType, WKB_HEADER_SIZE};
use crate::io::wkb::reader::{
    coords_size, ensure_consumed, ensure_len, read_count, read_header, WKBLinearRing,
};

/// A WKB Polygon
#[derive(Debug, Clone)]
pub struct WKBPolygon<'a> {
    rings: Vec<WKBLinearRing<'a>>,
}

impl<'a> WKBPolygon<'a> {
    /// Validate a buffer holding exactly one WKB polygon.
    pub fn try_new(buf: &'a [u8]) -> Result<Self> {
        let byte_order: Endianness = read_header(buf, WKBType::Polygon)?;
        let num_rings = read_count(buf, byte_order, WKB_HEADER_SIZE)?;

        // - 1: byteOrder
        // - 4: wkbType
        // - 4: numRings
        let mut ring_offset = WKB_HEADER_SIZE + 4;

        // Every ring needs at least its count field
        ensure_len(buf, ring_offset.saturating_add(num_rings.saturating_mul(4)))?;

        let mut rings = Vec::with_capacity(num_rings);
        for _ in 0..num_rings {
            let num_points = read_count(buf, byte_order, ring_offset)?;
            let ring_end = coords_size(num_points)
                .and_then(|coords| coords.checked_add(ring_offset + 4))
                .ok_or_else(|| DseError::Wkb(format!("Too many points: {num_points}")))?;
            ensure_len(buf, ring_end)?;

            rings.push(WKBLinearRing::new(buf, byte_order, ring_offset, num_points));
            ring_offset = ring_end;
        }
        ensure_consumed(buf, ring_offset)?;

        Ok(Self { rings })
    }

    /// The number of bytes in this object, including any header
    ///
    /// Note that this is not the same as the length of the underlying buffer
    pub fn size(&self) -> u64 {
        // - 1: byteOrder
        // - 4: wkbType
        // - 4: numRings
        let mut sum = 1 + 4 + 4;
        for ring in self.rings.iter() {
            sum += ring.size();
        }
        sum
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn rings(&self) -> &[WKBLinearRing<'a>] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&WKBLinearRing<'a>> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[WKBLinearRing<'a>] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn to_geo(&self) -> geo::Polygon {
        let exterior = self
            .exterior()
            .map(WKBLinearRing::to_geo)
            .unwrap_or_else(|| geo::LineString::new(vec![]));
        let interiors = self.interiors().iter().map(WKBLinearRing::to_geo).collect();
        geo::Polygon::new(exterior, interiors)
    }
}
