use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::io::wkb::common::Endianness;

/// A coordinate in a WKB buffer.
///
/// The owning geometry checks that both ordinates are inside the buffer before handing out a
/// `WKBCoord`.
#[derive(Debug, Clone, Copy)]
pub struct WKBCoord<'a> {
    /// The underlying WKB buffer
    buf: &'a [u8],

    /// The byte order of this WKB buffer
    byte_order: Endianness,

    /// The offset into the buffer where this coordinate is located
    offset: usize,
}

impl<'a> WKBCoord<'a> {
    pub(crate) fn new(buf: &'a [u8], byte_order: Endianness, offset: usize) -> Self {
        Self {
            buf,
            byte_order,
            offset,
        }
    }

    fn get_nth(&self, n: usize) -> f64 {
        let offset = self.offset + n * 8;
        match self.byte_order {
            Endianness::BigEndian => BigEndian::read_f64(&self.buf[offset..offset + 8]),
            Endianness::LittleEndian => LittleEndian::read_f64(&self.buf[offset..offset + 8]),
        }
    }

    pub fn x(&self) -> f64 {
        self.get_nth(0)
    }

    pub fn y(&self) -> f64 {
        self.get_nth(1)
    }

    pub fn xy(&self) -> (f64, f64) {
        (self.x(), self.y())
    }
}

impl From<WKBCoord<'_>> for geo::Coord {
    fn from(value: WKBCoord<'_>) -> Self {
        geo::Coord {
            x: value.x(),
            y: value.y(),
        }
    }
}
