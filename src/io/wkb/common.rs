use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{DseError, Result};

/// The byte length of the byte order flag plus the geometry type.
pub const WKB_HEADER_SIZE: usize = 1 + 4;

/// The WKB geometry types understood by DSE's geometry codecs
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
}

impl WKBType {
    /// Construct from a byte slice representing a WKB geometry
    pub fn from_buffer(buf: &[u8]) -> Result<Self> {
        if buf.len() < WKB_HEADER_SIZE {
            return Err(DseError::NotEnoughData {
                expected: WKB_HEADER_SIZE,
                found: buf.len(),
            });
        }

        let mut reader = Cursor::new(buf);
        let byte_order = Endianness::try_from(reader.read_u8()?)?;
        let geometry_type = match byte_order {
            Endianness::BigEndian => reader.read_u32::<BigEndian>()?,
            Endianness::LittleEndian => reader.read_u32::<LittleEndian>()?,
        };
        Self::try_from_primitive(geometry_type).map_err(|err| DseError::Wkb(err.to_string()))
    }
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = DseError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(DseError::Wkb(format!("Unexpected byte order: {other}"))),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn type_from_little_endian_header() {
        let buf = [1, 2, 0, 0, 0];
        assert_eq!(WKBType::from_buffer(&buf).unwrap(), WKBType::LineString);
    }

    #[test]
    fn type_from_big_endian_header() {
        let buf = [0, 0, 0, 0, 3];
        assert_eq!(WKBType::from_buffer(&buf).unwrap(), WKBType::Polygon);
    }

    #[test]
    fn unsupported_type() {
        // MultiPoint
        let buf = [1, 4, 0, 0, 0];
        assert!(matches!(WKBType::from_buffer(&buf), Err(DseError::Wkb(_))));
    }

    #[test]
    fn bad_byte_order() {
        let buf = [7, 1, 0, 0, 0];
        assert!(matches!(WKBType::from_buffer(&buf), Err(DseError::Wkb(_))));
    }

    #[test]
    fn short_header() {
        assert!(matches!(
            WKBType::from_buffer(&[1, 1]),
            Err(DseError::NotEnoughData {
                expected: 5,
                found: 2
            })
        ));
    }
}
