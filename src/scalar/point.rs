use std::fmt;

use bytes::Bytes;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::io::wkb::{encode_point, WKBPoint};

/// A 2D point.
///
/// Coordinates are not checked for finiteness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Encode this point as WKB.
    pub fn to_wkb(&self) -> Bytes {
        encode_point(self.x, self.y)
    }

    /// Decode a WKB point.
    pub fn from_wkb(buf: &[u8]) -> Result<Self> {
        let point = WKBPoint::try_new(buf)?;
        Ok(Self::new(point.x(), point.y()))
    }

    /// Parse a `POINT (x y)` WKT string.
    #[cfg(feature = "wkt")]
    pub fn from_wkt(wkt_str: &str) -> Result<Self> {
        let point: geo::Point = crate::io::wkt::parse_wkt(wkt_str)?;
        Ok(point.into())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        Self::new(value.x(), value.y())
    }
}

impl From<Point> for geo::Point {
    fn from(value: Point) -> Self {
        geo::Point::new(value.x, value.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POINT ({} {})", self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::{p0, p1};

    #[test]
    fn wkb_round_trip() {
        for geom in [p0(), p1()] {
            let point = Point::from(geom);
            assert_eq!(Point::from_wkb(&point.to_wkb()).unwrap(), point);
            assert_eq!(geo::Point::from(point), geom);
        }
    }

    #[test]
    fn wkt() {
        let point = Point::from(p1());
        assert_eq!(point.to_string(), "POINT (1.5 -2.25)");

        #[cfg(feature = "wkt")]
        assert_eq!(Point::from_wkt("POINT (1.5 -2.25)").unwrap(), point);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let point = Point::new(3., 4.);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"x":3.0,"y":4.0}"#);
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), point);
    }
}
