//! Owned values of the DSE custom types.
//!
//! [`LineString`] and [`Polygon`] are built point by point and hold their WKB encoding, which
//! the binder forwards as-is. [`Point`] and [`DateRange`] are small and encoded when bound.

pub use date_range::{DateRange, DateRangeBound, DateRangePrecision};
pub use linestring::LineString;
pub use point::Point;
pub use polygon::Polygon;

mod date_range;
mod linestring;
mod point;
mod polygon;

use std::fmt;

/// Write a list of coordinates as `x y, x y, ...`.
pub(crate) fn write_wkt_coords(
    f: &mut fmt::Formatter<'_>,
    coords: impl IntoIterator<Item = (f64, f64)>,
) -> fmt::Result {
    for (i, (x, y)) in coords.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{x} {y}")?;
    }
    Ok(())
}
