//! Binary and text encodings of the DSE custom types.
//!
//! Geometries travel as ISO WKB; date ranges use the compact layout of the server's
//! `DateRangeType` codec.

pub mod date_range;
pub mod wkb;
#[cfg(feature = "wkt")]
pub(crate) mod wkt;
