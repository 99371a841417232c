//! Well-Known Text parsing for the geometry values.
//!
//! Writing WKT lives in the `Display` impls of [`Point`](crate::scalar::Point),
//! [`LineString`](crate::scalar::LineString) and [`Polygon`](crate::scalar::Polygon); this module
//! turns text back into those values through the `wkt` crate.

use std::fmt;

use wkt::TryFromWkt;

use crate::error::{DseError, Result};

/// Parse a WKT string into a `geo` geometry.
pub(crate) fn parse_wkt<G>(wkt_str: &str) -> Result<G>
where
    G: TryFromWkt<f64>,
    G::Error: fmt::Display,
{
    G::try_from_wkt_str(wkt_str).map_err(|err| DseError::Wkt(err.to_string()))
}
