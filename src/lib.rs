//! Geospatial and date range custom types for DataStax Enterprise, and the bindings that attach
//! them to driver statements.
//!
//! Values are encoded to the buffers the server's custom type codecs expect: points, line
//! strings and polygons as little-endian WKB, date ranges in the DSE date range layout. They are
//! bound through any type implementing [`Statement`], using the methods of [`DseStatementExt`].
//!
//! ```
//! use dse_geo::{BoundStatement, DseStatementExt, LineString, PROXY_EXECUTE_KEY};
//!
//! let mut route = LineString::new();
//! route.add_point(-111.0, 45.0).unwrap();
//! route.add_point(-104.0, 41.0).unwrap();
//! route.finish().unwrap();
//!
//! let mut statement = BoundStatement::new("INSERT INTO routes (id, path) VALUES (1, ?)", 1);
//! statement.bind_dse_line_string(0, &route).unwrap();
//! statement.set_execute_as("alice");
//! assert_eq!(statement.custom_payload(PROXY_EXECUTE_KEY).unwrap().as_ref(), b"alice");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{BindError, DseError, ErrorCode};
pub use io::date_range::{decode_date_range, encode_date_range};
pub use io::wkb::{decode_point, encode_line_string, encode_point, encode_polygon};
pub use scalar::{DateRange, DateRangeBound, DateRangePrecision, LineString, Point, Polygon};
pub use statement::{
    BindSite, BoundStatement, BoundValue, ColumnSpec, CustomValue, DseStatementExt, Statement,
    PROXY_EXECUTE_KEY,
};
pub use types::{
    DseType, DSE_DATE_RANGE_TYPE, DSE_LINE_STRING_TYPE, DSE_POINT_TYPE, DSE_POLYGON_TYPE,
};

pub mod error;
pub mod io;
pub mod scalar;
pub mod statement;
#[cfg(test)]
pub(crate) mod test;
pub mod types;
