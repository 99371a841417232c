use crate::scalar::{DateRange, LineString, Point, Polygon};
use crate::statement::{bind_custom_value, terminated, BindSite, CustomValue, Statement};

/// Custom payload key carrying the user a request executes as.
pub const PROXY_EXECUTE_KEY: &str = "ProxyExecute";

macro_rules! bind_methods {
    ($value:ty, $bind:ident, $by_name:ident, $by_name_n:ident) => {
        #[doc = concat!("Bind a [`", stringify!($value), "`] at a zero-based index.")]
        fn $bind(&mut self, index: usize, value: &$value) -> Result<(), Self::Error> {
            self.bind_dse(BindSite::Index(index), value)
        }

        #[doc = concat!("Bind a [`", stringify!($value), "`] by parameter name.")]
        ///
        /// The name ends at its first NUL byte, if it has one.
        fn $by_name(&mut self, name: &str, value: &$value) -> Result<(), Self::Error> {
            self.$by_name_n(terminated(name.as_bytes()), value)
        }

        #[doc = concat!("Bind a [`", stringify!($value), "`] by a parameter name of explicit length.")]
        fn $by_name_n(&mut self, name: &[u8], value: &$value) -> Result<(), Self::Error> {
            self.bind_dse(BindSite::Name(name), value)
        }
    };
}

/// DSE custom type bindings for any [`Statement`].
///
/// Each type comes in three forms: by index, by name, and by name with an explicit length.
/// All of them end in [`bind_custom_value`], so a name bound through `_by_name` leaves the
/// statement exactly as `_by_name_n` with the same bytes would.
pub trait DseStatementExt: Statement {
    /// Bind any custom-typed value at a site.
    fn bind_dse<V: CustomValue + ?Sized>(
        &mut self,
        site: BindSite<'_>,
        value: &V,
    ) -> Result<(), Self::Error> {
        bind_custom_value(self, site, value)
    }

    /// Bind a point at a zero-based index.
    fn bind_dse_point(&mut self, index: usize, x: f64, y: f64) -> Result<(), Self::Error> {
        self.bind_dse(BindSite::Index(index), &Point::new(x, y))
    }

    /// Bind a point by parameter name.
    ///
    /// The name ends at its first NUL byte, if it has one.
    fn bind_dse_point_by_name(&mut self, name: &str, x: f64, y: f64) -> Result<(), Self::Error> {
        self.bind_dse_point_by_name_n(terminated(name.as_bytes()), x, y)
    }

    /// Bind a point by a parameter name of explicit length.
    fn bind_dse_point_by_name_n(
        &mut self,
        name: &[u8],
        x: f64,
        y: f64,
    ) -> Result<(), Self::Error> {
        self.bind_dse(BindSite::Name(name), &Point::new(x, y))
    }

    bind_methods!(
        LineString,
        bind_dse_line_string,
        bind_dse_line_string_by_name,
        bind_dse_line_string_by_name_n
    );

    bind_methods!(
        Polygon,
        bind_dse_polygon,
        bind_dse_polygon_by_name,
        bind_dse_polygon_by_name_n
    );

    bind_methods!(
        DateRange,
        bind_dse_date_range,
        bind_dse_date_range_by_name,
        bind_dse_date_range_by_name_n
    );

    /// Execute the request as another user.
    ///
    /// The name ends at its first NUL byte, if it has one.
    fn set_execute_as(&mut self, name: &str) {
        self.set_execute_as_n(terminated(name.as_bytes()))
    }

    /// Execute the request as another user, given a name of explicit length.
    ///
    /// The name is sent verbatim, even when empty; the server checks it when the request runs.
    fn set_execute_as_n(&mut self, name: &[u8]) {
        log::trace!("executing as {:?}", String::from_utf8_lossy(name));
        self.set_custom_payload(PROXY_EXECUTE_KEY, name)
    }
}

impl<S: Statement + ?Sized> DseStatementExt for S {}
