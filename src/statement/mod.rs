//! Attaching custom-typed values to a statement.
//!
//! The statement itself belongs to the driver and is reached through the [`Statement`]
//! capability. Every binding, whatever its site or type, goes through [`bind_custom_value`];
//! [`DseStatementExt`] adds the per-type convenience methods on top.

mod bound;
mod ext;

pub use bound::{BoundStatement, BoundValue, ColumnSpec};
pub use ext::{DseStatementExt, PROXY_EXECUTE_KEY};

use std::borrow::Cow;
use std::fmt;

use crate::io::date_range::{write_date_range, DateRangeKind};
use crate::io::wkb::{point_wkb_size, write_point_as_wkb};
use crate::scalar::{DateRange, LineString, Point, Polygon};
use crate::types::DseType;

/// The operations a driver statement exposes for custom types.
///
/// Errors are the statement's own; binders return them unchanged.
pub trait Statement {
    /// Why a binding site rejected a value.
    type Error;

    /// Bind `data` as a value of the custom type `class_name` at a zero-based position.
    fn bind_custom(
        &mut self,
        index: usize,
        class_name: &str,
        data: &[u8],
    ) -> Result<(), Self::Error>;

    /// Bind `data` as a value of the custom type `class_name` to every parameter called `name`.
    ///
    /// `name` is taken as-is: it needs no terminator and may hold any bytes.
    fn bind_custom_by_name_n(
        &mut self,
        name: &[u8],
        class_name: &str,
        data: &[u8],
    ) -> Result<(), Self::Error>;

    /// Attach an out-of-band payload, replacing any previous value under `key`.
    fn set_custom_payload(&mut self, key: &str, data: &[u8]);
}

impl<S: Statement + ?Sized> Statement for &mut S {
    type Error = S::Error;

    fn bind_custom(
        &mut self,
        index: usize,
        class_name: &str,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        (**self).bind_custom(index, class_name, data)
    }

    fn bind_custom_by_name_n(
        &mut self,
        name: &[u8],
        class_name: &str,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        (**self).bind_custom_by_name_n(name, class_name, data)
    }

    fn set_custom_payload(&mut self, key: &str, data: &[u8]) {
        (**self).set_custom_payload(key, data)
    }
}

/// Where a value is bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindSite<'a> {
    /// Zero-based parameter position
    Index(usize),
    /// Parameter name, with an explicit length
    Name(&'a [u8]),
}

impl<'a> BindSite<'a> {
    /// A named site, measured up to the first NUL byte or the end of `name`.
    pub fn name(name: &'a str) -> Self {
        Self::Name(terminated(name.as_bytes()))
    }

    /// A named site taking every byte of `name`.
    pub fn name_n(name: &'a [u8]) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for BindSite<'static> {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl<'a> From<&'a str> for BindSite<'a> {
    fn from(value: &'a str) -> Self {
        Self::name(value)
    }
}

impl fmt::Display for BindSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindSite::Index(index) => write!(f, "index {index}"),
            BindSite::Name(name) => write!(f, "name {:?}", String::from_utf8_lossy(name)),
        }
    }
}

/// The bytes of `name` before its first NUL.
pub(crate) fn terminated(name: &[u8]) -> &[u8] {
    match memchr::memchr(0, name) {
        Some(end) => &name[..end],
        None => name,
    }
}

/// A value that binds as one of the DSE custom types.
pub trait CustomValue {
    /// The custom type this value binds as.
    const TYPE: DseType;

    /// The buffer sent for this value.
    fn encode(&self) -> Cow<'_, [u8]>;
}

impl CustomValue for Point {
    const TYPE: DseType = DseType::Point;

    fn encode(&self) -> Cow<'_, [u8]> {
        let mut buf = Vec::with_capacity(point_wkb_size());
        write_point_as_wkb(&mut buf, self.x(), self.y());
        Cow::Owned(buf)
    }
}

impl CustomValue for LineString {
    const TYPE: DseType = DseType::LineString;

    fn encode(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.bytes())
    }
}

impl CustomValue for Polygon {
    const TYPE: DseType = DseType::Polygon;

    fn encode(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.bytes())
    }
}

impl CustomValue for DateRange {
    const TYPE: DseType = DseType::DateRange;

    fn encode(&self) -> Cow<'_, [u8]> {
        let mut buf = Vec::with_capacity(DateRangeKind::of(self).encoded_size());
        write_date_range(&mut buf, self);
        Cow::Owned(buf)
    }
}

/// Bind a custom-typed value at a site.
///
/// This is the one path every typed binding takes. The statement's result is returned as-is.
pub fn bind_custom_value<S, V>(
    statement: &mut S,
    site: BindSite<'_>,
    value: &V,
) -> Result<(), S::Error>
where
    S: Statement + ?Sized,
    V: CustomValue + ?Sized,
{
    let class_name = V::TYPE.class_name();
    let data = value.encode();
    log::trace!("binding {class_name} ({} bytes) at {site}", data.len());

    match site {
        BindSite::Index(index) => statement.bind_custom(index, class_name, &data),
        BindSite::Name(name) => statement.bind_custom_by_name_n(name, class_name, &data),
    }
}
