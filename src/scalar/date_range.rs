use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::io::date_range::{decode_date_range, encode_date_range};

/// The granularity of a date range bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum DateRangePrecision {
    Year = 0,
    Month = 1,
    Day = 2,
    Hour = 3,
    Minute = 4,
    Second = 5,
    Millisecond = 6,
    /// Marks a bound as `*`.
    Unbounded = 0xFF,
}

impl DateRangePrecision {
    /// The `chrono` format string that renders a timestamp at this precision.
    fn format(&self) -> Option<&'static str> {
        match self {
            DateRangePrecision::Year => Some("%Y"),
            DateRangePrecision::Month => Some("%Y-%m"),
            DateRangePrecision::Day => Some("%Y-%m-%d"),
            DateRangePrecision::Hour => Some("%Y-%m-%dT%H"),
            DateRangePrecision::Minute => Some("%Y-%m-%dT%H:%M"),
            DateRangePrecision::Second => Some("%Y-%m-%dT%H:%M:%S"),
            DateRangePrecision::Millisecond => Some("%Y-%m-%dT%H:%M:%S%.3fZ"),
            DateRangePrecision::Unbounded => None,
        }
    }
}

/// One end of a [`DateRange`]: a timestamp in milliseconds since the Unix epoch and the
/// precision it was given at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateRangeBound {
    precision: DateRangePrecision,
    time_ms: i64,
}

impl DateRangeBound {
    pub fn new(precision: DateRangePrecision, time_ms: i64) -> Self {
        Self { precision, time_ms }
    }

    /// The `*` bound.
    pub fn unbounded() -> Self {
        Self::new(DateRangePrecision::Unbounded, -1)
    }

    pub fn from_datetime(datetime: DateTime<Utc>, precision: DateRangePrecision) -> Self {
        Self::new(precision, datetime.timestamp_millis())
    }

    pub fn is_unbounded(&self) -> bool {
        self.precision == DateRangePrecision::Unbounded
    }

    pub fn precision(&self) -> DateRangePrecision {
        self.precision
    }

    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    /// The bound's timestamp, or `None` for `*` and timestamps `chrono` cannot represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if self.is_unbounded() {
            return None;
        }
        DateTime::from_timestamp_millis(self.time_ms)
    }
}

impl fmt::Display for DateRangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.precision.format(), self.to_datetime()) {
            (None, _) => f.write_str("*"),
            (Some(format), Some(datetime)) => write!(f, "{}", datetime.format(format)),
            (Some(_), None) => write!(f, "{}", self.time_ms),
        }
    }
}

/// A date range: a single date, or an interval whose ends may be open.
///
/// A single date keeps its value in the lower bound. Nothing checks that the lower bound comes
/// before the upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateRange {
    lower_bound: DateRangeBound,
    upper_bound: DateRangeBound,
    is_single_date: bool,
}

impl DateRange {
    pub fn new(
        lower_bound: DateRangeBound,
        upper_bound: DateRangeBound,
        is_single_date: bool,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            is_single_date,
        }
    }

    /// A single date. `DateRangeBound::unbounded()` gives `*`.
    pub fn single(date: DateRangeBound) -> Self {
        Self::new(date, DateRangeBound::unbounded(), true)
    }

    /// `[lower TO upper]`. Either end may be `DateRangeBound::unbounded()`.
    pub fn closed(lower_bound: DateRangeBound, upper_bound: DateRangeBound) -> Self {
        Self::new(lower_bound, upper_bound, false)
    }

    pub fn lower_bound(&self) -> &DateRangeBound {
        &self.lower_bound
    }

    pub fn upper_bound(&self) -> &DateRangeBound {
        &self.upper_bound
    }

    pub fn is_single_date(&self) -> bool {
        self.is_single_date
    }

    /// Encode this range as the date range custom type.
    pub fn to_bytes(&self) -> Bytes {
        encode_date_range(self)
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        decode_date_range(buf)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_date {
            write!(f, "{}", self.lower_bound)
        } else {
            write!(f, "[{} TO {}]", self.lower_bound, self.upper_bound)
        }
    }
}
