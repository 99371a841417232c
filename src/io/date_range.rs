//! Binary layout of the `DateRangeType` custom type.
//!
//! A control byte names the shape of the range and decides how many bounds follow. Each bound is
//! a big-endian `i64` of milliseconds since the Unix epoch followed by its precision byte.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};
use bytes::{BufMut, Bytes, BytesMut};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{DseError, Result};
use crate::scalar::{DateRange, DateRangeBound, DateRangePrecision};

/// The byte length of one encoded bound: timestamp plus precision.
pub const DATE_RANGE_BOUND_SIZE: usize = 8 + 1;

/// The shape of a date range, written as its first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum DateRangeKind {
    /// `2017-02-03`
    SingleDate = 0,
    /// `[2017 TO 2018]`
    ClosedRange = 1,
    /// `[2017 TO *]`
    OpenRangeHigh = 2,
    /// `[* TO 2018]`
    OpenRangeLow = 3,
    /// `[* TO *]`
    BothOpenRange = 4,
    /// `*`
    SingleDateOpen = 5,
}

impl DateRangeKind {
    /// Classify a range by which of its bounds are set.
    pub fn of(range: &DateRange) -> Self {
        let lower = range.lower_bound().is_unbounded();
        let upper = range.upper_bound().is_unbounded();

        match (range.is_single_date(), lower, upper) {
            (true, true, _) => DateRangeKind::SingleDateOpen,
            (true, false, _) => DateRangeKind::SingleDate,
            (false, true, true) => DateRangeKind::BothOpenRange,
            (false, true, false) => DateRangeKind::OpenRangeLow,
            (false, false, true) => DateRangeKind::OpenRangeHigh,
            (false, false, false) => DateRangeKind::ClosedRange,
        }
    }

    /// How many bounds follow the control byte.
    pub fn bound_count(&self) -> usize {
        match self {
            DateRangeKind::BothOpenRange | DateRangeKind::SingleDateOpen => 0,
            DateRangeKind::SingleDate
            | DateRangeKind::OpenRangeHigh
            | DateRangeKind::OpenRangeLow => 1,
            DateRangeKind::ClosedRange => 2,
        }
    }

    /// The byte length of a range of this shape.
    pub fn encoded_size(&self) -> usize {
        1 + self.bound_count() * DATE_RANGE_BOUND_SIZE
    }
}

fn write_bound(buf: &mut impl BufMut, bound: &DateRangeBound) {
    buf.put_i64(bound.time_ms());
    buf.put_u8(bound.precision().into());
}

/// Write a date range in the layout of the date range custom type.
///
/// Bounds are written as given; an inverted range is the server's to reject.
pub fn write_date_range(buf: &mut impl BufMut, range: &DateRange) {
    let kind = DateRangeKind::of(range);
    buf.put_u8(kind.into());

    match kind {
        DateRangeKind::SingleDate | DateRangeKind::OpenRangeHigh => {
            write_bound(buf, range.lower_bound())
        }
        DateRangeKind::OpenRangeLow => write_bound(buf, range.upper_bound()),
        DateRangeKind::ClosedRange => {
            write_bound(buf, range.lower_bound());
            write_bound(buf, range.upper_bound());
        }
        DateRangeKind::BothOpenRange | DateRangeKind::SingleDateOpen => {}
    }
}

/// Encode a date range as the buffer bound for the date range custom type.
pub fn encode_date_range(range: &DateRange) -> Bytes {
    let mut buf = BytesMut::with_capacity(DateRangeKind::of(range).encoded_size());
    write_date_range(&mut buf, range);
    buf.freeze()
}

fn read_bound(reader: &mut Cursor<&[u8]>) -> Result<DateRangeBound> {
    let time_ms = reader.read_i64::<BigEndian>()?;
    let precision = DateRangePrecision::try_from(reader.read_u8()?)
        .map_err(|err| DseError::InvalidData(err.to_string()))?;
    if precision == DateRangePrecision::Unbounded {
        return Err(DseError::InvalidData(
            "encoded date range bound has no precision".to_string(),
        ));
    }
    Ok(DateRangeBound::new(precision, time_ms))
}

/// Decode a buffer written by [`encode_date_range`].
pub fn decode_date_range(buf: &[u8]) -> Result<DateRange> {
    let Some(&control) = buf.first() else {
        return Err(DseError::NotEnoughData {
            expected: 1,
            found: 0,
        });
    };
    let kind =
        DateRangeKind::try_from(control).map_err(|err| DseError::InvalidData(err.to_string()))?;

    let size = kind.encoded_size();
    if buf.len() < size {
        return Err(DseError::NotEnoughData {
            expected: size,
            found: buf.len(),
        });
    }
    if buf.len() > size {
        return Err(DseError::InvalidData(format!(
            "{} trailing bytes after {kind:?} date range",
            buf.len() - size
        )));
    }

    let mut reader = Cursor::new(&buf[1..]);
    let unbounded = DateRangeBound::unbounded();

    let range = match kind {
        DateRangeKind::SingleDate => DateRange::single(read_bound(&mut reader)?),
        DateRangeKind::SingleDateOpen => DateRange::single(unbounded),
        DateRangeKind::ClosedRange => {
            let lower = read_bound(&mut reader)?;
            let upper = read_bound(&mut reader)?;
            DateRange::closed(lower, upper)
        }
        DateRangeKind::OpenRangeHigh => DateRange::closed(read_bound(&mut reader)?, unbounded),
        DateRangeKind::OpenRangeLow => DateRange::closed(unbounded, read_bound(&mut reader)?),
        DateRangeKind::BothOpenRange => DateRange::closed(unbounded, unbounded),
    };

    Ok(range)
}
