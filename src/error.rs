//! Defines [`DseError`], representing all errors returned by this crate, and the driver status
//! codes they map to.

use std::borrow::Cow;
use std::fmt::Debug;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DseError {
    /// A statement rejected a binding.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// An operation was called on a value in the wrong state, e.g. finishing a line string
    /// that holds a single point.
    #[error("Invalid state: {0}")]
    InvalidState(Cow<'static, str>),

    /// A buffer ended before the value it encodes.
    #[error("Not enough data: expected {expected} bytes, found {found}")]
    NotEnoughData {
        /// Bytes needed to continue decoding.
        expected: usize,
        /// Bytes left in the buffer.
        found: usize,
    },

    /// A buffer holds a value that does not conform to its wire format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// WKB Error
    #[error("WKB error: {0}")]
    Wkb(String),

    /// WKT Error
    #[error("WKT error: {0}")]
    Wkt(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

impl DseError {
    /// The driver status code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DseError::Bind(err) => err.code(),
            DseError::InvalidState(_) => ErrorCode::LibInvalidState,
            DseError::NotEnoughData { .. } => ErrorCode::LibNotEnoughData,
            DseError::InvalidData(_) | DseError::Wkb(_) | DseError::Wkt(_) => {
                ErrorCode::LibInvalidData
            }
            DseError::IOError(_) => ErrorCode::LibInternalError,
        }
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, DseError>;

/// Errors reported by [`BoundStatement`](crate::statement::BoundStatement) when a binding site
/// cannot accept a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The positional index is past the last parameter.
    #[error("Index {index} out of bounds for statement with {count} parameters")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of parameters in the statement.
        count: usize,
    },

    /// No parameter carries the given name.
    #[error("Parameter name does not exist: {0}")]
    NameDoesNotExist(String),

    /// The parameter's declared type does not accept the value's custom type.
    #[error("Invalid value type: parameter is {expected}, value is {found}")]
    InvalidValueType {
        /// Declared type of the parameter.
        expected: String,
        /// Custom type class name of the bound value.
        found: String,
    },
}

impl BindError {
    /// The driver status code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BindError::IndexOutOfBounds { .. } => ErrorCode::LibIndexOutOfBounds,
            BindError::NameDoesNotExist(_) => ErrorCode::LibNameDoesNotExist,
            BindError::InvalidValueType { .. } => ErrorCode::LibInvalidValueType,
        }
    }
}

/// Driver status codes, laid out as `(source << 24) | code` with the library source (`1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum ErrorCode {
    /// Success
    Ok = 0,
    /// `CASS_ERROR_LIB_INDEX_OUT_OF_BOUNDS`
    LibIndexOutOfBounds = 0x0100_000B,
    /// `CASS_ERROR_LIB_INVALID_VALUE_TYPE`
    LibInvalidValueType = 0x0100_000D,
    /// `CASS_ERROR_LIB_NAME_DOES_NOT_EXIST`
    LibNameDoesNotExist = 0x0100_0012,
    /// `CASS_ERROR_LIB_INTERNAL_ERROR`
    LibInternalError = 0x0100_001C,
    /// `CASS_ERROR_LIB_INVALID_DATA`
    LibInvalidData = 0x0100_001E,
    /// `CASS_ERROR_LIB_NOT_ENOUGH_DATA`
    LibNotEnoughData = 0x0100_001F,
    /// `CASS_ERROR_LIB_INVALID_STATE`
    LibInvalidState = 0x0100_0020,
}

impl<E: Into<DseError>> From<std::result::Result<(), E>> for ErrorCode {
    fn from(value: std::result::Result<(), E>) -> Self {
        match value {
            Ok(()) => ErrorCode::Ok,
            Err(err) => err.into().code(),
        }
    }
}
