//! Error types reported to contact API callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for contact operations.
pub type ContactResult<T> = Result<T, ContactError>;

/// Numeric error codes delivered through the caller's failure channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ContactErrorCode {
    Unknown,
    InvalidArgument,
    Timeout,
    PendingOperation,
    Io,
    NotSupported,
    PermissionDenied,
}

impl ContactErrorCode {
    /// Wire value of the code.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::InvalidArgument => 1,
            Self::Timeout => 2,
            Self::PendingOperation => 3,
            Self::Io => 4,
            Self::NotSupported => 5,
            Self::PermissionDenied => 20,
        }
    }
}

impl From<ContactErrorCode> for u8 {
    fn from(code: ContactErrorCode) -> Self {
        code.as_u8()
    }
}

impl TryFrom<u8> for ContactErrorCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::InvalidArgument),
            2 => Ok(Self::Timeout),
            3 => Ok(Self::PendingOperation),
            4 => Ok(Self::Io),
            5 => Ok(Self::NotSupported),
            20 => Ok(Self::PermissionDenied),
            other => Err(format!("unknown contact error code: {other}")),
        }
    }
}

/// Errors surfaced by contact operations.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Missing or malformed caller input, e.g. an empty field list on find.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Any unexpected failure, including backing store errors and lookups
    /// of identities that do not exist.
    #[error("unknown error: {0}")]
    Unknown(String),

    #[error("operation timed out")]
    Timeout,

    #[error("another operation is pending")]
    PendingOperation,

    #[error("IO error: {0}")]
    Io(String),

    #[error("not supported: {0}")]
    NotSupported(String),

    #[error("permission denied")]
    PermissionDenied,
}

impl ContactError {
    /// Code delivered to the caller's failure channel.
    #[must_use]
    pub fn code(&self) -> ContactErrorCode {
        match self {
            Self::InvalidArgument(_) => ContactErrorCode::InvalidArgument,
            Self::Unknown(_) => ContactErrorCode::Unknown,
            Self::Timeout => ContactErrorCode::Timeout,
            Self::PendingOperation => ContactErrorCode::PendingOperation,
            Self::Io(_) => ContactErrorCode::Io,
            Self::NotSupported(_) => ContactErrorCode::NotSupported,
            Self::PermissionDenied => ContactErrorCode::PermissionDenied,
        }
    }

    /// The `{ "code": n }` object handed to failure callbacks.
    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload { code: self.code() }
    }
}

/// Serialized form of a [`ContactError`] for the failure channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: ContactErrorCode,
}
