//! Errors reported when a caller breaks a container's contract.

use std::error;
use std::fmt;
use std::result;

/// The error type for cursor misuse and capacity violations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The end cursor was dereferenced, advanced, or erased.
    EndOfContainer,
    /// A cursor at the first element was moved backwards.
    BeginningOfContainer,
    /// The cursor refers to an erased element or to another container.
    InvalidCursor,
    /// A requested size is negative or larger than the container can hold.
    LimitExceeded,
}

impl Error {
    /// Returns `true` for errors caused by passing a cursor the operation cannot accept.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::Error;
    ///
    /// assert!(Error::EndOfContainer.is_invalid_argument());
    /// assert!(!Error::LimitExceeded.is_invalid_argument());
    /// ```
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::EndOfContainer | Error::BeginningOfContainer | Error::InvalidCursor => true,
            Error::LimitExceeded => false,
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EndOfContainer => write!(f, "Cursor points past the end of the container"),
            Error::BeginningOfContainer => {
                write!(f, "Cursor cannot move before the beginning of the container")
            },
            Error::InvalidCursor => write!(f, "Cursor does not refer to an element of the container"),
            Error::LimitExceeded => write!(f, "Limit of the container is exceeded"),
        }
    }
}

/// Convenience alias for results returned by container operations.
pub type Result<T> = result::Result<T, Error>;
