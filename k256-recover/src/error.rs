//! Error types.

use core::fmt;
use thiserror::Error;

/// Result type with the `k256-recover` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Public key recovery errors.
///
/// Every variant carries a fixed reason string, so two failures of the same
/// check compare equal and render identically.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Malformed or empty input text, a Base32 field of the wrong length, or
    /// a recovery id outside `0..=3`.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A range check or a cryptographic validity check on the signature
    /// failed.
    #[error("invalid signature: {0}")]
    InvalidSignature(&'static str),

    /// The arithmetic backend broke its contract.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}

impl Error {
    /// Get the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::InvalidSignature(_) => ErrorKind::InvalidSignature,
            Error::InternalInvariant(_) => ErrorKind::InternalInvariant,
        }
    }

    /// Get the stable reason string.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::InvalidArgument(reason)
            | Error::InvalidSignature(reason)
            | Error::InternalInvariant(reason) => reason,
        }
    }
}

/// Kinds of [`Error`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// See [`Error::InvalidArgument`].
    InvalidArgument,

    /// See [`Error::InvalidSignature`].
    InvalidSignature,

    /// See [`Error::InternalInvariant`].
    InternalInvariant,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::InvalidSignature => "invalid signature",
            ErrorKind::InternalInvariant => "internal invariant violated",
        })
    }
}
