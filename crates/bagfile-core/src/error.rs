//! Error types for bagfile operations.
//!
//! ## Error categories
//!
//! ### Lifecycle errors
//! - `NotOpen`: operation on a container that was never opened or already closed
//! - `Unsupported`: declared-but-unimplemented mode or feature (e.g. append)
//!
//! ### I/O errors
//! - `Io`: underlying file error, converted via `#[from]`
//! - `UnexpectedEof`: the file ended inside a record frame
//!
//! ### Structural errors
//! - `MalformedHeader`: a field dictionary that cannot be decoded
//! - `MalformedRecord`: a decoded record that violates the format
//! - `MissingField` / `WrongFieldSize`: field-check failures
//!
//! ### Version errors
//! - `UnsupportedVersion`: the version line does not match the supported format
//!
//! Two conditions from the format's behavior model are deliberately NOT
//! errors: a fingerprint mismatch during typed instantiation yields an empty
//! handle, and writes while the disk is full are dropped with a rate-limited
//! warning.
//!
//! ## Usage
//!
//! All fallible operations return `Result<T>`, aliased to
//! `Result<T, Error>`, so `?` propagation works throughout.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("bag not open")]
    NotOpen,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of file")]
    UnexpectedEof,

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("required field missing: {0}")]
    MissingField(String),

    #[error("field {field} is wrong size ({len} bytes)")]
    WrongFieldSize { field: String, len: usize },

    #[error("unsupported bagfile version: {0}")]
    UnsupportedVersion(String),

    #[error("unsupported feature: {0}")]
    Unsupported(String),
}

impl Error {
    /// Map an I/O error onto the format-level EOF variant when the stream
    /// ended inside a frame.
    pub fn from_read(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEof
        } else {
            Error::Io(err)
        }
    }
}
