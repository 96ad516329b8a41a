//! Shared error type across counterd crates.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Admin token missing, mismatched, or not configured.
    Unauthorized,
    /// Underlying storage failed.
    IoFailure,
    /// Counter cannot be incremented any further.
    Overflow,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Unauthorized => "UNAUTHORIZED",
            ClientCode::IoFailure => "IO_FAILURE",
            ClientCode::Overflow => "OVERFLOW",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CounterError>;

/// Unified error type used by core and gateway.
///
/// Missing, empty, or corrupt counter content has no variant; the store
/// reads it as 0.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("counter overflow")]
    Overflow,
    #[error("unauthorized")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl CounterError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CounterError::Io {
            path: path.into(),
            source,
        }
    }

    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CounterError::Io { .. } => ClientCode::IoFailure,
            CounterError::Overflow => ClientCode::Overflow,
            CounterError::Unauthorized => ClientCode::Unauthorized,
            CounterError::BadRequest(_) => ClientCode::BadRequest,
            CounterError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            CounterError::Internal(_) => ClientCode::Internal,
        }
    }
}
