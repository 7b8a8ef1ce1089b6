//! Error type shared by every module.
//!
//! Hard failures (missing or invalid arguments, impossible preconditions,
//! undecodable input, I/O) are reported through [`UtilError`]. Recoverable
//! oddities are logged with `tracing::warn!` and the computed value is
//! still returned.

use thiserror::Error;

/// Error returned by fallible helpers in this crate.
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UtilError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        UtilError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for argument validation failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, UtilError::InvalidArgument { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UtilError>;
