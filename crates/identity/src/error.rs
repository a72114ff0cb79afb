//! Remote Parsing Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};

/// A remote parsing error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for remote parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Every failure here is a caller-input problem; none are transient.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The remote is not a parseable URL at all.
    #[display("invalid remote URL: {_0}")]
    InvalidUrl(#[error(not(source))] String),
    /// The remote's path does not decompose into exactly an owner segment
    /// and a repository segment.
    #[display("remote path of {remote} has {segments} segments, expected 2")]
    RemoteParse {
        /// The raw remote as given by the caller.
        remote: String,
        /// How many non-empty segments the normalized path yielded.
        segments: usize,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A malformed remote stays malformed.
        false
    }
}
