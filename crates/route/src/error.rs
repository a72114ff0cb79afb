//! Route Resolution Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};

/// A route resolution error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for route operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// All of these are caller-input problems: fatal to the request, never to
/// the process, and never worth retrying.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The hostname does not resolve to any known or configured platform.
    #[display("unknown host")]
    UnknownHost,
    /// A host definition exists but could not be used (broken custom
    /// pattern, for instance). The cause chain carries the detail.
    #[display("host resolution failed")]
    HostResolution,
    /// The path does not match the platform's route shape.
    #[display("not a valid route: {_0}")]
    InvalidRoute(#[error(not(source))] String),
    /// No built-in remote or permalink rule exists for the platform.
    /// Custom platforms supply their own rules through the caller.
    #[display("unknown git platform")]
    UnknownPlatform,
    /// The remote handed to [`base_url`](crate::base_url) could not be
    /// decomposed.
    #[display("invalid remote: {_0}")]
    InvalidRemote(#[error(not(source))] String),
    /// The gateway base for a proxy URL is not itself a valid URL.
    #[display("invalid gateway URL: {_0}")]
    InvalidGateway(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            _ => false,
        }
    }
}
