//! Host Resolution Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};

/// A host resolution error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for host resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A custom host definition carries a route pattern that does not compile.
    #[display("invalid route pattern for host {host}: {pattern}")]
    HostPattern {
        /// The hostname whose definition is broken.
        host: String,
        /// The pattern source that failed to compile.
        pattern: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A broken host definition stays broken until the configuration
        // changes.
        false
    }
}
