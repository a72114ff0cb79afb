//! Forge platform identification.

use derive_more::Display;

/// The forge software answering for a hostname.
///
/// The three closed variants carry built-in route shapes and remote-building
/// rules. `Custom` tags pass through unchanged so that callers can dispatch
/// on platforms this crate has no rules for; exhaustive matching guarantees
/// every built-in platform has both a route shape and a remote rule.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    #[display("github")]
    Github,
    #[display("gitlab")]
    Gitlab,
    #[display("bitbucket")]
    Bitbucket,
    /// A platform tag supplied by external configuration.
    #[display("{_0}")]
    Custom(String),
}

impl Platform {
    /// Maps a platform tag to its closed variant, or wraps unrecognized tags
    /// in [`Platform::Custom`]. Never fails; tags are compared verbatim.
    pub fn from_tag(tag: impl AsRef<str>) -> Self {
        match tag.as_ref() {
            "github" => Self::Github,
            "gitlab" => Self::Gitlab,
            "bitbucket" => Self::Bitbucket,
            other => Self::Custom(other.to_string()),
        }
    }
}
