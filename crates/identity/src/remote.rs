//! Remote URL decomposition.
//!
//! Picks a clonable remote apart into its identity-bearing fields without any
//! per-platform logic: the owner and repository are simply the two path
//! segments every forge puts a repository under.

use std::str::FromStr;

use exn::ResultExt;
use tracing::{error, instrument};
use url::Url;

use crate::error::{Error, ErrorKind, Result};

/// A clonable Git remote, decomposed into protocol, hostname, owner, and
/// repository.
///
/// Immutable once constructed. Platform-independent: any URL whose path
/// normalizes to exactly two non-empty segments qualifies, whatever forge it
/// points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    /// URL scheme, without the trailing colon.
    pub protocol: String,
    /// Hostname as parsed; the URL parser already lowercases registered names.
    pub hostname: String,
    /// Normalized path, with its leading separator.
    pub pathname: String,
    /// First path segment: the repository owner.
    pub username: String,
    /// Second path segment, with any trailing `.git` suffix stripped.
    pub repo: String,
}

impl Remote {
    /// Decomposes a remote URL.
    ///
    /// The path is normalized segment-wise (`.` and empty segments drop,
    /// `..` pops) before splitting. Exactly two non-empty segments must
    /// remain; one, or three or more, is a hard parse failure — there is no
    /// way to tell owner from repository in such a path.
    #[instrument]
    pub fn parse(remote: &str) -> Result<Self> {
        let parsed = Url::parse(remote).or_raise(|| ErrorKind::InvalidUrl(remote.to_string()))?;
        let segments = normalize_segments(parsed.path());
        if segments.len() != 2 {
            error!(
                remote,
                segments = segments.len(),
                "remote does not decompose into owner/repository"
            );
            exn::bail!(ErrorKind::RemoteParse {
                remote: remote.to_string(),
                segments: segments.len(),
            });
        }
        Ok(Self {
            protocol: parsed.scheme().to_string(),
            hostname: parsed.host_str().unwrap_or_default().to_string(),
            pathname: format!("/{}", segments.join("/")),
            username: segments[0].clone(),
            repo: strip_git_suffix(&segments[1]).to_string(),
        })
    }
}

impl FromStr for Remote {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Collapses `.`, `..`, and doubled separators, returning the remaining
/// non-empty segments.
fn normalize_segments(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            other => segments.push(other.to_string()),
        }
    }
    segments
}

/// Strips a trailing `.git`, ASCII case-insensitively, so `Repo.GIT` and
/// `Repo.git` both yield `Repo`. A segment that is *only* the suffix is left
/// alone.
fn strip_git_suffix(segment: &str) -> &str {
    let bytes = segment.as_bytes();
    if bytes.len() > 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".git") {
        &segment[..segment.len() - 4]
    } else {
        segment
    }
}
