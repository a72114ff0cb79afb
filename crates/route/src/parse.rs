//! Permalink route parsing.

use exn::{OptionExt, ResultExt};
use forgeroute_hosts::{HostMetadata, HostProvider, HostRegistry, Platform};
use tracing::instrument;
use url::Url;

use crate::error::{ErrorKind, Result};
use crate::remote::remote_url;

/// A permalink path resolved into its forge coordinates.
///
/// A pure value; constructed by [`parse`] and consumed by the caller, never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    /// Canonical clone URL for the repository.
    pub remote: String,
    pub branch: String,
    /// File path within the repository; may contain separators.
    pub filename: String,
    /// Opaque content identifier:
    /// `https://<host>/<owner>/<repo>.git#<branch>+<filename>`. The branch
    /// and filename suffixes pin the URI to one file at one revision,
    /// distinct from the bare clone URL.
    pub uri: String,
    pub platform: Platform,
    pub owner: String,
    pub repository: String,
}

/// Parses a permalink path into a [`ParsedRoute`].
///
/// When `host` is `None` the path is expected to carry the hostname as its
/// leading segment (`/<host>/<owner>/...`); see [`split_embedded_host`].
///
/// Fails with [`ErrorKind::UnknownHost`] when no metadata can be resolved at
/// all, and [`ErrorKind::InvalidRoute`] when the path does not match the
/// platform's route shape. Never returns a partial route.
#[instrument(skip(registry))]
pub fn parse<P: HostProvider>(
    registry: &HostRegistry<P>,
    host: Option<&str>,
    pathname: &str,
) -> Result<ParsedRoute> {
    let mut metadata = match host {
        Some(hostname) => registry.resolve(hostname).or_raise(|| ErrorKind::HostResolution)?,
        None => None,
    };
    let mut path = pathname;
    let shortened;
    if metadata.is_none() && host.is_none() {
        let (embedded, rest) = split_embedded_host(pathname)?;
        metadata = registry.resolve(&embedded).or_raise(|| ErrorKind::HostResolution)?;
        shortened = rest.to_string();
        path = &shortened;
    }
    let Some(metadata) = metadata else {
        exn::bail!(ErrorKind::UnknownHost);
    };
    match_route(&metadata, path)
}

fn match_route(metadata: &HostMetadata, path: &str) -> Result<ParsedRoute> {
    let captures = metadata
        .route
        .captures(path)
        .ok_or_raise(|| ErrorKind::InvalidRoute(path.to_string()))?;
    let (owner, repository, branch, filename) =
        (&captures[1], &captures[2], &captures[3], &captures[4]);
    Ok(ParsedRoute {
        remote: remote_url(&metadata.platform, &metadata.host, owner, repository)?,
        uri: format!("https://{}/{owner}/{repository}.git#{branch}+{filename}", metadata.host),
        branch: branch.to_string(),
        filename: filename.to_string(),
        platform: metadata.platform.clone(),
        owner: owner.to_string(),
        repository: repository.to_string(),
    })
}

/// Heuristic fallback for callers that only hold a single combined path
/// string: re-reads `/<host>/<owner>/...` as a hostname followed by the real
/// path, returning the recovered hostname and the shortened path.
///
/// Kept as its own function because the double-parse is inherently ambiguous;
/// it re-interprets a failed hostname lookup as "the path carries the host".
fn split_embedded_host(pathname: &str) -> Result<(String, &str)> {
    let trimmed = pathname.strip_prefix('/').unwrap_or(pathname);
    let embedded =
        Url::parse(&format!("https://{trimmed}")).or_raise(|| ErrorKind::UnknownHost)?;
    let host = embedded.host_str().ok_or_raise(|| ErrorKind::UnknownHost)?.to_string();
    let rest = pathname.get(host.len() + 1..).unwrap_or("");
    Ok((host, rest))
}
