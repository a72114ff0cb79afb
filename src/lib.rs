//! Translate between the three representations of a file on a Git forge:
//! the permalink web path, the clonable remote URL, and the opaque content
//! URI — plus case-insensitive repository identities, deterministic cache
//! keys, and filesystem-safe clone directories derived from any remote.
//!
//! The functions here are thin bindings of the workspace crates to the
//! built-in host table (github, gitlab, bitbucket and their aliases). To add
//! custom hosts, load a [`GitConfig`] and hand it to
//! [`HostRegistry::with_provider`], then call the underlying crates through
//! the [`hosts`], [`identity`], and [`route`] re-exports.
//!
//! ```
//! let route = forgeroute::parse(Some("github.com"), "/octocat/Hello-World/blob/master/README.md").unwrap();
//! assert_eq!(route.remote, "https://github.com/octocat/Hello-World.git");
//! assert_eq!(route.uri, "https://github.com/octocat/Hello-World.git#master+README.md");
//!
//! let key = forgeroute::key("https://GitHub.com/Octocat/Hello-World.git", None).unwrap();
//! assert_eq!(key, forgeroute::key("https://github.com/octocat/hello-world", None).unwrap());
//! ```
//!
//! Everything is synchronous and pure; nothing here touches the network or
//! verifies that a repository or branch exists.

use std::path::PathBuf;

pub use forgeroute_config as config;
pub use forgeroute_hosts as hosts;
pub use forgeroute_identity as identity;
pub use forgeroute_route as route;

pub use forgeroute_config::{CustomHost, GitConfig, Routing};
pub use forgeroute_hosts::{
    HostDefinition, HostMetadata, HostProvider, HostRegistry, Platform,
};
pub use forgeroute_identity::{Identity, Remote};
pub use forgeroute_route::{DEFAULT_BRANCH, DEFAULT_GATEWAY, ParsedRoute, UrlOptions};
pub use url::Url;

/// Parses a permalink path against the built-in host table.
///
/// Pass `None` for `host` when the path carries the hostname as its leading
/// segment (`/<host>/<owner>/...`).
pub fn parse(host: Option<&str>, pathname: &str) -> route::error::Result<ParsedRoute> {
    forgeroute_route::parse(&HostRegistry::builtin(), host, pathname)
}

/// Builds the permalink web path for a file; the inverse of [`parse`].
pub fn stringify(
    platform: &Platform,
    owner: &str,
    repository: &str,
    filename: &str,
    branch: Option<&str>,
) -> route::error::Result<String> {
    forgeroute_route::stringify(platform, owner, repository, filename, branch)
}

/// Builds the gateway proxy URL serving a file.
pub fn url(
    host: &str,
    owner: &str,
    repository: &str,
    filename: &str,
    options: UrlOptions<'_>,
) -> route::error::Result<Url> {
    forgeroute_route::url(&HostRegistry::builtin(), host, owner, repository, filename, options)
}

/// Decomposes a remote URL into its identity-bearing parts.
pub fn remote(remote: &str) -> identity::error::Result<Remote> {
    Remote::parse(remote)
}

/// Resolves the platform answering for `host`, if any.
pub fn get_platform(host: &str) -> hosts::error::Result<Option<Platform>> {
    HostRegistry::builtin().platform(host)
}

/// Builds the canonical clone URL for a repository on `host`.
pub fn get_remote(
    host: &str,
    owner: &str,
    repository: &str,
    platform: Option<Platform>,
) -> route::error::Result<String> {
    forgeroute_route::get_remote(&HostRegistry::builtin(), host, owner, repository, platform)
}

/// Returns the directory portion of a permalink path: everything up to the
/// matched filename.
pub fn base_url(remote: &str, pathname: &str) -> route::error::Result<String> {
    forgeroute_route::base_url(&HostRegistry::builtin(), remote, pathname)
}

/// Case-normalizes a remote into its [`Identity`].
pub fn normalize(remote: &str) -> identity::error::Result<Identity> {
    Ok(Remote::parse(remote)?.normalize())
}

/// Deterministic cache key for a remote's normalized identity.
pub fn key(remote: &str, username: Option<&str>) -> identity::error::Result<String> {
    Ok(Remote::parse(remote)?.key(username))
}

/// Relative storage directory for a local clone of `remote`.
pub fn dir(remote: &str) -> identity::error::Result<PathBuf> {
    Ok(Remote::parse(remote)?.dir())
}
