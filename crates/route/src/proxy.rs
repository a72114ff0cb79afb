//! Externally reachable proxy URLs for permalink paths.

use exn::{OptionExt, ResultExt};
use forgeroute_hosts::{HostProvider, HostRegistry, Platform};
use url::Url;

use crate::error::{ErrorKind, Result};
use crate::stringify::stringify;

/// Gateway base used when the caller does not configure one.
pub const DEFAULT_GATEWAY: &str = "https://foobar.run";

/// Options for [`url`].
#[derive(Debug, Clone, Default)]
pub struct UrlOptions<'a> {
    /// Gateway base URL; defaults to [`DEFAULT_GATEWAY`].
    pub gateway: Option<&'a str>,
    /// Branch; defaults to [`DEFAULT_BRANCH`](crate::DEFAULT_BRANCH).
    pub branch: Option<&'a str>,
    /// Bearer token to embed.
    pub token: Option<&'a str>,
    /// Overrides registry platform resolution; required for custom tags,
    /// which the registry alone cannot route to a permalink shape.
    pub platform: Option<Platform>,
}

/// Builds the gateway URL serving a file: the permalink path joined under
/// `<gateway>/<host>`.
///
/// A supplied token is carried as the query parameter
/// `Authorization=Bearer <token>`. The consuming static-file gateway cannot
/// forward request headers, hence the query placement.
pub fn url<P: HostProvider>(
    registry: &HostRegistry<P>,
    host: &str,
    owner: &str,
    repository: &str,
    filename: &str,
    options: UrlOptions<'_>,
) -> Result<Url> {
    let platform = match options.platform {
        Some(platform) => platform,
        None => registry
            .platform(host)
            .or_raise(|| ErrorKind::HostResolution)?
            .ok_or_raise(|| ErrorKind::UnknownPlatform)?,
    };
    let pathname = stringify(&platform, owner, repository, filename, options.branch)?;
    let gateway = options.gateway.unwrap_or(DEFAULT_GATEWAY).trim_end_matches('/');
    let mut url = Url::parse(&format!("{gateway}/{host}{pathname}"))
        .or_raise(|| ErrorKind::InvalidGateway(gateway.to_string()))?;
    if let Some(token) = options.token {
        url.query_pairs_mut().append_pair("Authorization", &format!("Bearer {token}"));
    }
    Ok(url)
}
