//! Canonical clone URL construction.

use exn::{OptionExt, ResultExt};
use forgeroute_hosts::{HostProvider, HostRegistry, Platform};

use crate::error::{ErrorKind, Result};

/// Builds the canonical clone URL for a repository on a known platform.
///
/// Bitbucket embeds the owner as the URL's userinfo component; its clone
/// convention wants an authenticated principal in the URL itself, where
/// github and gitlab accept anonymous HTTPS clones of public repositories.
///
/// Custom platform tags have no built-in rule and fail with
/// [`ErrorKind::UnknownPlatform`]; callers that configure custom platforms
/// bring their own remote-building behavior.
pub fn remote_url(
    platform: &Platform,
    host: &str,
    owner: &str,
    repository: &str,
) -> Result<String> {
    match platform {
        Platform::Github | Platform::Gitlab => {
            Ok(format!("https://{host}/{owner}/{repository}.git"))
        },
        Platform::Bitbucket => {
            Ok(format!("https://{owner}@bitbucket.org/{owner}/{repository}.git"))
        },
        Platform::Custom(_) => exn::bail!(ErrorKind::UnknownPlatform),
    }
}

/// [`remote_url`] with registry-based platform resolution for callers that
/// only hold a hostname.
pub fn get_remote<P: HostProvider>(
    registry: &HostRegistry<P>,
    host: &str,
    owner: &str,
    repository: &str,
    platform: Option<Platform>,
) -> Result<String> {
    let platform = match platform {
        Some(platform) => platform,
        None => registry
            .platform(host)
            .or_raise(|| ErrorKind::HostResolution)?
            .ok_or_raise(|| ErrorKind::UnknownPlatform)?,
    };
    remote_url(&platform, host, owner, repository)
}
