//! Hostname-to-platform resolution.
//!
//! Maps forge hostnames to [`HostMetadata`]: the canonical host, the
//! [`Platform`], and the compiled route pattern used to pick apart permalink
//! paths. Built-in hosts are resolved from a static table; anything else is
//! deferred to an injected [`HostProvider`], so the registry stays testable
//! with a fake provider and free of ambient configuration state.

use std::sync::LazyLock;

use exn::ResultExt;
use regex::Regex;
use tracing::debug;

use crate::error::{ErrorKind, Result};
use crate::platform::Platform;

/// Character class for the owner, repository, and branch capture groups.
/// The filename group is deliberately unrestricted; it may span separators.
const SEGMENT: &str = "[A-Za-z0-9_.-]+";

macro_rules! route {
    ($name:ident, $shape:literal) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(
                r"^/({seg})/({seg})/{shape}/({seg})/(.+)$",
                seg = SEGMENT,
                shape = $shape
            ))
            .unwrap()
        });
    };
}

route!(BLOB_ROUTE, "blob");
route!(SRC_ROUTE, "src");

/// Resolved metadata for a forge hostname.
///
/// Immutable once constructed. The route pattern always captures exactly
/// owner, repository, branch, and filename, in that order.
#[derive(Debug, Clone)]
pub struct HostMetadata {
    /// Canonical hostname, used when building remotes and content URIs.
    pub host: String,
    pub platform: Platform,
    pub route: Regex,
}

/// An externally supplied host definition, as returned by a [`HostProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDefinition {
    /// Route pattern source; must capture owner, repository, branch, and
    /// filename, in that order.
    pub regex: String,
    /// Canonical hostname for remotes and content URIs.
    pub host: String,
    /// Platform tag: `github`, `gitlab`, `bitbucket`, or a custom tag.
    pub platform: String,
}

/// Lookup hook into externally supplied custom host definitions.
///
/// Implementations must be safe for repeated concurrent reads; the registry
/// queries the provider once per unresolved hostname and never caches.
pub trait HostProvider {
    fn find(&self, hostname: &str) -> Option<HostDefinition>;
}

/// The no-custom-hosts provider.
impl HostProvider for () {
    fn find(&self, _hostname: &str) -> Option<HostDefinition> {
        None
    }
}

/// In-memory provider keyed by hostname. Mostly useful in tests and for
/// callers that assemble definitions programmatically.
impl HostProvider for std::collections::HashMap<String, HostDefinition> {
    fn find(&self, hostname: &str) -> Option<HostDefinition> {
        self.get(hostname).cloned()
    }
}

/// Hostname resolver over the built-in host table and an injected provider.
#[derive(Debug, Clone, Default)]
pub struct HostRegistry<P = ()> {
    provider: P,
}

impl HostRegistry<()> {
    /// A registry over the built-in hosts only.
    pub fn builtin() -> Self {
        Self { provider: () }
    }
}

impl<P: HostProvider> HostRegistry<P> {
    /// A registry that defers unknown hostnames to `provider`.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Resolves route metadata for `hostname`.
    ///
    /// Built-in hosts win; unknown hostnames are deferred to the provider,
    /// whose definitions are compiled lazily and then treated identically to
    /// built-ins. `Ok(None)` is not an error: it signals the caller that no
    /// definition exists and a fallback may apply.
    pub fn resolve(&self, hostname: &str) -> Result<Option<HostMetadata>> {
        if let Some(metadata) = builtin(hostname) {
            return Ok(Some(metadata));
        }
        let Some(definition) = self.provider.find(hostname) else {
            return Ok(None);
        };
        debug!(hostname, platform = %definition.platform, "resolved custom host definition");
        let route = Regex::new(&definition.regex).or_raise(|| ErrorKind::HostPattern {
            host: hostname.to_string(),
            pattern: definition.regex.clone(),
        })?;
        Ok(Some(HostMetadata {
            host: definition.host,
            platform: Platform::from_tag(&definition.platform),
            route,
        }))
    }

    /// Resolves just the platform for `hostname`.
    pub fn platform(&self, hostname: &str) -> Result<Option<Platform>> {
        Ok(self.resolve(hostname)?.map(|metadata| metadata.platform))
    }
}

fn builtin(hostname: &str) -> Option<HostMetadata> {
    match hostname {
        "github.com" | "www.github.run" | "github.run" => Some(HostMetadata {
            host: "github.com".to_string(),
            platform: Platform::Github,
            route: BLOB_ROUTE.clone(),
        }),
        "gitlab.com" | "www.gitlab.run" | "gitlab.run" => Some(HostMetadata {
            host: "gitlab.com".to_string(),
            platform: Platform::Gitlab,
            route: BLOB_ROUTE.clone(),
        }),
        // Permalinks say bitbucket.com, clones go to bitbucket.org.
        "bitbucket.com" | "bitbucket.org" | "www.bitbucket.run" | "bitbucket.run" => {
            Some(HostMetadata {
                host: "bitbucket.org".to_string(),
                platform: Platform::Bitbucket,
                route: SRC_ROUTE.clone(),
            })
        },
        _ => None,
    }
}
