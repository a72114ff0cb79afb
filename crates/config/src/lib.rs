//! Custom forge host definitions, loaded from user configuration.
//!
//! Realizes the host registry's external configuration collaborator:
//! [`GitConfig`] implements [`HostProvider`], so a loaded configuration plugs
//! straight into `HostRegistry::with_provider`. Sources, later ones winning:
//!
//! 1. `hosts.{yaml,toml,json}` in the user configuration directory;
//! 2. an explicit file handed to [`GitConfig::load`];
//! 3. `FORGEROUTE_`-prefixed environment variables.

pub mod error;

use std::path::Path;

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Toml, Yaml};
use forgeroute_hosts::{HostDefinition, HostProvider};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ErrorKind, Result};

/// Environment variable prefix; `FORGEROUTE_HOSTS` style, `__` for nesting.
const ENV_PREFIX: &str = "FORGEROUTE_";

/// Routing rules for a custom host.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Routing {
    /// Route pattern source. Must capture owner, repository, branch, and
    /// filename, in that order.
    pub regex: String,
}

/// One custom host entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CustomHost {
    /// Hostname this entry answers for.
    pub hostname: String,
    pub routing: Routing,
    /// Canonical host for remotes and content URIs; defaults to `hostname`.
    #[serde(default)]
    pub host: Option<String>,
    /// Platform tag: `github`, `gitlab`, `bitbucket`, or a custom tag.
    pub platform: String,
}

/// Custom host definitions for the registry.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GitConfig {
    #[serde(default)]
    pub hosts: Vec<CustomHost>,
}

impl GitConfig {
    /// Loads host definitions from the standard sources, plus `path` when
    /// given (format picked by extension, YAML when unrecognized).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();
        if let Some(dirs) = ProjectDirs::from("", "", "forgeroute") {
            let dir = dirs.config_dir();
            figment = figment
                .merge(Yaml::file(dir.join("hosts.yaml")))
                .merge(Toml::file(dir.join("hosts.toml")))
                .merge(Json::file(dir.join("hosts.json")));
        }
        if let Some(path) = path {
            figment = match path.extension().and_then(|extension| extension.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Yaml::file(path)),
            };
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .or_raise(|| ErrorKind::Load)?;
        debug!(hosts = config.hosts.len(), "loaded custom host configuration");
        Ok(config)
    }
}

impl HostProvider for GitConfig {
    fn find(&self, hostname: &str) -> Option<HostDefinition> {
        self.hosts.iter().find(|entry| entry.hostname == hostname).map(|entry| HostDefinition {
            regex: entry.routing.regex.clone(),
            host: entry.host.clone().unwrap_or_else(|| entry.hostname.clone()),
            platform: entry.platform.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HOSTS_YAML: &str = r#"
hosts:
  - hostname: git.example.com
    routing:
      regex: "^/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)/raw/([A-Za-z0-9_.-]+)/(.+)$"
    platform: gitea
  - hostname: gitlab.internal
    routing:
      regex: "^/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)/blob/([A-Za-z0-9_.-]+)/(.+)$"
    host: gitlab.example.com
    platform: gitlab
"#;

    const HOSTS_TOML: &str = r#"
[[hosts]]
hostname = "git.example.com"
platform = "gitea"

[hosts.routing]
regex = "^/(.+)/(.+)/raw/(.+)/(.+)$"
"#;

    #[test]
    fn test_load_from_yaml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("hosts.yaml", HOSTS_YAML)?;
            let config = GitConfig::load(Some(Path::new("hosts.yaml"))).unwrap();
            assert_eq!(config.hosts.len(), 2);
            assert_eq!(config.hosts[0].hostname, "git.example.com");
            assert_eq!(config.hosts[0].platform, "gitea");
            Ok(())
        });
    }

    #[rstest]
    #[case("hosts.toml", HOSTS_TOML)]
    // Unrecognized extensions fall back to YAML.
    #[case("hosts.conf", "hosts:\n  - hostname: git.example.com\n    routing:\n      regex: \"^/(.+)/(.+)/raw/(.+)/(.+)$\"\n    platform: gitea\n")]
    fn test_load_by_extension(#[case] filename: &str, #[case] contents: &str) {
        figment::Jail::expect_with(|jail| {
            jail.create_file(filename, contents)?;
            let config = GitConfig::load(Some(Path::new(filename))).unwrap();
            assert_eq!(config.hosts.len(), 1);
            assert_eq!(config.hosts[0].hostname, "git.example.com");
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_yields_empty_config() {
        figment::Jail::expect_with(|_jail| {
            let config = GitConfig::load(Some(Path::new("does-not-exist.yaml"))).unwrap();
            assert!(config.hosts.is_empty());
            Ok(())
        });
    }

    #[test]
    fn test_find_maps_entry_to_definition() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("hosts.yaml", HOSTS_YAML)?;
            let config = GitConfig::load(Some(Path::new("hosts.yaml"))).unwrap();

            let definition = config.find("git.example.com").unwrap();
            assert_eq!(definition.host, "git.example.com"); // defaults to hostname
            assert_eq!(definition.platform, "gitea");

            let definition = config.find("gitlab.internal").unwrap();
            assert_eq!(definition.host, "gitlab.example.com");

            assert!(config.find("unknown.example.com").is_none());
            Ok(())
        });
    }
}
