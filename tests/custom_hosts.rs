//! Custom host definitions flowing from configuration through the registry
//! into route parsing.

use std::path::Path;

use forgeroute::{GitConfig, HostRegistry, Platform};

const HOSTS_YAML: &str = r#"
hosts:
  - hostname: gitlab.internal
    routing:
      regex: "^/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)/-/blob/([A-Za-z0-9_.-]+)/(.+)$"
    host: gitlab.example.com
    platform: gitlab
  - hostname: git.example.com
    routing:
      regex: "^/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)/raw/([A-Za-z0-9_.-]+)/(.+)$"
    platform: gitea
"#;

#[test]
fn configured_host_parses_like_a_builtin() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("hosts.yaml", HOSTS_YAML)?;
        let config = GitConfig::load(Some(Path::new("hosts.yaml"))).unwrap();
        let registry = HostRegistry::with_provider(config);

        let route = forgeroute::route::parse(
            &registry,
            Some("gitlab.internal"),
            "/team/proj/-/blob/main/src/lib.rs",
        )
        .unwrap();
        assert_eq!(route.platform, Platform::Gitlab);
        // The entry's canonical host, not the queried alias, lands in the
        // remote and the content URI.
        assert_eq!(route.remote, "https://gitlab.example.com/team/proj.git");
        assert_eq!(route.uri, "https://gitlab.example.com/team/proj.git#main+src/lib.rs");
        Ok(())
    });
}

#[test]
fn configured_host_with_custom_tag_resolves_but_cannot_build_remote() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("hosts.yaml", HOSTS_YAML)?;
        let config = GitConfig::load(Some(Path::new("hosts.yaml"))).unwrap();
        let registry = HostRegistry::with_provider(config);

        let platform = registry.platform("git.example.com").unwrap().unwrap();
        assert_eq!(platform, Platform::Custom("gitea".to_string()));

        // The route shape matches, but no built-in remote rule exists for the
        // tag; callers with custom platforms build remotes themselves.
        let error = forgeroute::route::parse(
            &registry,
            Some("git.example.com"),
            "/team/proj/raw/main/src/lib.rs",
        )
        .unwrap_err();
        assert_eq!(*error, forgeroute::route::error::ErrorKind::UnknownPlatform);
        Ok(())
    });
}

#[test]
fn builtins_shadow_provider_entries() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "hosts.yaml",
            r#"
hosts:
  - hostname: github.com
    routing:
      regex: "^/(.+)/(.+)/raw/(.+)/(.+)$"
    platform: gitea
"#,
        )?;
        let config = GitConfig::load(Some(Path::new("hosts.yaml"))).unwrap();
        let registry = HostRegistry::with_provider(config);
        let metadata = registry.resolve("github.com").unwrap().unwrap();
        assert_eq!(metadata.platform, Platform::Github);
        Ok(())
    });
}
