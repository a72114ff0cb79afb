//! Directory-prefix extraction for permalink paths.

use exn::ResultExt;
use forgeroute_hosts::{HostProvider, HostRegistry};
use forgeroute_identity::Remote;

use crate::error::{ErrorKind, Result};
use crate::parse::parse;

/// Returns the prefix of `pathname` up to (not including) the matched
/// filename — the "directory" portion of a permalink path.
///
/// The remote supplies the hostname context. Pathnames that carry the
/// hostname as their own leading segment are parsed through the
/// embedded-host fallback instead.
pub fn base_url<P: HostProvider>(
    registry: &HostRegistry<P>,
    remote: &str,
    pathname: &str,
) -> Result<String> {
    let decomposed =
        Remote::parse(remote).or_raise(|| ErrorKind::InvalidRemote(remote.to_string()))?;
    let embedded = pathname.starts_with(&format!("/{}", decomposed.hostname));
    let route = if embedded {
        parse(registry, None, pathname)?
    } else {
        parse(registry, Some(&decomposed.hostname), pathname)?
    };
    // The filename was captured from this very pathname, so it is always
    // found; cut at its last occurrence.
    let prefix = match pathname.rfind(&route.filename) {
        Some(index) => &pathname[..index],
        None => "",
    };
    Ok(prefix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "https://github.com/octocat/Hello-World.git",
        "/octocat/Hello-World/blob/master/docs/guide/intro.md",
        "/octocat/Hello-World/blob/master/"
    )]
    #[case(
        "https://github.com/octocat/Hello-World.git",
        "/github.com/octocat/Hello-World/blob/master/README.md",
        "/github.com/octocat/Hello-World/blob/master/"
    )]
    #[case(
        "https://alice@bitbucket.org/alice/proj.git",
        "/alice/proj/src/dev/src/main.go",
        "/alice/proj/src/dev/"
    )]
    fn test_base_url(#[case] remote: &str, #[case] pathname: &str, #[case] expected: &str) {
        assert_eq!(base_url(&HostRegistry::builtin(), remote, pathname).unwrap(), expected);
    }

    #[test]
    fn test_base_url_bad_remote() {
        let error =
            base_url(&HostRegistry::builtin(), "nonsense", "/a/b/blob/master/f").unwrap_err();
        assert!(matches!(*error, ErrorKind::InvalidRemote(_)));
    }

    #[test]
    fn test_base_url_route_failure_propagates() {
        let error = base_url(
            &HostRegistry::builtin(),
            "https://github.com/a/b.git",
            "/a/b/blob/master", // no filename
        )
        .unwrap_err();
        assert!(matches!(*error, ErrorKind::InvalidRoute(_)));
    }
}
