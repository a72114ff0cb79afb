//! Permalink path construction, the inverse of route parsing.

use forgeroute_hosts::Platform;

use crate::error::{ErrorKind, Result};

/// Branch used when the caller does not name one.
pub const DEFAULT_BRANCH: &str = "master";

/// Builds the permalink web path for a file.
///
/// github and gitlab share the `blob` shape; bitbucket uses `src`. Custom
/// platform tags have no built-in shape and fail with
/// [`ErrorKind::UnknownPlatform`].
pub fn stringify(
    platform: &Platform,
    owner: &str,
    repository: &str,
    filename: &str,
    branch: Option<&str>,
) -> Result<String> {
    let branch = branch.unwrap_or(DEFAULT_BRANCH);
    let shape = match platform {
        Platform::Github | Platform::Gitlab => "blob",
        Platform::Bitbucket => "src",
        Platform::Custom(_) => exn::bail!(ErrorKind::UnknownPlatform),
    };
    let filename = filename.trim_start_matches('/');
    Ok(format!("/{owner}/{repository}/{shape}/{branch}/{filename}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Platform::Github, "/octocat/Hello-World/blob/master/README.md")]
    #[case(Platform::Gitlab, "/octocat/Hello-World/blob/master/README.md")]
    #[case(Platform::Bitbucket, "/octocat/Hello-World/src/master/README.md")]
    fn test_stringify_default_branch(#[case] platform: Platform, #[case] expected: &str) {
        assert_eq!(
            stringify(&platform, "octocat", "Hello-World", "README.md", None).unwrap(),
            expected
        );
    }

    #[test]
    fn test_stringify_bitbucket_nested_filename() {
        // The filename's own `src/` segment is untouched by the route shape.
        assert_eq!(
            stringify(&Platform::Bitbucket, "alice", "proj", "src/main.go", Some("dev")).unwrap(),
            "/alice/proj/src/dev/src/main.go"
        );
    }

    #[test]
    fn test_stringify_strips_leading_separator_from_filename() {
        assert_eq!(
            stringify(&Platform::Github, "a", "b", "/docs/x.md", None).unwrap(),
            "/a/b/blob/master/docs/x.md"
        );
    }

    #[test]
    fn test_stringify_custom_platform_fails() {
        let error = stringify(&Platform::Custom("gitea".to_string()), "a", "b", "f", None)
            .unwrap_err();
        assert_eq!(*error, ErrorKind::UnknownPlatform);
    }
}
