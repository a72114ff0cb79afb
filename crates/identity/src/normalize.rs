//! Case-insensitive repository identity.

use crate::remote::Remote;

/// The case-normalized identity of a repository.
///
/// Two remotes that differ only in letter case, URL scheme, or a trailing
/// `.git` suffix normalize to the same `Identity`, which is what makes
/// identity comparison and cache keying case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    /// Lowercased owner.
    pub username: String,
    /// Lowercased repository name.
    pub repo: String,
    /// Canonical remote: `https://<hostname>/<username>/<repo>.git`.
    pub remote: String,
}

impl Remote {
    /// Lowercases the identity-bearing fields and rebuilds the canonical
    /// remote string.
    ///
    /// The canonical remote is always rendered with the `https` scheme, so
    /// `http://` and `https://` remotes of the same repository compare equal.
    /// Idempotent: normalizing the canonical remote is a fixed point.
    pub fn normalize(&self) -> Identity {
        let username = self.username.to_lowercase();
        let repo = self.repo.to_lowercase();
        let remote = format!("https://{}/{username}/{repo}.git", self.hostname.to_lowercase());
        Identity { username, repo, remote }
    }
}
