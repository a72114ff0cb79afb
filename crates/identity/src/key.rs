//! Cache keying and storage directory derivation.

use std::path::PathBuf;

use crate::remote::Remote;

impl Remote {
    /// Deterministic cache key for this remote's normalized identity.
    ///
    /// Fingerprints `<username>@<canonical remote>` with blake3 and renders
    /// it as 64 lowercase hex characters. Remotes that normalize to the same
    /// identity share a key; that is the dedup contract this exists for.
    ///
    /// This is a content fingerprint, not a MAC — there is no secret, so the
    /// key identifies a repository but authenticates nothing.
    ///
    /// `username` overrides the owner drawn from the remote (it is lowercased
    /// first), for callers that key per-principal rather than per-owner.
    pub fn key(&self, username: Option<&str>) -> String {
        let identity = self.normalize();
        let username = match username {
            Some(username) => username.to_lowercase(),
            None => identity.username,
        };
        blake3::hash(format!("{username}@{}", identity.remote).as_bytes()).to_string()
    }

    /// Relative storage directory for a local clone of this remote:
    /// the lowercased hostname joined with the lowercased path segments.
    pub fn dir(&self) -> PathBuf {
        let mut path = PathBuf::from(self.hostname.to_lowercase());
        for segment in self.pathname.split('/').filter(|segment| !segment.is_empty()) {
            path.push(segment.to_lowercase());
        }
        path
    }
}
