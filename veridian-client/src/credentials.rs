// Credential store. Holds whichever of the two keys were configured and
// formats them as authorization values. Immutable after construction.

use sha2::{Digest, Sha256};
use std::fmt;

/// The two credential kinds the service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Root,
    Api,
}

/// Identity of a credential set, used to key the process-wide token cache.
/// Two clients configured with the same keys share one cache entry; clients
/// with different keys do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey([u8; 32]);

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..8] {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
    root: Option<String>,
    api: Option<String>,
}

impl CredentialSet {
    pub fn new(root: Option<String>, api: Option<String>) -> Self {
        Self { root, api }
    }

    pub fn has_root(&self) -> bool {
        self.root.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn has_api(&self) -> bool {
        self.api.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_root() && !self.has_api()
    }

    /// Format a credential as an authorization value. `None` when the kind
    /// was not configured; callers must check availability first.
    pub fn bearer(&self, kind: CredentialKind) -> Option<String> {
        let token = match kind {
            CredentialKind::Root => self.root.as_deref(),
            CredentialKind::Api => self.api.as_deref(),
        };
        token
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
    }

    /// Digest of the configured pair. Each kind is domain-separated so that
    /// ("a", None) and (None, "a") hash differently.
    pub fn cache_key(&self) -> CacheKey {
        let mut hasher = Sha256::new();
        hasher.update(b"root:");
        hasher.update(self.root.as_deref().unwrap_or(""));
        hasher.update(b"\napi:");
        hasher.update(self.api.as_deref().unwrap_or(""));
        CacheKey(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_formatting() {
        let creds = CredentialSet::new(Some("r00t".into()), Some("ap1".into()));
        assert_eq!(creds.bearer(CredentialKind::Root).unwrap(), "Bearer r00t");
        assert_eq!(creds.bearer(CredentialKind::Api).unwrap(), "Bearer ap1");
    }

    #[test]
    fn test_absent_kind_yields_none() {
        let creds = CredentialSet::new(None, Some("ap1".into()));
        assert!(!creds.has_root());
        assert!(creds.bearer(CredentialKind::Root).is_none());
        assert!(creds.has_api());
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let creds = CredentialSet::new(Some("".into()), None);
        assert!(creds.is_empty());
        assert!(creds.bearer(CredentialKind::Root).is_none());
    }

    #[test]
    fn test_cache_key_identity() {
        let a = CredentialSet::new(Some("r".into()), Some("k".into()));
        let b = CredentialSet::new(Some("r".into()), Some("k".into()));
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_cache_key_distinguishes_sets() {
        let root_only = CredentialSet::new(Some("k".into()), None);
        let api_only = CredentialSet::new(None, Some("k".into()));
        let both = CredentialSet::new(Some("k".into()), Some("k".into()));

        assert_ne!(root_only.cache_key(), api_only.cache_key());
        assert_ne!(root_only.cache_key(), both.cache_key());
        assert_ne!(api_only.cache_key(), both.cache_key());
    }
}
