// Process-wide token cache.
// The first successful verification for a given credential set is cached for
// the lifetime of the process; later client constructions with the same keys
// reuse it without touching the network. The cache is keyed by the credential
// set's digest, so clients configured with different keys never share a
// verdict. The mutex is held across the verification round-trip, which keeps
// concurrent constructions from racing two in-flight calls for the same key.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use serde_json::{json, Map, Value};
use tracing::{error, info};
use veridian_core::Error;

use crate::credentials::{CacheKey, CredentialKind, CredentialSet};

/// Outcome of asking the service to confirm a credential set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificationRecord {
    pub root_valid: Option<bool>,
    pub api_valid: Option<bool>,
}

static CACHE: LazyLock<Mutex<HashMap<CacheKey, VerificationRecord>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// The cached verification verdict for a credential set, if any. `None`
/// means the set was never verified in this process, or every attempt so far
/// failed.
pub fn cached_record(credentials: &CredentialSet) -> Option<VerificationRecord> {
    let cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    cache.get(&credentials.cache_key()).copied()
}

/// Verify the credential set against the service unless a cached verdict
/// already exists. Verification failures are logged and swallowed: a client
/// constructed with bad credentials comes up unauthenticated rather than
/// failing, and the next construction retries because nothing was cached.
pub(crate) fn ensure_verified(
    http: &reqwest::blocking::Client,
    base_url: &str,
    credentials: &CredentialSet,
) {
    if credentials.is_empty() {
        return;
    }

    let key = credentials.cache_key();
    let mut cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if cache.contains_key(&key) {
        info!(cache_key = %key, "using cached tokens response");
        return;
    }

    match verify(http, base_url, credentials) {
        Ok(record) => {
            cache.insert(key, record);
            info!(cache_key = %key, "tokens initialized successfully");
        }
        Err(e) => error!("token validation error: {}", e),
    }
}

/// One verification round-trip. Propagates so `ensure_verified` can decide
/// what to swallow.
fn verify(
    http: &reqwest::blocking::Client,
    base_url: &str,
    credentials: &CredentialSet,
) -> Result<VerificationRecord, Error> {
    let mut tokens = Map::new();
    if let Some(bearer) = credentials.bearer(CredentialKind::Root) {
        tokens.insert("root".to_string(), Value::String(bearer));
    }
    if let Some(bearer) = credentials.bearer(CredentialKind::Api) {
        tokens.insert("private".to_string(), Value::String(bearer));
    }

    let response = http
        .post(format!("{}/v1/dvr/tokens", base_url))
        .json(&json!({ "tokens": tokens }))
        .send()
        .map_err(|e| Error::transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            body: response.text().unwrap_or_default(),
        });
    }

    let data: Value = response.json().map_err(|e| Error::transport(e.to_string()))?;

    let root_confirmed = is_affirmative(data.get("root"));
    let api_confirmed = is_affirmative(data.get("private"));

    if credentials.has_root() && !root_confirmed {
        return Err(Error::authentication("invalid root token"));
    }
    if credentials.has_api() && !api_confirmed {
        return Err(Error::authentication("invalid private token"));
    }

    Ok(VerificationRecord {
        root_valid: credentials.has_root().then_some(root_confirmed),
        api_valid: credentials.has_api().then_some(api_confirmed),
    })
}

/// The confirmation fields are boolean-ish: the service has answered with
/// booleans, numbers and strings across versions.
fn is_affirmative(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty() && s != "false",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_readings() {
        assert!(is_affirmative(Some(&json!(true))));
        assert!(is_affirmative(Some(&json!(1))));
        assert!(is_affirmative(Some(&json!("ok"))));
        assert!(!is_affirmative(Some(&json!(false))));
        assert!(!is_affirmative(Some(&json!(0))));
        assert!(!is_affirmative(Some(&json!(""))));
        assert!(!is_affirmative(Some(&json!("false"))));
        assert!(!is_affirmative(Some(&json!(null))));
        assert!(!is_affirmative(None));
    }

    #[test]
    fn test_empty_credentials_skip_verification() {
        // No server is listening here; an attempted call would be logged as
        // a failure and leave no record either way, so the real assertion is
        // that nothing panics and nothing is cached.
        let http = reqwest::blocking::Client::new();
        let creds = CredentialSet::default();
        ensure_verified(&http, "http://127.0.0.1:1", &creds);
        assert!(cached_record(&creds).is_none());
    }

    #[test]
    fn test_unreachable_server_is_swallowed_and_not_cached() {
        let http = reqwest::blocking::Client::new();
        let creds = CredentialSet::new(None, Some("unit-test-unreachable".into()));
        ensure_verified(&http, "http://127.0.0.1:1", &creds);
        assert!(cached_record(&creds).is_none());
    }
}
