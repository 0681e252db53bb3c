// Best-effort update check. Probes the registry for the latest published
// release and warns when this build is behind. Every failure path is
// silently ignored: the probe must never block or fail client construction.

use std::time::Duration;

use reqwest::header::USER_AGENT;
use serde_json::Value;
use tracing::warn;

const REGISTRY_URL: &str = "https://crates.io/api/v1/crates/veridian-client";
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

pub(crate) fn check_for_updates(http: &reqwest::blocking::Client) {
    let current = env!("CARGO_PKG_VERSION");
    if let Some(latest) = fetch_latest_version(http) {
        if is_newer(&latest, current) {
            warn!(
                "a newer veridian-client release is available: {} (running {})",
                latest, current
            );
        }
    }
}

fn fetch_latest_version(http: &reqwest::blocking::Client) -> Option<String> {
    let response = http
        .get(REGISTRY_URL)
        .header(
            USER_AGENT,
            concat!("veridian-client/", env!("CARGO_PKG_VERSION")),
        )
        .timeout(PROBE_TIMEOUT)
        .send()
        .ok()?;
    if !response.status().is_success() {
        return None;
    }
    let data: Value = response.json().ok()?;
    data.get("crate")?
        .get("max_version")?
        .as_str()
        .map(str::to_owned)
}

fn is_newer(candidate: &str, current: &str) -> bool {
    release_components(candidate) > release_components(current)
}

/// Numeric components of the release part of a version; pre-release and
/// build suffixes are ignored.
fn release_components(version: &str) -> Vec<u64> {
    version
        .split(['-', '+'])
        .next()
        .unwrap_or("")
        .split('.')
        .map(|part| part.parse().unwrap_or(0))
        .collect()
}
