use veridian_core::models::ServerEmailConfig;

/// Default cloud endpoint.
pub const CLOUD_BASE_URL: &str = "https://api.veridian.dev";
/// Endpoint used when the client is pointed at a locally running service.
pub const LOCAL_BASE_URL: &str = "http://localhost:3050";

/// Client configuration. Credentials and the endpoint are fixed at
/// construction; there is no way to change them on a live client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root API key; unlocks the hosted email sender.
    pub root_api_key: Option<String>,
    /// API key; required by every private capability.
    pub api_key: Option<String>,
    /// Use the local service instead of the cloud endpoint.
    pub local: bool,
    /// SMTP-like settings for sending email through the caller's own server.
    pub server_email_config: Option<ServerEmailConfig>,
    /// Overrides both fixed endpoints when set. Intended for tests.
    pub base_url: Option<String>,
    /// Probe the registry for a newer release at construction.
    pub check_updates: bool,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root_api_key: None,
            api_key: None,
            local: false,
            server_email_config: None,
            base_url: None,
            check_updates: true,
            timeout_ms: 30000,
        }
    }
}

impl ClientConfig {
    /// Resolve the endpoint this client will talk to.
    pub fn resolve_base_url(&self) -> String {
        if let Some(url) = &self.base_url {
            return url.trim_end_matches('/').to_string();
        }
        if self.local {
            LOCAL_BASE_URL.to_string()
        } else {
            CLOUD_BASE_URL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cloud() {
        let config = ClientConfig::default();
        assert_eq!(config.resolve_base_url(), CLOUD_BASE_URL);
    }

    #[test]
    fn test_local_selects_local_endpoint() {
        let config = ClientConfig {
            local: true,
            ..Default::default()
        };
        assert_eq!(config.resolve_base_url(), LOCAL_BASE_URL);
    }

    #[test]
    fn test_override_wins_and_trims_trailing_slash() {
        let config = ClientConfig {
            local: true,
            base_url: Some("http://127.0.0.1:9999/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_base_url(), "http://127.0.0.1:9999");
    }
}
