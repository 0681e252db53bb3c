// Veridian client facade.
// Owns the credential store and delegates every operation to the dispatcher.
// Construction resolves the endpoint, runs the best-effort update check and
// warms the process-wide token cache when an API key is configured; none of
// those steps can fail construction except an unbuildable HTTP client.

use std::time::Duration;

use tracing::error;
use veridian_core::models::{
    EncryptUrlRequest, EncryptUrlResponse, PasswordRequest, PasswordResponse, PrayerTimesRequest,
    PrayerTimesResponse, RandomRequest, RandomResponse, SanitizeRequest, SanitizeResponse,
    SendEmailRequest, SendEmailResponse, ValidateRequest, ValidateResponse,
};
use veridian_core::{into_typed, normalize_ip_fields, Error, Visibility};

use crate::config::ClientConfig;
use crate::credentials::CredentialSet;
use crate::dispatch::Dispatcher;
use crate::token_cache::{self, VerificationRecord};
use crate::update;

/// Main entry point for the Veridian API.
///
/// ```no_run
/// use veridian_client::{Client, ClientConfig};
///
/// let client = Client::new(ClientConfig {
///     api_key: Some("4c8b7675-6b69-4f8d-9f43-5a6f7f02c6c5".to_string()),
///     ..Default::default()
/// })?;
///
/// let verdict = client.validate_password(&veridian_client::models::PasswordRequest {
///     password: "123456".to_string(),
///     min: Some(16),
///     ..Default::default()
/// })?;
/// assert!(!verdict.valid);
/// # Ok::<(), veridian_client::Error>(())
/// ```
pub struct Client {
    dispatcher: Dispatcher,
}

impl Client {
    /// Create a client. Credential verification failures are logged, not
    /// raised: a client with bad keys comes up unauthenticated and its
    /// private calls fail with a configuration error later.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = config.resolve_base_url();

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;

        if config.check_updates {
            update::check_for_updates(&http);
        }

        let credentials = CredentialSet::new(config.root_api_key, config.api_key);
        if credentials.has_api() {
            token_cache::ensure_verified(&http, &base_url, &credentials);
        }

        Ok(Self {
            dispatcher: Dispatcher::new(http, base_url, credentials, config.server_email_config),
        })
    }

    /// The cached verification verdict for this client's credentials, if
    /// verification has succeeded in this process.
    pub fn verification_record(&self) -> Option<VerificationRecord> {
        token_cache::cached_record(self.dispatcher.credentials())
    }

    /// Verify email, phone, domain, credit card, IP or wallet data against
    /// the server-side fraud and validity checks. Requires an API key.
    pub fn validate(&self, request: &ValidateRequest) -> Result<ValidateResponse, Error> {
        let raw = self
            .dispatcher
            .invoke(Visibility::Private, "validate", serde_json::to_value(request)?)?;
        into_typed(normalize_ip_fields(raw))
    }

    /// Send an email through the hosted sender or the locally configured
    /// SMTP server. Requires a root API key or local email settings.
    pub fn send_email(&self, request: &SendEmailRequest) -> Result<SendEmailResponse, Error> {
        if !self.dispatcher.credentials().has_root() && !self.dispatcher.has_email_config() {
            error!("you must configure the email client settings");
            return Err(Error::configuration(
                "you must configure the email client settings",
            ));
        }
        let raw = self.dispatcher.invoke(
            Visibility::Private,
            "send_email",
            serde_json::to_value(request)?,
        )?;
        into_typed(raw)
    }

    /// Generate server-side secure random numbers in `[min, max]`.
    pub fn random(&self, request: &RandomRequest) -> Result<RandomResponse, Error> {
        let raw = self
            .dispatcher
            .invoke(Visibility::Private, "random", serde_json::to_value(request)?)?;
        into_typed(raw)
    }

    /// Prayer times for a location, grouped by timezone.
    pub fn prayer_times(&self, request: &PrayerTimesRequest) -> Result<PrayerTimesResponse, Error> {
        let raw = self.dispatcher.invoke(
            Visibility::Public,
            "prayer_times",
            serde_json::to_value(request)?,
        )?;
        into_typed(raw)
    }

    /// Classify an input string: recognized formats plus content classes
    /// such as embedded SQL.
    pub fn sanitize(&self, input: &str) -> Result<SanitizeResponse, Error> {
        let request = SanitizeRequest {
            input: input.to_string(),
        };
        let raw = self
            .dispatcher
            .invoke(Visibility::Public, "sanitize", serde_json::to_value(&request)?)?;
        into_typed(raw)
    }

    /// Check a password against the server's strength rules. The verdict and
    /// per-rule details come from the service, not local heuristics.
    pub fn validate_password(&self, request: &PasswordRequest) -> Result<PasswordResponse, Error> {
        let raw = self.dispatcher.invoke(
            Visibility::Public,
            "validate_password",
            serde_json::to_value(request)?,
        )?;
        into_typed(raw)
    }

    /// Obfuscate a URL behind a shareable short link.
    pub fn encrypt_url(&self, url: &str) -> Result<EncryptUrlResponse, Error> {
        let request = EncryptUrlRequest {
            url: url.to_string(),
        };
        let raw = self.dispatcher.invoke(
            Visibility::Public,
            "encrypt_url",
            serde_json::to_value(&request)?,
        )?;
        into_typed(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_without_credentials() {
        let client = Client::new(ClientConfig {
            check_updates: false,
            ..Default::default()
        });
        assert!(client.is_ok());
    }

    #[test]
    fn test_unverified_client_has_no_record() {
        let client = Client::new(ClientConfig {
            check_updates: false,
            ..Default::default()
        })
        .unwrap();
        assert!(client.verification_record().is_none());
    }
}
