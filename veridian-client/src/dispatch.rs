// Capability dispatch.
// Resolves a (visibility, name) pair against the static registry, enforces
// the credential gate for private capabilities before anything touches the
// network, and performs the blocking round-trip. Transport failures at this
// layer propagate: a caller awaiting a verdict needs to know it never came.

use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::{debug, error};
use veridian_core::models::ServerEmailConfig;
use veridian_core::{capability, Error, Visibility};

use crate::credentials::{CredentialKind, CredentialSet};

pub struct Dispatcher {
    http: reqwest::blocking::Client,
    base_url: String,
    credentials: CredentialSet,
    email_config: Option<ServerEmailConfig>,
}

impl Dispatcher {
    pub fn new(
        http: reqwest::blocking::Client,
        base_url: String,
        credentials: CredentialSet,
        email_config: Option<ServerEmailConfig>,
    ) -> Self {
        Self {
            http,
            base_url,
            credentials,
            email_config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialSet {
        &self.credentials
    }

    pub fn has_email_config(&self) -> bool {
        self.email_config.is_some()
    }

    /// Invoke a named capability with an already-serialized payload and
    /// return the raw response body.
    pub fn invoke(
        &self,
        visibility: Visibility,
        name: &str,
        mut payload: Value,
    ) -> Result<Value, Error> {
        let descriptor = capability::resolve(visibility, name)?;

        if descriptor.visibility == Visibility::Private && !self.credentials.has_api() {
            error!(capability = descriptor.name, "invalid private token");
            return Err(Error::configuration("invalid private token"));
        }

        // The email sender can be fulfilled through the caller's own SMTP
        // server; its payload carries the local transport settings when
        // they were configured.
        if descriptor.name == "send_email" {
            if let (Some(config), Some(body)) = (&self.email_config, payload.as_object_mut()) {
                body.insert("serverEmailConfig".to_string(), serde_json::to_value(config)?);
            }
        }

        let url = format!("{}{}", self.base_url, descriptor.path);
        debug!(capability = descriptor.name, %url, "dispatching");

        let mut request = self.http.post(&url).json(&payload);
        if descriptor.visibility == Visibility::Private {
            if let Some(bearer) = self.credentials.bearer(CredentialKind::Api) {
                request = request.header(AUTHORIZATION, bearer);
            }
        }

        let response = request.send().map_err(|e| Error::transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        response.json().map_err(|e| Error::transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dispatcher(credentials: CredentialSet) -> Dispatcher {
        Dispatcher::new(
            reqwest::blocking::Client::new(),
            // Nothing listens here; tests below must fail before dispatch.
            "http://127.0.0.1:1".to_string(),
            credentials,
            None,
        )
    }

    #[test]
    fn test_unknown_capability_is_library_defect() {
        let d = dispatcher(CredentialSet::default());
        let err = d.invoke(Visibility::Public, "frobnicate", json!({})).unwrap_err();
        assert!(matches!(err, Error::UnknownCapability(_)));
    }

    #[test]
    fn test_private_without_api_key_refused_locally() {
        let d = dispatcher(CredentialSet::new(Some("root-only".into()), None));
        let err = d
            .invoke(Visibility::Private, "validate", json!({"ip": "1.1.1.1"}))
            .unwrap_err();
        // Refused before the request is built; a network attempt against the
        // dead endpoint would surface as Transport instead.
        assert!(err.is_configuration());
    }
}
