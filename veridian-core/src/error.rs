use thiserror::Error;

/// Error type shared by every Veridian operation.
///
/// Two families coexist. Configuration and authentication failures are
/// detected before any request leaves the process; transport, status and
/// decode failures happen once a capability call is actually in flight.
#[derive(Debug, Error)]
pub enum Error {
    /// A capability requires a credential or configuration value that was
    /// never supplied. Detected before dispatch; no request is sent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The remote service rejected a credential during token verification.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The payload did not match the expected response shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// No capability is registered under the requested name. This indicates
    /// a defect in the library, not bad user input.
    #[error("unknown capability: {0}")]
    UnknownCapability(String),
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport(message.into())
    }

    pub fn unknown_capability(name: impl Into<String>) -> Self {
        Error::UnknownCapability(name.into())
    }

    /// True for the soft failures of an unconfigured client: the call was
    /// refused locally and no network traffic happened.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}
