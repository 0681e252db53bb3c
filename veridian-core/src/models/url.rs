use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptUrlRequest {
    pub url: String,
}

/// Result of obfuscating a URL: the input, the short code assigned by the
/// service, and the full shareable link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptUrlResponse {
    pub original: String,
    pub code: String,
    pub encrypt: String,
}
