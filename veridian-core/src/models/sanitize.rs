use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizeRequest {
    pub input: String,
}

/// Format classifications the sanitizer reports for an input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SanitizeFormats {
    pub ascii: bool,
    pub bitcoin_address: bool,
    pub c_like_identifier: bool,
    pub coordinates: bool,
    // The service spells this field "crediCard" on the wire.
    #[serde(rename = "crediCard")]
    pub credit_card: bool,
    pub date: bool,
    pub discord_username: bool,
    pub doi: bool,
    pub domain: bool,
    pub e164_phone: bool,
    pub email: bool,
    pub emoji: bool,
    pub han_unification: bool,
    pub hashtag: bool,
    pub hyphen_word_break: bool,
    pub ipv6: bool,
    pub ip: bool,
    pub jira_ticket: bool,
    pub mac_address: bool,
    pub name: bool,
    pub number: bool,
    pub pan_from_gstin: bool,
    pub password: bool,
    pub port: bool,
    pub tel: bool,
    pub text: bool,
    pub semver: bool,
    pub ssn: bool,
    pub uuid: bool,
    pub url: bool,
    pub url_slug: bool,
    pub username: bool,
}

/// Content classes detected inside the input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SanitizeIncludes {
    pub spaces: bool,
    pub has_sql: bool,
    pub has_no_sql: bool,
    pub letters: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub symbols: bool,
    pub digits: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizeResponse {
    pub input: String,
    pub formats: SanitizeFormats,
    pub includes: SanitizeIncludes,
}
