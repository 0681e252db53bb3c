use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server-side verification plugins that can be attached to a verify call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerifyPlugin {
    CompromiseDetector,
    Nsfw,
    Reputation,
    TorNetwork,
    Typosquatting,
    UrlShortener,
    Blocklist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub iso: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardData {
    pub pan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
}

/// A credit card is accepted either as a bare PAN or as a detailed record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreditCardInput {
    Pan(String),
    Detailed(CreditCardData),
}

/// Input to the data-verifier capability. Every field is optional; the server
/// verifies whatever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCardInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<VerifyPlugin>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerdict {
    pub valid: Option<bool>,
    pub fraud: Option<bool>,
    pub proxied_email: Option<bool>,
    pub free_subdomain: Option<bool>,
    pub corporate: Option<bool>,
    pub email: Option<String>,
    pub real_user: Option<String>,
    pub did_you_mean: Option<bool>,
    pub custom_tld: Option<bool>,
    pub domain: Option<String>,
    pub role_account: Option<bool>,
    pub plugins: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneVerdict {
    pub valid: Option<bool>,
    pub fraud: Option<bool>,
    pub phone: Option<String>,
    pub prefix: Option<String>,
    pub number: Option<String>,
    pub country: Option<String>,
    pub plugins: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainVerdict {
    pub valid: Option<bool>,
    pub fraud: Option<bool>,
    pub free_subdomain: Option<bool>,
    pub custom_tld: Option<bool>,
    pub domain: Option<String>,
    pub plugins: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardVerdict {
    pub valid: Option<bool>,
    pub fraud: Option<bool>,
    pub test: Option<bool>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub credit_card: Option<String>,
    pub plugins: Option<HashMap<String, String>>,
}

/// IP lookup verdict. The wire payload reaches this struct only after
/// normalization, which is why the autonomous-system and address-class
/// fields deserialize from `_as`/`_class`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpVerdict {
    pub valid: bool,
    #[serde(rename = "type")]
    pub ip_type: Option<String>,
    #[serde(rename = "_class")]
    pub class: Option<String>,
    pub fraud: Option<bool>,
    pub ip: Option<String>,
    pub continent: Option<String>,
    pub continent_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub zip_code: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    pub offset: Option<f64>,
    pub currency: Option<String>,
    pub isp: Option<String>,
    pub org: Option<String>,
    #[serde(rename = "_as")]
    pub asn: Option<String>,
    pub asname: Option<String>,
    pub mobile: Option<bool>,
    pub proxy: Option<bool>,
    pub hosting: Option<bool>,
    pub plugins: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub email: Option<EmailVerdict>,
    pub phone: Option<PhoneVerdict>,
    pub domain: Option<DomainVerdict>,
    pub credit_card: Option<CreditCardVerdict>,
    pub ip: Option<IpVerdict>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = ValidateRequest {
            email: Some("user@example.com".into()),
            credit_card: Some(CreditCardInput::Pan("4242424242424242".into())),
            plugins: Some(vec![VerifyPlugin::TorNetwork, VerifyPlugin::Blocklist]),
            ..Default::default()
        };

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["email"], "user@example.com");
        assert_eq!(wire["creditCard"], "4242424242424242");
        assert_eq!(wire["plugins"], json!(["torNetwork", "blocklist"]));
        // Absent fields never appear on the wire.
        assert!(wire.get("phone").is_none());
    }

    #[test]
    fn test_ip_verdict_reads_normalized_fields() {
        let verdict: IpVerdict = serde_json::from_value(json!({
            "valid": true,
            "_as": "AS15169 Google LLC",
            "_class": "PUBLIC",
            "countryCode": "US",
            "unknownExtra": 42
        }))
        .unwrap();

        assert!(verdict.valid);
        assert_eq!(verdict.asn.as_deref(), Some("AS15169 Google LLC"));
        assert_eq!(verdict.class.as_deref(), Some("PUBLIC"));
        assert_eq!(verdict.country_code.as_deref(), Some("US"));
    }

    #[test]
    fn test_response_tolerates_missing_sections() {
        let response: ValidateResponse =
            serde_json::from_value(json!({"email": {"valid": true}})).unwrap();
        assert!(response.email.is_some());
        assert!(response.ip.is_none());
    }
}
