// Response normalization.
// The remote service is free to use any JSON field names; two of them ("as"
// and "class" inside IP lookup results) collide with identifiers reserved in
// typed result structures, so they are rewritten to "_as"/"_class" before the
// typed response is constructed. Everything else passes through untouched.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::Error;

/// Rewrite the colliding field names inside a data-verifier payload's `ip`
/// object: `as` becomes `_as` and `class` becomes `_class`. Values, all other
/// fields, and field order are preserved. Idempotent.
pub fn normalize_ip_fields(mut payload: Value) -> Value {
    if let Some(ip) = payload.get_mut("ip").and_then(Value::as_object_mut) {
        if ip.contains_key("as") || ip.contains_key("class") {
            // Rebuild positionally rather than remove-and-insert, which
            // would push the renamed keys to the end of the object.
            let renamed: Map<String, Value> = std::mem::take(ip)
                .into_iter()
                .map(|(key, value)| match key.as_str() {
                    "as" => ("_as".to_string(), value),
                    "class" => ("_class".to_string(), value),
                    _ => (key, value),
                })
                .collect();
            *ip = renamed;
        }
    }
    payload
}

/// Construct a typed response from a raw payload. Unknown fields are ignored
/// and missing optional fields default to absent.
pub fn into_typed<T: DeserializeOwned>(payload: Value) -> Result<T, Error> {
    Ok(serde_json::from_value(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renames_colliding_ip_fields() {
        let raw = json!({
            "ip": {
                "valid": true,
                "as": "AS15169 Google LLC",
                "class": "PUBLIC",
                "country": "US"
            }
        });

        let normalized = normalize_ip_fields(raw);
        let ip = normalized.get("ip").unwrap();

        assert_eq!(ip.get("_as").unwrap(), "AS15169 Google LLC");
        assert_eq!(ip.get("_class").unwrap(), "PUBLIC");
        assert!(ip.get("as").is_none());
        assert!(ip.get("class").is_none());
        assert_eq!(ip.get("country").unwrap(), "US");
    }

    #[test]
    fn test_preserves_field_order() {
        let raw = json!({
            "ip": {
                "valid": true,
                "as": "AS0",
                "country": "ES",
                "class": "PUBLIC"
            }
        });

        let normalized = normalize_ip_fields(raw);
        let keys: Vec<&str> = normalized
            .get("ip")
            .and_then(Value::as_object)
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(keys, vec!["valid", "_as", "country", "_class"]);
    }

    #[test]
    fn test_idempotent() {
        let raw = json!({
            "email": {"valid": true},
            "ip": {"valid": true, "as": "AS1", "class": "PUBLIC"}
        });

        let once = normalize_ip_fields(raw.clone());
        let twice = normalize_ip_fields(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_payload_without_ip_passes_through() {
        let raw = json!({"email": {"valid": false, "fraud": true}});
        assert_eq!(normalize_ip_fields(raw.clone()), raw);
    }

    #[test]
    fn test_ip_without_colliding_fields_untouched() {
        let raw = json!({"ip": {"valid": true, "country": "DE"}});
        assert_eq!(normalize_ip_fields(raw.clone()), raw);
    }
}
