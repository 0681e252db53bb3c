// Capability registry for the Veridian remote API.
// Every remote operation the client can reach is declared here once, as a
// static descriptor resolved by (visibility, name). There is no runtime
// registration: an unknown name is a library defect, not user input.

use std::fmt;

use crate::error::Error;

/// Whether a capability may be called without an API credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named remote operation: its visibility and the endpoint path its wire
/// requests are posted to. The request body is built by the caller from the
/// typed input; descriptors themselves carry no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub visibility: Visibility,
    pub name: &'static str,
    pub path: &'static str,
}

/// Every capability the remote service exposes to this client.
pub const CAPABILITIES: &[Descriptor] = &[
    Descriptor {
        visibility: Visibility::Private,
        name: "validate",
        path: "/v1/private/data-verifier",
    },
    Descriptor {
        visibility: Visibility::Private,
        name: "send_email",
        path: "/v1/private/sender/send-email",
    },
    Descriptor {
        visibility: Visibility::Private,
        name: "random",
        path: "/v1/private/srng",
    },
    Descriptor {
        visibility: Visibility::Public,
        name: "prayer_times",
        path: "/v1/public/prayer-times",
    },
    Descriptor {
        visibility: Visibility::Public,
        name: "sanitize",
        path: "/v1/public/input-sanitizer",
    },
    Descriptor {
        visibility: Visibility::Public,
        name: "validate_password",
        path: "/v1/public/password-validator",
    },
    Descriptor {
        visibility: Visibility::Public,
        name: "encrypt_url",
        path: "/v1/public/url-encrypt",
    },
];

/// Resolve a capability by its (visibility, name) pair.
pub fn resolve(visibility: Visibility, name: &str) -> Result<&'static Descriptor, Error> {
    CAPABILITIES
        .iter()
        .find(|d| d.visibility == visibility && d.name == name)
        .ok_or_else(|| Error::unknown_capability(format!("{}/{}", visibility, name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_capability() {
        let desc = resolve(Visibility::Private, "validate").unwrap();
        assert_eq!(desc.path, "/v1/private/data-verifier");

        let desc = resolve(Visibility::Public, "encrypt_url").unwrap();
        assert_eq!(desc.path, "/v1/public/url-encrypt");
    }

    #[test]
    fn test_resolve_unknown_name_is_error() {
        let err = resolve(Visibility::Public, "frobnicate").unwrap_err();
        assert!(matches!(err, Error::UnknownCapability(_)));
    }

    #[test]
    fn test_resolve_respects_visibility() {
        // "validate" only exists as a private capability.
        assert!(resolve(Visibility::Public, "validate").is_err());
        assert!(resolve(Visibility::Private, "validate").is_ok());
    }

    #[test]
    fn test_names_are_unique_per_visibility() {
        for (i, a) in CAPABILITIES.iter().enumerate() {
            for b in &CAPABILITIES[i + 1..] {
                assert!(
                    !(a.visibility == b.visibility && a.name == b.name),
                    "duplicate capability {}/{}",
                    a.visibility,
                    a.name
                );
            }
        }
    }
}
