// Typed request/response models for every capability. These are pure data
// containers; the remote service owns their semantics.

pub mod email;
pub mod password;
pub mod prayer;
pub mod random;
pub mod sanitize;
pub mod url;
pub mod validate;

pub use email::*;
pub use password::*;
pub use prayer::*;
pub use random::*;
pub use sanitize::*;
pub use url::*;
pub use validate::*;

use serde::{Deserialize, Serialize};

/// Wire scalar that some endpoints return as either a boolean or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrString {
    Bool(bool),
    String(String),
}

impl BoolOrString {
    /// Boolean reading: `true`, or any non-empty string other than "false".
    pub fn is_truthy(&self) -> bool {
        match self {
            BoolOrString::Bool(b) => *b,
            BoolOrString::String(s) => !s.is_empty() && s != "false",
        }
    }
}
