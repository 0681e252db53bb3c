// Veridian core: transport-free foundation for the Veridian client SDK.
// Holds the capability registry, the shared error type, response
// normalization, and the typed request/response models. Networking lives in
// the veridian-client crate.

pub mod capability;
pub mod error;
pub mod models;
pub mod normalize;

pub use capability::{resolve, Descriptor, Visibility, CAPABILITIES};
pub use error::Error;
pub use normalize::{into_typed, normalize_ip_fields};
