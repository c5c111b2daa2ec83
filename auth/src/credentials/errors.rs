use thiserror::Error;

/// Error returned by a credential registry backend.
///
/// A miss is not an error; lookups return `Ok(None)` for unknown usernames.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Credential registry unavailable: {0}")]
    Unavailable(String),
}
