use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}

/// Error raised when the process signing key is unusable.
///
/// Always a startup misconfiguration, never a per-request condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningKeyError {
    #[error("Signing key is missing or empty")]
    Missing,

    #[error("Signing key too short: minimum {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },
}
