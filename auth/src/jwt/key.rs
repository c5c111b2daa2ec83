use std::fmt;

use super::errors::SigningKeyError;

/// Symmetric key used to sign and verify access tokens.
///
/// Construction is the only place the key is validated; holding a
/// `SigningKey` means the process is allowed to issue tokens.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// HS256 keys shorter than the digest size weaken the MAC.
    pub const MIN_LENGTH: usize = 32;

    /// Validate and wrap raw key material.
    ///
    /// # Errors
    /// * `Missing` - Key is empty (or only whitespace)
    /// * `TooShort` - Key has fewer than 32 bytes
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, SigningKeyError> {
        let secret = secret.into();

        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(SigningKeyError::Missing);
        }

        if secret.len() < Self::MIN_LENGTH {
            return Err(SigningKeyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: secret.len(),
            });
        }

        Ok(Self(secret))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningKey").field(&"<redacted>").finish()
    }
}
