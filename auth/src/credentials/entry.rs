use std::fmt;

use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// One user's identity and salted password hash.
///
/// The plaintext password is consumed at construction and never stored.
/// Entries are immutable; there is no password-change operation.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialEntry {
    username: String,
    email: String,
    password_hash: String,
}

impl CredentialEntry {
    /// Create an entry, hashing `password` with the default Argon2 cost.
    ///
    /// # Errors
    /// * `Empty` - Password is empty
    /// * `HashingFailed` - Password hashing operation failed
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> Result<Self, PasswordError> {
        Self::with_hasher(username, email, password, &PasswordHasher::new())
    }

    /// Create an entry, hashing `password` with the given hasher.
    ///
    /// # Errors
    /// * `Empty` - Password is empty
    /// * `HashingFailed` - Password hashing operation failed
    pub fn with_hasher(
        username: impl Into<String>,
        email: impl Into<String>,
        password: &str,
        hasher: &PasswordHasher,
    ) -> Result<Self, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }

        Ok(Self {
            username: username.into(),
            email: email.into(),
            password_hash: hasher.hash(password)?,
        })
    }

    /// Rebuild an entry from a previously stored PHC hash.
    pub fn from_hash(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Check a candidate password against the stored hash.
    ///
    /// Mismatch is an ordinary `false`. A stored hash that cannot be parsed
    /// also yields `false` so it can never be used to log in.
    pub fn check_password(&self, candidate: &str) -> bool {
        match PasswordHasher::new().verify(candidate, &self.password_hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(
                    username = %self.username,
                    error = %e,
                    "Stored password hash is unreadable"
                );
                false
            }
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl fmt::Debug for CredentialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEntry")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
