use super::errors::PasswordError;

/// Acceptance rules for new passwords.
///
/// Applied when an entry is registered, never at login: an existing entry
/// must keep working if the policy is tightened later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Check a candidate password against the policy.
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    /// * `Empty` - Password is empty
    /// * `TooShort` - Password has fewer than `min_length` characters
    pub fn check(&self, password: &str) -> Result<(), PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }

        let length = password.chars().count();
        if length < self.min_length {
            return Err(PasswordError::TooShort {
                min: self.min_length,
                actual: length,
            });
        }

        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}
