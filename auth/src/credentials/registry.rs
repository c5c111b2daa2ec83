use std::collections::HashMap;

use async_trait::async_trait;

use super::entry::CredentialEntry;
use super::errors::RegistryError;

/// Read-only lookup from username to credential entry.
///
/// Implemented by whatever store holds the entries; the authenticator only
/// ever reads through this trait.
#[async_trait]
pub trait CredentialRegistry: Send + Sync {
    /// Retrieve the entry registered under `username`.
    ///
    /// # Returns
    /// Optional entry (None if no such user)
    ///
    /// # Errors
    /// * `Unavailable` - Backing store could not be reached
    async fn get(&self, username: &str) -> Result<Option<CredentialEntry>, RegistryError>;
}

#[async_trait]
impl CredentialRegistry for HashMap<String, CredentialEntry> {
    async fn get(&self, username: &str) -> Result<Option<CredentialEntry>, RegistryError> {
        Ok(HashMap::get(self, username).cloned())
    }
}
