use std::collections::HashMap;

use async_trait::async_trait;
use auth::CredentialEntry;
use auth::CredentialRegistry;
use auth::RegistryError;
use tokio::sync::RwLock;

use crate::domain::credentials::errors::LoginError;
use crate::domain::credentials::ports::CredentialRepository;

/// Process-local credential store.
///
/// Stand-in for a persistent store; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryCredentialRepository {
    entries: RwLock<HashMap<String, CredentialEntry>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialRegistry for InMemoryCredentialRepository {
    async fn get(&self, username: &str) -> Result<Option<CredentialEntry>, RegistryError> {
        Ok(self.entries.read().await.get(username).cloned())
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn insert(&self, entry: CredentialEntry) -> Result<(), LoginError> {
        let mut entries = self.entries.write().await;

        if entries.contains_key(entry.username()) {
            return Err(LoginError::UsernameAlreadyExists(
                entry.username().to_string(),
            ));
        }

        entries.insert(entry.username().to_string(), entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;

    use super::*;

    fn entry(username: &str) -> CredentialEntry {
        let hasher = PasswordHasher::with_params(1024, 1, 1).unwrap();
        CredentialEntry::with_hasher(username, "test@example.com", "password123", &hasher).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repository = InMemoryCredentialRepository::new();
        assert!(repository.is_empty().await);

        repository.insert(entry("testuser")).await.unwrap();

        let found = repository.get("testuser").await.unwrap();
        assert_eq!(found.map(|e| e.username().to_string()), Some("testuser".to_string()));
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_username() {
        let repository = InMemoryCredentialRepository::new();
        repository.insert(entry("testuser")).await.unwrap();

        assert_eq!(repository.get("nosuchuser").await.unwrap(), None);
        // Lookups are exact; no case folding
        assert_eq!(repository.get("TestUser").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_duplicate_username() {
        let repository = InMemoryCredentialRepository::new();
        repository.insert(entry("testuser")).await.unwrap();

        let result = repository.insert(entry("testuser")).await;
        assert_eq!(
            result,
            Err(LoginError::UsernameAlreadyExists("testuser".to_string()))
        );
        assert_eq!(repository.len().await, 1);
    }
}
