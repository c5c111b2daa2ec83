use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationResult;
use auth::Authenticator;
use auth::CredentialEntry;
use auth::PasswordPolicy;
use auth::TokenClaims;
use auth::TokenError;

use crate::domain::credentials::errors::LoginError;
use crate::domain::credentials::models::RegisterCommand;
use crate::domain::credentials::ports::CredentialRepository;
use crate::domain::credentials::ports::LoginServicePort;

/// Domain service implementation for login operations.
///
/// Concrete implementation of LoginServicePort with dependency injection.
pub struct LoginService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
    password_policy: PasswordPolicy,
}

impl<CR> LoginService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new login service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential storage implementation
    /// * `authenticator` - Shared authenticator holding the signing key
    /// * `password_policy` - Rules applied to passwords at registration
    pub fn new(
        repository: Arc<CR>,
        authenticator: Arc<Authenticator>,
        password_policy: PasswordPolicy,
    ) -> Self {
        Self {
            repository,
            authenticator,
            password_policy,
        }
    }
}

#[async_trait]
impl<CR> LoginServicePort for LoginService<CR>
where
    CR: CredentialRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<(), LoginError> {
        self.password_policy.check(&command.password)?;

        let entry = CredentialEntry::with_hasher(
            command.username.as_str(),
            command.email.as_str(),
            &command.password,
            self.authenticator.password_hasher(),
        )?;

        self.repository.insert(entry).await?;

        tracing::info!(username = %command.username, "Credential entry registered");

        Ok(())
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationResult, LoginError> {
        self.authenticator
            .login(self.repository.as_ref(), username, password)
            .await
            .map_err(LoginError::from)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.authenticator.validate_token(token)
    }
}

#[cfg(test)]
mod tests {
    use auth::CredentialRegistry;
    use auth::PasswordError;
    use auth::PasswordHasher;
    use auth::RegistryError;
    use auth::SigningKey;
    use mockall::mock;

    use super::*;
    use crate::domain::credentials::models::EmailAddress;
    use crate::domain::credentials::models::Username;

    mock! {
        pub TestCredentialRepository {}

        #[async_trait]
        impl CredentialRegistry for TestCredentialRepository {
            async fn get(&self, username: &str) -> Result<Option<CredentialEntry>, RegistryError>;
        }

        #[async_trait]
        impl CredentialRepository for TestCredentialRepository {
            async fn insert(&self, entry: CredentialEntry) -> Result<(), LoginError>;
        }
    }

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_params(1024, 1, 1).expect("Failed to build hasher")
    }

    fn authenticator() -> Arc<Authenticator> {
        let key = SigningKey::new("test-secret-key-for-jwt-signing-at-least-32-bytes").unwrap();
        Arc::new(Authenticator::with_hasher(&key, fast_hasher()).unwrap())
    }

    fn test_entry() -> CredentialEntry {
        CredentialEntry::with_hasher(
            "testuser",
            "test@example.com",
            "password123",
            &fast_hasher(),
        )
        .unwrap()
    }

    fn command(password: &str) -> RegisterCommand {
        RegisterCommand::new(
            Username::new("testuser".to_string()).unwrap(),
            EmailAddress::new("test@example.com".to_string()).unwrap(),
            password.to_string(),
        )
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_insert()
            .withf(|entry| {
                entry.username() == "testuser"
                    && entry.email() == "test@example.com"
                    && entry.password_hash().starts_with("$argon2id$")
                    && entry.check_password("password123")
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = LoginService::new(
            Arc::new(repository),
            authenticator(),
            PasswordPolicy::new(8),
        );

        let result = service.register(command("password123")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let mut repository = MockTestCredentialRepository::new();
        repository.expect_insert().times(0);

        let service = LoginService::new(
            Arc::new(repository),
            authenticator(),
            PasswordPolicy::new(8),
        );

        let result = service.register(command("short")).await;
        assert_eq!(
            result,
            Err(LoginError::Password(PasswordError::TooShort {
                min: 8,
                actual: 5
            }))
        );
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestCredentialRepository::new();

        repository.expect_insert().times(1).returning(|entry| {
            Err(LoginError::UsernameAlreadyExists(
                entry.username().to_string(),
            ))
        });

        let service = LoginService::new(
            Arc::new(repository),
            authenticator(),
            PasswordPolicy::default(),
        );

        let result = service.register(command("password123")).await;
        assert!(matches!(result, Err(LoginError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repository = MockTestCredentialRepository::new();
        let entry = test_entry();

        repository
            .expect_get()
            .withf(|username| username == "testuser")
            .times(1)
            .returning(move |_| Ok(Some(entry.clone())));

        let service = LoginService::new(
            Arc::new(repository),
            authenticator(),
            PasswordPolicy::default(),
        );

        let result = service
            .login("testuser", "password123")
            .await
            .expect("Login failed");

        let claims = service
            .verify_token(&result.access_token)
            .expect("Token verification failed");
        assert_eq!(claims.subject(), "testuser");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestCredentialRepository::new();
        let entry = test_entry();

        repository
            .expect_get()
            .times(1)
            .returning(move |_| Ok(Some(entry.clone())));

        let service = LoginService::new(
            Arc::new(repository),
            authenticator(),
            PasswordPolicy::default(),
        );

        let result = service.login("testuser", "wrongpassword").await;
        assert_eq!(result.unwrap_err(), LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut repository = MockTestCredentialRepository::new();

        repository.expect_get().times(1).returning(|_| Ok(None));

        let service = LoginService::new(
            Arc::new(repository),
            authenticator(),
            PasswordPolicy::default(),
        );

        let result = service.login("nosuchuser", "password123").await;
        assert_eq!(result.unwrap_err(), LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_registry_failure() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_get()
            .times(1)
            .returning(|_| Err(RegistryError::Unavailable("timeout".to_string())));

        let service = LoginService::new(
            Arc::new(repository),
            authenticator(),
            PasswordPolicy::default(),
        );

        let result = service.login("testuser", "password123").await;
        assert!(matches!(result, Err(LoginError::Registry(_))));
    }
}
