use async_trait::async_trait;
use auth::AuthenticationResult;
use auth::CredentialEntry;
use auth::CredentialRegistry;
use auth::TokenClaims;
use auth::TokenError;

use crate::domain::credentials::errors::LoginError;
use crate::domain::credentials::models::RegisterCommand;

/// Port for login domain service operations.
#[async_trait]
pub trait LoginServicePort: Send + Sync + 'static {
    /// Register a credential entry.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Errors
    /// * `Password` - Password violates the policy or could not be hashed
    /// * `UsernameAlreadyExists` - Username is already registered
    async fn register(&self, command: RegisterCommand) -> Result<(), LoginError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Registry` - Registry lookup failed
    /// * `Token` - Token signing failed
    async fn login(&self, username: &str, password: &str)
        -> Result<AuthenticationResult, LoginError>;

    /// Verify an access token.
    ///
    /// # Errors
    /// * `BadSignature` - Signature does not match
    /// * `Expired` - Token lifetime has elapsed
    /// * `Malformed` - Token cannot be decoded
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

/// Storage for credential entries.
///
/// Extends the read-only registry the authenticator sees with the write
/// side used at registration.
#[async_trait]
pub trait CredentialRepository: CredentialRegistry + 'static {
    /// Persist a new entry.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Registry` - Backing store failed
    async fn insert(&self, entry: CredentialEntry) -> Result<(), LoginError>;
}
