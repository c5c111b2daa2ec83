use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::credentials::CredentialRegistry;
use crate::credentials::RegistryError;
use crate::jwt::SigningKey;
use crate::jwt::TokenClaims;
use crate::jwt::TokenError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Default lifetime of an access token.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

// Verified against on a registry miss so an unknown username costs the same
// Argon2 work as a wrong password.
const DECOY_PASSWORD: &str = "decoy-password-never-matches";

/// Authentication coordinator combining credential lookup, password
/// verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_ttl: Duration,
    decoy_hash: String,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
    /// Claims encoded in `access_token`
    pub claims: TokenClaims,
}

/// Authentication operation errors.
///
/// Unknown usernames and wrong passwords both surface as
/// `InvalidCredentials`; nothing in the error tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator with default Argon2 cost.
    ///
    /// # Arguments
    /// * `signing_key` - Validated key for token signing
    ///
    /// # Errors
    /// * `PasswordError` - Decoy hash could not be computed
    pub fn new(signing_key: &SigningKey) -> Result<Self, PasswordError> {
        Self::with_hasher(signing_key, PasswordHasher::new())
    }

    /// Create a new authenticator with a tuned password hasher.
    ///
    /// # Arguments
    /// * `signing_key` - Validated key for token signing
    /// * `password_hasher` - Hasher used for new entries and the decoy hash
    ///
    /// # Errors
    /// * `PasswordError` - Decoy hash could not be computed
    pub fn with_hasher(
        signing_key: &SigningKey,
        password_hasher: PasswordHasher,
    ) -> Result<Self, PasswordError> {
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD)?;

        Ok(Self {
            password_hasher,
            token_issuer: TokenIssuer::new(signing_key),
            token_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
            decoy_hash,
        })
    }

    /// Override the token lifetime.
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn password_hasher(&self) -> &PasswordHasher {
        &self.password_hasher
    }

    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.token_issuer
    }

    /// Verify credentials against `registry` and build token claims.
    ///
    /// # Errors
    /// See [`Authenticator::authenticate_at`].
    pub async fn authenticate<R>(
        &self,
        registry: &R,
        username: &str,
        password: &str,
    ) -> Result<TokenClaims, AuthenticationError>
    where
        R: CredentialRegistry + ?Sized,
    {
        self.authenticate_at(registry, username, password, Utc::now())
            .await
    }

    /// Verify credentials against `registry` as of `now`.
    ///
    /// # Returns
    /// Claims with `sub = username`, `iat = now`, `exp = now + ttl`
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Registry` - Registry lookup failed
    pub async fn authenticate_at<R>(
        &self,
        registry: &R,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenClaims, AuthenticationError>
    where
        R: CredentialRegistry + ?Sized,
    {
        let Some(entry) = registry.get(username).await? else {
            // Result discarded; only the elapsed time matters
            let _ = self.password_hasher.verify(password, &self.decoy_hash);
            tracing::debug!(username = %username, "Login rejected: unknown username");
            return Err(AuthenticationError::InvalidCredentials);
        };

        if !entry.check_password(password) {
            tracing::debug!(username = %username, "Login rejected: password mismatch");
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(TokenClaims::new(entry.username(), now, self.token_ttl))
    }

    /// Verify credentials and issue a signed access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Registry` - Registry lookup failed
    /// * `Token` - Token signing failed
    pub async fn login<R>(
        &self,
        registry: &R,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationResult, AuthenticationError>
    where
        R: CredentialRegistry + ?Sized,
    {
        let claims = self.authenticate(registry, username, password).await?;
        let access_token = self.token_issuer.issue(&claims)?;

        tracing::info!(username = %claims.sub, expires_at = claims.exp, "Access token issued");

        Ok(AuthenticationResult {
            access_token,
            claims,
        })
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `BadSignature` - Signature does not match
    /// * `Expired` - Token lifetime has elapsed
    /// * `Malformed` - Token cannot be decoded
    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.token_issuer.verify(token)
    }
}
