//! Credential verification and token issuance.
//!
//! The core of the login service:
//! - Credential entries with salted Argon2id password hashes
//! - A read-only registry trait for looking entries up by username
//! - HS256 access tokens with expiry
//! - Authentication coordination with uniform rejection
//!
//! Storage and transport are left to the caller: anything implementing
//! [`CredentialRegistry`] can back the authenticator.
//!
//! # Examples
//!
//! ## Credential Entries
//! ```
//! use auth::CredentialEntry;
//!
//! let entry = CredentialEntry::new("alice", "alice@example.com", "my_password").unwrap();
//! assert!(entry.check_password("my_password"));
//! assert!(!entry.check_password("not_my_password"));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{SigningKey, TokenClaims, TokenIssuer};
//! use chrono::{Duration, Utc};
//!
//! let key = SigningKey::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let issuer = TokenIssuer::new(&key);
//! let claims = TokenClaims::new("alice", Utc::now(), Duration::minutes(30));
//! let token = issuer.issue(&claims).unwrap();
//! let decoded = issuer.verify(&token).unwrap();
//! assert_eq!(decoded.subject(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::collections::HashMap;
//!
//! use auth::{Authenticator, AuthenticationError, CredentialEntry, SigningKey};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let key = SigningKey::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&key).unwrap();
//!
//! let entry = CredentialEntry::new("alice", "alice@example.com", "password123").unwrap();
//! let registry = HashMap::from([(entry.username().to_string(), entry)]);
//!
//! let result = auth.login(&registry, "alice", "password123").await.unwrap();
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.subject(), "alice");
//!
//! let rejected = auth.login(&registry, "mallory", "password123").await;
//! assert!(matches!(rejected, Err(AuthenticationError::InvalidCredentials)));
//! # }
//! ```

pub mod authenticator;
pub mod credentials;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use credentials::CredentialEntry;
pub use credentials::CredentialRegistry;
pub use credentials::RegistryError;
pub use jwt::SigningKey;
pub use jwt::SigningKeyError;
pub use jwt::TokenClaims;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
