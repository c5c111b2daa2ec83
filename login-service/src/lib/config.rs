use std::env;
use std::fmt;

use auth::PasswordError;
use auth::PasswordHasher;
use auth::PasswordPolicy;
use auth::SigningKey;
use auth::SigningKeyError;
use chrono::Duration;
use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigBuilder as Builder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::credentials::errors::LoginError;
use crate::domain::credentials::models::EmailAddress;
use crate::domain::credentials::models::RegisterCommand;
use crate::domain::credentials::models::Username;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    #[serde(default)]
    pub seed_users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

/// Argon2 cost and the acceptance policy for new passwords.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub min_length: usize,
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

/// User inserted into the registry at startup.
#[derive(Deserialize, Clone)]
pub struct SeedUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SeedUser {
    pub fn try_into_command(self) -> Result<RegisterCommand, LoginError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterCommand::new(username, email, self.password))
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. `SECRET_KEY` (signing key only)
    /// 2. Environment variables (APP__JWT__SECRET, APP__SERVER__HTTP_PORT, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults
    ///
    /// There is no default signing key; see [`Config::signing_key`].
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: APP__JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("jwt.secret", env::var("SECRET_KEY").ok())?
            .build()?;

        configuration.try_deserialize()
    }

    /// Built-in defaults every other source is layered on.
    pub fn defaults() -> Result<Builder<DefaultState>, ConfigError> {
        ConfigBuilder::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.http_port", 5000_i64)?
            .set_default("jwt.secret", "")?
            .set_default(
                "jwt.expiration_minutes",
                auth::authenticator::DEFAULT_TOKEN_TTL_MINUTES,
            )?
            .set_default("password.min_length", 8_i64)?
            .set_default(
                "password.memory_kib",
                i64::from(PasswordHasher::DEFAULT_MEMORY_KIB),
            )?
            .set_default(
                "password.iterations",
                i64::from(PasswordHasher::DEFAULT_ITERATIONS),
            )?
            .set_default(
                "password.parallelism",
                i64::from(PasswordHasher::DEFAULT_PARALLELISM),
            )
    }

    /// Validate the configured signing key.
    ///
    /// # Errors
    /// * `Missing` - No key was configured
    /// * `TooShort` - Key is shorter than 32 bytes
    pub fn signing_key(&self) -> Result<SigningKey, SigningKeyError> {
        SigningKey::new(self.jwt.secret.as_bytes())
    }

    /// Token lifetime.
    ///
    /// # Errors
    /// * `Message` - Lifetime is not positive
    pub fn token_ttl(&self) -> Result<Duration, ConfigError> {
        if self.jwt.expiration_minutes <= 0 {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be positive, got {}",
                self.jwt.expiration_minutes
            )));
        }
        Ok(Duration::minutes(self.jwt.expiration_minutes))
    }

    pub fn password_hasher(&self) -> Result<PasswordHasher, PasswordError> {
        PasswordHasher::with_params(
            self.password.memory_kib,
            self.password.iterations,
            self.password.parallelism,
        )
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy::new(self.password.min_length)
    }
}
