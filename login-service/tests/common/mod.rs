use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use auth::PasswordPolicy;
use auth::SigningKey;
use auth::TokenIssuer;
use login_service::domain::credentials::models::EmailAddress;
use login_service::domain::credentials::models::RegisterCommand;
use login_service::domain::credentials::models::Username;
use login_service::domain::credentials::ports::LoginServicePort;
use login_service::domain::credentials::service::LoginService;
use login_service::inbound::http::router::create_router;
use login_service::outbound::repositories::InMemoryCredentialRepository;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_USERNAME: &str = "testuser";
pub const TEST_PASSWORD: &str = "password123";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application with `testuser` registered and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let signing_key = SigningKey::new(TEST_SECRET).expect("Invalid test signing key");

        // Cheap Argon2 parameters keep the suite fast
        let hasher = PasswordHasher::with_params(1024, 1, 1).expect("Failed to build hasher");
        let authenticator = Arc::new(
            Authenticator::with_hasher(&signing_key, hasher).expect("Failed to build authenticator"),
        );

        let repository = Arc::new(InMemoryCredentialRepository::new());
        let login_service = Arc::new(LoginService::new(
            repository,
            authenticator,
            PasswordPolicy::new(8),
        ));

        login_service
            .register(RegisterCommand::new(
                Username::new(TEST_USERNAME.to_string()).unwrap(),
                EmailAddress::new("test@example.com".to_string()).unwrap(),
                TEST_PASSWORD.to_string(),
            ))
            .await
            .expect("Failed to seed test user");

        let router = create_router(login_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(&signing_key),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Log in and return the issued access token
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
