use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use login_service::config::Config;
use login_service::domain::credentials::ports::LoginServicePort;
use login_service::domain::credentials::service::LoginService;
use login_service::inbound::http::router::create_router;
use login_service::outbound::repositories::InMemoryCredentialRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_service=debug,auth=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "login-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        host = %config.server.host,
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        seed_users = config.seed_users.len(),
        "Configuration loaded"
    );

    // Refuse to start without a usable signing key
    let signing_key = config
        .signing_key()
        .context("SECRET_KEY (or APP__JWT__SECRET) must be set to at least 32 bytes")?;

    let authenticator = Arc::new(
        Authenticator::with_hasher(&signing_key, config.password_hasher()?)?
            .with_token_ttl(config.token_ttl()?),
    );
    let repository = Arc::new(InMemoryCredentialRepository::new());

    let login_service = Arc::new(LoginService::new(
        repository,
        authenticator,
        config.password_policy(),
    ));

    for seed in config.seed_users.clone() {
        let username = seed.username.clone();
        let command = seed
            .try_into_command()
            .with_context(|| format!("invalid seed user {}", username))?;
        login_service
            .register(command)
            .await
            .with_context(|| format!("failed to seed user {}", username))?;
    }

    let http_address = format!("{}:{}", config.server.host, config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(login_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
