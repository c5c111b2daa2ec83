use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;
use auth::TokenError;
use chrono::DateTime;
use chrono::Utc;

use super::handlers::ApiError;
use crate::domain::credentials::ports::LoginServicePort;
use crate::inbound::http::router::AppState;

/// Extension type to store the verified token subject in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Middleware that verifies bearer tokens and adds the subject to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let claims = state.login_service.verify_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        match e {
            TokenError::Expired => ApiError::Unauthorized("Token expired".to_string()),
            _ => ApiError::Unauthorized("Invalid token".to_string()),
        }
    })?;

    let user = AuthenticatedUser {
        username: claims.subject().to_string(),
        issued_at: claims.issued_at(),
        expires_at: claims.expires_at(),
    };
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let missing = || ApiError::Unauthorized("Missing bearer token".to_string());

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(missing)?;

    let auth_str = auth_header.to_str().map_err(|_| missing())?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(missing)
}
