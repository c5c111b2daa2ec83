use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::credentials::errors::LoginError;

pub mod current_user;
pub mod home;
pub mod login;

/// Message returned for every authentication failure.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorData { message })).into_response()
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials => ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()),
            // Registration errors only arise from startup seeding
            _ => {
                tracing::error!(error = %err, "Login request failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use auth::PasswordError;
    use auth::RegistryError;
    use auth::TokenError;

    use super::*;

    #[test]
    fn test_invalid_credentials_maps_to_fixed_message() {
        assert_eq!(
            ApiError::from(LoginError::InvalidCredentials),
            ApiError::Unauthorized("Invalid credentials".to_string())
        );
    }

    #[test]
    fn test_infrastructure_errors_are_not_leaked() {
        let err = LoginError::Registry(RegistryError::Unavailable(
            "postgres://user:pw@db".to_string(),
        ));

        assert_eq!(
            ApiError::from(err),
            ApiError::InternalServerError("Internal server error".to_string())
        );
    }

    #[test]
    fn test_non_credential_errors_are_internal() {
        let errors = [
            LoginError::Password(PasswordError::Empty),
            LoginError::UsernameAlreadyExists("testuser".to_string()),
            LoginError::Token(TokenError::EncodingFailed("bad key".to_string())),
        ];

        for err in errors {
            assert_eq!(
                ApiError::from(err),
                ApiError::InternalServerError("Internal server error".to_string())
            );
        }
    }

    #[test]
    fn test_unauthorized_response_status() {
        let response = ApiError::Unauthorized("Invalid credentials".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
