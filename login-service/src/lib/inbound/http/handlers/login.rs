use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::credentials::ports::LoginServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Absent or non-string fields fall through to the lookup and fail like any bad credential
    let username = text_or_empty(body.username);
    let password = text_or_empty(body.password);

    state
        .login_service
        .login(&username, &password)
        .await
        .map_err(ApiError::from)
        .map(|result| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    access_token: result.access_token,
                },
            )
        })
}

fn text_or_empty(field: Option<Value>) -> String {
    match field {
        Some(Value::String(text)) => text,
        _ => String::new(),
    }
}

/// HTTP request body for logging in (raw JSON)
#[derive(Clone, PartialEq, Deserialize)]
pub struct LoginRequestBody {
    username: Option<Value>,
    password: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
}
