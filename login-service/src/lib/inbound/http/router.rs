use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::current_user::current_user;
use super::handlers::home::home;
use super::handlers::login::login;
use super::middleware::authenticate as auth_middleware;
use crate::domain::credentials::service::LoginService;
use crate::outbound::repositories::InMemoryCredentialRepository;

#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService<InMemoryCredentialRepository>>,
}

pub fn create_router(login_service: Arc<LoginService<InMemoryCredentialRepository>>) -> Router {
    let state = AppState { login_service };

    let public_routes = Router::new()
        .route("/", get(home))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/me", get(current_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers carry bearer tokens and are never recorded
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri().path(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri().path(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
