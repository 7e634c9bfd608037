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

use super::cookie::RefreshCookie;
use super::handlers::refresh_token::refresh_token;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_out::sign_out;
use super::handlers::sign_up::sign_up;
use super::handlers::who_am_i::who_am_i;
use super::middleware::require_access;
use super::middleware::require_refresh;
use crate::domain::auth::service::AuthService;
use crate::domain::user::ports::UserDirectory;

pub struct AppState<D: UserDirectory> {
    pub auth_service: Arc<AuthService<D>>,
    pub refresh_cookie: RefreshCookie,
}

// Manual impl: `derive(Clone)` would demand `D: Clone`, which the Arc
// makes unnecessary.
impl<D: UserDirectory> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            refresh_cookie: self.refresh_cookie.clone(),
        }
    }
}

pub fn create_router<D: UserDirectory>(
    auth_service: Arc<AuthService<D>>,
    refresh_cookie: RefreshCookie,
) -> Router {
    let state = AppState {
        auth_service,
        refresh_cookie,
    };

    let public_routes = Router::new()
        .route("/api/auth/sign-up", post(sign_up::<D>))
        .route("/api/auth/sign-in", post(sign_in::<D>));

    // The refresh endpoint is the only route guarded by the refresh-cookie
    // strategy; everything else protected uses the bearer strategy.
    let refresh_routes = Router::new()
        .route("/api/auth/refresh-token", get(refresh_token::<D>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_refresh::<D>,
        ));

    let protected_routes = Router::new()
        .route("/api/auth/who-am-i", get(who_am_i))
        .route("/api/auth/sign-out", get(sign_out::<D>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_access::<D>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
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
        .merge(refresh_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
