use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthOutcome;
use crate::domain::auth::models::TokenKind;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserDirectory;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// The subject admitted by an authorization gate, stored in request
/// extensions together with the raw credential it presented.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

/// Authorization gate for protected routes: verifies the bearer access
/// token and attaches the resolved subject, or rejects the request.
pub async fn require_access<D: UserDirectory>(
    State(state): State<AppState<D>>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?.to_string();
    admit(&state, TokenKind::Access, token, req, next).await
}

/// Authorization gate for the refresh endpoint: same decision pipeline,
/// but the credential comes from the refresh cookie and is verified
/// against the refresh secret.
pub async fn require_refresh<D: UserDirectory>(
    State(state): State<AppState<D>>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = state
        .refresh_cookie
        .extract(req.headers())
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing refresh token cookie".to_string()).into_response()
        })?
        .to_string();

    admit(&state, TokenKind::Refresh, token, req, next).await
}

/// Map a strategy outcome to admission or rejection.
///
/// Success attaches the subject and continues; failure and error both
/// short-circuit with an auth error. Codec-level causes were already
/// logged where they were detected and reach the client only as a
/// generic message.
async fn admit<D: UserDirectory>(
    state: &AppState<D>,
    kind: TokenKind,
    token: String,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    match state.auth_service.authenticate_token(kind, &token).await {
        AuthOutcome::Success(user) => {
            req.extensions_mut().insert(AuthenticatedUser { user, token });
            Ok(next.run(req).await)
        }
        AuthOutcome::Failure(reason) => {
            Err(ApiError::Unauthorized(reason.to_string()).into_response())
        }
        AuthOutcome::Error(cause @ AuthError::Internal(_)) => {
            tracing::error!(%cause, "Authorization gate failed");
            Err(ApiError::InternalServerError("Something went wrong".to_string()).into_response())
        }
        AuthOutcome::Error(cause) => Err(ApiError::Unauthorized(cause.to_string()).into_response()),
    }
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response()
    })
}
