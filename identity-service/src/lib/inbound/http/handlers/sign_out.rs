use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::AppendHeaders;
use axum::response::IntoResponse;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserDirectory;
use crate::inbound::http::router::AppState;

/// Clear the refresh cookie for the authenticated subject.
///
/// Stateless tokens cannot be revoked server-side: the access token that
/// authorized this request stays valid until it expires naturally. Known
/// limitation of the stateless design.
pub async fn sign_out<D: UserDirectory>(
    State(state): State<AppState<D>>,
) -> Result<impl IntoResponse, ApiError> {
    let cookie = state.refresh_cookie.clear();

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        ApiSuccess::new(
            StatusCode::OK,
            SignOutResponseData {
                message: "Sign out successfully".to_string(),
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignOutResponseData {
    pub message: String,
}
