use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserDirectory;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Exchange the refresh token for a fresh access token.
///
/// The refresh-cookie gate has already verified the token and resolved its
/// subject; the raw token is re-signed here. The refresh token itself is
/// not rotated, so the cookie is left untouched.
pub async fn refresh_token<D: UserDirectory>(
    State(state): State<AppState<D>>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<RefreshResponseData>, ApiError> {
    let tokens = state
        .auth_service
        .refresh(&authenticated.token)
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RefreshResponseData {
            access_token: tokens.access_token,
            message: "Tokens refreshed successfully".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponseData {
    pub access_token: String,
    pub message: String,
}
