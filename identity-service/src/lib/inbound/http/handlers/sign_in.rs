use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::AppendHeaders;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::AuthResponseData;
use crate::domain::user::ports::UserDirectory;
use crate::inbound::http::router::AppState;

pub async fn sign_in<D: UserDirectory>(
    State(state): State<AppState<D>>,
    Json(body): Json<SignInRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let signed = state
        .auth_service
        .sign_in(&body.email, &body.password)
        .await
        .map_err(ApiError::from)?;

    let cookie = state.refresh_cookie.set(&signed.tokens.refresh_token);

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        ApiSuccess::new(
            StatusCode::OK,
            AuthResponseData {
                user: (&signed.user).into(),
                access_token: signed.tokens.access_token,
            },
        ),
    ))
}

/// HTTP request body for sign-in (raw JSON)
///
/// No field validation happens here: an email that could never match a
/// stored account takes the same verification path as a wrong password.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    email: String,
    password: String,
}
