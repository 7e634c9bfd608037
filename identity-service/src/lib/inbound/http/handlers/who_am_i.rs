use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::AuthResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Echo the subject resolved by the access-bearer gate.
///
/// The returned user comes from the directory, not from the token claims;
/// the presented access token is echoed back unchanged.
pub async fn who_am_i(
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthResponseData {
            user: (&authenticated.user).into(),
            access_token: authenticated.token,
        },
    ))
}
