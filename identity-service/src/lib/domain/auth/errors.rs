use thiserror::Error;

use crate::user::errors::UserError;

/// Strategy rejection reasons.
///
/// Messages double as the user-visible response text. Unknown email and
/// wrong password produce the same variant on purpose, so the two cases
/// are byte-identical to a caller probing for accounts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Token verified but its subject no longer exists in the directory,
    /// e.g. the account was deleted after issuance.
    #[error("Incorrect token")]
    SubjectNotFound,
}

/// Errors produced by the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User already exists")]
    AlreadyExists,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Collapsed codec failure. The exact cause (expired, malformed,
    /// forged) is logged server-side and must not reach the client.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Internal authentication error: {0}")]
    Internal(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::AlreadyExists(_) => AuthError::AlreadyExists,
            other => AuthError::Internal(other.to_string()),
        }
    }
}

impl From<auth::PasswordError> for AuthError {
    fn from(err: auth::PasswordError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
