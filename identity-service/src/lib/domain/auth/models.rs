use auth::TokenPair;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::AuthFailure;
use crate::domain::user::models::User;

/// The two token flavors a strategy can be asked to verify.
///
/// Each kind maps at compile time to its secret and transport; there is no
/// string-keyed strategy lookup at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bearer credential from the Authorization header
    Access,
    /// Long-lived credential from the refresh cookie
    Refresh,
}

/// Result of one strategy invocation.
///
/// `Failure` means the credentials were examined and rejected; `Error`
/// means verification itself broke down. The authorization gate maps each
/// arm deterministically to an HTTP result.
#[derive(Debug)]
pub enum AuthOutcome {
    /// Subject verified and re-fetched from the directory
    Success(User),
    /// Credentials rejected; the reason is the user-visible message
    Failure(AuthFailure),
    /// Verification broke down; the cause stays server-side
    Error(AuthError),
}

/// A subject together with its freshly issued token pair.
#[derive(Debug)]
pub struct SignedUser {
    pub user: User,
    pub tokens: TokenPair,
}
