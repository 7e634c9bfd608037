use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenPair;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::AuthFailure;
use crate::domain::auth::models::AuthOutcome;
use crate::domain::auth::models::SignedUser;
use crate::domain::auth::models::TokenKind;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserDirectory;

/// Authentication domain service.
///
/// Owns the three verification strategies (local, access-bearer,
/// refresh-cookie) and the sign-up / sign-in / refresh orchestration.
/// The user directory is injected; token and password work is delegated
/// to the `auth` crate primitives. Stateless between requests.
pub struct AuthService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    issuer: Arc<TokenIssuer>,
    hasher: Arc<PasswordHasher>,
}

impl<D> AuthService<D>
where
    D: UserDirectory,
{
    /// Create a new auth service with injected dependencies.
    pub fn new(directory: Arc<D>, issuer: Arc<TokenIssuer>) -> Self {
        Self {
            directory,
            issuer,
            hasher: Arc::new(PasswordHasher::new()),
        }
    }

    /// Register a new user and issue their first token pair.
    ///
    /// # Errors
    /// * `AlreadyExists` - the email is already registered
    /// * `Internal` - hashing, signing or the directory failed
    pub async fn sign_up(&self, command: SignUpCommand) -> Result<SignedUser, AuthError> {
        if self
            .directory
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::AlreadyExists);
        }

        // Hashing is deliberately expensive; keep it off the async runtime.
        let hasher = Arc::clone(&self.hasher);
        let password = command.password.as_str().to_string();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("password hashing task failed: {e}")))??;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: chrono::Utc::now(),
        };

        let user = self.directory.create(user).await?;
        let tokens = self.issue_for(&user)?;

        Ok(SignedUser { user, tokens })
    }

    /// Verify email/password credentials and issue a token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown email or wrong password, unified
    /// * `Internal` - verification infrastructure failed
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignedUser, AuthError> {
        match self.authenticate_local(email, password).await {
            AuthOutcome::Success(user) => {
                let tokens = self.issue_for(&user)?;
                Ok(SignedUser { user, tokens })
            }
            AuthOutcome::Failure(_) => Err(AuthError::InvalidCredentials),
            AuthOutcome::Error(e) => Err(e),
        }
    }

    /// Mint a new access token from a presented refresh token.
    ///
    /// Purely a token operation; the directory is not consulted, so refresh
    /// keeps working even when the user store is unreachable.
    ///
    /// # Errors
    /// * `InvalidToken` - the refresh token failed verification
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        self.issuer.refresh(refresh_token).map_err(|e| {
            tracing::warn!(cause = %e, "Refresh token rejected");
            AuthError::InvalidToken
        })
    }

    /// Local strategy: resolve the subject by email and compare passwords.
    ///
    /// A missing account is compared against an empty hash so that unknown
    /// email and wrong password take the same path and yield the same
    /// failure.
    pub async fn authenticate_local(&self, email: &str, password: &str) -> AuthOutcome {
        let user = match self.directory.find_by_email(email).await {
            Ok(user) => user,
            Err(e) => return AuthOutcome::Error(AuthError::Internal(e.to_string())),
        };

        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_default();

        let hasher = Arc::clone(&self.hasher);
        let candidate = password.to_string();
        let matching =
            match tokio::task::spawn_blocking(move || hasher.verify(&candidate, &stored_hash))
                .await
            {
                Ok(matching) => matching,
                Err(e) => {
                    return AuthOutcome::Error(AuthError::Internal(format!(
                        "password verification task failed: {e}"
                    )))
                }
            };

        match user {
            Some(user) if matching => AuthOutcome::Success(user),
            _ => AuthOutcome::Failure(AuthFailure::InvalidCredentials),
        }
    }

    /// Token strategy: verify a signed token and re-fetch its subject.
    ///
    /// Only the subject identifier is trusted from the claims; the
    /// authoritative user record comes from the directory, so a token for
    /// a deleted account is rejected.
    pub async fn authenticate_token(&self, kind: TokenKind, token: &str) -> AuthOutcome {
        let verified = match kind {
            TokenKind::Access => self.issuer.verify_access(token),
            TokenKind::Refresh => self.issuer.verify_refresh(token),
        };

        let claims = match verified {
            Ok(claims) => claims,
            Err(e) => {
                tracing::warn!(cause = %e, ?kind, "Token rejected");
                return AuthOutcome::Error(AuthError::InvalidToken);
            }
        };

        let user_id = match UserId::from_string(&claims.sub) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(cause = %e, "Token subject is not a valid user ID");
                return AuthOutcome::Error(AuthError::InvalidToken);
            }
        };

        match self.directory.find_by_id(&user_id).await {
            Ok(Some(user)) => AuthOutcome::Success(user),
            Ok(None) => AuthOutcome::Failure(AuthFailure::SubjectNotFound),
            Err(e) => AuthOutcome::Error(AuthError::Internal(e.to_string())),
        }
    }

    fn issue_for(&self, user: &User) -> Result<TokenPair, AuthError> {
        self.issuer
            .issue(user.id, user.name.as_str(), user.email.as_str())
            .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))
    }
}
