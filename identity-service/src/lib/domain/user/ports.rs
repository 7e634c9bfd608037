use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// The narrow User Directory contract consumed by the auth domain.
///
/// The subsystem never issues raw queries; everything it needs from the
/// user store goes through these three operations. Implementations are
/// injected at construction time so tests can substitute an in-memory
/// directory.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `AlreadyExists` - the email is already registered
    /// * `DatabaseError` - the store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Look up a user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - the store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Look up a user by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - the store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
