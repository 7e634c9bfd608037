use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserDirectory;
use crate::user::errors::UserError;

/// In-memory User Directory.
///
/// Substitutes for the Postgres adapter in tests; enforces the same
/// unique-email constraint.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users, for test assertions.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|existing| existing.email == user.email)
        {
            return Err(UserError::AlreadyExists(user.email.as_str().to_string()));
        }

        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::DisplayName;
    use crate::domain::user::models::EmailAddress;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(),
            name: DisplayName::new("Nobody".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let directory = InMemoryUserDirectory::new();
        assert!(directory.is_empty().await);

        let created = directory.create(user("nobody@test.com")).await.unwrap();

        let by_id = directory.find_by_id(&created.id).await.unwrap();
        assert!(by_id.is_some());

        let by_email = directory.find_by_email("nobody@test.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, created.id);

        assert_eq!(directory.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let directory = InMemoryUserDirectory::new();
        directory.create(user("nobody@test.com")).await.unwrap();

        let result = directory.create(user("nobody@test.com")).await;
        assert!(matches!(result, Err(UserError::AlreadyExists(_))));
        assert_eq!(directory.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let directory = InMemoryUserDirectory::new();

        assert!(directory.find_by_id(&UserId::new()).await.unwrap().is_none());
        assert!(directory
            .find_by_email("ghost@test.com")
            .await
            .unwrap()
            .is_none());
    }
}
