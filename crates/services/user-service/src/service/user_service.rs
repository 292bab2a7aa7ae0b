//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{user_not_found_message, User, UserRole, Username};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Result of a delete-by-username request.
///
/// A miss is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted { rows: u64 },
    NotFound,
}

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by username
    async fn get_user_by_username(&self, username: &str) -> AppResult<User>;

    /// Create a new account; usernames are unique
    async fn create_user(&self, username: Username, role: UserRole) -> AppResult<User>;

    /// Permanently delete the account with this username
    async fn delete_user_by_username(&self, username: &Username) -> AppResult<DeletionOutcome>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(user_not_found_message(username)))
    }

    async fn create_user(&self, username: Username, role: UserRole) -> AppResult<User> {
        if self.repo.find_by_username(username.as_str()).await?.is_some() {
            return Err(AppError::conflict(format!("User {}", username)));
        }

        let user = self.repo.create(username.into_inner(), role).await?;
        tracing::info!(username = %user.username, role = %user.role, "User created");
        Ok(user)
    }

    async fn delete_user_by_username(&self, username: &Username) -> AppResult<DeletionOutcome> {
        let rows = self.repo.delete_by_username(username.as_str()).await?;

        Ok(match rows {
            0 => DeletionOutcome::NotFound,
            rows => DeletionOutcome::Deleted { rows },
        })
    }

    async fn ping(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};
    use uuid::Uuid;

    fn username(value: &str) -> Username {
        Username::parse(Some(value.to_string())).unwrap()
    }

    fn existing_user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: name.to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_delete_reports_deleted_when_rows_affected() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_username()
            .with(eq("alice"))
            .times(1)
            .returning(|_| Ok(1));

        let service = UserManager::new(Arc::new(repo));
        let outcome = assert_ok!(service.delete_user_by_username(&username("alice")).await);

        assert_eq!(outcome, DeletionOutcome::Deleted { rows: 1 });
    }

    #[tokio::test]
    async fn test_delete_reports_not_found_without_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_username().returning(|_| Ok(0));

        let service = UserManager::new(Arc::new(repo));
        let outcome = assert_ok!(service.delete_user_by_username(&username("ghost")).await);

        assert_eq!(outcome, DeletionOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_delete_propagates_repository_errors() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_username()
            .returning(|_| Err(AppError::internal("disk full")));

        let service = UserManager::new(Arc::new(repo));
        let err = assert_err!(service.delete_user_by_username(&username("alice")).await);

        assert_eq!(err.detail(), "disk full");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|name| Ok(Some(existing_user(name))));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let err = assert_err!(service.create_user(username("dave"), UserRole::User).await);

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_get_user_by_username_not_found_names_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let err = assert_err!(service.get_user_by_username("erin").await);

        assert_eq!(err.to_string(), "User erin not found.");
    }
}
