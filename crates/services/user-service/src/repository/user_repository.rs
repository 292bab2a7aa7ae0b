//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, Statement,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::{User, UserRole};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create(&self, username: String, role: UserRole) -> AppResult<User>;

    /// Delete every row whose username matches, returning rows affected.
    ///
    /// Runs as a single `DELETE` statement, so concurrent calls for the
    /// same username see at most one non-zero count between them.
    async fn delete_by_username(&self, username: &str) -> AppResult<u64>;

    /// Check database connectivity
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn create(&self, username: String, role: UserRole) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            role: Set(role.to_string()),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn delete_by_username(&self, username: &str) -> AppResult<u64> {
        let result = UserEntity::delete_many()
            .filter(user::Column::Username.eq(username))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Transaction};

    fn exec_result(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_delete_by_username_issues_single_predicate_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(1)])
            .into_connection();
        let store = UserStore::new(db);

        let rows = store.delete_by_username("alice").await.unwrap();
        assert_eq!(rows, 1);

        assert_eq!(
            store.db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "users" WHERE "users"."username" = $1"#,
                ["alice".into()],
            )]
        );
    }

    #[tokio::test]
    async fn test_delete_by_username_reports_zero_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(0)])
            .into_connection();
        let store = UserStore::new(db);

        assert_eq!(store.delete_by_username("ghost").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_by_username_propagates_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".to_owned())])
            .into_connection();
        let store = UserStore::new(db);

        let err = store.delete_by_username("alice").await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert!(err.detail().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_find_by_username_maps_model_to_domain() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user::Model {
                id,
                username: "root".to_string(),
                role: "admin".to_string(),
                created_at: chrono::Utc::now(),
            }]])
            .into_connection();
        let store = UserStore::new(db);

        let user = store.find_by_username("root").await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.role, UserRole::Admin);
    }
}
