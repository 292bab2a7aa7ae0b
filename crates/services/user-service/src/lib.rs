//! User Service Library
//!
//! Owns the `users` table: connection management, migrations, the
//! repository and the account use cases the gateway calls into.

pub mod infra;
pub mod repository;
pub mod service;

use tracing::info;

use common::{AppError, AppResult, DatabaseConfig};

use crate::infra::Database;

pub use repository::{UserRepository, UserStore};
pub use service::{DeletionOutcome, UserManager, UserService};

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(config: &DatabaseConfig, action: MigrateAction) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.url).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Connect, apply pending migrations and build the user service.
pub async fn connect_service(config: &DatabaseConfig) -> AppResult<UserManager> {
    let db = Database::connect(&config.url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let repo = std::sync::Arc::new(UserStore::new(db.get_connection()));
    Ok(UserManager::new(repo))
}
