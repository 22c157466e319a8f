use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use tracing::{info, warn};

use crate::types::error::{AppError, ValidationErrors};

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseService {
    /// Connects and brings the schema up to date.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(uri);
        options.sqlx_logging(false);
        if uri.starts_with("sqlite::memory:") {
            // every pooled connection would get its own empty database
            options.max_connections(1).min_connections(1);
        }

        info!("Connecting to database...");
        let db = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }
}

/// A unique index rejected the write: report it like the pre-write check does.
pub(crate) fn unique_violation(err: DbErr, field: &str, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            warn!("Unique constraint hit past pre-write check: {}", detail);
            AppError::Validation(ValidationErrors::single(field, message))
        }
        _ => AppError::from(err),
    }
}
