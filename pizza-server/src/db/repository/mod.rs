//! Repository Module
//!
//! CRUD operations over the SQLite pool, one module per table.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

use shared::error::AppError;
use shared::validation::ValidationError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RepoError {
    /// The underlying message, without the variant prefix
    pub fn detail(&self) -> String {
        match self {
            RepoError::NotFound(msg) | RepoError::Database(msg) => msg.clone(),
            RepoError::Validation(e) => e.to_string(),
        }
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(e) => e.into(),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;

    use crate::db::DbService;

    /// Fresh migrated in-memory database
    pub async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_validation_error_keeps_message() {
        let err: AppError = RepoError::from(ValidationError::EmptyField {
            field: "Restaurant name",
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Restaurant name cannot be empty");
    }

    #[test]
    fn test_detail_drops_prefix() {
        let err = RepoError::Database("disk I/O error".into());
        assert_eq!(err.to_string(), "Database error: disk I/O error");
        assert_eq!(err.detail(), "disk I/O error");
    }

    #[test]
    fn test_database_error_is_500() {
        let err: AppError = RepoError::Database("disk I/O error".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
