use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;

/// State shared by every handler
///
/// Cloning is cheap: the pool is reference counted.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl ServerState {
    /// Open the database named by `config` and run migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_uri).await?;
        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// Build state around an existing pool (tests, seeding)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }
}
