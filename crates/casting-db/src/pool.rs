use casting_config::DatabaseConfig;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::error::StoreError;

/// Connects a PostgreSQL pool sized by `config.max_connections`.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url())
        .await?;

    info!(
        host = %config.host,
        database = %config.name,
        max_connections = config.max_connections,
        "Database pool ready"
    );

    Ok(pool)
}
