use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Configure SQLite PRAGMAs for WAL mode
async fn configure_pragmas(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA cache_size = -20000")
        .execute(pool)
        .await?;
    sqlx::query("PRAGMA temp_store = memory")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create a pool for the document store, creating the database file if needed.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    configure_pragmas(&pool).await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool_applies_pragmas() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();

        let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(journal_mode.0, "memory"); // WAL doesn't apply to :memory:

        let temp_store: (i32,) = sqlx::query_as("PRAGMA temp_store")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(temp_store.0, 2);
    }
}
