use mealdeck_db::SqliteStore;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<SqliteStore> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    mealdeck_db::migrate(&pool).await?;

    Ok(SqliteStore(pool))
}
