use mealdeck_db::SqliteStore;
use std::path::PathBuf;

pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<SqliteStore> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let pool = mealdeck_db::create_pool(&url, 1).await?;
    mealdeck_db::migrate(&pool).await?;

    Ok(SqliteStore(pool))
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}
