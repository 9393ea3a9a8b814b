mod m0001;
mod pool;
mod store;
pub mod table;

pub use pool::*;
pub use store::*;

use sqlx_migrator::{Info, Migrate, Migrator, Plan};

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration)])?;

    Ok(migrator)
}

/// Applies every pending migration on `pool`.
pub async fn migrate(pool: &sqlx::SqlitePool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    migrator()?.run(&mut *conn, &Plan::apply_all()).await?;

    tracing::info!("Database migrated");

    Ok(())
}
