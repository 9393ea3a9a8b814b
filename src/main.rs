use anyhow::Result;
use clap::Parser;
use mealdeck::cli::{Cli, Commands, execute};
use mealdeck_db::SqliteStore;
use mealdeck_nutrition::{UsdaClient, UsdaClientConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealdeck::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealdeck::observability::init_observability(
        &config.observability.log_level,
        config.observability.json,
    )?;

    let pool =
        mealdeck_db::create_pool(&config.database.url, config.database.max_connections).await?;
    mealdeck_db::migrate(&pool).await?;

    if matches!(cli.command, Commands::Migrate) {
        return Ok(());
    }

    let store = SqliteStore(pool);
    let food = UsdaClient::new(UsdaClientConfig::from(&config.nutrition))?;
    let session = cli.session();
    let mut stdout = std::io::stdout().lock();

    execute(cli.command, &store, &food, &session, &mut stdout).await
}
