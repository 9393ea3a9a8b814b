use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing
///
/// `RUST_LOG` wins over `log_level`. JSON output is used when `json` is set
/// or `ENVIRONMENT=production`, the console format otherwise. Logs go to
/// stderr so command output on stdout stays clean.
pub fn init_observability(log_level: &str, json: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let is_production = std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false);

    if json || is_production {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::debug!(log_level, json, "Observability initialized");

    Ok(())
}
