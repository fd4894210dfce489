use anyhow::{Context, Result};
use osobna_extract::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds the log filter from `RUST_LOG` or, failing that, `server.logs.level`.
/// Both take full directive syntax, e.g. `info,osobna_extract=debug`.
fn log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter '{}'", directives))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging needs the configured level, so config comes first.
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let directives = std::env::var(EnvFilter::DEFAULT_ENV)
        .unwrap_or_else(|_| config.server.logs.level.clone());

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives)?)
        .json()
        .init();

    info!(
        "ID card extraction service starting (log filter: {})",
        directives
    );

    server::run(config).await?;

    Ok(())
}
