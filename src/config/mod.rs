mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub const API_KEY_ENV: &str = "MY_GEMINI_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let api_key = env::var(API_KEY_ENV).ok();

    load_from(&config_path, api_key).await
}

/// Reads the YAML file at `config_path` (defaults when it does not exist)
/// and applies the credential override.
pub async fn load_from(config_path: &str, api_key: Option<String>) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let mut config: Config = match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = key;
    }

    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(format!(
            "no API key configured; set {} or llm.api_key",
            API_KEY_ENV
        )));
    }

    Ok(config)
}
