mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::{debug, info};

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        info!("No configuration file at {}, using defaults", path);
        return Ok(Config::default());
    }

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
