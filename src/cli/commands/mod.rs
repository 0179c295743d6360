pub mod agent;
pub mod classify;
pub mod config;
pub mod ping;
pub mod run;
pub mod shell;

use tracing::debug;

use crate::backend::HttpBackend;
use crate::config::{BlockAgentConfig, ConfigManager, ConfigOverrides};
use crate::error::BlockAgentResult;

pub async fn load_config(overrides: &ConfigOverrides) -> BlockAgentResult<BlockAgentConfig> {
    ConfigManager::new().load_config(overrides).await
}

pub async fn connect(overrides: &ConfigOverrides) -> BlockAgentResult<HttpBackend> {
    let config = load_config(overrides).await?;
    debug!("Using backend {}", config.backend.url);
    HttpBackend::new(&config.backend)
}
