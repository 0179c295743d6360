// Configuration management: defaults, config file, environment, CLI flags
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BlockAgentError, BlockAgentResult};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const ENV_CONFIG_PATH: &str = "BLOCKAGENT_CONFIG";
pub const ENV_BACKEND_URL: &str = "BLOCKAGENT_BACKEND";
pub const ENV_API_SECRET: &str = "API_SECRET";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockAgentConfig {
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// REST base URL of the BlockAgent backend
    pub url: String,
    /// Shared secret sent as `x-api-secret`
    pub api_secret: Option<String>,
    /// Per-request timeout. Hosted free tiers can take close to a minute to wake up.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
            api_secret: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values supplied on the command line. They take precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub api_secret: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl BlockAgentConfig {
    /// Apply environment overrides through `lookup`, so callers and tests
    /// can supply their own source instead of the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty()) {
            self.backend.url = url;
        }
        if let Some(secret) = lookup(ENV_API_SECRET) {
            self.backend.api_secret = Some(secret);
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.backend_url {
            self.backend.url = url.clone();
        }
        if let Some(secret) = &overrides.api_secret {
            self.backend.api_secret = Some(secret.clone());
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.backend.timeout_secs = timeout;
        }
    }

    /// Normalize the backend URL and drop an empty secret.
    pub fn finalize(mut self) -> BlockAgentResult<Self> {
        self.backend.url = normalize_backend_url(&self.backend.url)?;
        self.backend.api_secret = self.backend.api_secret.filter(|s| !s.is_empty());
        if self.backend.timeout_secs == 0 {
            return Err(BlockAgentError::config("backend timeout must be at least one second"));
        }
        Ok(self)
    }
}

/// Turn a bare host into a URL. Hosts with a dot (other than localhost) are
/// assumed public and get `https://`; internal hostnames get `http://`.
pub fn normalize_backend_url(raw: &str) -> BlockAgentResult<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(BlockAgentError::config("backend URL is empty"));
    }

    let with_scheme = if raw.starts_with("http") {
        raw.to_string()
    } else if raw.contains('.') && !raw.contains("localhost") {
        format!("https://{}", raw)
    } else {
        format!("http://{}", raw)
    };

    // validate, but keep the caller's spelling
    url::Url::parse(&with_scheme)?;

    Ok(with_scheme.trim_end_matches('/').to_string())
}

pub struct ConfigManager {
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Config file from `$BLOCKAGENT_CONFIG`, else `<config dir>/blockagent/config.toml`.
    pub fn new() -> Self {
        let path = std::env::var(ENV_CONFIG_PATH)
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("blockagent").join("config.toml")));

        Self { path }
    }

    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Defaults, then the config file if it exists. Environment and CLI
    /// overrides are layered on by the caller.
    pub async fn load_file(&self) -> BlockAgentResult<BlockAgentConfig> {
        let Some(path) = &self.path else {
            return Ok(BlockAgentConfig::default());
        };

        if !tokio::fs::try_exists(path).await? {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(BlockAgentConfig::default());
        }

        debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        Ok(toml::from_str(&content)?)
    }

    /// Full resolution: defaults → file → process environment → `overrides`.
    pub async fn load_config(&self, overrides: &ConfigOverrides) -> BlockAgentResult<BlockAgentConfig> {
        let mut config = self.load_file().await?;
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        config.finalize()
    }

    pub async fn save_config(&self, config: &BlockAgentConfig) -> BlockAgentResult<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| BlockAgentError::config("no config directory available"))?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, toml::to_string_pretty(config)?).await?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
