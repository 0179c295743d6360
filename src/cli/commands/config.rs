use tracing::info;

use crate::cli::ConfigAction;
use crate::config::{ConfigManager, ConfigOverrides};
use crate::error::BlockAgentResult;

pub async fn handle_config(overrides: &ConfigOverrides, action: ConfigAction) -> BlockAgentResult<()> {
    let manager = ConfigManager::new();
    let config = manager.load_config(overrides).await?;

    match action {
        ConfigAction::Show => {
            let path = manager
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string());
            println!("📁 Config file: {}", path);
            println!("  • Backend: {}", config.backend.url);
            println!("  • API secret: {}", if config.backend.api_secret.is_some() { "set" } else { "not set" });
            println!("  • Timeout: {}s", config.backend.timeout_secs);
        }
        ConfigAction::Init => {
            manager.save_config(&config).await?;
            info!("💾 Config written");
            if let Some(path) = manager.path() {
                println!("✅ Wrote {}", path.display());
            }
        }
    }

    Ok(())
}
