use tracing::{error, info};

use crate::backend::BackendClient;
use crate::cli::render;
use crate::config::ConfigOverrides;
use crate::error::BlockAgentResult;

pub async fn handle_ping(overrides: &ConfigOverrides) -> BlockAgentResult<()> {
    let backend = super::connect(overrides).await?;
    info!("🏓 Pinging {}", backend.base_url());

    match backend.ping().await {
        Ok(data) => println!("✅ Pong! {}", render::json(&data)),
        Err(e) => {
            error!("Ping failed: {}", e);
            println!("❌ {}", e);
        }
    }

    Ok(())
}
