use tracing::{error, info};

use crate::agent::AgentFlow;
use crate::cli::render;
use crate::config::ConfigOverrides;
use crate::error::BlockAgentResult;
use crate::intent::Chain;
use crate::session::Session;

pub async fn handle_agent(
    overrides: &ConfigOverrides,
    prompt: String,
    chain: Option<Chain>,
    approve: bool,
    address: Option<String>,
) -> BlockAgentResult<()> {
    info!("🤖 Agent: {}", prompt);

    let backend = super::connect(overrides).await?;
    let flow = AgentFlow::new(&backend);
    let mut session = Session::new();

    match flow.plan(&prompt, chain, &mut session).await {
        Ok(plan) => println!("📋 Plan\n{}", render::json(&plan)),
        Err(e) => {
            error!("Planning failed: {}", e);
            println!("❌ {}", e);
            return Ok(());
        }
    }

    if session.plan.is_none() {
        println!("⚠️  The backend did not return a plan to execute.");
        return Ok(());
    }

    let label = if approve { "🚀 Executing" } else { "🧪 Simulating" };
    println!("{}...", label);

    match flow.execute(approve, address.as_deref(), &mut session).await {
        Ok(result) => {
            println!("{}", render::json(&result));
            if let Some(addr) = &session.storage_addr {
                println!("📌 Contract address: {}", addr);
            }
        }
        Err(e) => {
            error!("Execution failed: {}", e);
            println!("❌ {}", e);
        }
    }

    Ok(())
}
