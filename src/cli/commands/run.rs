use tracing::info;

use crate::cli::render;
use crate::config::ConfigOverrides;
use crate::dispatch::Dispatcher;
use crate::error::BlockAgentResult;
use crate::intent;
use crate::session::Session;

pub async fn handle_run(overrides: &ConfigOverrides, text: String, address: Option<String>) -> BlockAgentResult<()> {
    info!("🧰 Run: {}", text);

    let dispatcher = Dispatcher::new(super::connect(overrides).await?);
    let mut session = Session::new();

    let intent = intent::classify(&text);
    println!("{}", render::intent_line(&intent));

    let outcome = dispatcher.dispatch(&intent, &mut session, address.as_deref()).await;
    render::print_outcome(&outcome);

    Ok(())
}
