use clap::Parser;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use blockagent::cli::{self, Args, Commands};
use blockagent::error::BlockAgentResult;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args).await {
        error!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> BlockAgentResult<()> {
    info!("🧰 BlockAgent v{}", blockagent::VERSION);

    let overrides = args.overrides();

    match args.command {
        Commands::Run { text, address } => {
            cli::commands::run::handle_run(&overrides, cli::join_words(&text), address).await
        }
        Commands::Classify { text } => {
            cli::commands::classify::handle_classify(cli::join_words(&text))
        }
        Commands::Ping => {
            cli::commands::ping::handle_ping(&overrides).await
        }
        Commands::Agent { prompt, chain, approve, address } => {
            cli::commands::agent::handle_agent(&overrides, cli::join_words(&prompt), chain, approve, address).await
        }
        Commands::Shell => {
            cli::commands::shell::run_shell(&overrides).await
        }
        Commands::Config { action } => {
            cli::commands::config::handle_config(&overrides, action).await
        }
    }
}
