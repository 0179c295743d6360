use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;
use crate::intent::Chain;

pub mod commands;
pub mod render;

#[derive(Parser)]
#[command(name = "blockagent")]
#[command(about = "🧰 BlockAgent - talk to your blockchain backend")]
#[command(long_about = "Natural-language front-end for the BlockAgent REST toolkit (Celo • Aurora • Harmony testnets)")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// REST base URL of the backend (env: BLOCKAGENT_BACKEND)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Shared secret sent as x-api-secret (env: API_SECRET)
    #[arg(long, global = true)]
    pub api_secret: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            backend_url: self.backend.clone(),
            api_secret: self.api_secret.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tell the agent what to do, e.g. "deploy simple storage on aurora"
    Run {
        /// Free-text command
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Contract address for storage reads and writes
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Show how a command would be understood, without calling the backend
    Classify {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Check that the backend is reachable
    Ping,

    /// Plan an action with the backend agent, then simulate or execute it
    Agent {
        /// What the agent should do, e.g. "send 0.01 to 0xabc.. on harmony"
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
        /// Target chain (backend default when omitted)
        #[arg(short, long)]
        chain: Option<Chain>,
        /// Execute for real instead of simulating
        #[arg(long)]
        approve: bool,
        /// Contract address for CONTRACT_CALL plans
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Interactive session that remembers deployed contracts and plans
    Shell,

    /// Inspect or write the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved configuration
    Show,
    /// Write the resolved configuration to the config file
    Init,
}

/// Join positional words back into one sentence.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
