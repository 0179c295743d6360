//! # BlockAgent - natural-language front-end for blockchain operations
//!
//! BlockAgent maps short free-text commands ("create a new wallet",
//! "balance 0x... on aurora", "deploy simple storage") onto the REST
//! endpoints of a BlockAgent backend and renders the results.
//!
//! ## Pieces
//!
//! - **Intent classifier**: [`intent::classify`], a pure keyword matcher
//! - **Backend client**: [`backend::BackendClient`] with an HTTP implementation
//! - **Dispatcher**: picks the endpoint and payload for an intent
//! - **Agent flow**: plan, simulate, then approve via `/agent/*`
//! - **Session**: remembers the last deployed contract and plan
//!
//! ## Usage
//!
//! ```rust
//! use blockagent::intent::{classify, Action, Chain};
//!
//! let intent = classify("deploy simple storage on aurora");
//! assert_eq!(intent.action, Action::DeploySimpleStorage);
//! assert_eq!(intent.chain, Some(Chain::Aurora));
//! ```

pub mod agent;
pub mod backend;
pub mod cli;
pub mod config;
pub mod contract;
pub mod dispatch;
pub mod error;
pub mod intent;
pub mod session;

// Re-export commonly used types
pub use agent::AgentFlow;
pub use backend::{BackendClient, HttpBackend};
pub use config::{BlockAgentConfig, ConfigManager};
pub use dispatch::{Dispatcher, Outcome};
pub use error::{BlockAgentError, BlockAgentResult};
pub use intent::{Action, Chain, Intent, classify};
pub use session::Session;

/// The current version of BlockAgent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
