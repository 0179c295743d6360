// Command dispatcher - turns a classified intent into one backend call
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::backend::{BackendClient, BalanceQuery, CallRequest, DeployRequest, NewWalletRequest};
use crate::contract;
use crate::error::BlockAgentResult;
use crate::intent::{Action, Intent};
use crate::session::Session;

pub const MISSING_BALANCE_ADDRESS: &str =
    "Please include the address in your request. Example: 'check balance of 0x...'";
pub const MISSING_CONTRACT_ADDRESS: &str = "Please paste the contract address.";
pub const NOT_UNDERSTOOD: &str =
    "I didn't understand. Try: 'create a new wallet', 'balance 0x... on aurora', 'deploy simple storage'";

/// What the user gets back from one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success { title: Option<String>, data: Value },
    Warning(String),
    Info(String),
    Failure(String),
}

impl Outcome {
    fn success(title: &str, data: Value) -> Self {
        Outcome::Success {
            title: Some(title.to_string()),
            data,
        }
    }

    fn untitled(data: Value) -> Self {
        Outcome::Success { title: None, data }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

pub struct Dispatcher<B: BackendClient> {
    backend: B,
}

impl<B: BackendClient> Dispatcher<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the backend call for `intent`. `address` overrides the session's
    /// contract address for storage reads and writes. Backend failures are
    /// reported as [`Outcome::Failure`], never returned as errors.
    pub async fn dispatch(&self, intent: &Intent, session: &mut Session, address: Option<&str>) -> Outcome {
        info!("Dispatching {} (chain: {})", intent.action, intent.chain_label());

        let result = match intent.action {
            Action::NewWallet => self.new_wallet(intent).await,
            Action::GetBalance => self.balance(intent).await,
            Action::DeploySimpleStorage => self.deploy(intent, session).await,
            Action::SetStorage => self.set_storage(intent, session, address).await,
            Action::ReadStorage => self.read_storage(intent, session, address).await,
            Action::Unknown => Ok(Outcome::Info(NOT_UNDERSTOOD.to_string())),
        };

        result.unwrap_or_else(|e| {
            warn!("{} failed: {}", intent.action, e);
            Outcome::Failure(e.to_string())
        })
    }

    async fn new_wallet(&self, intent: &Intent) -> BlockAgentResult<Outcome> {
        let data = self
            .backend
            .new_wallet(&NewWalletRequest { chain: intent.chain })
            .await?;
        Ok(Outcome::success("New wallet created", data))
    }

    async fn balance(&self, intent: &Intent) -> BlockAgentResult<Outcome> {
        let Some(address) = &intent.address else {
            return Ok(Outcome::Warning(MISSING_BALANCE_ADDRESS.to_string()));
        };

        let query = BalanceQuery {
            address: address.clone(),
            chain: intent.chain,
        };
        Ok(Outcome::untitled(self.backend.balance(&query).await?))
    }

    async fn deploy(&self, intent: &Intent, session: &mut Session) -> BlockAgentResult<Outcome> {
        let request = DeployRequest {
            abi: contract::simple_storage_abi(),
            bytecode: contract::SIMPLE_STORAGE_BYTECODE.to_string(),
            args: Vec::new(),
            chain: intent.chain,
        };

        let data = self.backend.deploy_contract(&request).await?;
        session.remember_deployment(data.get("address").and_then(Value::as_str).unwrap_or(""));
        Ok(Outcome::success("Contract deployed", data))
    }

    async fn set_storage(&self, intent: &Intent, session: &Session, address: Option<&str>) -> BlockAgentResult<Outcome> {
        let Some(address) = session.resolve_address(address) else {
            return Ok(Outcome::Warning(MISSING_CONTRACT_ADDRESS.to_string()));
        };

        let request = CallRequest {
            abi: contract::simple_storage_call_abi(),
            address,
            method: contract::SET_METHOD.to_string(),
            args: vec![json!(intent.value.unwrap_or(0))],
            write: true,
            chain: intent.chain,
        };
        let data = self.backend.call_contract(&request).await?;
        Ok(Outcome::success("Transaction sent", data))
    }

    async fn read_storage(&self, intent: &Intent, session: &Session, address: Option<&str>) -> BlockAgentResult<Outcome> {
        let Some(address) = session.resolve_address(address) else {
            return Ok(Outcome::Warning(MISSING_CONTRACT_ADDRESS.to_string()));
        };

        let request = CallRequest {
            abi: contract::simple_storage_call_abi(),
            address,
            method: contract::GET_METHOD.to_string(),
            args: Vec::new(),
            write: false,
            chain: intent.chain,
        };
        Ok(Outcome::untitled(self.backend.call_contract(&request).await?))
    }
}
