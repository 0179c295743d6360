use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BlockAgentResult;
use crate::intent::Chain;

pub mod http;

pub use http::HttpBackend;

/// Header carrying the optional shared secret.
pub const API_SECRET_HEADER: &str = "x-api-secret";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWalletRequest {
    pub chain: Option<Chain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceQuery {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<Chain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub abi: Value,
    pub bytecode: String,
    pub args: Vec<Value>,
    pub chain: Option<Chain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub abi: Value,
    pub address: String,
    pub method: String,
    pub args: Vec<Value>,
    pub write: bool,
    pub chain: Option<Chain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub prompt: String,
    pub chain: Option<Chain>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub plan: Value,
    pub approve: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abi: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// One method per backend endpoint. Responses are passed through as raw JSON.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// `GET /ping`
    async fn ping(&self) -> BlockAgentResult<Value>;
    /// `POST /wallet/new`
    async fn new_wallet(&self, request: &NewWalletRequest) -> BlockAgentResult<Value>;
    /// `GET /balance`
    async fn balance(&self, query: &BalanceQuery) -> BlockAgentResult<Value>;
    /// `POST /contract/deploy`
    async fn deploy_contract(&self, request: &DeployRequest) -> BlockAgentResult<Value>;
    /// `POST /contract/call`
    async fn call_contract(&self, request: &CallRequest) -> BlockAgentResult<Value>;
    /// `POST /agent/plan`
    async fn agent_plan(&self, request: &PlanRequest) -> BlockAgentResult<Value>;
    /// `POST /agent/execute`
    async fn agent_execute(&self, request: &ExecuteRequest) -> BlockAgentResult<Value>;
}
