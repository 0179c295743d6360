#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;

use blockagent::backend::{
    BackendClient, BalanceQuery, CallRequest, DeployRequest, ExecuteRequest, NewWalletRequest, PlanRequest,
};
use blockagent::error::{BlockAgentError, BlockAgentResult};

/// In-memory backend that records every call and answers with canned JSON.
pub struct FakeBackend {
    pub calls: Mutex<Vec<(&'static str, Value)>>,
    pub response: Value,
    pub fail_with: Option<(u16, String)>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::responding(json!({ "ok": true }))
    }

    pub fn responding(response: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
            fail_with: None,
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            fail_with: Some((status, body.to_string())),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<(&'static str, Value)> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T: serde::Serialize>(&self, endpoint: &'static str, payload: &T) -> BlockAgentResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint, serde_json::to_value(payload)?));

        match &self.fail_with {
            Some((status, body)) => Err(BlockAgentError::backend(*status, body.clone())),
            None => Ok(self.response.clone()),
        }
    }
}

#[async_trait]
impl BackendClient for FakeBackend {
    async fn ping(&self) -> BlockAgentResult<Value> {
        self.record("/ping", &json!({}))
    }

    async fn new_wallet(&self, request: &NewWalletRequest) -> BlockAgentResult<Value> {
        self.record("/wallet/new", request)
    }

    async fn balance(&self, query: &BalanceQuery) -> BlockAgentResult<Value> {
        self.record("/balance", query)
    }

    async fn deploy_contract(&self, request: &DeployRequest) -> BlockAgentResult<Value> {
        self.record("/contract/deploy", request)
    }

    async fn call_contract(&self, request: &CallRequest) -> BlockAgentResult<Value> {
        self.record("/contract/call", request)
    }

    async fn agent_plan(&self, request: &PlanRequest) -> BlockAgentResult<Value> {
        self.record("/agent/plan", request)
    }

    async fn agent_execute(&self, request: &ExecuteRequest) -> BlockAgentResult<Value> {
        self.record("/agent/execute", request)
    }
}
