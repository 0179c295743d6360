use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::BackendConfig;
use crate::error::{BlockAgentError, BlockAgentResult};
use super::{
    API_SECRET_HEADER, BackendClient, BalanceQuery, CallRequest, DeployRequest, ExecuteRequest,
    NewWalletRequest, PlanRequest,
};

/// `BackendClient` over HTTP. Single attempt per call, no retries.
pub struct HttpBackend {
    client: Client,
    base_url: String,
    api_secret: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> BlockAgentResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("blockagent/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_secret: config.api_secret.clone().filter(|s| !s.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_secret(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_secret {
            Some(secret) => builder.header(API_SECRET_HEADER, secret),
            None => builder,
        }
    }

    async fn get<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> BlockAgentResult<Value> {
        let url = self.url(path);
        debug!("GET {}", url);
        let request = self.with_secret(self.client.get(&url).query(query));
        Self::send(request).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> BlockAgentResult<Value> {
        let url = self.url(path);
        debug!("POST {}", url);
        let request = self.with_secret(self.client.post(&url).json(body));
        Self::send(request).await
    }

    async fn send(request: RequestBuilder) -> BlockAgentResult<Value> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            error!("Backend error {}: {}", status, error_text);
            return Err(BlockAgentError::backend(status.as_u16(), error_text));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl BackendClient for HttpBackend {
    async fn ping(&self) -> BlockAgentResult<Value> {
        self.get("/ping", &[] as &[(&str, &str)]).await
    }

    async fn new_wallet(&self, request: &NewWalletRequest) -> BlockAgentResult<Value> {
        self.post("/wallet/new", request).await
    }

    async fn balance(&self, query: &BalanceQuery) -> BlockAgentResult<Value> {
        self.get("/balance", query).await
    }

    async fn deploy_contract(&self, request: &DeployRequest) -> BlockAgentResult<Value> {
        self.post("/contract/deploy", request).await
    }

    async fn call_contract(&self, request: &CallRequest) -> BlockAgentResult<Value> {
        self.post("/contract/call", request).await
    }

    async fn agent_plan(&self, request: &PlanRequest) -> BlockAgentResult<Value> {
        self.post("/agent/plan", request).await
    }

    async fn agent_execute(&self, request: &ExecuteRequest) -> BlockAgentResult<Value> {
        self.post("/agent/execute", request).await
    }
}
