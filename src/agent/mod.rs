// Agent flow: Plan -> Simulate -> Approve
use serde_json::Value;
use tracing::{debug, info};

use crate::backend::{BackendClient, ExecuteRequest, PlanRequest};
use crate::contract;
use crate::error::{BlockAgentError, BlockAgentResult};
use crate::intent::Chain;
use crate::session::Session;

pub const TOOL_DEPLOY_CONTRACT: &str = "DEPLOY_CONTRACT";
pub const TOOL_CONTRACT_CALL: &str = "CONTRACT_CALL";

pub struct AgentFlow<'a, B: BackendClient> {
    backend: &'a B,
}

impl<'a, B: BackendClient> AgentFlow<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Ask the backend for a plan and keep it in the session. Returns the
    /// full response for display.
    pub async fn plan(&self, prompt: &str, chain: Option<Chain>, session: &mut Session) -> BlockAgentResult<Value> {
        info!("Planning: {}", prompt);
        let response = self
            .backend
            .agent_plan(&PlanRequest {
                prompt: prompt.to_string(),
                chain,
            })
            .await?;

        session.plan = response.get("plan").filter(|p| is_present(p)).cloned();
        debug!("Stored plan tool: {:?}", session.plan_tool());
        Ok(response)
    }

    /// Simulate (approve = false) or execute the stored plan.
    pub async fn execute(&self, approve: bool, address: Option<&str>, session: &mut Session) -> BlockAgentResult<Value> {
        let request = build_execute_request(session, approve, address)?;

        info!("Executing plan (approve: {})", approve);
        let response = self.backend.agent_execute(&request).await?;

        if let Some(deployed) = response
            .get("result")
            .and_then(Value::as_object)
            .and_then(|result| result.get("address"))
            .and_then(Value::as_str)
        {
            info!("Captured deployed address {}", deployed);
            session.remember_deployment(deployed);
        }

        Ok(response)
    }
}

/// Null, `false`, zero and empty strings, arrays or objects all mean
/// "nothing to execute".
pub fn is_present(plan: &Value) -> bool {
    match plan {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Attach the artifacts the plan's tool needs: bytecode and ABI for
/// deployments, a contract address for calls.
pub fn build_execute_request(session: &Session, approve: bool, address: Option<&str>) -> BlockAgentResult<ExecuteRequest> {
    let plan = session.plan.clone().ok_or(BlockAgentError::NoPlan)?;

    let mut request = ExecuteRequest {
        plan,
        approve,
        abi: None,
        bytecode: None,
        address: None,
    };

    match session.plan_tool() {
        Some(TOOL_DEPLOY_CONTRACT) => {
            request.abi = Some(contract::simple_storage_abi());
            request.bytecode = Some(contract::SIMPLE_STORAGE_BYTECODE.to_string());
        }
        Some(TOOL_CONTRACT_CALL) => {
            request.address = session.resolve_address(address);
        }
        _ => {}
    }

    Ok(request)
}
