use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-user state carried between actions. Passed explicitly to the
/// dispatcher and agent flow; nothing here is global.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Address of the last SimpleStorage contract deployed in this session
    pub storage_addr: Option<String>,
    /// Last plan produced by `/agent/plan`
    pub plan: Option<Value>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly deployed contract. Empty addresses clear the slot.
    pub fn remember_deployment(&mut self, address: &str) {
        let address = address.trim();
        self.storage_addr = (!address.is_empty()).then(|| address.to_string());
    }

    /// Explicit address wins, then the last deployment.
    pub fn resolve_address(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .or_else(|| self.storage_addr.clone())
    }

    /// The `tool` field of the stored plan, if any.
    pub fn plan_tool(&self) -> Option<&str> {
        self.plan.as_ref()?.get("tool")?.as_str()
    }
}
