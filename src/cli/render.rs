use serde_json::Value;

use crate::dispatch::Outcome;
use crate::intent::Intent;

pub fn intent_line(intent: &Intent) -> String {
    format!("Intent: `{}`  | Chain: `{}`", intent.action, intent.chain_label())
}

pub fn json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success { title: Some(title), data } => format!("✅ {}\n{}", title, json(data)),
        Outcome::Success { title: None, data } => json(data),
        Outcome::Warning(message) => format!("⚠️  {}", message),
        Outcome::Info(message) => format!("ℹ️  {}", message),
        Outcome::Failure(message) => format!("❌ {}", message),
    }
}

pub fn print_outcome(result: &Outcome) {
    println!("{}", outcome(result));
}
