pub mod br_data;

pub use br_data::BrDataTool;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug)]
pub struct ToolResult {
    pub success: bool,
    pub output: Value,
}

/// A capability an orchestrating model can call with JSON parameters.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> Value;

    async fn execute(&self, params: Value) -> Result<ToolResult>;

    /// Name, description and input schema in one document.
    fn definition(&self) -> Value {
        serde_json::json!({
            "name": self.name(),
            "description": self.description(),
            "input_schema": self.parameters_schema(),
        })
    }
}
