use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input to the secure random-number generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomRequest {
    pub min: i64,
    pub max: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomResponse {
    pub values: Vec<Value>,
    pub execution_time: f64,
}
