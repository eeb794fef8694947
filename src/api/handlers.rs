use axum::{extract::State, Json};
use serde_json::Value;

use crate::api::server::AppState;
use crate::tools::Tool;

pub async fn health_check() -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn get_tool_definition(State(state): State<AppState>) -> Json<Value> {
    Json(state.tool.definition())
}

/// Takes the raw body so malformed JSON still gets the adapter's own answer.
pub async fn invoke(State(state): State<AppState>, body: String) -> String {
    state.adapter.handle(&body).await
}
