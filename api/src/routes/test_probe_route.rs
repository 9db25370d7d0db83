//! GET /api/test — liveness and capability probe.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::core::app_state::AppState;

/// Probe payload: what the service is and what it can analyse.
#[derive(Debug, Serialize)]
pub struct TestProbeResponse {
    pub message: &'static str,
    pub llm: String,
    pub timestamp: String,
    pub features: Vec<&'static str>,
}

/// Handler: GET /api/test
pub async fn test_probe(State(state): State<Arc<AppState>>) -> Json<TestProbeResponse> {
    Json(TestProbeResponse {
        message: "backend service is up",
        llm: state.llm_label.clone(),
        timestamp: Utc::now().to_rfc3339(),
        features: vec![
            "DOM analysis",
            "CSS inspection",
            "network analysis",
            "multi-step analysis plans",
            "interactive suggestions",
        ],
    })
}
