//! HTTP surface for the page-assist backend.
//!
//! Two routes: a liveness/capability probe and the main question endpoint.
//! The decision logic lives in `ask-pipeline`; this crate validates input,
//! wires shared state, and maps domain errors onto HTTP statuses.

use std::sync::Arc;

pub mod core;
pub mod error_handler;

mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::core::app_state::AppState;
use crate::error_handler::{AppError, AppResult};
use crate::routes::{ask::ask_question_route::ask_question, test_probe_route::test_probe};

/// Builds the application router for the given state.
///
/// Kept separate from [`start`] so tests can drive the exact production
/// router in-process.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/test", get(test_probe))
        .route("/api/ask", post(ask_question))
        // Callers are browser extensions, so allow cross-origin requests.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the HTTP server and blocks until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let state = Arc::new(AppState::production()?);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = format!("0.0.0.0:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;
    info!(%addr, "listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
}
