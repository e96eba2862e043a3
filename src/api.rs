//! HTTP API for the ROI engine.
//!
//! This module exposes a minimal REST API around the calculation
//! engine using the [`axum`](https://crates.io/crates/axum)
//! framework.  Clients submit a scenario (or a batch of scenarios)
//! and receive the derived metrics as JSON; a text endpoint returns
//! the ready-to-send summary digest.  The engine itself is
//! infallible, so the handlers have no error branch of their own —
//! malformed request bodies are rejected by the `Json` extractor.

use crate::costs::CostTable;
use crate::engine::{calculate, calculate_batch};
use crate::models::{CalculationInput, CalculationResult};
use crate::summary::build_summary;
use anyhow::Result;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Application state shared across requests.  The cost table is
/// read-only after startup, so a plain `Arc` is enough — no lock.
pub struct AppState {
    pub costs: CostTable,
}

/// Build the API router around a cost table.  Returns the router and
/// a handle to the state.
pub fn build_router(costs: CostTable) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState { costs });
    let router = Router::new()
        .route("/api/calculate", post(calculate_handler))
        .route("/api/calculate/batch", post(batch_handler))
        .route("/api/summary", post(summary_handler))
        .with_state(state.clone());
    (router, state)
}

/// Handler for POST /api/calculate
async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CalculationInput>,
) -> Json<CalculationResult> {
    Json(calculate(&state.costs, &input))
}

/// Handler for POST /api/calculate/batch
async fn batch_handler(
    State(state): State<Arc<AppState>>,
    Json(inputs): Json<Vec<CalculationInput>>,
) -> Json<Vec<CalculationResult>> {
    Json(calculate_batch(&state.costs, inputs))
}

/// Handler for POST /api/summary — same calculation, rendered as the
/// plain-text digest an outbound integration would forward verbatim.
async fn summary_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CalculationInput>,
) -> String {
    let result = calculate(&state.costs, &input);
    build_summary(&input, &result)
}

/// Launch the API server.  Builds the router around the given cost
/// table and binds to the supplied address, blocking until the
/// server terminates.
pub async fn serve(addr: &str, costs: CostTable) -> Result<()> {
    let (router, _state) = build_router(costs);
    let listener = TcpListener::bind(addr).await?;
    println!("Server listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
