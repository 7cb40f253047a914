//! Router assembly.
//!
//! Binds the JSON API endpoints under a single Axum router with a permissive
//! CORS layer: the service is consumed by browser frontends on other origins,
//! so every route allows any origin, method, and header.

pub mod diagrams;

use axum::Router;
use axum::response::Json;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/generate", post(diagrams::generate))
        .route("/types", get(diagrams::list_types))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// `GET /` returns the service name, version, and endpoint listing.
async fn root() -> Json<Value> {
    Json(json!({
        "message": "FlowGen API - Text to Diagram Generator",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/generate": "POST - Generate diagram from text",
            "/types": "GET - Get supported diagram types"
        }
    }))
}

/// `GET /health` liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "FlowGen API" }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
