//! Diagram generation routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::mermaid::DiagramType;
use crate::services::diagram::{self, DiagramError};
use crate::state::AppState;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
pub struct GenerateBody {
    pub text: String,
    #[serde(rename = "type", default = "default_type_id")]
    pub diagram_type: String,
}

fn default_type_id() -> String {
    DiagramType::DEFAULT.id().to_string()
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub code: String,
    #[serde(rename = "type")]
    pub diagram_type: &'static str,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /generate` turns a text description into Mermaid diagram code.
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let generated = diagram::generate_diagram(state.llm.as_ref(), &body.text, &body.diagram_type).await?;
    Ok(Json(GenerateResponse { code: generated.code, diagram_type: generated.diagram_type.id() }))
}

/// `GET /types` lists the supported diagram types.
pub async fn list_types() -> Json<serde_json::Value> {
    let supported: Vec<&str> = DiagramType::ALL.iter().map(|t| t.id()).collect();
    Json(serde_json::json!({
        "supported_types": supported,
        "default": DiagramType::DEFAULT.id(),
    }))
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

/// JSON error response: an HTTP status plus a `detail` message body.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<DiagramError> for ApiError {
    fn from(err: DiagramError) -> Self {
        match &err {
            DiagramError::InvalidType => Self { status: StatusCode::BAD_REQUEST, detail: err.to_string() },
            DiagramError::Generation(source) => {
                warn!(error = %source, "diagram: generation failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    detail: format!("Error generating diagram: {source}"),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
#[path = "diagrams_test.rs"]
mod tests;
