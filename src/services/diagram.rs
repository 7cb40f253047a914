//! Diagram generation service: text description to Mermaid.js code.
//!
//! DESIGN
//! ======
//! Validates the requested diagram type against the registry, builds a single
//! completion prompt, makes exactly one provider call, and normalizes the
//! returned text: markdown fences are stripped and the family's syntax prefix
//! is prepended when the model omitted it. No retries; provider failures
//! surface to the route layer unchanged.

use tracing::info;

use crate::llm::LlmComplete;
use crate::llm::types::{GenerationParams, LlmError};
use crate::mermaid::DiagramType;

/// Sampling parameters for diagram generation. Low temperature keeps the
/// output close to deterministic syntax.
pub const GENERATION_PARAMS: GenerationParams =
    GenerationParams { temperature: 0.3, top_p: 0.95, top_k: 40, max_output_tokens: 2048 };

const SYSTEM_INSTRUCTION: &str = "You are a Mermaid.js expert. Convert user text into valid Mermaid.js code. \n\
    Return ONLY the code. No markdown backticks, no explanations, no additional text.\n\
    The code should be clean, properly formatted, and immediately usable in a Mermaid.js renderer.\n\
    Follow Mermaid.js syntax strictly.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// The requested diagram type is not in the registry.
    #[error("Invalid diagram type. Supported types: {}", DiagramType::supported_list())]
    InvalidType,

    /// The completion provider call failed.
    #[error(transparent)]
    Generation(#[from] LlmError),
}

/// A generated diagram: sanitized Mermaid code plus the validated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDiagram {
    pub code: String,
    pub diagram_type: DiagramType,
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Generate Mermaid code rendering `text` as a `type_id` diagram.
///
/// # Errors
///
/// [`DiagramError::InvalidType`] for unknown type ids (the provider is never
/// called); [`DiagramError::Generation`] when the provider call fails.
pub async fn generate_diagram(
    llm: &dyn LlmComplete,
    text: &str,
    type_id: &str,
) -> Result<GeneratedDiagram, DiagramError> {
    let Some(diagram_type) = DiagramType::from_id(type_id) else {
        return Err(DiagramError::InvalidType);
    };

    info!(diagram_type = diagram_type.id(), text_len = text.len(), "diagram: generate");

    let prompt = build_prompt(diagram_type, text);
    let raw = llm.complete(&prompt, GENERATION_PARAMS).await?;
    let code = sanitize_code(&raw, diagram_type.mermaid_prefix());

    info!(diagram_type = diagram_type.id(), code_len = code.len(), "diagram: generated");

    Ok(GeneratedDiagram { code, diagram_type })
}

// =============================================================================
// PROMPT
// =============================================================================

/// Fixed instruction block plus the per-call request. The caller's text is
/// embedded verbatim.
pub(crate) fn build_prompt(diagram_type: DiagramType, text: &str) -> String {
    format!(
        "{SYSTEM_INSTRUCTION}\n\nConvert the following text into a {} diagram using Mermaid.js syntax.\n\
         Start with '{}' and generate valid Mermaid code.\n\nText: {text}\n\n\
         Remember: Return ONLY the Mermaid.js code, no explanations.",
        diagram_type.id(),
        diagram_type.mermaid_prefix(),
    )
}

// =============================================================================
// SANITATION
// =============================================================================

/// Normalize raw model output into plausible Mermaid code.
///
/// Strips every markdown fence marker, trims surrounding whitespace, and
/// prepends the family prefix when the text does not already start with it.
/// Idempotent: applying it to its own output is a no-op.
pub(crate) fn sanitize_code(raw: &str, prefix: &str) -> String {
    let stripped = raw.trim().replace("```mermaid", "").replace("```", "");
    let code = stripped.trim();
    if code.starts_with(prefix) {
        code.to_string()
    } else {
        format!("{prefix}\n{code}")
    }
}

#[cfg(test)]
#[path = "diagram_test.rs"]
mod tests;
