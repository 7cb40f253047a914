//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the completion provider behind a trait object; everything else
//! is request-scoped.

use std::sync::Arc;

use crate::llm::LlmComplete;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the provider is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmComplete>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Arc<dyn LlmComplete>) -> Self {
        Self { llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
