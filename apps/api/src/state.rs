use std::sync::Arc;

use crate::llm_client::InferenceBackend;
use crate::ui::theme::Theme;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Hosted model behind the `InferenceBackend` seam. `LlmClient` in production.
    pub inference: Arc<dyn InferenceBackend>,
    pub theme: Theme,
    /// Request body limit applied to uploads and the analyze form.
    pub max_upload_bytes: usize,
}
