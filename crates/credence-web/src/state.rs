//! Application state.

use std::sync::Arc;

use credence_core::TextAnalyzer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn TextAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>) -> Self {
        Self { analyzer }
    }
}
