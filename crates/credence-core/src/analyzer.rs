//! The analysis boundary.

use async_trait::async_trait;

use crate::analysis::model::AnalysisResult;
use crate::error::CredenceResult;

/// Turns article text into a structured credibility assessment.
///
/// The production implementation forwards the text to a hosted generative
/// model; tests substitute a scripted mock behind `Arc<dyn TextAnalyzer>`.
/// Callers are expected to validate the article first (see
/// [`crate::analysis::validate_article`]).
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn analyze(&self, article: &str) -> CredenceResult<AnalysisResult>;
}
