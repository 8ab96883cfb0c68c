//! Analysis route handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::{error, info};

use credence_core::analysis::model::AnalysisResult;
use credence_core::analysis::validate_article;
use credence_core::CredenceError;

use crate::routes::{error_response, ErrorBody};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

/// POST /analyze — run one credibility analysis.
///
/// Validation failures return 400 before any outbound call; provider
/// failures return 503 with a generic message (details go to the log).
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorBody>)> {
    let article = validate_article(&req.text)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    info!(chars = article.chars().count(), "Analyzing article");

    match state.analyzer.analyze(article).await {
        Ok(result) => Ok(Json(result)),
        Err(CredenceError::Validation(msg)) => Err(error_response(StatusCode::BAD_REQUEST, msg)),
        Err(e) => {
            error!(error = %e, "Analysis failed");
            Err(error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "AI analysis service is temporarily unavailable. Please try again later.",
            ))
        }
    }
}
