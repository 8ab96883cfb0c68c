//! Credence Web Server
//!
//! Axum-based HTTP API in front of the text analyzer.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use credence_core::TextAnalyzer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/analyze", post(routes::analyze::analyze))
        .route("/health", get(routes::health::health))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    analyzer: Arc<dyn TextAnalyzer>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(analyzer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::StatusCode;
    use credence_core::analysis::model::AnalysisResult;
    use credence_core::CredenceResult;
    use tower::ServiceExt;

    struct StubAnalyzer;

    #[async_trait]
    impl TextAnalyzer for StubAnalyzer {
        async fn analyze(&self, _article: &str) -> CredenceResult<AnalysisResult> {
            Ok(AnalysisResult::fallback(""))
        }
    }

    fn test_app() -> Router {
        create_router(AppState::new(Arc::new(StubAnalyzer)))
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let response = test_app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_returns_405() {
        let response = test_app()
            .oneshot(
                axum::http::Request::builder()
                    .method("GET")
                    .uri("/analyze")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
