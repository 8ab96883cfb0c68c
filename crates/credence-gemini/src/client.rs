//! Gemini HTTP client.
//!
//! Uses the Generative Language API at
//! `/v1beta/models/{model}:generateContent` with a single user turn.
//! One call per analysis, no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use credence_core::analysis::model::AnalysisResult;
use credence_core::analysis::{parser, prompt};
use credence_core::{CredenceError, CredenceResult, TextAnalyzer};

/// Default Generative Language API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default analysis model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// Fails when GEMINI_API_KEY is unset or empty, so a misconfigured
    /// deployment aborts at startup rather than on the first request.
    pub fn from_env() -> CredenceResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(CredenceError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Gemini generateContent client.
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            config: GeminiConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
            client,
        }
    }

    /// Send one prompt and return the raw text of the first candidate.
    pub async fn generate(&self, prompt_text: &str) -> CredenceResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt_text.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        debug!(model = %self.config.model, chars = prompt_text.len(), "Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CredenceError::Http { status, message });
        }

        let body: GenerateResponse = response.json().await?;

        let text = extract_candidate_text(&body)
            .ok_or_else(|| CredenceError::provider("Empty response from Gemini API"))?;

        debug!(chars = text.len(), "Received Gemini candidate text");

        Ok(text)
    }
}

/// Concatenated text of the first candidate, if it has any non-empty part.
fn extract_candidate_text(response: &GenerateResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text = candidate
        .content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Production analyzer: prompt, one Gemini call, normalize.
#[derive(Clone)]
pub struct GeminiAnalyzer {
    client: GeminiClient,
}

impl GeminiAnalyzer {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: GeminiClient::new(config),
        }
    }

    /// Build the analyzer from environment configuration.
    pub fn from_env() -> CredenceResult<Self> {
        Ok(Self::new(GeminiConfig::from_env()?))
    }
}

#[async_trait]
impl TextAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, article: &str) -> CredenceResult<AnalysisResult> {
        let prompt_text = prompt::build_prompt(article);
        let reply = self.client.generate(&prompt_text).await?;
        let result = parser::normalize_reply(&reply);

        info!(score = result.score, verdict = ?result.verdict, "Analysis completed");

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_extract_candidate_text() {
        let body = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [
                            {"text": "{\"verdict\": "},
                            {"text": "\"FAKE\"}"}
                        ],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ],
            "modelVersion": "gemini-1.5-flash"
        }"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        let text = extract_candidate_text(&response).unwrap();
        assert_eq!(text, "{\"verdict\": \"FAKE\"}");
    }

    #[test]
    fn test_no_candidates_is_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_candidate_text(&response).is_none());

        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#,
        )
        .unwrap();
        assert!(extract_candidate_text(&response).is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut config = GeminiConfig::new("test-key");
        config.base_url = "http://localhost:9090/".to_string();

        let client = GeminiClient::new(config);
        assert_eq!(client.config.base_url, "http://localhost:9090");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Discard port, nothing listens there.
        let mut config = GeminiConfig::new("test-key");
        config.base_url = "http://127.0.0.1:9".to_string();

        let client = GeminiClient::new(config);
        let err = client.generate("some prompt").await.unwrap_err();
        assert!(matches!(err, CredenceError::Network(_)));
    }
}
