//! Normalizer for provider replies.
//!
//! Gemini is instructed to return a bare JSON object, but replies often
//! arrive fenced in Markdown or wrapped in prose. Extraction is attempted
//! in order of strictness; when everything fails the caller gets the
//! fallback result instead of an error.

use serde_json::Value;
use tracing::debug;

use super::model::{AnalysisResult, Verdict};

const KEY_SCORE: &str = "credibility_score";
const KEY_VERDICT: &str = "verdict";
const KEY_CONFIDENCE: &str = "confidence";
const KEY_ANALYSIS: &str = "analysis";
const KEY_RED_FLAGS: &str = "red_flags";
const KEY_FACTORS: &str = "credibility_factors";
const KEY_TIPS: &str = "verification_tips";

const DEFAULT_RED_FLAGS: &str = "No major red flags identified";
const DEFAULT_FACTORS: &str = "Standard credibility markers present";
const DEFAULT_TIPS: &str = "Cross-check with multiple reliable sources";

/// Normalize a raw provider reply into an [`AnalysisResult`].
///
/// Never fails: unparseable replies produce the fallback result.
pub fn normalize_reply(reply: &str) -> AnalysisResult {
    match extract_json(reply) {
        Some(value) => from_value(&value),
        None => {
            debug!("Provider reply was not parseable JSON, returning fallback result");
            AnalysisResult::fallback(reply)
        }
    }
}

/// Extract a JSON object from the reply.
///
/// Tries, in order: direct parse, Markdown code fence, and the substring
/// between the first `{` and the last `}`.
fn extract_json(reply: &str) -> Option<Value> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if value.is_object() {
            return Some(value);
        }
    }

    if let Some(inner) = strip_code_fence(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(inner) {
            if value.is_object() {
                return Some(value);
            }
        }
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }

    serde_json::from_str::<Value>(&trimmed[start..=end])
        .ok()
        .filter(|value| value.is_object())
}

/// Strip a leading ```/```json fence and its closing fence.
fn strip_code_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let end = rest.rfind("```")?;
    Some(rest[..end].trim())
}

fn from_value(value: &Value) -> AnalysisResult {
    let score = clamp_int(value.get(KEY_SCORE), 0, 10, 0);
    let confidence = clamp_int(value.get(KEY_CONFIDENCE), 0, 100, 50);

    let verdict = value
        .get(KEY_VERDICT)
        .and_then(Value::as_str)
        .map(Verdict::parse)
        .unwrap_or(Verdict::Unknown);

    let explanation = string_field(value.get(KEY_ANALYSIS))
        .unwrap_or_else(|| "Analysis completed".to_string());

    AnalysisResult {
        score,
        verdict,
        confidence,
        explanation,
        red_flags: list_field(value.get(KEY_RED_FLAGS), DEFAULT_RED_FLAGS),
        credibility_factors: list_field(value.get(KEY_FACTORS), DEFAULT_FACTORS),
        tips: list_field(value.get(KEY_TIPS), DEFAULT_TIPS),
    }
}

/// Read an integer field, accepting JSON numbers or numeric strings,
/// clamped into [min, max].
fn clamp_int(value: Option<&Value>, min: i64, max: i64, default: i64) -> u8 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().map(|f| f.round() as i64),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
        _ => None,
    };

    n.unwrap_or(default).clamp(min, max) as u8
}

fn string_field(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Read a list field, accepting a JSON array of strings or a single string
/// split on newlines and semicolons. An absent field yields the default;
/// a field the provider supplied (even an empty array) is kept as-is.
fn list_field(value: Option<&Value>, default: &str) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => split_list(s),
        _ => vec![default.to_string()],
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(['\n', ';'])
        .map(|part| part.trim().trim_start_matches(['-', '*']).trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}
