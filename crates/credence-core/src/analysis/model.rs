//! Analysis result models.

use serde::{Deserialize, Serialize};

/// Categorical outcome of a credibility analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Credible,
    Suspicious,
    Fake,
    Mixed,
    /// Fallback when the provider reply could not be interpreted.
    Unknown,
}

impl Verdict {
    /// Parse a provider-supplied verdict string, case-insensitively.
    /// Unrecognized values map to `Unknown`.
    pub fn parse(s: &str) -> Verdict {
        match s.trim().to_ascii_uppercase().as_str() {
            "CREDIBLE" => Verdict::Credible,
            "SUSPICIOUS" => Verdict::Suspicious,
            "FAKE" => Verdict::Fake,
            "MIXED" => Verdict::Mixed,
            _ => Verdict::Unknown,
        }
    }
}

/// A structured credibility assessment for one article.
///
/// Transient: built per request and discarded after being sent to the
/// client. Score and confidence are clamped during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Credibility rating from 0 (fabricated) to 10 (highly credible).
    pub score: u8,
    pub verdict: Verdict,
    /// Provider confidence in the verdict, 0-100.
    pub confidence: u8,
    /// Detailed explanation of the findings.
    pub explanation: String,
    /// Main credibility concerns.
    pub red_flags: Vec<String>,
    /// Positive credibility indicators.
    pub credibility_factors: Vec<String>,
    /// Suggestions for independent fact-checking.
    pub tips: Vec<String>,
}

impl AnalysisResult {
    /// Default result returned when the provider reply cannot be
    /// interpreted. The raw reply (if any) is preserved as the explanation.
    pub fn fallback(raw_reply: &str) -> Self {
        let explanation = if raw_reply.trim().is_empty() {
            "Unable to analyze the article.".to_string()
        } else {
            raw_reply.trim().to_string()
        };

        Self {
            score: 0,
            verdict: Verdict::Unknown,
            confidence: 50,
            explanation,
            red_flags: vec!["Response parsing failed".to_string()],
            credibility_factors: vec!["Unable to assess".to_string()],
            tips: vec!["Please try again with a different article".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_serializes_screaming_case() {
        let json = serde_json::to_string(&Verdict::Credible).unwrap();
        assert_eq!(json, "\"CREDIBLE\"");

        let back: Verdict = serde_json::from_str("\"FAKE\"").unwrap();
        assert_eq!(back, Verdict::Fake);
    }

    #[test]
    fn test_verdict_parse_case_insensitive() {
        assert_eq!(Verdict::parse("fake"), Verdict::Fake);
        assert_eq!(Verdict::parse(" Suspicious "), Verdict::Suspicious);
        assert_eq!(Verdict::parse("MIXED"), Verdict::Mixed);
        assert_eq!(Verdict::parse("definitely real"), Verdict::Unknown);
    }

    #[test]
    fn test_fallback_preserves_reply() {
        let result = AnalysisResult::fallback("I cannot analyze this.");
        assert_eq!(result.score, 0);
        assert_eq!(result.verdict, Verdict::Unknown);
        assert_eq!(result.confidence, 50);
        assert_eq!(result.explanation, "I cannot analyze this.");
    }

    #[test]
    fn test_fallback_empty_reply() {
        let result = AnalysisResult::fallback("   ");
        assert_eq!(result.explanation, "Unable to analyze the article.");
    }
}
