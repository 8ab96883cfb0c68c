//! Prompt template for the credibility analysis request.

/// Build the fact-checking prompt embedding the article text verbatim.
///
/// The model is instructed to answer with a bare JSON object matching the
/// keys that [`super::parser::normalize_reply`] extracts.
pub fn build_prompt(article: &str) -> String {
    format!(
        r#"You are an expert fact-checker and media analyst specializing in detecting fake news and misinformation.
Analyze the following news article text for credibility, authenticity, and potential misinformation.

Please analyze these aspects:
1. Source credibility and attribution
2. Factual accuracy and verifiable claims
3. Emotional manipulation and sensational language
4. Missing context or supporting evidence
5. Logical consistency and coherence
6. Signs of propaganda or deliberate misinformation

Article Text:
{article}

Provide your analysis in the following JSON format:
{{
    "credibility_score": [number from 0-10],
    "verdict": "[CREDIBLE/SUSPICIOUS/FAKE/MIXED]",
    "confidence": [number from 0-100],
    "analysis": "[detailed explanation of your findings]",
    "red_flags": ["main credibility concerns"],
    "credibility_factors": ["positive credibility indicators"],
    "verification_tips": ["suggestions for fact-checking"]
}}

IMPORTANT: Return ONLY the JSON object, no additional text before or after."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_article_verbatim() {
        let article = "Scientists confirm the Earth is flat";
        let prompt = build_prompt(article);
        assert!(prompt.contains(article));
    }

    #[test]
    fn test_prompt_requests_expected_keys() {
        let prompt = build_prompt("some article");
        for key in [
            "credibility_score",
            "verdict",
            "confidence",
            "analysis",
            "red_flags",
            "credibility_factors",
            "verification_tips",
        ] {
            assert!(prompt.contains(key), "missing key: {}", key);
        }
    }

    #[test]
    fn test_prompt_demands_bare_json() {
        let prompt = build_prompt("some article");
        assert!(prompt.contains("Return ONLY the JSON object"));
    }
}
