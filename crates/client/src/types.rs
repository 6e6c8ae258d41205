//! Wire types for the ask service.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// The question exactly as the user entered it
    pub query: String,

    /// Number of candidates the backend retrieves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Number of candidates kept after reranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank_top_n: Option<u32>,
}

impl AskRequest {
    /// Create a request carrying only the query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: None,
            rerank_top_n: None,
        }
    }

    /// Apply retrieval tuning options.
    pub fn with_options(mut self, options: &AskOptions) -> Self {
        self.top_k = options.top_k;
        self.rerank_top_n = options.rerank_top_n;
        self
    }
}

/// Retrieval tuning forwarded with every request of a session.
///
/// Both fields are left to the backend's defaults when unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AskOptions {
    pub top_k: Option<u32>,
    pub rerank_top_n: Option<u32>,
}

/// Decoded success payload of `POST /api/ask`.
///
/// Missing fields decode to their empty value and render as absent sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Step-by-step reasoning, in display order
    #[serde(default)]
    pub reasoning_steps: Vec<String>,

    /// Short summary of the reasoning
    #[serde(default)]
    pub reasoning_summary: String,

    /// Retrieved context, passed through untouched
    #[serde(default)]
    pub raw_context: serde_json::Value,

    /// The answer to show the user
    #[serde(default)]
    pub final_answer: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_request_body_is_query_only() {
        let body = serde_json::to_value(AskRequest::new("  What was 2024 revenue?")).unwrap();
        assert_eq!(body, json!({ "query": "  What was 2024 revenue?" }));
    }

    #[test]
    fn test_request_with_options() {
        let options = AskOptions {
            top_k: Some(20),
            rerank_top_n: Some(5),
        };
        let body = serde_json::to_value(AskRequest::new("q").with_options(&options)).unwrap();
        assert_eq!(body, json!({ "query": "q", "top_k": 20, "rerank_top_n": 5 }));
    }

    #[test]
    fn test_answer_result_decodes_full_payload() {
        let payload = json!({
            "reasoning_steps": ["find the report", "read the table"],
            "reasoning_summary": "Revenue is in the annual report.",
            "raw_context": [{ "page": 12, "text": "Revenue: 5.8B" }],
            "final_answer": "5.8B"
        });

        let result: AnswerResult = serde_json::from_value(payload).unwrap();
        assert_eq!(result.reasoning_steps, vec!["find the report", "read the table"]);
        assert_eq!(result.raw_context[0]["page"], 12);
        assert_eq!(result.final_answer, "5.8B");
    }

    #[test]
    fn test_answer_result_tolerates_missing_fields() {
        let result: AnswerResult = serde_json::from_value(json!({ "final_answer": "42" })).unwrap();
        assert!(result.reasoning_steps.is_empty());
        assert!(result.reasoning_summary.is_empty());
        assert!(result.raw_context.is_null());
        assert_eq!(result.final_answer, "42");
    }

    #[test]
    fn test_answer_result_ignores_unknown_fields() {
        let result: AnswerResult =
            serde_json::from_value(json!({ "final_answer": "ok", "latency_ms": 120 })).unwrap();
        assert_eq!(result.final_answer, "ok");
    }

    #[test]
    fn test_answer_result_rejects_wrong_types() {
        let result = serde_json::from_value::<AnswerResult>(json!({ "reasoning_steps": "one" }));
        assert!(result.is_err());
    }
}
