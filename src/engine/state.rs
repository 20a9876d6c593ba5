//! Canonical workflow input state
//!
//! The mutable bag handed to the engine for one generation call. Every
//! field the engine expects is explicitly defaulted so the engine never
//! observes an absent key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::GenerateRequest;

/// State exchanged with the workflow engine during one generation call.
///
/// Created fresh per call and discarded after result extraction. Field
/// names are the engine's wire keys; `final` is a Rust keyword, hence the
/// rename on `final_text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowState {
    pub topic: String,
    pub mode: String,
    pub needs_research: bool,
    pub queries: Vec<String>,
    pub evidence: Vec<Value>,
    pub plan: Option<Value>,
    pub as_of: String,
    pub recency_days: i64,
    pub sections: Vec<Value>,
    pub merged_md: String,
    pub md_with_placeholders: String,
    pub image_specs: Vec<Value>,
    #[serde(rename = "final")]
    pub final_text: String,
}

impl WorkflowState {
    /// Build the canonical engine input from request fields.
    ///
    /// Trims topic whitespace. When `as_of` is absent or blank, `today` is
    /// substituted in ISO-8601 form; otherwise the value passes through
    /// unchanged. An empty topic is not rejected here: it is forwarded and
    /// the engine's own failure surfaces through the structured response.
    pub fn for_request(topic: &str, as_of: Option<&str>, today: NaiveDate) -> Self {
        let as_of = match as_of {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => today.format("%Y-%m-%d").to_string(),
        };

        Self {
            topic: topic.trim().to_string(),
            mode: String::new(),
            needs_research: false,
            queries: Vec::new(),
            evidence: Vec::new(),
            plan: None,
            as_of,
            recency_days: 7,
            sections: Vec::new(),
            merged_md: String::new(),
            md_with_placeholders: String::new(),
            image_specs: Vec::new(),
            final_text: String::new(),
        }
    }

    /// Normalize an HTTP request against the local calendar date.
    pub fn canonical(request: &GenerateRequest) -> Self {
        Self::for_request(
            &request.topic,
            request.as_of.as_deref(),
            chrono::Local::now().date_naive(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_as_of_defaults_to_today() {
        let state = WorkflowState::for_request("Rust async", None, today());
        assert_eq!(state.as_of, "2025-01-15");
    }

    #[test]
    fn test_blank_as_of_defaults_to_today() {
        let state = WorkflowState::for_request("Rust async", Some("  "), today());
        assert_eq!(state.as_of, "2025-01-15");
    }

    #[test]
    fn test_as_of_passes_through_unchanged() {
        let state = WorkflowState::for_request("Rust async", Some("2024-12-31"), today());
        assert_eq!(state.as_of, "2024-12-31");
    }

    #[test]
    fn test_topic_is_trimmed() {
        let state = WorkflowState::for_request("  Rust async \n", None, today());
        assert_eq!(state.topic, "Rust async");
    }

    #[test]
    fn test_empty_topic_is_not_rejected() {
        // Preserved behavior: an all-whitespace topic normalizes to an
        // empty topic rather than an error.
        let state = WorkflowState::for_request("   ", None, today());
        assert_eq!(state.topic, "");
    }

    #[test]
    fn test_every_engine_key_is_present_and_defaulted() {
        let state = WorkflowState::for_request("Topic", None, today());
        let value = serde_json::to_value(&state).unwrap();
        let map = value.as_object().unwrap();

        for key in [
            "topic",
            "mode",
            "needs_research",
            "queries",
            "evidence",
            "plan",
            "as_of",
            "recency_days",
            "sections",
            "merged_md",
            "md_with_placeholders",
            "image_specs",
            "final",
        ] {
            assert!(map.contains_key(key), "missing engine key {key}");
        }

        assert_eq!(map["mode"], "");
        assert_eq!(map["needs_research"], false);
        assert_eq!(map["plan"], Value::Null);
        assert_eq!(map["recency_days"], 7);
        assert_eq!(map["final"], "");
    }
}
