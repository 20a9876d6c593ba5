//! Tolerant engine result payloads
//!
//! The engine's contract is not strictly typed: plan and evidence may come
//! back as fully structured records or as plain keyed mappings carrying the
//! same data. Both shapes are accepted on the wire via untagged enums and
//! normalized later by [`crate::extract`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{EvidenceItem, Plan};

/// Keyed result returned by the engine, decoded defensively: every field
/// falls back to its neutral default when absent, and unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineResult {
    pub mode: String,
    pub plan: Option<PlanPayload>,
    pub evidence: Vec<EvidencePayload>,
    pub image_specs: Vec<Value>,
    pub merged_md: String,
    #[serde(rename = "final")]
    pub final_text: String,
}

/// A plan as the engine shipped it: structured record or plain mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanPayload {
    Structured(Plan),
    Mapping(Map<String, Value>),
}

/// An evidence entry as the engine shipped it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvidencePayload {
    Structured(EvidenceItem),
    Mapping(Map<String, Value>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_plan_decodes_as_structured() {
        let payload: PlanPayload = serde_json::from_value(json!({
            "blog_title": "T",
            "audience": "devs",
            "tone": "direct",
            "blog_kind": "tutorial",
            "constraints": [],
            "tasks": [],
        }))
        .unwrap();
        assert!(matches!(payload, PlanPayload::Structured(_)));
    }

    #[test]
    fn test_partial_plan_decodes_as_mapping() {
        let payload: PlanPayload =
            serde_json::from_value(json!({ "blog_title": "T" })).unwrap();
        assert!(matches!(payload, PlanPayload::Mapping(_)));
    }

    #[test]
    fn test_result_defaults_when_keys_absent() {
        let result: EngineResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result.mode, "");
        assert!(result.plan.is_none());
        assert!(result.evidence.is_empty());
        assert!(result.image_specs.is_empty());
        assert_eq!(result.final_text, "");
    }

    #[test]
    fn test_result_ignores_unrelated_state_keys() {
        // The engine echoes the whole workflow state back; only the keys
        // extraction cares about are decoded.
        let result: EngineResult = serde_json::from_value(json!({
            "topic": "Rust",
            "queries": ["a", "b"],
            "recency_days": 7,
            "mode": "research",
            "final": "# Done",
        }))
        .unwrap();
        assert_eq!(result.mode, "research");
        assert_eq!(result.final_text, "# Done");
    }
}
