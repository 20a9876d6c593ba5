//! Engine result extraction
//!
//! Normalizes the engine's heterogeneous payloads into typed records. For
//! every field of every record, independently: probe the "convert to
//! mapping" path first (structured records serialize to a JSON map),
//! otherwise use the mapping directly, and fall back to a neutral value
//! when the field is absent. Defaulting is per-field, not per-record: a
//! record missing one field keeps the rest.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::engine::{EvidencePayload, PlanPayload};
use crate::models::{EvidenceItem, Plan, Task};

/// Normalize a plan payload into a typed [`Plan`].
pub fn extract_plan(payload: &PlanPayload) -> Plan {
    match payload {
        PlanPayload::Structured(plan) => to_mapping(plan)
            .map(|map| plan_from_mapping(&map))
            .unwrap_or_else(|| plan.clone()),
        PlanPayload::Mapping(map) => plan_from_mapping(map),
    }
}

/// Normalize every evidence payload into a typed [`EvidenceItem`].
pub fn extract_evidence(payloads: &[EvidencePayload]) -> Vec<EvidenceItem> {
    payloads.iter().map(extract_evidence_item).collect()
}

/// Final article text selection: the primary field when non-empty,
/// otherwise the merged markdown. First-non-empty-wins, no concatenation.
pub fn select_final_text(final_text: &str, merged_md: &str) -> String {
    if final_text.is_empty() {
        merged_md.to_string()
    } else {
        final_text.to_string()
    }
}

fn extract_evidence_item(payload: &EvidencePayload) -> EvidenceItem {
    match payload {
        EvidencePayload::Structured(item) => to_mapping(item)
            .map(|map| evidence_from_mapping(&map))
            .unwrap_or_else(|| item.clone()),
        EvidencePayload::Mapping(map) => evidence_from_mapping(map),
    }
}

/// Probe the to-mapping capability of a structured record.
fn to_mapping<T: Serialize>(record: &T) -> Option<Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn plan_from_mapping(map: &Map<String, Value>) -> Plan {
    let tasks = map
        .get("tasks")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(task_from_mapping)
                .collect()
        })
        .unwrap_or_default();

    Plan {
        blog_title: string_field(map, "blog_title"),
        audience: string_field(map, "audience"),
        tone: string_field(map, "tone"),
        blog_kind: string_field(map, "blog_kind"),
        constraints: string_list_field(map, "constraints"),
        tasks,
    }
}

fn task_from_mapping(map: &Map<String, Value>) -> Task {
    Task {
        id: int_field(map, "id"),
        title: string_field(map, "title"),
        goal: string_field(map, "goal"),
        target_words: int_field(map, "target_words"),
        requires_research: bool_field(map, "requires_research"),
        requires_citations: bool_field(map, "requires_citations"),
        requires_code: bool_field(map, "requires_code"),
        tags: string_list_field(map, "tags"),
        bullets: string_list_field(map, "bullets"),
    }
}

fn evidence_from_mapping(map: &Map<String, Value>) -> EvidenceItem {
    EvidenceItem {
        title: string_field(map, "title"),
        url: string_field(map, "url"),
        published_at: opt_string_field(map, "published_at"),
        snippet: opt_string_field(map, "snippet"),
        source: opt_string_field(map, "source"),
    }
}

// ============================================================================
// Per-field accessors with neutral defaults
// ============================================================================

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn int_field(map: &Map<String, Value>, key: &str) -> i64 {
    map.get(key).and_then(Value::as_i64).unwrap_or(0)
}

fn bool_field(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn string_list_field(map: &Map<String, Value>, key: &str) -> Vec<String> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_plan() -> Plan {
        Plan {
            blog_title: "Async Rust in Practice".to_string(),
            audience: "intermediate Rust developers".to_string(),
            tone: "pragmatic".to_string(),
            blog_kind: "tutorial".to_string(),
            constraints: vec!["no unsafe".to_string()],
            tasks: vec![Task {
                id: 1,
                title: "Intro".to_string(),
                goal: "Motivate the topic".to_string(),
                target_words: 200,
                requires_research: true,
                requires_citations: false,
                requires_code: true,
                tags: vec!["intro".to_string()],
                bullets: vec!["why async".to_string()],
            }],
        }
    }

    #[test]
    fn test_structured_and_mapping_extract_identically() {
        let plan = sample_plan();
        let structured = PlanPayload::Structured(plan.clone());
        let mapping = match serde_json::to_value(&plan).unwrap() {
            Value::Object(map) => PlanPayload::Mapping(map),
            other => panic!("plan serialized to {other:?}"),
        };

        assert_eq!(extract_plan(&structured), extract_plan(&mapping));
        assert_eq!(extract_plan(&structured), plan);
    }

    #[test]
    fn test_partial_mapping_keeps_present_fields() {
        let payload: PlanPayload = serde_json::from_value(json!({
            "blog_title": "Only a Title",
            "tasks": [{ "id": 3, "title": "Solo" }],
        }))
        .unwrap();

        let plan = extract_plan(&payload);
        assert_eq!(plan.blog_title, "Only a Title");
        assert_eq!(plan.audience, "");
        assert!(plan.constraints.is_empty());

        // Per-field defaulting inside tasks as well.
        assert_eq!(plan.tasks.len(), 1);
        assert_eq!(plan.tasks[0].id, 3);
        assert_eq!(plan.tasks[0].title, "Solo");
        assert_eq!(plan.tasks[0].target_words, 0);
        assert!(!plan.tasks[0].requires_research);
    }

    #[test]
    fn test_evidence_shapes_extract_identically() {
        let item = EvidenceItem {
            title: "Tokio docs".to_string(),
            url: "https://tokio.rs".to_string(),
            published_at: Some("2024-11-02".to_string()),
            snippet: None,
            source: Some("tokio.rs".to_string()),
        };
        let structured = vec![EvidencePayload::Structured(item.clone())];
        let mapping = vec![EvidencePayload::Mapping(
            match serde_json::to_value(&item).unwrap() {
                Value::Object(map) => map,
                other => panic!("evidence serialized to {other:?}"),
            },
        )];

        assert_eq!(extract_evidence(&structured), extract_evidence(&mapping));
        assert_eq!(extract_evidence(&structured), vec![item]);
    }

    #[test]
    fn test_evidence_mapping_with_missing_fields() {
        let payload: EvidencePayload =
            serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();

        let items = extract_evidence(&[payload]);
        assert_eq!(items[0].url, "https://example.com");
        assert_eq!(items[0].title, "");
        assert!(items[0].published_at.is_none());
    }

    #[test]
    fn test_final_text_prefers_primary_field() {
        assert_eq!(select_final_text("# Final", "# Merged"), "# Final");
        assert_eq!(select_final_text("", "# Merged"), "# Merged");
        assert_eq!(select_final_text("", ""), "");
    }

    #[test]
    fn test_wrong_typed_fields_default_instead_of_failing() {
        let payload: PlanPayload = serde_json::from_value(json!({
            "blog_title": 42,
            "audience": "devs",
            "constraints": "not-a-list",
        }))
        .unwrap();

        let plan = extract_plan(&payload);
        assert_eq!(plan.blog_title, "");
        assert_eq!(plan.audience, "devs");
        assert!(plan.constraints.is_empty());
    }
}
