// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapping of generated JSON onto output documents.

use crate::error::PipelineError;
use crate::models::recommendation::ListPlaceholders;
use crate::models::{Activity, AdviceDocument, Recommendation};
use serde_json::{Map, Value};

/// Analysis sections, in output order, as (JSON key, label).
const ANALYSIS_SECTIONS: [(&str, &str); 4] = [
    ("overall", "Overall:"),
    ("pace", "Pace:"),
    ("heartRate", "Heart Rate:"),
    ("caloriesBurned", "Calories:"),
];

const LIST_PLACEHOLDERS: ListPlaceholders = ListPlaceholders {
    improvements: "No specific improvements provided",
    suggestions: "No specific suggestions provided",
    safety: "Follow general safety guidelines",
};

/// Build a [`Recommendation`] for `activity` from generated JSON text.
pub fn extract_recommendation(
    inner_json: &str,
    activity: &Activity,
) -> Result<Recommendation, PipelineError> {
    let root: Value = serde_json::from_str(inner_json).map_err(PipelineError::Parse)?;

    let narrative = build_narrative(root.get("analysis"));
    let improvements = pairs(root.get("improvements"), "area", "recommendation");
    let suggestions = pairs(root.get("suggestions"), "workout", "description");
    let safety = items(root.get("safety"))
        .map(node_text)
        .collect::<Vec<_>>();

    Ok(Recommendation::new(
        activity,
        narrative,
        improvements,
        suggestions,
        safety,
        LIST_PLACEHOLDERS,
    ))
}

/// Parse generated JSON text for one of the document categories.
///
/// Documents are keyed trees; any other top-level JSON value is a parse
/// failure.
pub fn extract_document(inner_json: &str) -> Result<AdviceDocument, PipelineError> {
    let fields: Map<String, Value> =
        serde_json::from_str(inner_json).map_err(PipelineError::Parse)?;
    Ok(Value::Object(fields))
}

/// Concatenate the labeled analysis sections that are present.
fn build_narrative(analysis: Option<&Value>) -> String {
    let mut narrative = String::new();
    if let Some(analysis) = analysis {
        for (key, label) in ANALYSIS_SECTIONS {
            if let Some(value) = analysis.get(key) {
                narrative.push_str(label);
                narrative.push_str(&node_text(value));
                narrative.push_str("\n\n");
            }
        }
    }
    narrative.trim().to_string()
}

/// Format each `{first, second}` object as `"first: second"`.
fn pairs(list: Option<&Value>, first: &str, second: &str) -> Vec<String> {
    items(list)
        .map(|item| {
            format!(
                "{}: {}",
                item.get(first).map(node_text).unwrap_or_default(),
                item.get(second).map(node_text).unwrap_or_default()
            )
        })
        .collect()
}

/// Elements of `list` when it is an array; nothing otherwise.
fn items(list: Option<&Value>) -> impl Iterator<Item = &Value> {
    list.and_then(Value::as_array).into_iter().flatten()
}

/// Text of a scalar node. Containers have no text.
fn node_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn running() -> Activity {
        Activity {
            id: "act-42".to_string(),
            user_id: "user-7".to_string(),
            activity_type: ActivityType::Running,
            duration: 30,
            calories_burned: 300.0,
            start_time: None,
            additional_metrics: BTreeMap::new(),
        }
    }

    #[test]
    fn test_full_analysis_in_fixed_order() {
        // Keys deliberately out of order.
        let inner = json!({
            "analysis": {
                "caloriesBurned": "c",
                "heartRate": "h",
                "overall": "o",
                "pace": "p"
            }
        })
        .to_string();

        let rec = extract_recommendation(&inner, &running()).unwrap();
        assert_eq!(
            rec.recommendation(),
            "Overall:o\n\nPace:p\n\nHeart Rate:h\n\nCalories:c"
        );
    }

    #[test]
    fn test_missing_section_is_omitted() {
        let inner = r#"{"analysis": {"overall": "Great pace", "heartRate": "Steady"}}"#;
        let rec = extract_recommendation(inner, &running()).unwrap();
        assert_eq!(rec.recommendation(), "Overall:Great pace\n\nHeart Rate:Steady");
    }

    #[test]
    fn test_empty_lists_use_extractor_placeholders() {
        let inner = r#"{"analysis": {"overall": "Great pace"}, "improvements": []}"#;
        let rec = extract_recommendation(inner, &running()).unwrap();

        assert!(rec.recommendation().starts_with("Overall:Great pace"));
        assert_eq!(rec.improvements(), ["No specific improvements provided"]);
        assert_eq!(rec.suggestions(), ["No specific suggestions provided"]);
        assert_eq!(rec.safety(), ["Follow general safety guidelines"]);
    }

    #[test]
    fn test_list_formatting() {
        let inner = json!({
            "improvements": [
                {"area": "Cadence", "recommendation": "Aim for 170 spm"},
                {"area": "Form"}
            ],
            "suggestions": [{"workout": "Tempo run", "description": "20 min at threshold"}],
            "safety": ["Hydrate", 5]
        })
        .to_string();

        let rec = extract_recommendation(&inner, &running()).unwrap();
        assert_eq!(rec.improvements(), ["Cadence: Aim for 170 spm", "Form: "]);
        assert_eq!(rec.suggestions(), ["Tempo run: 20 min at threshold"]);
        assert_eq!(rec.safety(), ["Hydrate", "5"]);
        assert_eq!(rec.recommendation(), "");
    }

    #[test]
    fn test_non_array_list_treated_as_absent() {
        let inner = r#"{"safety": "Be careful"}"#;
        let rec = extract_recommendation(inner, &running()).unwrap();
        assert_eq!(rec.safety(), ["Follow general safety guidelines"]);
    }

    #[test]
    fn test_binds_activity_identity() {
        let rec = extract_recommendation("{}", &running()).unwrap();
        assert_eq!(rec.activity_id(), "act-42");
        assert_eq!(rec.user_id(), "user-7");
        assert_eq!(rec.activity_type(), ActivityType::Running);
    }

    #[test]
    fn test_malformed_inner_json() {
        let err = extract_recommendation("{\"analysis\": ", &running()).unwrap_err();
        assert!(matches!(err, PipelineError::Parse(_)));

        let err = extract_document("Sure! Here is your plan").unwrap_err();
        assert!(matches!(err, PipelineError::Parse(_)));
    }

    #[test]
    fn test_document_must_be_object() {
        for inner in ["null", "[]", "42", "\"plan\"", "true"] {
            let err = extract_document(inner).unwrap_err();
            assert!(matches!(err, PipelineError::Parse(_)), "{inner}");
        }
    }

    #[test]
    fn test_document_passes_through() {
        let inner = r#"{"motivation": {"message": "Go", "extra": [1, 2]}}"#;
        let doc = extract_document(inner).unwrap();
        assert_eq!(doc["motivation"]["message"], "Go");
        assert_eq!(doc["motivation"]["extra"], json!([1, 2]));
    }

    #[test]
    fn test_node_text() {
        assert_eq!(node_text(&json!("x")), "x");
        assert_eq!(node_text(&json!(7)), "7");
        assert_eq!(node_text(&json!(true)), "true");
        assert_eq!(node_text(&Value::Null), "null");
        assert_eq!(node_text(&json!({"a": 1})), "");
    }
}
