// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity recommendation returned to clients.

use crate::models::{Activity, ActivityType};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Narrative used when no analysis could be generated.
pub const FALLBACK_RECOMMENDATION: &str = "Unable to generate detailed analysis";

/// Per-activity analysis, immutable once built.
///
/// `improvements`, `suggestions` and `safety` are never empty: an empty
/// input list is replaced by the matching placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    activity_id: String,
    user_id: String,
    activity_type: ActivityType,
    recommendation: String,
    improvements: Vec<String>,
    suggestions: Vec<String>,
    safety: Vec<String>,
    created_at: DateTime<Utc>,
}

/// Placeholders substituted for empty lists.
#[derive(Debug, Clone, Copy)]
pub struct ListPlaceholders {
    pub improvements: &'static str,
    pub suggestions: &'static str,
    pub safety: &'static str,
}

impl Recommendation {
    /// Build a recommendation bound to `activity`, stamped with the current time.
    pub fn new(
        activity: &Activity,
        recommendation: String,
        improvements: Vec<String>,
        suggestions: Vec<String>,
        safety: Vec<String>,
        placeholders: ListPlaceholders,
    ) -> Self {
        Self {
            activity_id: activity.id.clone(),
            user_id: activity.user_id.clone(),
            activity_type: activity.activity_type,
            recommendation,
            improvements: non_empty(improvements, placeholders.improvements),
            suggestions: non_empty(suggestions, placeholders.suggestions),
            safety: non_empty(safety, placeholders.safety),
            created_at: Utc::now(),
        }
    }

    /// The generic recommendation used when the pipeline fails.
    pub fn fallback(activity: &Activity) -> Self {
        Self {
            activity_id: activity.id.clone(),
            user_id: activity.user_id.clone(),
            activity_type: activity.activity_type,
            recommendation: FALLBACK_RECOMMENDATION.to_string(),
            improvements: vec!["Continue with your current routine".to_string()],
            suggestions: vec!["Consider consulting a fitness professional".to_string()],
            safety: vec![
                "Always warm up before exercise".to_string(),
                "Stay hydrated".to_string(),
                "Listen to your body".to_string(),
            ],
            created_at: Utc::now(),
        }
    }

    pub fn activity_id(&self) -> &str {
        &self.activity_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    /// Narrative analysis text.
    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn improvements(&self) -> &[String] {
        &self.improvements
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn safety(&self) -> &[String] {
        &self.safety
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// True when two recommendations carry the same content, ignoring `created_at`.
    pub fn same_content(&self, other: &Self) -> bool {
        self.activity_id == other.activity_id
            && self.user_id == other.user_id
            && self.activity_type == other.activity_type
            && self.recommendation == other.recommendation
            && self.improvements == other.improvements
            && self.suggestions == other.suggestions
            && self.safety == other.safety
    }
}

fn non_empty(items: Vec<String>, placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}
