// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Advice categories and their documents.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Generated advice. The top-level shape is fixed per category by its
/// prompt; leaf values are whatever the model (or the default) supplied.
pub type AdviceDocument = Value;

/// Category of generated advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdviceCategory {
    Recommendation,
    WorkoutPlan,
    Nutrition,
    Progress,
    Motivation,
    InjuryPrevention,
    Social,
}

impl AdviceCategory {
    /// The six categories that produce an [`AdviceDocument`].
    pub const DOCUMENTS: [AdviceCategory; 6] = [
        AdviceCategory::WorkoutPlan,
        AdviceCategory::Nutrition,
        AdviceCategory::Progress,
        AdviceCategory::Motivation,
        AdviceCategory::InjuryPrevention,
        AdviceCategory::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceCategory::Recommendation => "recommendation",
            AdviceCategory::WorkoutPlan => "workout_plan",
            AdviceCategory::Nutrition => "nutrition",
            AdviceCategory::Progress => "progress",
            AdviceCategory::Motivation => "motivation",
            AdviceCategory::InjuryPrevention => "injury_prevention",
            AdviceCategory::Social => "social",
        }
    }

    /// Top-level key of the category's document. Recommendations have
    /// several top-level keys and return `None`.
    pub fn document_key(&self) -> Option<&'static str> {
        match self {
            AdviceCategory::Recommendation => None,
            AdviceCategory::WorkoutPlan => Some("plan"),
            AdviceCategory::Nutrition => Some("nutrition"),
            AdviceCategory::Progress => Some("progress"),
            AdviceCategory::Motivation => Some("motivation"),
            AdviceCategory::InjuryPrevention => Some("injuryPrevention"),
            AdviceCategory::Social => Some("social"),
        }
    }
}

impl fmt::Display for AdviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller parameters for a document category.
#[derive(Debug, Clone, PartialEq)]
pub enum AdviceParams {
    WorkoutPlan {
        user_profile: String,
        goals: String,
        fitness_level: String,
    },
    Nutrition {
        activity_type: String,
        calories_burned: i64,
        dietary_restrictions: String,
    },
    Progress {
        activities: Vec<Value>,
    },
    Motivation {
        user_mood: String,
        recent_activity: String,
        goals: String,
    },
    InjuryPrevention {
        activity_type: String,
        user_age: String,
        fitness_level: String,
    },
    Social {
        activity_type: String,
        location: String,
        goals: String,
    },
}

impl AdviceParams {
    pub fn category(&self) -> AdviceCategory {
        match self {
            AdviceParams::WorkoutPlan { .. } => AdviceCategory::WorkoutPlan,
            AdviceParams::Nutrition { .. } => AdviceCategory::Nutrition,
            AdviceParams::Progress { .. } => AdviceCategory::Progress,
            AdviceParams::Motivation { .. } => AdviceCategory::Motivation,
            AdviceParams::InjuryPrevention { .. } => AdviceCategory::InjuryPrevention,
            AdviceParams::Social { .. } => AdviceCategory::Social,
        }
    }
}

/// Combined result of the six coaching categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedCoaching {
    pub workout_plan: AdviceDocument,
    pub nutrition_advice: AdviceDocument,
    pub progress_analysis: AdviceDocument,
    pub motivation: AdviceDocument,
    pub injury_prevention: AdviceDocument,
    pub social_features: AdviceDocument,
}
