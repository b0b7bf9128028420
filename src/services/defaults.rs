// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fallback advice documents.
//!
//! Each document follows its category's prompt schema key-for-key, so a
//! client cannot tell a fallback from generated content by shape alone.

use crate::models::{AdviceCategory, AdviceDocument};
use serde_json::json;
use std::sync::LazyLock;

static WORKOUT_PLAN: LazyLock<AdviceDocument> = LazyLock::new(|| {
    json!({
        "plan": {
            "name": "Basic Fitness Plan",
            "description": "A simple 7-day workout plan to get you started",
            "days": [
                {
                    "day": 1,
                    "name": "Cardio Day",
                    "focus": "Cardiovascular fitness",
                    "duration": "30 minutes",
                    "exercises": [
                        {
                            "name": "Brisk walk or easy jog",
                            "sets": 1,
                            "reps": "30 minutes",
                            "rest": "None",
                            "description": "Keep a pace where you can still hold a conversation"
                        }
                    ],
                    "tips": ["Start slowly", "Cool down for 5 minutes"]
                },
                {
                    "day": 2,
                    "name": "Strength Day",
                    "focus": "Muscle building",
                    "duration": "45 minutes",
                    "exercises": [
                        {
                            "name": "Bodyweight squats",
                            "sets": 3,
                            "reps": "12-15",
                            "rest": "60 seconds",
                            "description": "Feet shoulder-width apart, sit back until thighs are parallel"
                        },
                        {
                            "name": "Push-ups",
                            "sets": 3,
                            "reps": "8-12",
                            "rest": "60 seconds",
                            "description": "Keep your body in a straight line from head to heels"
                        }
                    ],
                    "tips": ["Focus on form over speed", "Breathe out on exertion"]
                },
                {
                    "day": 3,
                    "name": "Rest Day",
                    "focus": "Recovery",
                    "duration": "0 minutes",
                    "exercises": [],
                    "tips": ["Light stretching is fine", "Get enough sleep"]
                }
            ],
            "nutrition": {
                "preWorkout": "Eat a light meal 2-3 hours before",
                "postWorkout": "Protein and carbs within 30 minutes",
                "hydration": "Drink water throughout the day"
            }
        }
    })
});

static NUTRITION: LazyLock<AdviceDocument> = LazyLock::new(|| {
    json!({
        "nutrition": {
            "preWorkout": {
                "timing": "2-3 hours before",
                "foods": ["Banana", "Oatmeal", "Greek yogurt"],
                "avoid": ["Heavy meals", "High fat foods"]
            },
            "postWorkout": {
                "timing": "Within 30 minutes",
                "foods": ["Protein shake", "Chicken breast", "Sweet potato"],
                "protein": "20-30g protein",
                "carbs": "30-60g carbs"
            },
            "hydration": {
                "before": "Drink 16-20 oz water",
                "during": "Drink 7-10 oz every 10-20 minutes",
                "after": "Drink 20-24 oz for every pound lost"
            },
            "supplements": ["Multivitamin", "Omega-3"],
            "tips": ["Stay hydrated", "Eat whole foods", "Listen to your body"]
        }
    })
});

static PROGRESS: LazyLock<AdviceDocument> = LazyLock::new(|| {
    json!({
        "progress": {
            "overall": "You're making good progress! Keep up the consistency.",
            "strengths": ["Consistent workout schedule", "Good form"],
            "weaknesses": ["Could increase intensity", "Need more variety"],
            "trends": {
                "frequency": "Improving",
                "intensity": "Stable",
                "variety": "Could improve"
            },
            "recommendations": [
                {"area": "Intensity", "action": "Try interval training", "timeline": "2 weeks"},
                {"area": "Variety", "action": "Add new exercises", "timeline": "1 week"}
            ],
            "milestones": [
                {
                    "name": "30-day streak",
                    "description": "Workout for 30 consecutive days",
                    "achieved": false,
                    "progress": 60
                },
                {
                    "name": "5K run",
                    "description": "Complete a 5K run",
                    "achieved": false,
                    "progress": 40
                }
            ]
        }
    })
});

static MOTIVATION: LazyLock<AdviceDocument> = LazyLock::new(|| {
    json!({
        "motivation": {
            "message": "Every workout brings you closer to your goals. You've got this!",
            "quote": "The only bad workout is the one that didn't happen.",
            "action": "Take a 10-minute walk today",
            "mindset": "Focus on progress, not perfection",
            "encouragement": "You're stronger than you think. Keep pushing forward!"
        }
    })
});

static INJURY_PREVENTION: LazyLock<AdviceDocument> = LazyLock::new(|| {
    json!({
        "injuryPrevention": {
            "warmup": {
                "duration": "5-10 minutes",
                "exercises": ["Light jogging", "Arm circles", "Leg swings"],
                "importance": "Prepares your body for exercise and reduces injury risk"
            },
            "technique": {
                "keyPoints": ["Maintain proper form", "Start with lighter weights"],
                "commonMistakes": ["Rushing through exercises", "Poor posture"],
                "corrections": ["Focus on form over speed", "Keep core engaged"]
            },
            "recovery": {
                "stretching": ["Hamstring stretch", "Quad stretch", "Chest stretch"],
                "rest": "Take at least one rest day per week",
                "signs": ["Persistent pain", "Swelling", "Decreased range of motion"]
            },
            "equipment": {
                "recommended": ["Proper shoes", "Supportive clothing"],
                "safety": "Always check equipment before use"
            }
        }
    })
});

static SOCIAL: LazyLock<AdviceDocument> = LazyLock::new(|| {
    json!({
        "social": {
            "challenges": [
                {
                    "name": "30-Day Fitness Challenge",
                    "description": "Complete 30 days of consistent workouts",
                    "duration": "30 days",
                    "participants": "150+"
                }
            ],
            "groups": [
                {
                    "name": "Local Running Club",
                    "focus": "Running and jogging",
                    "meetingTime": "Saturday mornings",
                    "location": "Central Park"
                }
            ],
            "events": [
                {
                    "name": "Community 5K",
                    "date": "Next month",
                    "location": "City Center",
                    "description": "Fun run for all fitness levels"
                }
            ],
            "tips": ["Join a local gym", "Find a workout buddy", "Participate in group classes"]
        }
    })
});

/// Fallback document for `category`.
///
/// Recommendations are typed rather than free-form; see
/// [`Recommendation::fallback`](crate::models::Recommendation::fallback).
pub fn document(category: AdviceCategory) -> Option<&'static AdviceDocument> {
    let doc: &'static AdviceDocument = match category {
        AdviceCategory::Recommendation => return None,
        AdviceCategory::WorkoutPlan => &*WORKOUT_PLAN,
        AdviceCategory::Nutrition => &*NUTRITION,
        AdviceCategory::Progress => &*PROGRESS,
        AdviceCategory::Motivation => &*MOTIVATION,
        AdviceCategory::InjuryPrevention => &*INJURY_PREVENTION,
        AdviceCategory::Social => &*SOCIAL,
    };
    Some(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompts;
    use serde_json::Value;

    /// Every object key in `schema` must appear in `doc`, recursively.
    /// Arrays are checked element-wise against the schema's first element.
    fn assert_covers(schema: &Value, doc: &Value, path: &str) {
        match (schema, doc) {
            (Value::Object(expected), Value::Object(actual)) => {
                for (key, sub_schema) in expected {
                    let sub_doc = actual
                        .get(key)
                        .unwrap_or_else(|| panic!("{path}.{key} missing from default"));
                    assert_covers(sub_schema, sub_doc, &format!("{path}.{key}"));
                }
                assert_eq!(expected.len(), actual.len(), "extra keys at {path}");
            }
            (Value::Array(expected), Value::Array(actual)) => {
                if let Some(item_schema) = expected.first() {
                    for (i, item) in actual.iter().enumerate() {
                        assert_covers(item_schema, item, &format!("{path}[{i}]"));
                    }
                }
            }
            (Value::Object(_) | Value::Array(_), other) => {
                panic!("{path} has wrong shape: {other}")
            }
            _ => {}
        }
    }

    #[test]
    fn test_defaults_match_prompt_schemas() {
        let pairs = [
            (AdviceCategory::WorkoutPlan, prompts::WORKOUT_PLAN_SCHEMA),
            (AdviceCategory::Nutrition, prompts::NUTRITION_SCHEMA),
            (AdviceCategory::Progress, prompts::PROGRESS_SCHEMA),
            (AdviceCategory::Motivation, prompts::MOTIVATION_SCHEMA),
            (AdviceCategory::InjuryPrevention, prompts::INJURY_PREVENTION_SCHEMA),
            (AdviceCategory::Social, prompts::SOCIAL_SCHEMA),
        ];

        for (category, schema) in pairs {
            let schema: Value = serde_json::from_str(schema).unwrap();
            let doc = document(category).unwrap();
            assert_covers(&schema, doc, category.as_str());
        }
    }

    #[test]
    fn test_document_is_shared() {
        let a = document(AdviceCategory::Motivation).unwrap();
        let b = document(AdviceCategory::Motivation).unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_recommendation_has_no_document() {
        assert!(document(AdviceCategory::Recommendation).is_none());
    }
}
