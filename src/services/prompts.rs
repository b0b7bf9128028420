// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Prompt templates for each advice category.
//!
//! Every prompt embeds an example JSON document. The field names in these
//! examples are the contract the extractors and defaults rely on.

use crate::models::{Activity, AdviceParams};
use serde_json::Value;

pub const RECOMMENDATION_SCHEMA: &str = r#"{
  "analysis": {
    "overall": "Overall analysis here",
    "pace": "Pace analysis here",
    "heartRate": "Heart rate analysis here",
    "caloriesBurned": "Calories analysis here"
  },
  "improvements": [
    {
      "area": "Area name",
      "recommendation": "Detailed recommendation"
    }
  ],
  "suggestions": [
    {
      "workout": "Workout name",
      "description": "Detailed workout description"
    }
  ],
  "safety": [
    "Safety point 1",
    "Safety point 2"
  ]
}"#;

pub const WORKOUT_PLAN_SCHEMA: &str = r#"{
  "plan": {
    "name": "Personalized Fitness Plan",
    "description": "7-day workout plan tailored to your needs",
    "days": [
      {
        "day": 1,
        "name": "Day Name",
        "focus": "Primary focus area",
        "duration": "45-60 minutes",
        "exercises": [
          {
            "name": "Exercise Name",
            "sets": 3,
            "reps": "12-15",
            "rest": "60 seconds",
            "description": "How to perform"
          }
        ],
        "tips": ["Tip 1", "Tip 2"]
      }
    ],
    "nutrition": {
      "preWorkout": "What to eat before",
      "postWorkout": "What to eat after",
      "hydration": "Hydration tips"
    }
  }
}"#;

pub const NUTRITION_SCHEMA: &str = r#"{
  "nutrition": {
    "preWorkout": {
      "timing": "When to eat",
      "foods": ["Food 1", "Food 2"],
      "avoid": ["Food to avoid"]
    },
    "postWorkout": {
      "timing": "When to eat",
      "foods": ["Food 1", "Food 2"],
      "protein": "Protein recommendation",
      "carbs": "Carb recommendation"
    },
    "hydration": {
      "before": "Hydration before workout",
      "during": "Hydration during workout",
      "after": "Hydration after workout"
    },
    "supplements": ["Supplement 1", "Supplement 2"],
    "tips": ["Tip 1", "Tip 2"]
  }
}"#;

pub const PROGRESS_SCHEMA: &str = r#"{
  "progress": {
    "overall": "Overall progress assessment",
    "strengths": ["Strength 1", "Strength 2"],
    "weaknesses": ["Weakness 1", "Weakness 2"],
    "trends": {
      "frequency": "Trend in workout frequency",
      "intensity": "Trend in workout intensity",
      "variety": "Trend in exercise variety"
    },
    "recommendations": [
      {
        "area": "Area to focus on",
        "action": "Specific action to take",
        "timeline": "Expected timeline"
      }
    ],
    "milestones": [
      {
        "name": "Milestone name",
        "description": "Description",
        "achieved": false,
        "progress": 75
      }
    ]
  }
}"#;

pub const MOTIVATION_SCHEMA: &str = r#"{
  "motivation": {
    "message": "Personalized motivational message",
    "quote": "Inspirational quote",
    "action": "Specific action to take today",
    "mindset": "Mindset advice",
    "encouragement": "Words of encouragement"
  }
}"#;

pub const INJURY_PREVENTION_SCHEMA: &str = r#"{
  "injuryPrevention": {
    "warmup": {
      "duration": "5-10 minutes",
      "exercises": ["Exercise 1", "Exercise 2"],
      "importance": "Why warmup is crucial"
    },
    "technique": {
      "keyPoints": ["Point 1", "Point 2"],
      "commonMistakes": ["Mistake 1", "Mistake 2"],
      "corrections": ["Correction 1", "Correction 2"]
    },
    "recovery": {
      "stretching": ["Stretch 1", "Stretch 2"],
      "rest": "Rest recommendations",
      "signs": ["Warning sign 1", "Warning sign 2"]
    },
    "equipment": {
      "recommended": ["Equipment 1", "Equipment 2"],
      "safety": "Safety guidelines"
    }
  }
}"#;

pub const SOCIAL_SCHEMA: &str = r#"{
  "social": {
    "challenges": [
      {
        "name": "Challenge name",
        "description": "Challenge description",
        "duration": "30 days",
        "participants": "Number of participants"
      }
    ],
    "groups": [
      {
        "name": "Group name",
        "focus": "Group focus",
        "meetingTime": "When they meet",
        "location": "Where they meet"
      }
    ],
    "events": [
      {
        "name": "Event name",
        "date": "Event date",
        "location": "Event location",
        "description": "Event description"
      }
    ],
    "tips": ["Social tip 1", "Social tip 2"]
  }
}"#;

/// Prompt asking for an analysis of a single activity.
pub fn recommendation_prompt(activity: &Activity) -> String {
    let metrics = serde_json::to_string(&activity.additional_metrics).unwrap_or_default();
    render(
        "Analyze this fitness activity and provide detailed recommendations in the following EXACT JSON format:",
        RECOMMENDATION_SCHEMA,
        &[
            ("Activity Type", activity.activity_type.to_string()),
            ("Duration", format!("{} minutes", activity.duration)),
            ("Calories Burned", format!("{:.0}", activity.calories_burned)),
            ("Additional Metrics", metrics),
        ],
        "Provide detailed analysis focusing on performance, improvements, next workout suggestions, and safety guidelines.\n\
         Ensure the response follows the EXACT JSON format shown above.",
    )
}

/// Prompt for one of the advice-document categories.
pub fn advice_prompt(params: &AdviceParams) -> String {
    match params {
        AdviceParams::WorkoutPlan {
            user_profile,
            goals,
            fitness_level,
        } => render(
            "Create a personalized 7-day workout plan in JSON format:",
            WORKOUT_PLAN_SCHEMA,
            &[
                ("User Profile", user_profile.clone()),
                ("Goals", goals.clone()),
                ("Fitness Level", fitness_level.clone()),
            ],
            "Provide a realistic, progressive plan that matches their fitness level and goals.",
        ),
        AdviceParams::Nutrition {
            activity_type,
            calories_burned,
            dietary_restrictions,
        } => render(
            "Provide personalized nutrition advice in JSON format:",
            NUTRITION_SCHEMA,
            &[
                ("Activity Type", activity_type.clone()),
                ("Calories Burned", calories_burned.to_string()),
                ("Dietary Restrictions", dietary_restrictions.clone()),
            ],
            "Provide practical, science-based nutrition advice.",
        ),
        AdviceParams::Progress { activities } => render(
            "Analyze fitness progress and provide insights in JSON format:",
            PROGRESS_SCHEMA,
            &[("Recent Activities", render_activities(activities))],
            "Analyze patterns, progress, and provide actionable insights.",
        ),
        AdviceParams::Motivation {
            user_mood,
            recent_activity,
            goals,
        } => render(
            "Generate a personalized motivational message in JSON format:",
            MOTIVATION_SCHEMA,
            &[
                ("User's Current Mood", user_mood.clone()),
                ("Recent Activity", recent_activity.clone()),
                ("Goals", goals.clone()),
            ],
            "Provide uplifting, personalized motivation that resonates with their situation.",
        ),
        AdviceParams::InjuryPrevention {
            activity_type,
            user_age,
            fitness_level,
        } => render(
            "Provide injury prevention advice in JSON format:",
            INJURY_PREVENTION_SCHEMA,
            &[
                ("Activity Type", activity_type.clone()),
                ("User Age", user_age.clone()),
                ("Fitness Level", fitness_level.clone()),
            ],
            "Provide comprehensive injury prevention guidance.",
        ),
        AdviceParams::Social {
            activity_type,
            location,
            goals,
        } => render(
            "Suggest social fitness features in JSON format:",
            SOCIAL_SCHEMA,
            &[
                ("Activity Type", activity_type.clone()),
                ("Location", location.clone()),
                ("Goals", goals.clone()),
            ],
            "Suggest engaging social fitness opportunities.",
        ),
    }
}

fn render_activities(activities: &[Value]) -> String {
    serde_json::to_string(activities).unwrap_or_default()
}

fn render(intro: &str, schema: &str, params: &[(&str, String)], closing: &str) -> String {
    let lines: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    format!("{intro}\n{schema}\n\n{}\n\n{closing}\n", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;
    use serde_json::json;
    use std::collections::BTreeMap;

    const ALL_SCHEMAS: [&str; 7] = [
        RECOMMENDATION_SCHEMA,
        WORKOUT_PLAN_SCHEMA,
        NUTRITION_SCHEMA,
        PROGRESS_SCHEMA,
        MOTIVATION_SCHEMA,
        INJURY_PREVENTION_SCHEMA,
        SOCIAL_SCHEMA,
    ];

    fn running() -> Activity {
        let mut metrics = BTreeMap::new();
        metrics.insert("distanceKm".to_string(), json!(5.2));
        metrics.insert("avgHeartRate".to_string(), json!(152));
        Activity {
            id: "a1".to_string(),
            user_id: "u1".to_string(),
            activity_type: ActivityType::Running,
            duration: 30,
            calories_burned: 300.0,
            start_time: None,
            additional_metrics: metrics,
        }
    }

    #[test]
    fn test_schemas_are_valid_json() {
        for schema in ALL_SCHEMAS {
            assert!(serde_json::from_str::<Value>(schema).is_ok(), "{schema}");
        }
    }

    #[test]
    fn test_recommendation_prompt_contents() {
        let prompt = recommendation_prompt(&running());

        assert!(prompt.contains(RECOMMENDATION_SCHEMA));
        assert!(prompt.contains("Activity Type: RUNNING"));
        assert!(prompt.contains("Duration: 30 minutes"));
        assert!(prompt.contains("Calories Burned: 300\n"));
        assert!(prompt.contains(r#"Additional Metrics: {"avgHeartRate":152,"distanceKm":5.2}"#));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        assert_eq!(recommendation_prompt(&running()), recommendation_prompt(&running()));

        let params = AdviceParams::Progress {
            activities: vec![json!({"type": "RUNNING", "duration": 30})],
        };
        assert_eq!(advice_prompt(&params), advice_prompt(&params));
    }

    #[test]
    fn test_advice_prompt_embeds_schema_and_params() {
        let params = AdviceParams::Social {
            activity_type: "CYCLING".into(),
            location: "Palo Alto".into(),
            goals: "Meet riders".into(),
        };
        let prompt = advice_prompt(&params);

        assert!(prompt.starts_with("Suggest social fitness features in JSON format:\n"));
        assert!(prompt.contains(SOCIAL_SCHEMA));
        assert!(prompt.contains("Activity Type: CYCLING\nLocation: Palo Alto\nGoals: Meet riders"));
    }

    #[test]
    fn test_schema_top_level_key_matches_category() {
        let cases = [
            AdviceParams::WorkoutPlan {
                user_profile: String::new(),
                goals: String::new(),
                fitness_level: String::new(),
            },
            AdviceParams::Nutrition {
                activity_type: String::new(),
                calories_burned: 0,
                dietary_restrictions: String::new(),
            },
            AdviceParams::Progress { activities: vec![] },
            AdviceParams::Motivation {
                user_mood: String::new(),
                recent_activity: String::new(),
                goals: String::new(),
            },
            AdviceParams::InjuryPrevention {
                activity_type: String::new(),
                user_age: String::new(),
                fitness_level: String::new(),
            },
            AdviceParams::Social {
                activity_type: String::new(),
                location: String::new(),
                goals: String::new(),
            },
        ];

        for params in cases {
            let key = params.category().document_key().unwrap();
            let prompt = advice_prompt(&params);
            assert!(
                prompt.contains(&format!("{{\n  \"{key}\": {{")),
                "{key} missing from prompt"
            );
        }
    }
}
