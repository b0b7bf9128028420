// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Advice orchestration.
//!
//! Each call runs prompt → upstream → envelope → extractor. Any failure on
//! that path yields the category's fallback instead; callers never see an
//! error and never see partially extracted content.

use crate::error::PipelineError;
use crate::models::{
    Activity, AdviceCategory, AdviceDocument, AdviceParams, PersonalizedCoaching, Recommendation,
};
use crate::services::gemini::GenerativeClient;
use crate::services::{defaults, envelope, extract, prompts};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Generates advice through a [`GenerativeClient`], falling back to defaults.
#[derive(Clone)]
pub struct AdvisorService {
    client: Arc<dyn GenerativeClient>,
    timeout: Duration,
}

impl AdvisorService {
    /// Create an advisor whose upstream calls are bounded by `timeout`.
    pub fn new(client: Arc<dyn GenerativeClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Analyze a single activity.
    pub async fn generate_recommendation(&self, activity: &Activity) -> Recommendation {
        tracing::info!(activity_id = %activity.id, "Generating recommendation");

        let result = self
            .fetch_inner_json(&prompts::recommendation_prompt(activity))
            .await
            .and_then(|inner| extract::extract_recommendation(&inner, activity));

        match result {
            Ok(recommendation) => recommendation,
            Err(err) => {
                log_fallback(AdviceCategory::Recommendation, &err);
                Recommendation::fallback(activity)
            }
        }
    }

    /// Generate the document for `params`' category.
    pub async fn advise(&self, params: &AdviceParams) -> AdviceDocument {
        let category = params.category();
        tracing::info!(%category, "Generating advice");

        let result = self
            .fetch_inner_json(&prompts::advice_prompt(params))
            .await
            .and_then(|inner| extract::extract_document(&inner));

        match result {
            Ok(document) => {
                if let Some(key) = category.document_key() {
                    if document.get(key).is_none() {
                        tracing::debug!(%category, key, "Generated document lacks expected key");
                    }
                }
                document
            }
            Err(err) => {
                log_fallback(category, &err);
                defaults::document(category).cloned().unwrap_or(Value::Null)
            }
        }
    }

    pub async fn generate_workout_plan(
        &self,
        user_profile: &str,
        goals: &str,
        fitness_level: &str,
    ) -> AdviceDocument {
        self.advise(&AdviceParams::WorkoutPlan {
            user_profile: user_profile.to_string(),
            goals: goals.to_string(),
            fitness_level: fitness_level.to_string(),
        })
        .await
    }

    pub async fn generate_nutrition_advice(
        &self,
        activity_type: &str,
        calories_burned: i64,
        dietary_restrictions: &str,
    ) -> AdviceDocument {
        self.advise(&AdviceParams::Nutrition {
            activity_type: activity_type.to_string(),
            calories_burned,
            dietary_restrictions: dietary_restrictions.to_string(),
        })
        .await
    }

    /// Analyze a list of recent activities (arbitrary JSON objects).
    pub async fn analyze_progress(&self, activities: &[Value]) -> AdviceDocument {
        self.advise(&AdviceParams::Progress {
            activities: activities.to_vec(),
        })
        .await
    }

    pub async fn generate_motivational_message(
        &self,
        user_mood: &str,
        recent_activity: &str,
        goals: &str,
    ) -> AdviceDocument {
        self.advise(&AdviceParams::Motivation {
            user_mood: user_mood.to_string(),
            recent_activity: recent_activity.to_string(),
            goals: goals.to_string(),
        })
        .await
    }

    pub async fn generate_injury_prevention_advice(
        &self,
        activity_type: &str,
        user_age: &str,
        fitness_level: &str,
    ) -> AdviceDocument {
        self.advise(&AdviceParams::InjuryPrevention {
            activity_type: activity_type.to_string(),
            user_age: user_age.to_string(),
            fitness_level: fitness_level.to_string(),
        })
        .await
    }

    pub async fn generate_social_features(
        &self,
        activity_type: &str,
        location: &str,
        goals: &str,
    ) -> AdviceDocument {
        self.advise(&AdviceParams::Social {
            activity_type: activity_type.to_string(),
            location: location.to_string(),
            goals: goals.to_string(),
        })
        .await
    }

    /// Run the six coaching categories concurrently and combine the results.
    ///
    /// Each category falls back on its own; one failure does not affect the
    /// others.
    pub async fn personalized_coaching(
        &self,
        user_id: &str,
        recent_activities: &[Value],
        current_goals: &str,
        fitness_level: &str,
    ) -> PersonalizedCoaching {
        tracing::info!(
            user_id,
            activities = recent_activities.len(),
            "Generating personalized coaching"
        );

        let (
            workout_plan,
            nutrition_advice,
            progress_analysis,
            motivation,
            injury_prevention,
            social_features,
        ) = tokio::join!(
            self.generate_workout_plan("User with recent activities", current_goals, fitness_level),
            self.generate_nutrition_advice("Mixed activities", 500, "None"),
            self.analyze_progress(recent_activities),
            self.generate_motivational_message("Motivated", "Recent workout", current_goals),
            self.generate_injury_prevention_advice("Mixed activities", "25-35", fitness_level),
            self.generate_social_features("Mixed activities", "Local area", current_goals),
        );

        PersonalizedCoaching {
            workout_plan,
            nutrition_advice,
            progress_analysis,
            motivation,
            injury_prevention,
            social_features,
        }
    }

    /// Call upstream and unwrap the envelope.
    async fn fetch_inner_json(&self, prompt: &str) -> Result<String, PipelineError> {
        let raw = tokio::time::timeout(self.timeout, self.client.generate(prompt))
            .await
            .map_err(|_| PipelineError::Timeout(self.timeout))??;

        tracing::debug!(response = %raw, "Raw upstream response");
        Ok(envelope::extract_inner_json(&raw)?)
    }
}

fn log_fallback(category: AdviceCategory, err: &PipelineError) {
    tracing::warn!(
        %category,
        stage = err.stage(),
        error = %err,
        "Advice generation failed, using default"
    );
}
