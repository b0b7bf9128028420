// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Advice generation routes, mounted under `/api/ai`.
//!
//! Handlers only reject malformed requests. Generation failures are absorbed
//! by the advisor and answered with default content.

use crate::error::Result;
use crate::models::{Activity, AdviceDocument, PersonalizedCoaching, Recommendation};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

/// Maximum length of any free-text request field.
const MAX_TEXT_LEN: u64 = 500;
/// Maximum number of activities in a progress or coaching request.
const MAX_ACTIVITIES: u64 = 100;

/// Advice routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recommendations", post(generate_recommendation))
        .route("/workout-plan", post(generate_workout_plan))
        .route("/nutrition-advice", post(generate_nutrition_advice))
        .route("/progress-analysis", post(analyze_progress))
        .route("/motivation", post(generate_motivation))
        .route("/injury-prevention", post(generate_injury_prevention))
        .route("/social-features", post(generate_social_features))
        .route("/personalized-coaching", post(personalized_coaching))
        .route("/health", get(health))
}

// ─── Requests ────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanRequest {
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub user_profile: String,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub goals: String,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub fitness_level: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAdviceRequest {
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub activity_type: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub calories_burned: i64,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub dietary_restrictions: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProgressAnalysisRequest {
    #[serde(default)]
    #[validate(length(max = MAX_ACTIVITIES))]
    pub activities: Vec<Value>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MotivationRequest {
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub user_mood: String,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub recent_activity: String,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub goals: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InjuryPreventionRequest {
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub activity_type: String,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub user_age: String,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub fitness_level: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SocialFeaturesRequest {
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub activity_type: String,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub location: String,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub goals: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedCoachingRequest {
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub user_id: String,
    #[serde(default)]
    #[validate(length(max = MAX_ACTIVITIES))]
    pub recent_activities: Vec<Value>,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub current_goals: String,
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_LEN))]
    pub fitness_level: String,
}

// ─── Handlers ────────────────────────────────────────────────

async fn generate_recommendation(
    State(state): State<Arc<AppState>>,
    Json(activity): Json<Activity>,
) -> Json<Recommendation> {
    tracing::info!(activity_id = %activity.id, "Generating AI recommendation for activity");
    Json(state.advisor.generate_recommendation(&activity).await)
}

async fn generate_workout_plan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WorkoutPlanRequest>,
) -> Result<Json<AdviceDocument>> {
    req.validate()?;
    tracing::info!(goals = %req.goals, "Generating workout plan");

    let plan = state
        .advisor
        .generate_workout_plan(&req.user_profile, &req.goals, &req.fitness_level)
        .await;
    Ok(Json(plan))
}

async fn generate_nutrition_advice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NutritionAdviceRequest>,
) -> Result<Json<AdviceDocument>> {
    req.validate()?;
    tracing::info!(
        activity_type = %req.activity_type,
        calories = req.calories_burned,
        "Generating nutrition advice"
    );

    let advice = state
        .advisor
        .generate_nutrition_advice(
            &req.activity_type,
            req.calories_burned,
            &req.dietary_restrictions,
        )
        .await;
    Ok(Json(advice))
}

async fn analyze_progress(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProgressAnalysisRequest>,
) -> Result<Json<AdviceDocument>> {
    req.validate()?;
    tracing::info!(count = req.activities.len(), "Analyzing progress");

    Ok(Json(state.advisor.analyze_progress(&req.activities).await))
}

async fn generate_motivation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MotivationRequest>,
) -> Result<Json<AdviceDocument>> {
    req.validate()?;
    tracing::info!(mood = %req.user_mood, "Generating motivational message");

    let message = state
        .advisor
        .generate_motivational_message(&req.user_mood, &req.recent_activity, &req.goals)
        .await;
    Ok(Json(message))
}

async fn generate_injury_prevention(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InjuryPreventionRequest>,
) -> Result<Json<AdviceDocument>> {
    req.validate()?;
    tracing::info!(activity_type = %req.activity_type, "Generating injury prevention advice");

    let advice = state
        .advisor
        .generate_injury_prevention_advice(&req.activity_type, &req.user_age, &req.fitness_level)
        .await;
    Ok(Json(advice))
}

async fn generate_social_features(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SocialFeaturesRequest>,
) -> Result<Json<AdviceDocument>> {
    req.validate()?;
    tracing::info!(
        activity_type = %req.activity_type,
        location = %req.location,
        "Generating social features"
    );

    let features = state
        .advisor
        .generate_social_features(&req.activity_type, &req.location, &req.goals)
        .await;
    Ok(Json(features))
}

async fn personalized_coaching(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PersonalizedCoachingRequest>,
) -> Result<Json<PersonalizedCoaching>> {
    req.validate()?;

    let coaching = state
        .advisor
        .personalized_coaching(
            &req.user_id,
            &req.recent_activities,
            &req.current_goals,
            &req.fitness_level,
        )
        .await;
    Ok(Json(coaching))
}

#[derive(Serialize)]
pub struct AiHealthResponse {
    pub status: &'static str,
    pub ai: &'static str,
}

async fn health() -> Json<AiHealthResponse> {
    Json(AiHealthResponse {
        status: "AI Service is running",
        ai: "Gemini AI",
    })
}
