// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use fitness_ai_coach::config::Config;
use fitness_ai_coach::error::PipelineError;
use fitness_ai_coach::models::Activity;
use fitness_ai_coach::routes::create_router;
use fitness_ai_coach::services::{AdvisorService, GenerativeClient};
use fitness_ai_coach::AppState;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Responder = dyn Fn(&str) -> Result<String, PipelineError> + Send + Sync;

/// Upstream stand-in that answers every prompt through a closure and
/// records what it was asked.
pub struct ScriptedClient {
    responder: Box<Responder>,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedClient {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&str) -> Result<String, PipelineError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Always return the same raw body.
    pub fn fixed(raw: impl Into<String>) -> Arc<Self> {
        let raw = raw.into();
        Self::new(move |_| Ok(raw.clone()))
    }

    /// Always fail at the transport layer.
    pub fn failing() -> Arc<Self> {
        Self::new(|_| Err(PipelineError::Transport("connection refused".to_string())))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String, PipelineError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.responder)(prompt)
    }
}

/// Upstream stand-in that never answers within any reasonable timeout.
#[allow(dead_code)]
pub struct StalledClient;

#[async_trait]
impl GenerativeClient for StalledClient {
    async fn generate(&self, _prompt: &str) -> Result<String, PipelineError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(envelope("{}"))
    }
}

/// Wrap `text` in a Gemini response envelope.
#[allow(dead_code)]
pub fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

/// Wrap `text` in a fenced envelope, the way the model usually answers.
#[allow(dead_code)]
pub fn fenced_envelope(text: &str) -> String {
    envelope(&format!("```json\n{text}\n```"))
}

#[allow(dead_code)]
pub fn advisor(client: Arc<dyn GenerativeClient>) -> AdvisorService {
    AdvisorService::new(client, Duration::from_secs(5))
}

#[allow(dead_code)]
pub fn running_activity() -> Activity {
    serde_json::from_value(json!({
        "id": "act-1",
        "userId": "user-1",
        "type": "RUNNING",
        "duration": 30,
        "caloriesBurned": 300,
        "startTime": "2024-05-04T07:15:00",
        "additionalMetrics": {"distanceKm": 5.0}
    }))
    .unwrap()
}

/// Create a test app backed by `client`.
#[allow(dead_code)]
pub fn create_test_app(client: Arc<dyn GenerativeClient>) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let advisor = AdvisorService::new(client, config.upstream_timeout);
    let state = Arc::new(AppState { config, advisor });

    (create_router(state.clone()), state)
}
