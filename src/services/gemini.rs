// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gemini API client.
//!
//! Sends a single text prompt to `generateContent` and hands back the raw
//! response body. Unwrapping the envelope is left to the caller.

use crate::error::PipelineError;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Sampling temperature sent with every request.
const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Text-generation backend used by the advisor.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send `prompt` upstream and return the raw response envelope.
    async fn generate(&self, prompt: &str) -> Result<String, PipelineError>;
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

/// HTTP client for the Gemini API.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a client whose requests are bounded by `timeout`.
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, PipelineError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PipelineError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_url,
            api_key,
            timeout,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}?key={}",
            self.api_url,
            urlencoding::encode(&self.api_key)
        )
    }

    fn map_error(&self, err: reqwest::Error) -> PipelineError {
        if err.is_timeout() {
            PipelineError::Timeout(self.timeout)
        } else {
            PipelineError::Transport(err.without_url().to_string())
        }
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[redacted]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, PipelineError> {
        tracing::debug!(prompt_len = prompt.len(), "Sending prompt to Gemini");

        let response = self
            .http
            .post(self.request_url())
            .json(&GenerateRequest::new(prompt))
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(PipelineError::Transport(format!("HTTP {status}: {body}")));
        }

        tracing::debug!(body_len = body.len(), "Received Gemini response");
        Ok(body)
    }
}
