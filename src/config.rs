// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::time::Duration;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini `generateContent` endpoint (without the key query parameter)
    pub gemini_api_url: String,
    /// Gemini API key
    pub gemini_api_key: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Upper bound on a single upstream call
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let upstream_timeout_secs = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            gemini_api_url: env::var("GEMINI_API_URL")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("GEMINI_API_URL"))?,
            gemini_api_key: env::var("GEMINI_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("GEMINI_API_KEY"))?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        })
    }

    /// Config for tests. Points at an unroutable upstream.
    pub fn test_default() -> Self {
        Self {
            gemini_api_url: "http://127.0.0.1:9/v1beta/models/gemini-test:generateContent"
                .to_string(),
            gemini_api_key: "test_key".to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            port: DEFAULT_PORT,
            upstream_timeout: Duration::from_secs(2),
        }
    }
}

fn parse_timeout_secs(raw: &str) -> Result<u64, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var: "UPSTREAM_TIMEOUT_SECS",
        reason: format!("not a whole number of seconds: {raw:?}"),
    })?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            var: "UPSTREAM_TIMEOUT_SECS",
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(secs)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
