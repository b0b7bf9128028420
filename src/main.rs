// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness AI Coach API Server
//!
//! Serves generated fitness advice backed by the Gemini API.

use anyhow::Context;
use fitness_ai_coach::{
    config::Config,
    services::{AdvisorService, GeminiClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        timeout_secs = config.upstream_timeout.as_secs(),
        "Starting Fitness AI Coach API"
    );

    let gemini = GeminiClient::new(
        config.gemini_api_url.clone(),
        config.gemini_api_key.clone(),
        config.upstream_timeout,
    )
    .context("Failed to initialize Gemini client")?;
    let advisor = AdvisorService::new(Arc::new(gemini), config.upstream_timeout);

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        advisor,
    });

    // Build router
    let app = fitness_ai_coach::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fitness_ai_coach=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
