// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitness AI Coach: generated training advice with deterministic fallbacks
//!
//! This crate turns free-form output from the Gemini API into structured
//! recommendations, workout plans and other coaching documents. Whenever
//! generation or parsing fails, a fixed default document is returned.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::AdvisorService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub advisor: AdvisorService,
}
