// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - advice pipeline and upstream client.

pub mod advisor;
pub mod defaults;
pub mod envelope;
pub mod extract;
pub mod gemini;
pub mod prompts;

pub use advisor::AdvisorService;
pub use gemini::{GeminiClient, GenerativeClient};
