// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Unwrapping of Gemini response envelopes.
//!
//! The generated text lives at `candidates[0].content.parts[0].text` and is
//! usually wrapped in a markdown code fence.

use crate::error::EnvelopeError;
use serde_json::Value;

const TEXT_PATH: &str = "candidates[0].content.parts[0].text";

/// Extract the inner JSON text from a raw response envelope.
///
/// Only the envelope is validated; the returned text may still be
/// malformed JSON.
pub fn extract_inner_json(raw: &str) -> Result<String, EnvelopeError> {
    let root: Value = serde_json::from_str(raw).map_err(EnvelopeError::InvalidJson)?;

    let text = root
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(Value::as_str)
        .ok_or(EnvelopeError::MissingField(TEXT_PATH))?;

    Ok(strip_code_fence(text).to_string())
}

/// Remove a surrounding ```` ```json ```` / ```` ``` ```` fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let body = body.trim_start();
    body.strip_suffix("```").unwrap_or(body).trim()
}
