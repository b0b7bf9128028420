// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Tracked activity, as handed over by the activity service.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Kind of workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Running,
    Walking,
    Cycling,
    Swimming,
    StrengthTraining,
    Yoga,
    Pilates,
    Dancing,
    Hiking,
    Tennis,
    Basketball,
    Soccer,
    Other,
}

impl ActivityType {
    /// Wire name, e.g. `STRENGTH_TRAINING`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Running => "RUNNING",
            ActivityType::Walking => "WALKING",
            ActivityType::Cycling => "CYCLING",
            ActivityType::Swimming => "SWIMMING",
            ActivityType::StrengthTraining => "STRENGTH_TRAINING",
            ActivityType::Yoga => "YOGA",
            ActivityType::Pilates => "PILATES",
            ActivityType::Dancing => "DANCING",
            ActivityType::Hiking => "HIKING",
            ActivityType::Tennis => "TENNIS",
            ActivityType::Basketball => "BASKETBALL",
            ActivityType::Soccer => "SOCCER",
            ActivityType::Other => "OTHER",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored activity. Read-only input to the advice pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity ID assigned by the activity service
    pub id: String,
    /// Owning user
    pub user_id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration: u32,
    pub calories_burned: f64,
    /// Local start time as recorded by the client
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    /// Free-form metrics (distance, heart rate, ...). Key-sorted.
    #[serde(default)]
    pub additional_metrics: BTreeMap<String, Value>,
}
