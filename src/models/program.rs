// ABOUTME: Complete fitness program export document
// ABOUTME: Aggregates profile, focus areas, matches, and the weekly plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClientProfile, FocusArea, FocusAreaExerciseMatch, WeeklyPlan};

/// Complete 16-week fitness program for one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessProgram {
    /// Unique program identifier
    pub program_id: Uuid,
    /// Client display name
    pub client_name: String,
    /// Program title
    pub program_name: String,
    /// Program start date as supplied on the intake form
    pub start_date: String,
    /// Program length in weeks; always 16
    pub total_weeks: u32,
    /// The eight prioritized focus areas
    pub focus_areas: Vec<FocusArea>,
    /// All normalized exercise matches, for audit
    pub exercise_matches: Vec<FocusAreaExerciseMatch>,
    /// The assembled weekly plan
    pub weekly_plan: WeeklyPlan,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// The parsed client profile the program was built from
    pub client_profile: ClientProfile,
}
