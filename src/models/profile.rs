// ABOUTME: Client profile model extracted from an intake form submission
// ABOUTME: Flat validated record consumed by focus generation and scheduling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use serde::{Deserialize, Serialize};

/// Structured client profile extracted from one intake-form submission.
///
/// Created once per session by [`crate::intake::parse_client_profile`] and
/// never mutated afterwards. Missing form fields default to empty strings,
/// zero, or empty lists; validation beyond shape is out of scope here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientProfile {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,

    /// Date of birth as supplied on the form
    pub date_of_birth: String,
    /// Sex at birth
    pub sex_at_birth: String,
    /// Height as free text (e.g. "5'10\"")
    pub height: String,
    /// Weight in pounds, free text
    pub weight: String,
    /// Age in years
    pub age: u32,

    /// Top fitness goal, free text
    pub top_fitness_goal: String,
    /// Goal classification labels from the multi-select question
    pub goal_classification: Vec<String>,
    /// What the client says is holding them back
    pub holding_back: String,

    /// Self-reported activity level
    pub activity_level: String,
    /// Health conditions, free text
    pub health_conditions: String,
    /// Food allergies, free text
    pub food_allergies: String,

    /// Daily eating pattern, free text
    pub daily_eating_pattern: String,
    /// Self-rated metabolism, 1-10
    pub metabolism_rating: u32,
    /// Self-rated macro familiarity, 1-10
    pub macro_familiarity: u32,

    /// Number of exercise days per week chosen on the form
    pub exercise_days_per_week: u32,
    /// Weekday labels the client selected (may be shorter than
    /// `exercise_days_per_week`; the scheduler cycles them)
    pub exercise_days: Vec<String>,
    /// Preferred workout length, free text
    pub preferred_workout_length: String,
    /// Program start date, `YYYY-MM-DD`
    pub start_date: String,

    /// Habits the client wants to break
    pub habits_to_destroy: Vec<String>,
    /// Habits the client wants to build
    pub habits_to_build: Vec<String>,
}

impl ClientProfile {
    /// Display name used in slot names and program titles
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}
