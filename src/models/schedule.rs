// ABOUTME: Schedule slot and weekly plan models produced by the scheduler
// ABOUTME: Slot names embed the run-wide monotonic global slot number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use serde::{Deserialize, Serialize};

use super::FocusAreaExerciseMatch;

/// One concrete workout occurrence.
///
/// A slot is only materialized when its focus area's match pool still holds
/// a full workout's worth of unconsumed matches; otherwise the slot is
/// skipped, not padded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Owning focus area
    pub focus_area_name: String,
    /// Week within the program, 1..16
    pub week_number: u32,
    /// Weekday label, cycled over the client's chosen labels
    pub day_of_week: String,
    /// Monotonically increasing number, unique across the entire program
    /// for all focus areas. Guarantees slot-name uniqueness.
    pub global_slot_number: u32,
    /// Unique display name: `"{first} {last} day {global_slot_number}"`
    pub slot_name: String,
    /// Exactly `exercises_per_workout` matches in pool order
    pub exercises: Vec<FocusAreaExerciseMatch>,
}

/// Per-focus-area section of the weekly plan.
///
/// Present even when the focus area produced zero matches; the exercise
/// list is simply empty in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusAreaSection {
    /// Focus area name
    pub area_name: String,
    /// Focus area description
    pub description: String,
    /// Priority rank, 1 highest
    pub priority_level: u32,
    /// Full exercise list for display and audit
    pub exercises: Vec<FocusAreaExerciseMatch>,
}

/// Aggregate plan document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Program length in weeks; always 16
    pub total_weeks: u32,
    /// Echoed exercise-days-per-week from the intake form
    pub exercise_days_per_week: u32,
    /// Sections ordered by ascending priority
    pub focus_areas: Vec<FocusAreaSection>,
    /// Flat chronological slot list across all focus areas
    pub schedule: Vec<ScheduleSlot>,
}
