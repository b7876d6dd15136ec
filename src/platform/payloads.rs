// ABOUTME: Wire payload shapes for remote platform workout and program creation
// ABOUTME: Fixed set/rep/rest prescriptions and 2-week-per-focus-area date math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use tracing::warn;

use crate::constants::{prescription, program};
use crate::models::ScheduleSlot;

/// Per-exercise prescription inside a workout definition. The set, target,
/// interval, and rest values are fixed product defaults, not computed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePrescription {
    /// Superset grouping; always "none"
    pub superset_type: String,
    /// Domain exercise id
    pub id: String,
    /// Sets per exercise
    pub sets: u32,
    /// Rep target per set
    pub target: String,
    /// Interval time between sets, seconds
    pub interval_time: u32,
    /// Rest time after the exercise, seconds
    pub rest_time: u32,
}

#[derive(Debug, Clone, Serialize)]
struct ExerciseEntry {
    def: ExercisePrescription,
}

#[derive(Debug, Clone, Serialize)]
struct WorkoutDefinition {
    exercises: Vec<ExerciseEntry>,
    instructions: String,
    #[serde(rename = "type")]
    workout_type: String,
    name: String,
}

/// Workout creation request body.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutRequest {
    #[serde(rename = "workoutDef")]
    workout_def: WorkoutDefinition,
    #[serde(rename = "type")]
    ownership: String,
    #[serde(rename = "userID")]
    user_id: String,
    #[serde(rename = "trainingPlanID", skip_serializing_if = "Option::is_none")]
    training_plan_id: Option<String>,
}

/// Training program plan body; one program spans two weeks of one focus area.
#[derive(Debug, Clone, Serialize)]
struct TrainingProgramPlan {
    name: String,
    instruction: String,
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "durationType")]
    duration_type: String,
    duration: u32,
    #[serde(rename = "endDate")]
    end_date: String,
}

/// Training program creation request body.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingProgramRequest {
    plan: TrainingProgramPlan,
    userid: String,
}

/// Build the workout request for one schedule slot. The workout's display
/// name is the slot name, which the scheduler guarantees is unique across
/// the whole program.
#[must_use]
pub fn workout_request(
    slot: &ScheduleSlot,
    user_id: &str,
    training_plan_id: Option<String>,
) -> WorkoutRequest {
    let exercises = slot
        .exercises
        .iter()
        .map(|m| ExerciseEntry {
            def: ExercisePrescription {
                superset_type: "none".into(),
                id: m.exercise_id.clone(),
                sets: prescription::SETS,
                target: prescription::TARGET.into(),
                interval_time: prescription::INTERVAL_SECS,
                rest_time: prescription::REST_SECS,
            },
        })
        .collect();

    WorkoutRequest {
        workout_def: WorkoutDefinition {
            exercises,
            instructions: format!(
                "Focus on {}. Complete all exercises with proper form and controlled movements.",
                slot.focus_area_name
            ),
            workout_type: "workoutRegular".into(),
            name: slot.slot_name.clone(),
        },
        ownership: "mine".into(),
        user_id: user_id.into(),
        training_plan_id,
    }
}

/// Start and end dates for one focus area's training program.
///
/// Two weeks per focus area, offset from the client's start date by
/// `focus_area_index` (0-based). An unparseable start date falls back to
/// today.
#[must_use]
pub fn program_dates(client_start_date: &str, focus_area_index: usize) -> (NaiveDate, NaiveDate) {
    let base = NaiveDate::parse_from_str(client_start_date, "%Y-%m-%d").unwrap_or_else(|_| {
        warn!(start_date = %client_start_date, "unparseable start date, using today");
        Utc::now().date_naive()
    });
    let weeks_offset = focus_area_index as i64 * i64::from(program::WEEKS_PER_FOCUS_AREA);
    let start = base + Duration::weeks(weeks_offset);
    let end = start + Duration::weeks(i64::from(program::WEEKS_PER_FOCUS_AREA));
    (start, end)
}

/// Build the training program request for the focus area at
/// `focus_area_index` (0-based).
#[must_use]
pub fn training_program_request(
    user_id: &str,
    focus_area_name: &str,
    focus_area_index: usize,
    client_start_date: &str,
) -> TrainingProgramRequest {
    let (start, end) = program_dates(client_start_date, focus_area_index);
    let week_start = focus_area_index as u32 * program::WEEKS_PER_FOCUS_AREA + 1;
    let week_end = week_start + program::WEEKS_PER_FOCUS_AREA - 1;

    TrainingProgramRequest {
        plan: TrainingProgramPlan {
            name: format!("Week ({week_start}-{week_end})"),
            instruction: format!(
                "Focus on {focus_area_name}. This {}-week program is designed to help you \
                 achieve your fitness goals through targeted training and progressive overload.",
                program::WEEKS_PER_FOCUS_AREA
            ),
            start_date: start.format("%Y-%m-%d").to_string(),
            duration_type: "week".into(),
            duration: program::WEEKS_PER_FOCUS_AREA,
            end_date: end.format("%Y-%m-%d").to_string(),
        },
        userid: user_id.into(),
    }
}
