// ABOUTME: Program export: one training program per focus area, one workout per slot
// ABOUTME: Individual write failures are counted and logged, never fatal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use tracing::{info, warn};

use super::payloads::{training_program_request, workout_request};
use super::PlatformClient;
use crate::errors::{AppError, AppResult};
use crate::models::FitnessProgram;

/// Totals from one export run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExportSummary {
    /// Training programs created on the platform
    pub programs_created: usize,
    /// Workouts created on the platform
    pub workouts_created: usize,
    /// Focus areas whose training program could not be created (their
    /// workouts are not attempted)
    pub failed_programs: usize,
    /// Individual workout writes that failed
    pub failed_workouts: usize,
}

/// Result of exporting one focus area.
#[derive(Debug)]
pub struct FocusAreaExport {
    /// Platform id of the created training program
    pub training_plan_id: String,
    /// Workouts created under the program
    pub workouts_created: usize,
    /// Workout writes that failed
    pub failed_workouts: usize,
}

/// Export the focus area at `index` (0-based): create its two-week training
/// program, then one workout per schedule slot belonging to the area,
/// attached to the created program.
///
/// # Errors
///
/// Returns [`AppError::FocusAreaIndexOutOfRange`] for an invalid index and
/// propagates the training program creation failure. Individual workout
/// failures are logged and counted instead.
pub async fn export_focus_area(
    client: &PlatformClient,
    program: &FitnessProgram,
    index: usize,
    user_id: &str,
) -> AppResult<FocusAreaExport> {
    let area = program
        .focus_areas
        .get(index)
        .ok_or(AppError::FocusAreaIndexOutOfRange {
            index,
            count: program.focus_areas.len(),
        })?;

    let request = training_program_request(user_id, &area.name, index, &program.start_date);
    let training_plan_id = client.create_training_program(&request).await?;
    info!(
        focus_area = %area.name,
        plan_id = %training_plan_id,
        "created training program"
    );

    let mut created = 0usize;
    let mut failed = 0usize;
    for slot in program
        .weekly_plan
        .schedule
        .iter()
        .filter(|s| s.focus_area_name == area.name)
    {
        let request = workout_request(slot, user_id, Some(training_plan_id.clone()));
        match client.create_workout(&request).await {
            Ok(_) => created += 1,
            Err(e) => {
                warn!(slot = %slot.slot_name, error = %e, "workout creation failed");
                failed += 1;
            }
        }
    }

    Ok(FocusAreaExport {
        training_plan_id,
        workouts_created: created,
        failed_workouts: failed,
    })
}

/// Export the whole program, focus area by focus area. A failed training
/// program write skips that area's workouts and moves on to the next area.
pub async fn export_program(
    client: &PlatformClient,
    program: &FitnessProgram,
    user_id: &str,
) -> ExportSummary {
    let mut summary = ExportSummary::default();
    for index in 0..program.focus_areas.len() {
        match export_focus_area(client, program, index, user_id).await {
            Ok(outcome) => {
                summary.programs_created += 1;
                summary.workouts_created += outcome.workouts_created;
                summary.failed_workouts += outcome.failed_workouts;
            }
            Err(e) => {
                warn!(index, error = %e, "training program creation failed");
                summary.failed_programs += 1;
            }
        }
    }

    info!(
        programs = summary.programs_created,
        workouts = summary.workouts_created,
        failed_programs = summary.failed_programs,
        failed_workouts = summary.failed_workouts,
        "program export complete"
    );
    summary
}
