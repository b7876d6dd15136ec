// ABOUTME: End-to-end program generation pipeline from intake to fitness program
// ABOUTME: Wires focus generation, candidate fetching, matching, scheduling, assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Program Pipeline
//!
//! One [`ProgramPipeline`] invocation serves one client request,
//! sequentially and synchronously: parse intake, generate focus areas,
//! fetch and normalize matches per area, build the 16-week schedule with a
//! fresh slot counter, and assemble the plan. The pipeline owns no state
//! shared across requests; concurrent generations are independent.

use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ProgramShape;
use crate::constants::program;
use crate::errors::AppResult;
use crate::focus::FocusAreaGenerator;
use crate::intake::parse_client_profile;
use crate::matching::{build_match, build_search_query, group_matches};
use crate::models::{ClientProfile, FitnessProgram, FocusAreaExerciseMatch};
use crate::plan::assemble_weekly_plan;
use crate::scheduling::Scheduler;
use crate::search::{CandidateFetcher, ExerciseIndex, TagFilters};

/// Generates complete fitness programs.
pub struct ProgramPipeline<G, I> {
    generator: G,
    fetcher: CandidateFetcher<I>,
    shape: ProgramShape,
}

impl<G: FocusAreaGenerator, I: ExerciseIndex> ProgramPipeline<G, I> {
    /// Create a pipeline from a focus-area generator, an exercise index,
    /// and the program shape tunables.
    #[must_use]
    pub fn new(generator: G, index: I, shape: ProgramShape) -> Self {
        let fetcher = CandidateFetcher::new(index, shape.overfetch_multiplier);
        Self {
            generator,
            fetcher,
            shape,
        }
    }

    /// Generate a program from a raw intake submission.
    ///
    /// # Errors
    ///
    /// Returns an error only when the submission itself is malformed;
    /// every downstream data gap degrades to a shorter plan instead.
    pub async fn generate_from_submission(&self, submission: &Value) -> AppResult<FitnessProgram> {
        let profile = parse_client_profile(submission)?;
        Ok(self.generate(profile).await)
    }

    /// Generate a program for an already-parsed client profile.
    ///
    /// A client with sparse matching exercises receives a shorter plan
    /// (fewer slots), never an error: that is intended product behavior.
    pub async fn generate(&self, profile: ClientProfile) -> FitnessProgram {
        let client_name = profile.display_name();
        info!(client = %client_name, "starting program generation");

        let focus_areas = self.generator.generate(&profile).await;

        // One focus area must eventually supply a full week of workouts.
        let exercises_needed =
            profile.exercise_days_per_week as usize * self.shape.exercises_per_workout;

        let mut matches: Vec<FocusAreaExerciseMatch> = Vec::new();
        for area in &focus_areas {
            let query = build_search_query(area);
            debug!(focus_area = %area.name, "searching exercises");
            let hits = self
                .fetcher
                .fetch(&query, exercises_needed, &TagFilters::default())
                .await;
            let found = hits.len();
            matches.extend(hits.iter().filter_map(|hit| build_match(area, hit)));
            debug!(focus_area = %area.name, found, "matched exercises");
        }
        info!(total = matches.len(), "exercise matching complete");

        let groups = group_matches(matches.clone());
        let scheduler = Scheduler::new(self.shape.exercises_per_workout);
        let outcome = scheduler.build_schedule(
            &groups,
            profile.exercise_days_per_week,
            &profile.exercise_days,
            &client_name,
        );

        let weekly_plan = assemble_weekly_plan(
            &focus_areas,
            &groups,
            outcome.slots,
            profile.exercise_days_per_week,
        );

        FitnessProgram {
            program_id: Uuid::new_v4(),
            client_name: client_name.clone(),
            program_name: format!(
                "{}-Week Transformation Program for {}",
                program::TOTAL_WEEKS,
                profile.first_name
            ),
            start_date: profile.start_date.clone(),
            total_weeks: program::TOTAL_WEEKS,
            focus_areas,
            exercise_matches: matches,
            weekly_plan,
            created_at: chrono::Utc::now(),
            client_profile: profile,
        }
    }
}
