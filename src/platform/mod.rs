// ABOUTME: Remote fitness platform integration: wire payloads and HTTP client
// ABOUTME: Serializes schedule slots into workout and training program requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Platform Export
//!
//! The remote platform stores "training programs" (one per focus area,
//! two weeks each) and "workouts" (one per schedule slot, carrying the
//! slot's globally unique name). This module owns the wire shapes and the
//! outbound client; the pipeline treats individual write failures as soft
//! (log and continue with the next slot).

mod client;
mod export;
mod payloads;

pub use client::PlatformClient;
pub use export::{export_focus_area, export_program, ExportSummary, FocusAreaExport};
pub use payloads::{
    program_dates, training_program_request, workout_request, ExercisePrescription,
    TrainingProgramRequest, WorkoutRequest,
};
