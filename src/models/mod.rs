// ABOUTME: Core data models for the forgefit program engine
// ABOUTME: Re-exports client profile, focus area, exercise, schedule, and program types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Data Models
//!
//! Domain types flowing through the generation pipeline. All models are
//! serde-serializable; the pipeline treats them as immutable once built.
//!
//! - [`ClientProfile`]: validated intake record
//! - [`FocusArea`]: one of eight prioritized training themes
//! - [`SearchHit`] / [`ExercisePayload`]: raw semantic index candidates
//! - [`FocusAreaExerciseMatch`]: normalized unit consumed by the scheduler
//! - [`ScheduleSlot`] / [`WeeklyPlan`]: schedule output
//! - [`FitnessProgram`]: complete export document

mod exercise;
mod focus_area;
mod profile;
mod program;
mod schedule;

pub use exercise::{ExercisePayload, FocusAreaExerciseMatch, SearchHit};
pub use focus_area::FocusArea;
pub use profile::ClientProfile;
pub use program::FitnessProgram;
pub use schedule::{FocusAreaSection, ScheduleSlot, WeeklyPlan};
