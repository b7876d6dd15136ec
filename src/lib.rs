// ABOUTME: Library root for the forgefit fitness program generation engine
// ABOUTME: Wires intake, focus generation, exercise matching, scheduling, and plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Forgefit
//!
//! Turns a single intake-form submission into a 16-week structured exercise
//! program: derives eight prioritized focus areas, retrieves matching
//! exercises for each via a semantic exercise index, and lays those exercises
//! out into a day-by-day, week-by-week schedule with globally unique slot
//! names suitable for import into an external fitness-tracking platform.
//!
//! ## Pipeline
//!
//! 1. [`intake`] parses raw form-field records into a [`models::ClientProfile`]
//! 2. [`focus`] produces eight prioritized [`models::FocusArea`]s (chat
//!    endpoint with a deterministic fallback list)
//! 3. [`matching`] builds one search query per focus area and normalizes
//!    index hits into [`models::FocusAreaExerciseMatch`]es
//! 4. [`scheduling`] partitions each focus area's matches across the fixed
//!    16-week horizon, numbering slots with one run-local counter
//! 5. [`plan`] assembles the priority-ordered [`models::WeeklyPlan`]
//! 6. [`platform`] serializes slots into the remote platform's wire shapes
//!
//! The core (steps 3-5) performs no I/O; external collaborators sit behind
//! the [`focus::FocusAreaGenerator`] and [`search::ExerciseIndex`] traits and
//! never let failures cross the boundary as errors.

/// Environment-driven runtime configuration
pub mod config;

/// Program-shape and platform payload constants
pub mod constants;

/// Error types and result alias
pub mod errors;

/// Focus-area generation (chat endpoint plus fixed fallback list)
pub mod focus;

/// Intake form parsing into a client profile
pub mod intake;

/// Structured logging setup
pub mod logging;

/// Query building and exercise match normalization
pub mod matching;

/// Domain models
pub mod models;

/// Weekly plan assembly
pub mod plan;

/// Remote platform payload shapes and client
pub mod platform;

/// End-to-end program generation pipeline
pub mod pipeline;

/// Semantic exercise index access and candidate fetching
pub mod search;

/// 16-week schedule construction
pub mod scheduling;
