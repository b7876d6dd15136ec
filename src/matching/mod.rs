// ABOUTME: Query building and normalization of index hits into exercise matches
// ABOUTME: Groups matches per focus area in stable first-seen order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Exercise Matching
//!
//! Bridges focus areas and the semantic index: [`build_search_query`] turns
//! a focus area into one query string, and [`build_match`] normalizes a raw
//! [`crate::models::SearchHit`] into the canonical
//! [`crate::models::FocusAreaExerciseMatch`] using the ordered-fallback
//! field [`resolver`]s. Matches without a usable domain exercise id are
//! dropped here, before scheduling.

pub mod resolver;

mod matcher;
mod query;

pub use matcher::{build_match, group_matches, MatchGroup};
pub use query::build_search_query;
