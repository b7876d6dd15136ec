// ABOUTME: Raw semantic index hit and normalized exercise match models
// ABOUTME: Payload carries the domain exercise id, distinct from the index point id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loosely-typed payload attached to a semantic index point.
///
/// The same logical field can arrive under several shapes depending on how
/// the exercise was ingested; [`crate::matching::resolver`] holds the
/// ordered-fallback rules in one place. The domain exercise id lives here,
/// NOT in the index's own point id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExercisePayload {
    /// Domain exercise id; number or string depending on ingest vintage.
    /// Absent means the exercise is unusable downstream.
    #[serde(default)]
    pub exercise_id: Option<Value>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Record category (e.g. "exercise")
    #[serde(default)]
    pub record_type: String,
    /// Equipment list, flat payload variant
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Primary muscles, flat payload variant
    #[serde(default)]
    pub main_muscle: Vec<String>,
    /// Difficulty levels, flat payload variant
    #[serde(default)]
    pub level: Vec<String>,
    /// Force types, flat payload variant
    #[serde(default)]
    pub force: Vec<String>,
    /// Facet name -> facet values (e.g. `{"mainMuscle": ["chest"]}`);
    /// preferred source for faceted fields
    #[serde(default)]
    pub tags: HashMap<String, Vec<String>>,
}

/// A raw scored candidate returned by the semantic index.
///
/// `score` is only a total order; no absolute range is guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Opaque index point identifier. Never use this for domain identity.
    #[serde(default)]
    pub id: Value,
    /// Similarity score, higher is more similar
    #[serde(default)]
    pub score: f64,
    /// Exercise payload
    #[serde(default)]
    pub payload: ExercisePayload,
}

/// Normalized, canonical exercise match for one focus area.
///
/// Built by [`crate::matching::build_match`]; immutable; many matches
/// map to one focus area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusAreaExerciseMatch {
    /// Owning focus area name
    pub focus_area_name: String,
    /// Owning focus area description
    pub focus_area_description: String,
    /// Domain exercise id in string form; empty means the match is
    /// unusable and is dropped before scheduling
    pub exercise_id: String,
    /// Exercise display name
    pub exercise_name: String,
    /// Exercise description
    pub exercise_description: String,
    /// Exercise category
    pub exercise_category: String,
    /// Equipment required
    pub exercise_equipment: Vec<String>,
    /// Muscle groups worked
    pub exercise_muscle_groups: Vec<String>,
    /// Single difficulty label (first value if source was list-valued)
    pub exercise_difficulty: String,
    /// Similarity score copied from the search hit
    pub match_score: f64,
    /// Priority copied from the owning focus area
    pub priority_level: u32,
}
