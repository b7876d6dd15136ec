// ABOUTME: Focus area model, one of eight prioritized training themes per client
// ABOUTME: Produced by the focus generator or its fixed fallback list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use serde::{Deserialize, Serialize};

/// One prioritized training theme for a client (e.g. "Core Stability").
///
/// Created once per session by the focus-area generator (or its fixed
/// fallback list), immutable thereafter. `priority` is unique within the
/// set of eight; ties are not defined behavior, and downstream sorting is
/// stable so generator order decides among equals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusArea {
    /// Area name (e.g. "Upper Body Push Strength")
    pub name: String,
    /// What this focus area entails
    pub description: String,
    /// Priority rank, 1..8 with 1 highest
    pub priority: u32,
    /// Primary muscle groups targeted, in order
    pub target_muscle_groups: Vec<String>,
    /// How often this should be trained, free text
    pub training_frequency: String,
    /// Intensity vocabulary: Low / Moderate / High / Very High (open set,
    /// case not enforced)
    pub intensity_level: String,
    /// Client-specific considerations; may be empty
    pub special_considerations: String,
    /// Expected results
    pub expected_outcomes: Vec<String>,
}
