// ABOUTME: Search query construction from focus area attributes
// ABOUTME: Space-joined concatenation in a fixed order, infallible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use crate::models::FocusArea;

/// Build the semantic search query for one focus area.
///
/// Concatenates, in order: name, description, target muscle groups,
/// intensity level, special considerations (only when non-empty), expected
/// outcomes, and training frequency, joined by single spaces. An empty
/// focus area yields a near-empty query, which is valid if low-quality.
#[must_use]
pub fn build_search_query(area: &FocusArea) -> String {
    let mut terms: Vec<&str> = vec![&area.name, &area.description];
    terms.extend(area.target_muscle_groups.iter().map(String::as_str));
    terms.push(&area.intensity_level);
    if !area.special_considerations.is_empty() {
        terms.push(&area.special_considerations);
    }
    terms.extend(area.expected_outcomes.iter().map(String::as_str));
    terms.push(&area.training_frequency);
    terms.join(" ")
}
