// ABOUTME: Normalizes search hits into canonical matches and groups them per focus area
// ABOUTME: Hits without a domain exercise id are logged and dropped before scheduling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use tracing::warn;

use super::resolver;
use crate::models::{FocusArea, FocusAreaExerciseMatch, SearchHit};

/// Matches for one focus area, in the order they came back from the fetcher
/// (score-descending per the index's relevance ordering).
#[derive(Debug, Clone)]
pub struct MatchGroup {
    /// Focus area name the matches belong to
    pub focus_area_name: String,
    /// Normalized matches in fetch order
    pub matches: Vec<FocusAreaExerciseMatch>,
}

/// Normalize one search hit into a match for the owning focus area.
///
/// Returns `None` when the payload carries no usable domain exercise id;
/// such hits are logged and dropped rather than scheduled. Missing optional
/// fields degrade to defaults and never fail.
#[must_use]
pub fn build_match(area: &FocusArea, hit: &SearchHit) -> Option<FocusAreaExerciseMatch> {
    let Some(exercise_id) = resolver::exercise_id(&hit.payload) else {
        warn!(
            exercise = %hit.payload.name,
            focus_area = %area.name,
            "hit has no domain exercise id, dropping"
        );
        return None;
    };

    Some(FocusAreaExerciseMatch {
        focus_area_name: area.name.clone(),
        focus_area_description: area.description.clone(),
        exercise_id,
        exercise_name: hit.payload.name.clone(),
        exercise_description: hit.payload.description.clone(),
        exercise_category: resolver::category(&hit.payload),
        exercise_equipment: resolver::equipment(&hit.payload),
        exercise_muscle_groups: resolver::muscle_groups(&hit.payload),
        exercise_difficulty: resolver::difficulty(&hit.payload),
        match_score: hit.score,
        priority_level: area.priority,
    })
}

/// Group matches by focus area, preserving first-seen group order and the
/// relevance order within each group. Deterministic for identical input.
#[must_use]
pub fn group_matches(matches: Vec<FocusAreaExerciseMatch>) -> Vec<MatchGroup> {
    let mut groups: Vec<MatchGroup> = Vec::new();
    for m in matches {
        match groups
            .iter_mut()
            .find(|g| g.focus_area_name == m.focus_area_name)
        {
            Some(group) => group.matches.push(m),
            None => groups.push(MatchGroup {
                focus_area_name: m.focus_area_name.clone(),
                matches: vec![m],
            }),
        }
    }
    groups
}
