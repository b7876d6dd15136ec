// ABOUTME: Exact-match tag facet filters applied in-process to search hits
// ABOUTME: Filtering is exclusionary by absence when a facet filter is requested
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use crate::constants::facets;
use crate::models::SearchHit;

/// Optional exact-match filters over the payload tag facets.
///
/// A hit survives a requested filter only when its `payload.tags[facet]`
/// list contains the requested value; a hit missing the facet key entirely
/// is excluded. With no filters set, [`TagFilters::apply`] is the identity.
#[derive(Debug, Clone, Default)]
pub struct TagFilters {
    /// Difficulty level (facet `level`)
    pub level: Option<String>,
    /// Primary muscle (facet `mainMuscle`)
    pub main_muscle: Option<String>,
    /// Equipment (facet `equipment`)
    pub equipment: Option<String>,
    /// Force type (facet `force`)
    pub force: Option<String>,
}

impl TagFilters {
    /// True when no facet filter is requested
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.level.is_none()
            && self.main_muscle.is_none()
            && self.equipment.is_none()
            && self.force.is_none()
    }

    /// The requested (facet, value) pairs
    fn requested(&self) -> Vec<(&str, &str)> {
        [
            (facets::LEVEL, self.level.as_deref()),
            (facets::MAIN_MUSCLE, self.main_muscle.as_deref()),
            (facets::EQUIPMENT, self.equipment.as_deref()),
            (facets::FORCE, self.force.as_deref()),
        ]
        .into_iter()
        .filter_map(|(facet, value)| value.map(|v| (facet, v)))
        .collect()
    }

    /// Keep only hits matching every requested facet filter, preserving the
    /// input order. With zero filters the input is returned untouched.
    #[must_use]
    pub fn apply(&self, hits: Vec<SearchHit>) -> Vec<SearchHit> {
        let requested = self.requested();
        if requested.is_empty() {
            return hits;
        }
        hits.into_iter()
            .filter(|hit| {
                requested.iter().all(|(facet, value)| {
                    hit.payload
                        .tags
                        .get(*facet)
                        .is_some_and(|values| values.iter().any(|v| v == value))
                })
            })
            .collect()
    }
}
