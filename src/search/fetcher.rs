// ABOUTME: Candidate fetching with over-fetch, in-process tag filtering, truncation
// ABOUTME: Index failures degrade to empty candidate lists for the focus area
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use tracing::{debug, warn};

use super::{ExerciseIndex, TagFilters};
use crate::models::SearchHit;

/// Fetches filtered exercise candidates for one focus area.
///
/// Requests `exercises_needed × overfetch_multiplier` unfiltered hits, then
/// applies [`TagFilters`] in-process and truncates to `exercises_needed`,
/// preserving the index's relevance ordering. The over-fetch factor is a
/// heuristic safety margin against filter discards; callers must tolerate
/// fewer than `exercises_needed` survivors.
pub struct CandidateFetcher<I> {
    index: I,
    overfetch_multiplier: usize,
}

impl<I: ExerciseIndex> CandidateFetcher<I> {
    /// Create a fetcher over an index with the given over-fetch multiplier
    /// (at least 1).
    #[must_use]
    pub fn new(index: I, overfetch_multiplier: usize) -> Self {
        Self {
            index,
            overfetch_multiplier: overfetch_multiplier.max(1),
        }
    }

    /// Fetch up to `exercises_needed` candidates matching `filters`.
    ///
    /// A failing or empty index search is a soft failure: the focus area
    /// receives zero candidates and scheduling skips it.
    pub async fn fetch(
        &self,
        query: &str,
        exercises_needed: usize,
        filters: &TagFilters,
    ) -> Vec<SearchHit> {
        if exercises_needed == 0 {
            return Vec::new();
        }

        let limit = exercises_needed * self.overfetch_multiplier;
        let hits = match self.index.search(query, limit).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, "index search failed, returning no candidates");
                return Vec::new();
            }
        };

        let fetched = hits.len();
        let mut filtered = filters.apply(hits);
        debug!(
            fetched,
            surviving = filtered.len(),
            needed = exercises_needed,
            "filtered candidates"
        );

        filtered.truncate(exercises_needed);
        filtered
    }
}
