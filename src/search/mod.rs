// ABOUTME: Semantic exercise index access, tag filtering, and candidate fetching
// ABOUTME: Index failures surface as empty result lists, never as pipeline errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Semantic Search
//!
//! [`ExerciseIndex`] is the seam to the externally hosted embedding plus
//! nearest-neighbor service. [`CandidateFetcher`] layers the over-fetch /
//! filter / truncate policy on top: the backing index does not reliably
//! support server-side filtering on the tag facets, so exact-match filtering
//! happens in-process via [`TagFilters`].

mod fetcher;
mod filters;
mod index;

pub use fetcher::CandidateFetcher;
pub use filters::TagFilters;
pub use index::{ExerciseIndex, HttpExerciseIndex};
