// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Quiet tracing init, model builders, and mock exercise indexes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit
#![allow(dead_code, missing_docs, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use async_trait::async_trait;

use forgefit::errors::{AppError, AppResult};
use forgefit::models::{
    ClientProfile, ExercisePayload, FocusArea, FocusAreaExerciseMatch, SearchHit,
};
use forgefit::search::ExerciseIndex;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .try_init();
    });
}

/// Profile with the fields the scheduler and focus generator care about
pub fn test_profile(first: &str, last: &str, days: u32, labels: &[&str]) -> ClientProfile {
    ClientProfile {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        exercise_days_per_week: days,
        exercise_days: labels.iter().map(|&l| l.to_owned()).collect(),
        ..ClientProfile::default()
    }
}

/// Minimal focus area with a given name and priority
pub fn focus_area(name: &str, priority: u32) -> FocusArea {
    FocusArea {
        name: name.to_owned(),
        description: format!("{name} training"),
        priority,
        target_muscle_groups: vec!["Full Body".to_owned()],
        training_frequency: "2 times per week".to_owned(),
        intensity_level: "Moderate".to_owned(),
        special_considerations: String::new(),
        expected_outcomes: vec!["Progress".to_owned()],
    }
}

/// Normalized match for a focus area with a synthetic exercise id
pub fn match_for(area: &str, index: usize, score: f64) -> FocusAreaExerciseMatch {
    FocusAreaExerciseMatch {
        focus_area_name: area.to_owned(),
        focus_area_description: format!("{area} training"),
        exercise_id: format!("{area}-{index}"),
        exercise_name: format!("{area} exercise {index}"),
        exercise_description: String::new(),
        exercise_category: "exercise".to_owned(),
        exercise_equipment: vec!["dumbbell".to_owned()],
        exercise_muscle_groups: vec!["core".to_owned()],
        exercise_difficulty: "beginner".to_owned(),
        match_score: score,
        priority_level: 1,
    }
}

/// Pool of `count` matches for one focus area, score descending
pub fn match_pool(area: &str, count: usize) -> Vec<FocusAreaExerciseMatch> {
    (0..count)
        .map(|i| match_for(area, i, 1.0 - i as f64 * 0.001))
        .collect()
}

/// Search hit with a domain exercise id and tag facets
pub fn hit(id: u64, score: f64, tags: &[(&str, &[&str])]) -> SearchHit {
    let tags: HashMap<String, Vec<String>> = tags
        .iter()
        .map(|(k, vs)| ((*k).to_owned(), vs.iter().map(|&v| v.to_owned()).collect()))
        .collect();
    SearchHit {
        id: serde_json::json!(id),
        score,
        payload: ExercisePayload {
            exercise_id: Some(serde_json::json!(id)),
            name: format!("exercise {id}"),
            description: String::new(),
            record_type: "exercise".to_owned(),
            tags,
            ..ExercisePayload::default()
        },
    }
}

/// Index returning a fixed hit list, recording the last requested limit
pub struct StaticIndex {
    pub hits: Vec<SearchHit>,
    pub last_limit: AtomicUsize,
}

impl StaticIndex {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
            last_limit: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ExerciseIndex for StaticIndex {
    async fn search(&self, _query: &str, limit: usize) -> AppResult<Vec<SearchHit>> {
        self.last_limit.store(limit, Ordering::SeqCst);
        Ok(self.hits.iter().take(limit).cloned().collect())
    }
}

/// Index that always fails, for soft-failure coverage
pub struct FailingIndex;

#[async_trait]
impl ExerciseIndex for FailingIndex {
    async fn search(&self, _query: &str, _limit: usize) -> AppResult<Vec<SearchHit>> {
        Err(AppError::config("index unavailable"))
    }
}

/// Index minting fresh unique hits on every call
pub struct MintingIndex {
    next_id: AtomicUsize,
}

impl MintingIndex {
    pub fn new() -> Self {
        Self {
            next_id: AtomicUsize::new(1),
        }
    }
}

impl Default for MintingIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExerciseIndex for MintingIndex {
    async fn search(&self, _query: &str, limit: usize) -> AppResult<Vec<SearchHit>> {
        Ok((0..limit)
            .map(|_| {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) as u64;
                hit(id, 1.0 / id as f64, &[])
            })
            .collect())
    }
}
