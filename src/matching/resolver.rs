// ABOUTME: Ordered-fallback field resolvers for heterogeneous index payloads
// ABOUTME: One pure function per field keeps the precedence rules auditable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! Payload field resolvers.
//!
//! The same logical field is reachable via multiple alternate payload
//! shapes depending on ingest vintage. Each resolver applies its precedence
//! list (tag facet first, flat payload field second, default last) in one
//! place instead of ad hoc branching at call sites.

use serde_json::Value;

use crate::constants::facets;
use crate::models::ExercisePayload;

fn tag_values<'a>(payload: &'a ExercisePayload, facet: &str) -> Option<&'a Vec<String>> {
    payload.tags.get(facet).filter(|v| !v.is_empty())
}

/// Muscle groups: `tags.mainMuscle`, else flat `main_muscle`, else empty.
#[must_use]
pub fn muscle_groups(payload: &ExercisePayload) -> Vec<String> {
    tag_values(payload, facets::MAIN_MUSCLE)
        .unwrap_or(&payload.main_muscle)
        .clone()
}

/// Equipment: `tags.equipment`, else flat `equipment`, else empty.
#[must_use]
pub fn equipment(payload: &ExercisePayload) -> Vec<String> {
    tag_values(payload, facets::EQUIPMENT)
        .unwrap_or(&payload.equipment)
        .clone()
}

/// Difficulty: first of `tags.level`, else first of flat `level`, else
/// empty string. Single-valued even when the source is list-valued.
#[must_use]
pub fn difficulty(payload: &ExercisePayload) -> String {
    tag_values(payload, facets::LEVEL)
        .and_then(|v| v.first())
        .or_else(|| payload.level.first())
        .cloned()
        .unwrap_or_default()
}

/// Category: flat `record_type`, no fallback.
#[must_use]
pub fn category(payload: &ExercisePayload) -> String {
    payload.record_type.clone()
}

/// Domain exercise id, stringified. `None` means the exercise is unusable
/// downstream; the caller decides whether to warn and drop.
#[must_use]
pub fn exercise_id(payload: &ExercisePayload) -> Option<String> {
    match payload.exercise_id.as_ref()? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{difficulty, exercise_id, muscle_groups};
    use crate::models::ExercisePayload;

    #[test]
    fn tag_facet_wins_over_flat_field() {
        let payload = ExercisePayload {
            main_muscle: vec!["legs".into()],
            tags: HashMap::from([("mainMuscle".into(), vec!["chest".into()])]),
            ..ExercisePayload::default()
        };
        assert_eq!(muscle_groups(&payload), vec!["chest".to_owned()]);
    }

    #[test]
    fn empty_tag_facet_falls_back() {
        let payload = ExercisePayload {
            level: vec!["advanced".into()],
            tags: HashMap::from([("level".into(), Vec::new())]),
            ..ExercisePayload::default()
        };
        assert_eq!(difficulty(&payload), "advanced");
    }

    #[test]
    fn numeric_id_is_stringified() {
        let payload = ExercisePayload {
            exercise_id: Some(serde_json::json!(4217)),
            ..ExercisePayload::default()
        };
        assert_eq!(exercise_id(&payload).as_deref(), Some("4217"));
    }

    #[test]
    fn missing_id_is_none() {
        assert_eq!(exercise_id(&ExercisePayload::default()), None);
    }
}
