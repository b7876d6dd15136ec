// ABOUTME: Weekly plan assembly tests: priority ordering and empty-area sections
// ABOUTME: Ties keep generator order; the slot list passes through untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use forgefit::matching::MatchGroup;
use forgefit::plan::assemble_weekly_plan;

use common::{focus_area, init_test_logging, match_pool};

#[test]
fn sections_sort_ascending_by_priority() {
    init_test_logging();
    let areas = vec![
        focus_area("Third", 3),
        focus_area("First", 1),
        focus_area("Second", 2),
    ];
    let groups: Vec<MatchGroup> = areas
        .iter()
        .map(|a| MatchGroup {
            focus_area_name: a.name.clone(),
            matches: match_pool(&a.name, 2),
        })
        .collect();

    let plan = assemble_weekly_plan(&areas, &groups, Vec::new(), 3);

    let names: Vec<&str> = plan
        .focus_areas
        .iter()
        .map(|s| s.area_name.as_str())
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn equal_priorities_keep_generator_order() {
    init_test_logging();
    let areas = vec![
        focus_area("Alpha", 1),
        focus_area("Beta", 1),
        focus_area("Gamma", 1),
    ];
    let plan = assemble_weekly_plan(&areas, &[], Vec::new(), 2);

    let names: Vec<&str> = plan
        .focus_areas
        .iter()
        .map(|s| s.area_name.as_str())
        .collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn zero_match_area_keeps_an_empty_section() {
    init_test_logging();
    let areas = vec![focus_area("Matched", 1), focus_area("Unmatched", 2)];
    let groups = vec![MatchGroup {
        focus_area_name: "Matched".to_owned(),
        matches: match_pool("Matched", 3),
    }];

    let plan = assemble_weekly_plan(&areas, &groups, Vec::new(), 2);

    assert_eq!(plan.focus_areas.len(), 2);
    let unmatched = plan
        .focus_areas
        .iter()
        .find(|s| s.area_name == "Unmatched")
        .unwrap();
    assert!(unmatched.exercises.is_empty());
}

#[test]
fn plan_echoes_horizon_and_days() {
    init_test_logging();
    let plan = assemble_weekly_plan(&[], &[], Vec::new(), 4);
    assert_eq!(plan.total_weeks, 16);
    assert_eq!(plan.exercise_days_per_week, 4);
    assert!(plan.schedule.is_empty());
}

#[test]
fn section_carries_full_exercise_list() {
    init_test_logging();
    let areas = vec![focus_area("Strength", 1)];
    let groups = vec![MatchGroup {
        focus_area_name: "Strength".to_owned(),
        matches: match_pool("Strength", 7),
    }];

    let plan = assemble_weekly_plan(&areas, &groups, Vec::new(), 2);
    assert_eq!(plan.focus_areas[0].exercises.len(), 7);
    assert_eq!(plan.focus_areas[0].description, "Strength training");
}
