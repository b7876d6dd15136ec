// ABOUTME: Scheduler tests: global slot numbering, exhaustion skips, week layout
// ABOUTME: Covers the contiguous 1..N naming guarantee across focus areas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use std::collections::HashSet;

use forgefit::matching::MatchGroup;
use forgefit::scheduling::Scheduler;

use common::{init_test_logging, match_pool};

fn group(area: &str, count: usize) -> MatchGroup {
    MatchGroup {
        focus_area_name: area.to_owned(),
        matches: match_pool(area, count),
    }
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|&n| n.to_owned()).collect()
}

#[test]
fn jane_doe_scenario_produces_five_slots() {
    init_test_logging();
    let groups = vec![group("Strength", 25)];
    let outcome =
        Scheduler::new(5).build_schedule(&groups, 2, &labels(&["Mon", "Wed"]), "Jane Doe");

    // 25 matches / 5 per workout = 5 fillable slots before exhaustion
    assert_eq!(outcome.slots.len(), 5);

    let names: Vec<&str> = outcome.slots.iter().map(|s| s.slot_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Jane Doe day 1",
            "Jane Doe day 2",
            "Jane Doe day 3",
            "Jane Doe day 4",
            "Jane Doe day 5",
        ]
    );

    let weeks: Vec<u32> = outcome.slots.iter().map(|s| s.week_number).collect();
    assert_eq!(weeks, vec![1, 1, 2, 2, 3]);

    let days: Vec<&str> = outcome
        .slots
        .iter()
        .map(|s| s.day_of_week.as_str())
        .collect();
    assert_eq!(days, vec!["Mon", "Wed", "Mon", "Wed", "Mon"]);

    // the remaining 16-week horizon is skipped, not padded
    assert_eq!(outcome.skipped_slots, 32 - 5);
}

#[test]
fn slot_numbers_are_contiguous_across_focus_areas() {
    init_test_logging();
    // Enough matches in each area for the full 16-week x 2-day horizon
    let groups = vec![group("A", 160), group("B", 160)];
    let outcome = Scheduler::new(5).build_schedule(&groups, 2, &labels(&["Mon", "Thu"]), "Pat Lee");

    // 16 weeks x 2 days = 32 slots per area
    assert_eq!(outcome.slots.len(), 64);
    assert_eq!(outcome.skipped_slots, 0);

    let numbers: Vec<u32> = outcome.slots.iter().map(|s| s.global_slot_number).collect();
    assert_eq!(numbers, (1..=64).collect::<Vec<u32>>());

    // areas occupy disjoint contiguous ranges
    let a_numbers: Vec<u32> = outcome
        .slots
        .iter()
        .filter(|s| s.focus_area_name == "A")
        .map(|s| s.global_slot_number)
        .collect();
    let b_numbers: Vec<u32> = outcome
        .slots
        .iter()
        .filter(|s| s.focus_area_name == "B")
        .map(|s| s.global_slot_number)
        .collect();
    assert_eq!(a_numbers, (1..=32).collect::<Vec<u32>>());
    assert_eq!(b_numbers, (33..=64).collect::<Vec<u32>>());

    let unique: HashSet<&str> = outcome.slots.iter().map(|s| s.slot_name.as_str()).collect();
    assert_eq!(unique.len(), outcome.slots.len());
}

#[test]
fn pool_smaller_than_one_workout_yields_zero_slots() {
    init_test_logging();
    // exercises_per_workout - 1 matches can never fill a slot
    let groups = vec![group("Sparse", 4)];
    let outcome = Scheduler::new(5).build_schedule(&groups, 1, &labels(&["Mon"]), "Sam Quinn");

    assert!(outcome.slots.is_empty());
    assert_eq!(outcome.skipped_slots, 16);
}

#[test]
fn zero_exercise_days_yields_empty_schedule() {
    init_test_logging();
    let groups = vec![group("Strength", 50)];
    let outcome = Scheduler::new(5).build_schedule(&groups, 0, &labels(&["Mon"]), "Sam Quinn");

    assert!(outcome.slots.is_empty());
    assert_eq!(outcome.skipped_slots, 0);
}

#[test]
fn zero_match_group_is_skipped_silently() {
    init_test_logging();
    let groups = vec![group("Empty", 0), group("Full", 10)];
    let outcome = Scheduler::new(5).build_schedule(&groups, 1, &labels(&["Fri"]), "Ana Ray");

    // only the full group produced slots, numbered from 1
    assert_eq!(outcome.slots.len(), 2);
    assert!(outcome.slots.iter().all(|s| s.focus_area_name == "Full"));
    assert_eq!(outcome.slots[0].global_slot_number, 1);
}

#[test]
fn skipped_slots_do_not_consume_numbers() {
    init_test_logging();
    // First area exhausts after one slot; second area continues at day 2
    let groups = vec![group("Short", 5), group("Long", 10)];
    let outcome = Scheduler::new(5).build_schedule(&groups, 1, &labels(&["Mon"]), "Kim Day");

    assert_eq!(outcome.slots.len(), 3);
    let names: Vec<&str> = outcome.slots.iter().map(|s| s.slot_name.as_str()).collect();
    assert_eq!(names, vec!["Kim Day day 1", "Kim Day day 2", "Kim Day day 3"]);
}

#[test]
fn exercises_per_workout_is_respected() {
    init_test_logging();
    let groups = vec![group("Strength", 9)];
    let outcome = Scheduler::new(3).build_schedule(&groups, 1, &labels(&["Tue"]), "Lee Park");

    assert_eq!(outcome.slots.len(), 3);
    assert!(outcome.slots.iter().all(|s| s.exercises.len() == 3));

    // slices are consecutive runs of the pool in order
    let first_ids: Vec<&str> = outcome.slots[0]
        .exercises
        .iter()
        .map(|e| e.exercise_id.as_str())
        .collect();
    assert_eq!(first_ids, vec!["Strength-0", "Strength-1", "Strength-2"]);
}

#[test]
fn label_list_shorter_than_days_cycles() {
    init_test_logging();
    let groups = vec![group("Cardio", 15)];
    let outcome = Scheduler::new(5).build_schedule(&groups, 3, &labels(&["Mon", "Wed"]), "Jo Ann");

    let days: Vec<&str> = outcome
        .slots
        .iter()
        .map(|s| s.day_of_week.as_str())
        .collect();
    assert_eq!(days, vec!["Mon", "Wed", "Mon"]);
}
