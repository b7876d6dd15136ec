// ABOUTME: Platform payload tests: wire field names, fixed prescriptions, dates
// ABOUTME: Covers the two-weeks-per-focus-area program windows and naming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use chrono::NaiveDate;
use forgefit::models::ScheduleSlot;
use forgefit::platform::{program_dates, training_program_request, workout_request};
use serde_json::json;

use common::{init_test_logging, match_pool};

fn slot() -> ScheduleSlot {
    ScheduleSlot {
        focus_area_name: "Strength Development".to_owned(),
        week_number: 1,
        day_of_week: "Monday".to_owned(),
        global_slot_number: 3,
        slot_name: "Jane Doe day 3".to_owned(),
        exercises: match_pool("Strength Development", 2),
    }
}

#[test]
fn workout_request_uses_platform_field_names() {
    init_test_logging();
    let request = workout_request(&slot(), "user-9", Some("plan-1".to_owned()));
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["type"], "mine");
    assert_eq!(value["userID"], "user-9");
    assert_eq!(value["trainingPlanID"], "plan-1");
    assert_eq!(value["workoutDef"]["type"], "workoutRegular");
    assert_eq!(value["workoutDef"]["name"], "Jane Doe day 3");

    let def = &value["workoutDef"]["exercises"][0]["def"];
    assert_eq!(def["supersetType"], "none");
    assert_eq!(def["id"], "Strength Development-0");
    assert_eq!(def["sets"], 3);
    assert_eq!(def["target"], "10 reps");
    assert_eq!(def["intervalTime"], 30);
    assert_eq!(def["restTime"], 60);
}

#[test]
fn workout_request_without_plan_omits_the_field() {
    init_test_logging();
    let request = workout_request(&slot(), "user-9", None);
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value.get("trainingPlanID"), None);
}

#[test]
fn workout_instructions_name_the_focus_area() {
    init_test_logging();
    let request = workout_request(&slot(), "user-9", None);
    let value = serde_json::to_value(&request).unwrap();
    let instructions = value["workoutDef"]["instructions"].as_str().unwrap();
    assert!(instructions.contains("Strength Development"));
}

#[test]
fn program_dates_step_two_weeks_per_focus_area() {
    init_test_logging();
    let (start0, end0) = program_dates("2026-09-01", 0);
    let (start1, _) = program_dates("2026-09-01", 1);
    let (start3, end3) = program_dates("2026-09-01", 3);

    assert_eq!(start0, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
    assert_eq!(end0, NaiveDate::from_ymd_opt(2026, 9, 15).unwrap());
    assert_eq!(start1, NaiveDate::from_ymd_opt(2026, 9, 15).unwrap());
    assert_eq!(start3, NaiveDate::from_ymd_opt(2026, 10, 13).unwrap());
    assert_eq!(end3, NaiveDate::from_ymd_opt(2026, 10, 27).unwrap());
}

#[test]
fn unparseable_start_date_falls_back_to_today() {
    init_test_logging();
    let today = chrono::Utc::now().date_naive();
    let (start, end) = program_dates("next tuesday", 0);
    assert_eq!(start, today);
    assert_eq!(end, today + chrono::Duration::weeks(2));
}

#[test]
fn training_program_names_span_week_ranges() {
    init_test_logging();
    let first = training_program_request("user-9", "Foundation Building", 0, "2026-09-01");
    let last = training_program_request("user-9", "Mind-Body Connection", 7, "2026-09-01");

    let first = serde_json::to_value(&first).unwrap();
    let last = serde_json::to_value(&last).unwrap();

    assert_eq!(first["plan"]["name"], "Week (1-2)");
    assert_eq!(last["plan"]["name"], "Week (15-16)");
    assert_eq!(first["plan"]["durationType"], "week");
    assert_eq!(first["plan"]["duration"], 2);
    assert_eq!(first["plan"]["startDate"], "2026-09-01");
    assert_eq!(first["plan"]["endDate"], "2026-09-15");
    assert_eq!(first["userid"], "user-9");
    // index 7 starts 14 weeks after the client start date
    assert_eq!(last["plan"]["startDate"], json!("2026-12-08"));
}
