// ABOUTME: Intake form parsing from raw field records into a client profile
// ABOUTME: Maps form question keys, resolves multi-select option ids to labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Intake Parsing
//!
//! The intake provider posts submissions as `{"data": {"fields": [...]}}`
//! where each field is `{key, value, options?}`. Multi-select questions
//! carry option ids in `value` and the id-to-label mapping in `options`.
//!
//! Parsing is lenient: missing fields default rather than fail. The only
//! hard error is a submission without the `data.fields` array, which means
//! the caller wired the wrong payload.

use serde_json::Value;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::ClientProfile;

/// Form question keys, fixed by the published intake form.
mod keys {
    pub const FIRST_NAME: &str = "question_zMWrpa";
    pub const LAST_NAME: &str = "question_59EG66";
    pub const EMAIL: &str = "question_QRxgjl";
    pub const PHONE: &str = "question_VPo1QE";
    pub const DATE_OF_BIRTH: &str = "question_6K1b4o";
    pub const SEX_AT_BIRTH: &str = "question_lOVlDB";
    pub const HEIGHT: &str = "question_7KJBj6";
    pub const WEIGHT: &str = "question_be2Bg0";
    pub const AGE: &str = "question_Ap6oao";
    pub const TOP_FITNESS_GOAL: &str = "question_WReGQL";
    pub const GOAL_CLASSIFICATION: &str = "question_Dp0v2q";
    pub const HOLDING_BACK: &str = "question_a4jbkW";
    pub const ACTIVITY_LEVEL: &str = "question_Ro8BKd";
    pub const HEALTH_CONDITIONS: &str = "question_BpLOg4";
    pub const FOOD_ALLERGIES: &str = "question_kG0Dpd";
    pub const DAILY_EATING_PATTERN: &str = "question_vD07pX";
    pub const METABOLISM_RATING: &str = "question_14bZx4";
    pub const MACRO_FAMILIARITY: &str = "question_JlVagz";
    pub const EXERCISE_DAYS_PER_WEEK: &str = "question_gqQypM";
    pub const EXERCISE_DAYS: &str = "question_y40KG6";
    pub const PREFERRED_WORKOUT_LENGTH: &str = "question_XoRVge";
    pub const START_DATE: &str = "question_oRlV6e";
    pub const HABITS_TO_DESTROY: &str = "question_zMWB1q";
    pub const HABITS_TO_BUILD: &str = "question_59E0pd";
}

/// Parse one intake submission into a [`ClientProfile`].
///
/// # Errors
///
/// Returns [`AppError::InvalidSubmission`] when the payload has no
/// `data.fields` array. Individual missing fields default instead.
pub fn parse_client_profile(submission: &Value) -> AppResult<ClientProfile> {
    let fields = submission
        .get("data")
        .and_then(|d| d.get("fields"))
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::invalid_submission("missing data.fields array"))?;

    let profile = ClientProfile {
        first_name: text(fields, keys::FIRST_NAME),
        last_name: text(fields, keys::LAST_NAME),
        email: text(fields, keys::EMAIL),
        phone: text(fields, keys::PHONE),
        date_of_birth: text(fields, keys::DATE_OF_BIRTH),
        sex_at_birth: text(fields, keys::SEX_AT_BIRTH),
        height: text(fields, keys::HEIGHT),
        weight: text(fields, keys::WEIGHT),
        age: number(fields, keys::AGE, 0),
        top_fitness_goal: text(fields, keys::TOP_FITNESS_GOAL),
        goal_classification: selected_labels(fields, keys::GOAL_CLASSIFICATION),
        holding_back: text(fields, keys::HOLDING_BACK),
        activity_level: text(fields, keys::ACTIVITY_LEVEL),
        health_conditions: text(fields, keys::HEALTH_CONDITIONS),
        food_allergies: text(fields, keys::FOOD_ALLERGIES),
        daily_eating_pattern: text(fields, keys::DAILY_EATING_PATTERN),
        metabolism_rating: number(fields, keys::METABOLISM_RATING, 5),
        macro_familiarity: number(fields, keys::MACRO_FAMILIARITY, 1),
        exercise_days_per_week: number(fields, keys::EXERCISE_DAYS_PER_WEEK, 0),
        exercise_days: selected_labels(fields, keys::EXERCISE_DAYS),
        preferred_workout_length: text(fields, keys::PREFERRED_WORKOUT_LENGTH),
        start_date: text(fields, keys::START_DATE),
        habits_to_destroy: lines(fields, keys::HABITS_TO_DESTROY),
        habits_to_build: lines(fields, keys::HABITS_TO_BUILD),
    };

    info!(
        client = %profile.display_name(),
        days_per_week = profile.exercise_days_per_week,
        "parsed client profile"
    );
    Ok(profile)
}

/// Raw `value` of the field with the given key
fn field_value<'a>(fields: &'a [Value], key: &str) -> Option<&'a Value> {
    fields
        .iter()
        .find(|f| f.get("key").and_then(Value::as_str) == Some(key))
        .and_then(|f| f.get("value"))
}

fn text(fields: &[Value], key: &str) -> String {
    field_value(fields, key)
        .map(|v| match v {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default()
}

/// Numeric field that may arrive as a JSON number or a numeric string
fn number(fields: &[Value], key: &str, default: u32) -> u32 {
    field_value(fields, key).map_or(default, |v| match v {
        Value::Number(n) => n.as_u64().map_or(default, |n| n as u32),
        Value::String(s) => s.trim().parse().unwrap_or(default),
        _ => default,
    })
}

/// Multi-select field: map selected option ids to their display labels.
/// Values that are already labels (no matching option id) pass through.
fn selected_labels(fields: &[Value], key: &str) -> Vec<String> {
    let Some(field) = fields
        .iter()
        .find(|f| f.get("key").and_then(Value::as_str) == Some(key))
    else {
        return Vec::new();
    };

    let selected: Vec<String> = field
        .get("value")
        .and_then(Value::as_array)
        .map(|vals| {
            vals.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let options = field.get("options").and_then(Value::as_array);
    selected
        .into_iter()
        .map(|id| {
            options
                .and_then(|opts| {
                    opts.iter()
                        .find(|o| o.get("id").and_then(Value::as_str) == Some(id.as_str()))
                })
                .and_then(|o| o.get("text").and_then(Value::as_str))
                .map_or(id, str::to_owned)
        })
        .collect()
}

/// Free-text field split into trimmed non-empty lines
fn lines(fields: &[Value], key: &str) -> Vec<String> {
    text(fields, key)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}
