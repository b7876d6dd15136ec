// ABOUTME: Weekly plan assembly from focus areas, match groups, and schedule slots
// ABOUTME: Sections sort ascending by priority; zero-match areas keep empty sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Plan Assembly
//!
//! Purely structural: sorts the per-focus-area sections by ascending
//! priority (stable, so generator order decides ties), embeds each
//! section's full exercise list for display and audit, and attaches the
//! flat chronological slot list. No computation beyond sorting.

use crate::constants::program;
use crate::matching::MatchGroup;
use crate::models::{FocusArea, FocusAreaSection, ScheduleSlot, WeeklyPlan};

/// Assemble the aggregate weekly plan.
///
/// Every generated focus area appears as a section, including those whose
/// match pool came back empty; such sections simply carry no exercises
/// (and, implicitly, no slots).
#[must_use]
pub fn assemble_weekly_plan(
    focus_areas: &[FocusArea],
    groups: &[MatchGroup],
    slots: Vec<ScheduleSlot>,
    exercise_days_per_week: u32,
) -> WeeklyPlan {
    let mut sections: Vec<FocusAreaSection> = focus_areas
        .iter()
        .map(|area| FocusAreaSection {
            area_name: area.name.clone(),
            description: area.description.clone(),
            priority_level: area.priority,
            exercises: groups
                .iter()
                .find(|g| g.focus_area_name == area.name)
                .map(|g| g.matches.clone())
                .unwrap_or_default(),
        })
        .collect();
    sections.sort_by_key(|s| s.priority_level);

    WeeklyPlan {
        total_weeks: program::TOTAL_WEEKS,
        exercise_days_per_week,
        focus_areas: sections,
        schedule: slots,
    }
}
