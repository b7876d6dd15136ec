// ABOUTME: 16-week schedule construction with a run-local global slot counter
// ABOUTME: Pool exhaustion skips slots silently; skips are counted, never fatal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Scheduling
//!
//! Partitions each focus area's ordered match pool into weekly/daily
//! workout slots across the fixed 16-week horizon. One [`SlotCounter`] per
//! scheduler run is shared across all focus areas and incremented only on
//! successful slot creation, which makes every slot name of the form
//! `"{client} day {n}"` unique for the whole program and keeps the embedded
//! numbers a contiguous 1..N sequence.
//!
//! The counter is owned by the [`Scheduler`] invocation, never a process
//! global: concurrent program generations cannot leak numbers into each
//! other.

use tracing::{debug, info};

use crate::constants::program;
use crate::matching::MatchGroup;
use crate::models::ScheduleSlot;

/// Run-local monotonic slot numbering, starting at 1.
#[derive(Debug)]
pub struct SlotCounter {
    next: u32,
}

impl SlotCounter {
    /// Create a counter positioned at slot number 1
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next slot number, advancing the counter
    fn take(&mut self) -> u32 {
        let n = self.next;
        self.next += 1;
        n
    }
}

impl Default for SlotCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one scheduler run.
#[derive(Debug)]
pub struct ScheduleOutcome {
    /// Materialized slots in chronological order per focus area
    pub slots: Vec<ScheduleSlot>,
    /// Slots skipped because a match pool ran out. Observable so operators
    /// can detect under-provisioned focus areas; not an error.
    pub skipped_slots: u32,
}

/// Weekday label for a day index, cycling the client's chosen labels.
/// Clients with fewer labels than exercise days reuse them in order; with
/// no labels at all, synthetic `"Day N"` labels stand in.
fn day_label(labels: &[String], day_index: usize) -> String {
    if labels.is_empty() {
        return format!("Day {}", day_index + 1);
    }
    labels[day_index % labels.len()].clone()
}

/// Builds the 16-week schedule from grouped exercise matches.
#[derive(Debug)]
pub struct Scheduler {
    exercises_per_workout: usize,
}

impl Scheduler {
    /// Create a scheduler prescribing `exercises_per_workout` exercises per
    /// slot (at least 1).
    #[must_use]
    pub fn new(exercises_per_workout: usize) -> Self {
        Self {
            exercises_per_workout: exercises_per_workout.max(1),
        }
    }

    /// Lay out every focus area's matches across the 16-week horizon.
    ///
    /// For each group, week, and day the flat cursor
    /// `(week_index * days + day_index) * exercises_per_workout` selects the
    /// next consecutive run of matches. A slot with insufficient remaining
    /// matches is skipped entirely: no partial workout, no wrap-around, no
    /// error, and the global counter does not advance.
    ///
    /// `exercise_days_per_week == 0` is valid and degenerately yields an
    /// empty schedule.
    #[must_use]
    pub fn build_schedule(
        &self,
        groups: &[MatchGroup],
        exercise_days_per_week: u32,
        day_labels: &[String],
        client_name: &str,
    ) -> ScheduleOutcome {
        let days = exercise_days_per_week as usize;
        let mut counter = SlotCounter::new();
        let mut slots = Vec::new();
        let mut skipped = 0u32;

        for group in groups {
            let pool = &group.matches;
            for week_index in 0..program::TOTAL_WEEKS as usize {
                for day_index in 0..days {
                    let cursor = (week_index * days + day_index) * self.exercises_per_workout;
                    let end = cursor + self.exercises_per_workout;
                    if end > pool.len() {
                        // Insufficient remaining matches: skip, don't pad.
                        skipped += 1;
                        debug!(
                            focus_area = %group.focus_area_name,
                            week = week_index + 1,
                            have = pool.len().saturating_sub(cursor),
                            need = self.exercises_per_workout,
                            "match pool exhausted, skipping slot"
                        );
                        continue;
                    }

                    let global_slot_number = counter.take();
                    slots.push(ScheduleSlot {
                        focus_area_name: group.focus_area_name.clone(),
                        week_number: week_index as u32 + 1,
                        day_of_week: day_label(day_labels, day_index),
                        global_slot_number,
                        slot_name: format!("{client_name} day {global_slot_number}"),
                        exercises: pool[cursor..end].to_vec(),
                    });
                }
            }
        }

        info!(
            slots = slots.len(),
            skipped,
            focus_areas = groups.len(),
            "built schedule"
        );
        ScheduleOutcome {
            slots,
            skipped_slots: skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{day_label, SlotCounter};

    #[test]
    fn counter_starts_at_one_and_is_contiguous() {
        let mut counter = SlotCounter::new();
        assert_eq!(counter.take(), 1);
        assert_eq!(counter.take(), 2);
        assert_eq!(counter.take(), 3);
    }

    #[test]
    fn labels_cycle_when_fewer_than_days() {
        let labels = vec!["Mon".to_owned(), "Wed".to_owned()];
        assert_eq!(day_label(&labels, 0), "Mon");
        assert_eq!(day_label(&labels, 1), "Wed");
        assert_eq!(day_label(&labels, 2), "Mon");
    }

    #[test]
    fn empty_labels_get_synthetic_names() {
        assert_eq!(day_label(&[], 0), "Day 1");
        assert_eq!(day_label(&[], 3), "Day 4");
    }
}
