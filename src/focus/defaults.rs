// ABOUTME: Fixed fallback focus areas used when the chat endpoint is unavailable
// ABOUTME: Deterministic eight-entry list with priorities 1 through 8
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use crate::models::FocusArea;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.into()).collect()
}

/// The fixed default focus-area list.
///
/// Returned whenever focus-area generation fails; identical across runs so
/// a degraded system still produces a deterministic program.
#[must_use]
pub fn default_focus_areas() -> Vec<FocusArea> {
    vec![
        FocusArea {
            name: "Foundation Building".into(),
            description: "Establish basic movement patterns and form, focus on proper form and building confidence".into(),
            priority: 1,
            target_muscle_groups: strings(&["Full Body"]),
            training_frequency: "2 times per week".into(),
            intensity_level: "Low to Moderate".into(),
            special_considerations: "Focus on proper form and building confidence".into(),
            expected_outcomes: strings(&["Improved movement quality", "Increased confidence"]),
        },
        FocusArea {
            name: "Strength Development".into(),
            description: "Build foundational strength through compound movements, progressive overload with proper form".into(),
            priority: 2,
            target_muscle_groups: strings(&["Legs", "Back", "Chest", "Shoulders"]),
            training_frequency: "2 times per week".into(),
            intensity_level: "Moderate".into(),
            special_considerations: "Progressive overload with proper form".into(),
            expected_outcomes: strings(&["Increased strength", "Better muscle tone"]),
        },
        FocusArea {
            name: "Cardiovascular Fitness".into(),
            description: "Improve heart health and endurance, start with low impact options".into(),
            priority: 3,
            target_muscle_groups: strings(&["Cardiovascular System"]),
            training_frequency: "2 times per week".into(),
            intensity_level: "Moderate to High".into(),
            special_considerations: "Start with low impact options".into(),
            expected_outcomes: strings(&["Improved endurance", "Better cardiovascular health"]),
        },
        FocusArea {
            name: "Core Stability".into(),
            description: "Strengthen core muscles for better posture and stability, focus on controlled movements".into(),
            priority: 4,
            target_muscle_groups: strings(&["Core"]),
            training_frequency: "2 times per week".into(),
            intensity_level: "Moderate".into(),
            special_considerations: "Focus on controlled movements".into(),
            expected_outcomes: strings(&["Better posture", "Improved stability"]),
        },
        FocusArea {
            name: "Flexibility & Mobility".into(),
            description: "Improve range of motion and reduce injury risk, gentle stretching and mobility work".into(),
            priority: 5,
            target_muscle_groups: strings(&["Full Body"]),
            training_frequency: "2 times per week".into(),
            intensity_level: "Low".into(),
            special_considerations: "Gentle stretching and mobility work".into(),
            expected_outcomes: strings(&["Increased flexibility", "Better range of motion"]),
        },
        FocusArea {
            name: "Functional Movement".into(),
            description: "Train movements that translate to daily activities, focus on real-world applications".into(),
            priority: 6,
            target_muscle_groups: strings(&["Full Body"]),
            training_frequency: "2 times per week".into(),
            intensity_level: "Moderate".into(),
            special_considerations: "Focus on real-world applications".into(),
            expected_outcomes: strings(&["Better daily function", "Reduced injury risk"]),
        },
        FocusArea {
            name: "Recovery & Regeneration".into(),
            description: "Optimize recovery for better performance, gentle recovery techniques".into(),
            priority: 7,
            target_muscle_groups: strings(&["Full Body"]),
            training_frequency: "Daily".into(),
            intensity_level: "Low".into(),
            special_considerations: "Gentle recovery techniques".into(),
            expected_outcomes: strings(&["Faster recovery", "Better performance"]),
        },
        FocusArea {
            name: "Mind-Body Connection".into(),
            description: "Develop awareness and control over movement, focus on mindfulness and control".into(),
            priority: 8,
            target_muscle_groups: strings(&["Full Body"]),
            training_frequency: "2 times per week".into(),
            intensity_level: "Low to Moderate".into(),
            special_considerations: "Focus on mindfulness and control".into(),
            expected_outcomes: strings(&["Better body awareness", "Improved movement quality"]),
        },
    ]
}
