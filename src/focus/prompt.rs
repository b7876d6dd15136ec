// ABOUTME: Prompt construction for chat-backed focus-area generation
// ABOUTME: System prompt fixes the JSON contract; user prompt carries the profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use crate::models::ClientProfile;

/// System prompt establishing the coach persona and the JSON response shape.
pub const SYSTEM_PROMPT: &str = "\
You are an expert fitness coach and personal trainer with deep knowledge of exercise science, \
biomechanics, and program design. Analyze the client's profile and create 8 custom fitness focus \
areas that will form the foundation of their personalized 16-week transformation program.

For each focus area, consider the client's goals and limitations, exercise experience and \
available time, health conditions, preferred workout style and intensity, and realistic \
progression. Do not create nutrition-based focus areas.

Return exactly 8 focus areas as a JSON array; each entry must have this structure:
{
  \"name\": \"Descriptive name of the fitness focus area\",
  \"description\": \"Detailed explanation of what this focus area entails\",
  \"priority\": 1-8 (1 being highest priority),
  \"target_muscle_groups\": [\"list\", \"of\", \"primary\", \"muscle\", \"groups\"],
  \"training_frequency\": \"How often this should be trained (e.g., '2-3 times per week')\",
  \"intensity_level\": \"Low/Moderate/High/Very High\",
  \"special_considerations\": \"Any specific considerations for this client\",
  \"expected_outcomes\": [\"list\", \"of\", \"expected\", \"results\"]
}

Each focus area must be specific, actionable, and map to common exercise types, movement \
patterns, or muscle groups. Avoid abstract categories like 'Holistic Wellness' or \
'Mindset Transformation'.";

/// Render the client profile into the user prompt.
#[must_use]
pub fn user_prompt(profile: &ClientProfile) -> String {
    format!(
        "Create 8 custom fitness focus areas for this client's 16-week program:\n\n\
         CLIENT PROFILE:\n\
         - Name: {name}\n\
         - Age: {age} | Height: {height} | Weight: {weight} lbs\n\
         - Sex: {sex}\n\
         - Activity Level: {activity}\n\n\
         FITNESS GOALS:\n\
         - Primary Goal: {goal}\n\
         - Goal Classification: {classification}\n\
         - What's Holding Them Back: {holding_back}\n\n\
         EXERCISE PREFERENCES:\n\
         - Exercise Days: {days} days per week ({day_labels})\n\
         - Preferred Workout Length: {length}\n\
         - Start Date: {start}\n\n\
         HEALTH:\n\
         - Health Conditions: {health}\n\
         - Metabolism Rating: {metabolism}/10\n\n\
         HABITS:\n\
         - Habits to Destroy: {destroy}\n\
         - Habits to Build: {build}\n\n\
         Return the response as a valid JSON array with exactly 8 focus areas.",
        name = profile.display_name(),
        age = profile.age,
        height = profile.height,
        weight = profile.weight,
        sex = profile.sex_at_birth,
        activity = profile.activity_level,
        goal = profile.top_fitness_goal,
        classification = profile.goal_classification.join(", "),
        holding_back = profile.holding_back,
        days = profile.exercise_days_per_week,
        day_labels = profile.exercise_days.join(", "),
        length = profile.preferred_workout_length,
        start = profile.start_date,
        health = profile.health_conditions,
        metabolism = profile.metabolism_rating,
        destroy = profile.habits_to_destroy.join(", "),
        build = profile.habits_to_build.join(", "),
    )
}
