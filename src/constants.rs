// ABOUTME: Program-shape constants and remote platform payload defaults
// ABOUTME: Fixed values for the 16-week horizon, focus area count, and workout prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! Crate-wide constants.
//!
//! The program horizon is fixed at 16 weeks by product design; everything
//! else here is a default that [`crate::config`] can override.

/// Program shape defaults
pub mod program {
    /// Total program length in weeks. Fixed by product design, independent
    /// of any other configuration.
    pub const TOTAL_WEEKS: u32 = 16;

    /// Number of focus areas generated per client.
    pub const FOCUS_AREA_COUNT: usize = 8;

    /// Default number of exercises prescribed per workout slot.
    pub const DEFAULT_EXERCISES_PER_WORKOUT: usize = 5;

    /// Default over-fetch multiplier applied before in-process tag
    /// filtering. A heuristic safety margin, not a guarantee that
    /// `exercises_needed` candidates survive filtering.
    pub const DEFAULT_OVERFETCH_MULTIPLIER: usize = 2;

    /// Weeks covered by each per-focus-area training program on the
    /// remote platform.
    pub const WEEKS_PER_FOCUS_AREA: u32 = 2;
}

/// Fixed per-exercise prescription defaults for remote platform workouts.
/// These are constants, not computed values.
pub mod prescription {
    /// Sets per exercise
    pub const SETS: u32 = 3;

    /// Rep target per set
    pub const TARGET: &str = "10 reps";

    /// Interval time between sets, in seconds
    pub const INTERVAL_SECS: u32 = 30;

    /// Rest time after an exercise, in seconds
    pub const REST_SECS: u32 = 60;
}

/// Tag facet names used by the semantic index payload
pub mod facets {
    /// Difficulty level facet
    pub const LEVEL: &str = "level";

    /// Primary muscle facet
    pub const MAIN_MUSCLE: &str = "mainMuscle";

    /// Equipment facet
    pub const EQUIPMENT: &str = "equipment";

    /// Force type facet (push/pull/static)
    pub const FORCE: &str = "force";
}

/// Outbound HTTP timeouts, in seconds
pub mod timeouts {
    /// Request timeout for the embedding and vector search endpoints
    pub const SEARCH_SECS: u64 = 10;

    /// Request timeout for the chat completion endpoint
    pub const CHAT_SECS: u64 = 30;

    /// Request timeout for remote platform writes
    pub const PLATFORM_SECS: u64 = 30;

    /// Connection timeout shared by all outbound clients
    pub const CONNECT_SECS: u64 = 10;
}

/// Service identity for logging
pub mod service {
    /// Service name reported in structured logs
    pub const NAME: &str = "forgefit";
}
