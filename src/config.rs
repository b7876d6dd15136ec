// ABOUTME: Environment-driven runtime configuration for the program engine
// ABOUTME: Typed sub-configs for search, chat, platform endpoints and program shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! Environment-only configuration.
//!
//! Everything is read from the process environment at startup; there is no
//! configuration file. Missing values fall back to documented defaults, with
//! the exception of credentials, which stay `None` and disable the
//! corresponding outbound client.

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::program;

/// Semantic exercise index endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Embedding endpoint URL (`FORGEFIT_EMBEDDING_URL`)
    pub embedding_url: String,
    /// Vector search endpoint URL (`FORGEFIT_SEARCH_URL`)
    pub search_url: String,
    /// API key sent with search requests (`FORGEFIT_SEARCH_API_KEY`)
    pub api_key: Option<String>,
}

/// Chat completion endpoint used for focus-area generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of an OpenAI-compatible endpoint (`FORGEFIT_CHAT_BASE_URL`)
    pub base_url: String,
    /// Model identifier (`FORGEFIT_CHAT_MODEL`)
    pub model: String,
    /// API key (`FORGEFIT_CHAT_API_KEY`)
    pub api_key: Option<String>,
    /// Bounded retry attempts before falling back to the default focus areas
    pub max_attempts: u32,
}

/// Remote fitness-tracking platform endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Workout creation endpoint (`FORGEFIT_PLATFORM_WORKOUT_URL`)
    pub workout_url: String,
    /// Training program creation endpoint (`FORGEFIT_PLATFORM_PROGRAM_URL`)
    pub program_url: String,
    /// Authorization header value (`FORGEFIT_PLATFORM_AUTH`)
    pub auth: Option<String>,
}

/// Tunable program shape. The 16-week horizon is fixed and deliberately
/// absent from this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramShape {
    /// Exercises prescribed per workout slot
    pub exercises_per_workout: usize,
    /// Over-fetch multiplier applied before tag filtering
    pub overfetch_multiplier: usize,
}

impl Default for ProgramShape {
    fn default() -> Self {
        Self {
            exercises_per_workout: program::DEFAULT_EXERCISES_PER_WORKOUT,
            overfetch_multiplier: program::DEFAULT_OVERFETCH_MULTIPLIER,
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Semantic index endpoints
    pub search: SearchConfig,
    /// Chat completion endpoint
    pub chat: ChatConfig,
    /// Remote platform endpoints
    pub platform: PlatformConfig,
    /// Program shape tunables
    pub shape: ProgramShape,
}

impl EngineConfig {
    /// Load configuration from the environment, applying defaults for
    /// everything except credentials.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            search: SearchConfig {
                embedding_url: env_or("FORGEFIT_EMBEDDING_URL", "http://localhost:8600/predict"),
                search_url: env_or(
                    "FORGEFIT_SEARCH_URL",
                    "http://localhost:6333/collections/exercises/points/search",
                ),
                api_key: env::var("FORGEFIT_SEARCH_API_KEY").ok(),
            },
            chat: ChatConfig {
                base_url: env_or("FORGEFIT_CHAT_BASE_URL", "https://api.openai.com/v1"),
                model: env_or("FORGEFIT_CHAT_MODEL", "gpt-4.1-mini"),
                api_key: env::var("FORGEFIT_CHAT_API_KEY").ok(),
                max_attempts: env_parse_or("FORGEFIT_CHAT_MAX_ATTEMPTS", 2),
            },
            platform: PlatformConfig {
                workout_url: env_or("FORGEFIT_PLATFORM_WORKOUT_URL", ""),
                program_url: env_or("FORGEFIT_PLATFORM_PROGRAM_URL", ""),
                auth: env::var("FORGEFIT_PLATFORM_AUTH").ok(),
            },
            shape: ProgramShape {
                exercises_per_workout: env_parse_or(
                    "FORGEFIT_EXERCISES_PER_WORKOUT",
                    program::DEFAULT_EXERCISES_PER_WORKOUT,
                ),
                overfetch_multiplier: env_parse_or(
                    "FORGEFIT_OVERFETCH_MULTIPLIER",
                    program::DEFAULT_OVERFETCH_MULTIPLIER,
                ),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
