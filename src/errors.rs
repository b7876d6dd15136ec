// ABOUTME: Application error types and result alias for the program engine
// ABOUTME: Separates hard configuration errors from soft data-unavailability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Error Types
//!
//! The engine distinguishes three failure classes:
//!
//! - **Soft data-unavailability** (empty search results, missing payload
//!   fields, exhausted match pools) is recovered locally by skipping or
//!   defaulting and never surfaces as an [`AppError`].
//! - **Hard configuration errors** (invalid indices, missing required
//!   environment) indicate programming or deployment mistakes and are raised
//!   immediately.
//! - **External-service failures** are absorbed at the collaborator wrappers
//!   via bounded retry and fallbacks; callers receive empty or default
//!   results instead of errors.

use thiserror::Error;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Required configuration is missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// A caller requested a program section index that does not exist
    #[error("focus area index {index} out of range (have {count})")]
    FocusAreaIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of available focus areas
        count: usize,
    },

    /// Intake submission could not be interpreted
    #[error("invalid intake submission: {0}")]
    InvalidSubmission(String),

    /// Outbound HTTP request failed
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("{service} returned status {status}: {body}")]
    RemoteStatus {
        /// Which remote service answered
        service: String,
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// JSON (de)serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A model response could not be parsed into the expected shape
    #[error("unparseable model response: {0}")]
    ModelResponse(String),
}

impl AppError {
    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid-submission error
    #[must_use]
    pub fn invalid_submission(msg: impl Into<String>) -> Self {
        Self::InvalidSubmission(msg.into())
    }

    /// Create a remote-status error
    #[must_use]
    pub fn remote_status(service: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::RemoteStatus {
            service: service.into(),
            status,
            body: body.into(),
        }
    }
}
