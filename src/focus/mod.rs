// ABOUTME: Focus-area generation seam with chat-backed and fallback implementations
// ABOUTME: Generators never let an external failure cross the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! # Focus-Area Generation
//!
//! A [`FocusAreaGenerator`] turns a [`ClientProfile`] into exactly eight
//! prioritized [`FocusArea`]s, sorted ascending by priority. The contract
//! with the rest of the pipeline: every call returns a usable list. On any
//! external failure the fixed default list from [`defaults`] is returned
//! instead, identically across runs.

mod chat;
mod defaults;
mod prompt;

pub use chat::ChatFocusAreaGenerator;
pub use defaults::default_focus_areas;

use async_trait::async_trait;

use crate::models::{ClientProfile, FocusArea};

/// Produces the prioritized focus areas for one client.
#[async_trait]
pub trait FocusAreaGenerator: Send + Sync {
    /// Generate eight focus areas sorted ascending by priority.
    ///
    /// Never fails: implementations fall back to
    /// [`default_focus_areas`] when the backing service is unavailable.
    async fn generate(&self, profile: &ClientProfile) -> Vec<FocusArea>;
}

/// Generator that always returns the fixed default list. Used when no chat
/// endpoint is configured and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFocusAreaGenerator;

#[async_trait]
impl FocusAreaGenerator for StaticFocusAreaGenerator {
    async fn generate(&self, _profile: &ClientProfile) -> Vec<FocusArea> {
        default_focus_areas()
    }
}
