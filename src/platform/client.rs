// ABOUTME: Outbound HTTP client for remote platform workout and program writes
// ABOUTME: Auth header from config; non-success statuses become AppErrors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use super::payloads::{TrainingProgramRequest, WorkoutRequest};
use crate::config::PlatformConfig;
use crate::constants::timeouts;
use crate::errors::{AppError, AppResult};

/// Client for the remote fitness-tracking platform.
pub struct PlatformClient {
    config: PlatformConfig,
    client: Client,
}

impl PlatformClient {
    /// Create a client from platform configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no auth credential is configured
    /// or the HTTP client cannot be built.
    pub fn new(config: PlatformConfig) -> AppResult<Self> {
        if config.auth.is_none() {
            return Err(AppError::config("platform auth not configured"));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(timeouts::PLATFORM_SECS))
            .connect_timeout(Duration::from_secs(timeouts::CONNECT_SECS))
            .build()
            .map_err(|e| AppError::config(format!("platform client build failed: {e}")))?;
        Ok(Self { config, client })
    }

    async fn post(&self, url: &str, body: &(impl serde::Serialize + Sync)) -> AppResult<Value> {
        let auth = self
            .config
            .auth
            .as_deref()
            .ok_or_else(|| AppError::config("platform auth not configured"))?;

        let response = self
            .client
            .post(url)
            .header("accept", "application/json")
            .header("authorization", auth)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(AppError::remote_status("platform", status.as_u16(), text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Create one workout on the platform.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status; the
    /// pipeline logs these and continues with the next slot.
    pub async fn create_workout(&self, request: &WorkoutRequest) -> AppResult<Value> {
        debug!("creating platform workout");
        let result = self.post(&self.config.workout_url, request).await?;
        info!("created platform workout");
        Ok(result)
    }

    /// Create one training program on the platform and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// response without a program id.
    pub async fn create_training_program(
        &self,
        request: &TrainingProgramRequest,
    ) -> AppResult<String> {
        debug!("creating platform training program");
        let result = self.post(&self.config.program_url, request).await?;
        result
            .get("id")
            .map(|id| match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .ok_or_else(|| AppError::ModelResponse("program response missing id".into()))
    }
}
