// ABOUTME: Chat-backed focus-area generator against an OpenAI-compatible endpoint
// ABOUTME: Bounded retry with exponential backoff, deterministic fallback on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! Chat-completions client for focus-area generation.
//!
//! Wraps any `OpenAI`-compatible `/chat/completions` endpoint. Failures are
//! retried with exponential backoff up to the configured attempt count and
//! then absorbed: the generator returns the fixed default list rather than
//! propagating an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::{default_focus_areas, prompt, FocusAreaGenerator};
use crate::config::ChatConfig;
use crate::constants::{program, timeouts};
use crate::errors::{AppError, AppResult};
use crate::models::{ClientProfile, FocusArea};

/// Initial backoff delay between attempts
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Focus area as emitted by the model; lenient defaults so a slightly
/// off-shape entry degrades instead of failing the whole array.
#[derive(Debug, Deserialize)]
struct RawFocusArea {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_priority")]
    priority: u32,
    #[serde(default)]
    target_muscle_groups: Vec<String>,
    #[serde(default)]
    training_frequency: String,
    #[serde(default = "default_intensity")]
    intensity_level: String,
    #[serde(default)]
    special_considerations: String,
    #[serde(default)]
    expected_outcomes: Vec<String>,
}

fn default_priority() -> u32 {
    1
}

fn default_intensity() -> String {
    "Moderate".into()
}

impl From<RawFocusArea> for FocusArea {
    fn from(raw: RawFocusArea) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            priority: raw.priority,
            target_muscle_groups: raw.target_muscle_groups,
            training_frequency: raw.training_frequency,
            intensity_level: raw.intensity_level,
            special_considerations: raw.special_considerations,
            expected_outcomes: raw.expected_outcomes,
        }
    }
}

/// Focus-area generator backed by a chat completion endpoint.
pub struct ChatFocusAreaGenerator {
    config: ChatConfig,
    client: Client,
}

impl ChatFocusAreaGenerator {
    /// Create a generator from chat configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the HTTP client cannot be built.
    pub fn new(config: ChatConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeouts::CHAT_SECS))
            .connect_timeout(Duration::from_secs(timeouts::CONNECT_SECS))
            .build()
            .map_err(|e| AppError::config(format!("chat client build failed: {e}")))?;
        Ok(Self { config, client })
    }

    async fn request_focus_areas(&self, profile: &ClientProfile) -> AppResult<Vec<FocusArea>> {
        // Rendered prompt must outlive the request body that borrows it.
        let user = prompt::user_prompt(profile);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
            temperature: 0.7,
            max_tokens: 2000,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::remote_status("chat", status.as_u16(), text));
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| AppError::ModelResponse("empty choices".into()))?;

        parse_focus_areas(content)
    }
}

/// Extract the first JSON array from model output and decode it.
fn parse_focus_areas(content: &str) -> AppResult<Vec<FocusArea>> {
    let start = content
        .find('[')
        .ok_or_else(|| AppError::ModelResponse("no JSON array in response".into()))?;
    let end = content
        .rfind(']')
        .ok_or_else(|| AppError::ModelResponse("unterminated JSON array".into()))?;
    if end < start {
        return Err(AppError::ModelResponse("malformed JSON array".into()));
    }

    let raw: Vec<RawFocusArea> = serde_json::from_str(&content[start..=end])?;
    let mut areas: Vec<FocusArea> = raw.into_iter().map(FocusArea::from).collect();
    areas.sort_by_key(|a| a.priority);
    Ok(areas)
}

#[async_trait]
impl FocusAreaGenerator for ChatFocusAreaGenerator {
    async fn generate(&self, profile: &ClientProfile) -> Vec<FocusArea> {
        if self.config.api_key.is_none() {
            debug!("no chat API key configured, using default focus areas");
            return default_focus_areas();
        }

        let mut backoff = INITIAL_BACKOFF;
        let attempts = self.config.max_attempts.max(1);
        for attempt in 1..=attempts {
            match self.request_focus_areas(profile).await {
                Ok(areas) if areas.len() == program::FOCUS_AREA_COUNT => {
                    info!(count = areas.len(), "generated focus areas");
                    return areas;
                }
                Ok(areas) => {
                    warn!(
                        count = areas.len(),
                        attempt, "model returned wrong focus area count"
                    );
                }
                Err(e) => {
                    warn!(error = %e, attempt, "focus area generation attempt failed");
                }
            }
            if attempt < attempts {
                sleep(backoff).await;
                backoff *= 2;
            }
        }

        warn!("all generation attempts failed, using default focus areas");
        default_focus_areas()
    }
}
