// ABOUTME: CLI entry point: intake submission JSON in, fitness program JSON out
// ABOUTME: Wires environment configuration into the program pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forgefit

//! Forgefit command-line interface.
//!
//! Reads one intake-form submission (JSON) and prints the generated
//! 16-week fitness program as JSON. External endpoints are configured via
//! `FORGEFIT_*` environment variables; without a chat API key the fixed
//! default focus areas are used.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use forgefit::config::EngineConfig;
use forgefit::focus::ChatFocusAreaGenerator;
use forgefit::logging::{self, LoggingConfig};
use forgefit::pipeline::ProgramPipeline;
use forgefit::platform::{self, PlatformClient};
use forgefit::search::HttpExerciseIndex;

#[derive(Debug, Parser)]
#[command(
    name = "forgefit",
    about = "Generate a personalized 16-week fitness program from an intake submission"
)]
struct Cli {
    /// Path to the intake submission JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Pretty-print the program JSON
    #[arg(long)]
    pretty: bool,

    /// Platform user id; when set, the program is also exported to the
    /// configured fitness platform
    #[arg(long, value_name = "USER_ID")]
    export_user: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&LoggingConfig::from_env()).context("failed to initialize logging")?;

    let config = EngineConfig::from_env();

    let raw = tokio::fs::read_to_string(&cli.input)
        .await
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let submission: serde_json::Value =
        serde_json::from_str(&raw).context("intake submission is not valid JSON")?;

    let generator =
        ChatFocusAreaGenerator::new(config.chat).context("failed to build focus generator")?;
    let index =
        HttpExerciseIndex::new(config.search).context("failed to build exercise index client")?;
    let pipeline = ProgramPipeline::new(generator, index, config.shape);

    let program = pipeline
        .generate_from_submission(&submission)
        .await
        .context("program generation failed")?;

    if let Some(user_id) = &cli.export_user {
        let client =
            PlatformClient::new(config.platform).context("failed to build platform client")?;
        platform::export_program(&client, &program, user_id).await;
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&program)?
    } else {
        serde_json::to_string(&program)?
    };
    println!("{output}");
    Ok(())
}
