// ABOUTME: Logging configuration and structured logging setup for the progression engine
// ABOUTME: Configures log levels, formatters, and domain-specific structured events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! The library itself only emits `tracing` events. Binaries (and tests) decide
//! how they are rendered by installing a subscriber through [`LoggingConfig`].

use anyhow::{Context, Result};
use serde_json::json;
use std::env;
use std::io;
use tracing::{debug, info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use vira_core::constants::service_names;
use vira_core::models::{BadgeId, ChatChannel};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: service_names::VIRA_VIDA_ENGINE.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::VIRA_VIDA_ENGINE.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Override the level, keeping everything else
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the env filter for this configuration
    ///
    /// `RUST_LOG` wins over the configured level when it is set.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone());
        EnvFilter::new(base).add_directive(
            format!("vira_vida={}", self.level)
                .parse()
                .unwrap_or_else(|_| Level::INFO.into()),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry
                    .with(json_layer)
                    .try_init()
                    .context("failed to install JSON tracing subscriber")?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry
                    .with(pretty_layer)
                    .try_init()
                    .context("failed to install pretty tracing subscriber")?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr);

                registry
                    .with(compact_layer)
                    .try_init()
                    .context("failed to install compact tracing subscriber")?;
            }
        }

        self.log_startup_info();

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "VIRA VIDA engine logging initialised"
        );
    }
}

/// Engine-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a badge being recorded for a user
    pub fn log_badge_awarded(badge: BadgeId, xp_reward: u64, user_xp: u64) {
        info!(
            badge.id = %badge,
            badge.xp_reward = xp_reward,
            user.xp = user_xp,
            "Badge awarded"
        );
    }

    /// Log a level change
    pub fn log_level_up(from_level: u32, to_level: u32, level_name: &str, user_xp: u64) {
        info!(
            level.from = from_level,
            level.to = to_level,
            level.name = %level_name,
            user.xp = user_xp,
            "Level up"
        );
    }

    /// Log a chat command handled by the bot
    pub fn log_bot_command(channel: ChatChannel, command: &str, replied: bool) {
        debug!(
            chat.channel = %channel,
            chat.command = %command,
            chat.replied = replied,
            "Bot command processed"
        );
    }

    /// Log the outcome of the static table self-check
    pub fn log_catalog_check(levels: usize, badges: usize, tips: usize) {
        let summary = json!({
            "levels": levels,
            "badges": badges,
            "tips": tips,
        });
        info!(catalog.summary = %summary, "Static catalogs verified");
    }
}
