// ABOUTME: Engine configuration for health calculators, chat bot, and daily content
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `health` - BMR coefficients, activity factors, goal adjustments, macro ratios
//! - `chat` - Bot identity and the `/macro` placeholder estimate
//! - `content` - Daily tip release schedule
//!
//! `EngineConfig<false>` is a freshly assembled or deserialized configuration;
//! [`EngineConfig::validate`] turns it into `EngineConfig<true>`, which is the
//! only form accepted by [`EngineConfig::global`]. Only the unvalidated form
//! implements `Default` and `Deserialize`.
//!
//! Every default can be overridden with a `VIRA_*` environment variable.

pub mod chat;
pub mod content;
pub mod error;
pub mod health;

pub use chat::{ChatBotConfig, MacroPlaceholderConfig};
pub use content::ContentConfig;
pub use error::ConfigError;
pub use health::{
    ActivityFactorsConfig, BmrCoefficients, BmrConfig, GoalAdjustmentConfig, HealthMetricsConfig,
    MacroRatio, MacroRatiosConfig,
};

use serde::{Deserialize, Deserializer, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig<true>> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct EngineConfig<const VALIDATED: bool = false> {
    /// Health calculator configuration
    pub health: HealthMetricsConfig,
    /// Chat bot configuration
    pub chat: ChatBotConfig,
    /// Daily content configuration
    pub content: ContentConfig,
}

/// Wire form of [`EngineConfig`]
#[derive(Deserialize)]
struct RawEngineConfig {
    health: HealthMetricsConfig,
    chat: ChatBotConfig,
    content: ContentConfig,
}

impl<const VALIDATED: bool> EngineConfig<VALIDATED> {
    fn from_sections(
        health: HealthMetricsConfig,
        chat: ChatBotConfig,
        content: ContentConfig,
    ) -> Self {
        Self {
            health,
            chat,
            content,
        }
    }

    fn built_in() -> Self {
        Self::from_sections(
            HealthMetricsConfig::default(),
            ChatBotConfig::default(),
            ContentConfig::default(),
        )
    }
}

impl Default for EngineConfig<false> {
    fn default() -> Self {
        Self::built_in()
    }
}

impl<'de> Deserialize<'de> for EngineConfig<false> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawEngineConfig {
            health,
            chat,
            content,
        } = RawEngineConfig::deserialize(deserializer)?;
        Ok(Self::from_sections(health, chat, content))
    }
}

impl EngineConfig<true> {
    /// Get the global configuration instance
    ///
    /// Loads from the environment on first use and falls back to the defaults
    /// if the environment is invalid.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::defaults()
            })
        })
    }

    /// Load configuration from environment overrides and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        EngineConfig::<false>::from_env()?.validate()
    }

    /// Built-in defaults, which are valid by construction
    #[must_use]
    pub fn defaults() -> Self {
        Self::built_in()
    }
}

impl EngineConfig<false> {
    /// Defaults with `VIRA_*` environment overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env_overrides()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(self) -> Result<EngineConfig<true>, ConfigError> {
        self.health.validate()?;
        self.chat.validate()?;
        self.content.validate()?;

        let Self {
            health,
            chat,
            content,
        } = self;
        Ok(EngineConfig::<true>::from_sections(health, chat, content))
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity factors
        let factors = &mut self.health.activity_factors;
        Self::apply_env_var("VIRA_ACTIVITY_FACTOR_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("VIRA_ACTIVITY_FACTOR_LIGHT", &mut factors.light)?;
        Self::apply_env_var("VIRA_ACTIVITY_FACTOR_MODERATE", &mut factors.moderate)?;
        Self::apply_env_var("VIRA_ACTIVITY_FACTOR_ACTIVE", &mut factors.active)?;
        Self::apply_env_var("VIRA_ACTIVITY_FACTOR_VERY_ACTIVE", &mut factors.very_active)?;

        // Goal adjustments
        let goals = &mut self.health.goal_adjustments;
        Self::apply_env_var("VIRA_CALORIE_DEFICIT_KCAL", &mut goals.lose_deficit_kcal)?;
        Self::apply_env_var("VIRA_CALORIE_SURPLUS_KCAL", &mut goals.gain_surplus_kcal)?;

        // Chat bot identity
        Self::apply_env_var("VIRA_BOT_USER_ID", &mut self.chat.bot_user_id)?;
        Self::apply_env_var("VIRA_BOT_DISPLAY_NAME", &mut self.chat.bot_display_name)?;

        // Tip release schedule
        Self::apply_env_var("VIRA_TIP_RELEASE_HOUR", &mut self.content.release_hour)?;
        Self::apply_env_var("VIRA_TIP_RELEASE_MINUTE", &mut self.content.release_minute)?;

        Ok(self)
    }
}
