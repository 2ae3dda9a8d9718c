// ABOUTME: Chat bot configuration for bot identity and the macro placeholder estimate
// ABOUTME: Placeholder values stand in until a real food database lookup exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use vira_core::constants::chat::{BOT_DISPLAY_NAME, BOT_USER_ID};

use super::error::ConfigError;

/// Chat bot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatBotConfig {
    /// Author id stamped on bot replies
    pub bot_user_id: String,
    /// Author display name stamped on bot replies
    pub bot_display_name: String,
    /// Placeholder `/macro` estimate
    pub macro_placeholder: MacroPlaceholderConfig,
}

/// Fixed values reported by `/macro` for any food (average portion)
// TODO: replace with a food database lookup once nutrition search is wired in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroPlaceholderConfig {
    /// Energy (kcal)
    pub kcal: u32,
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrates (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

impl ChatBotConfig {
    /// Validate bot identity
    ///
    /// # Errors
    ///
    /// Returns an error if the bot id or display name is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_user_id.trim().is_empty() || self.bot_display_name.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "Bot user id and display name must not be empty",
            ));
        }
        Ok(())
    }
}

impl Default for ChatBotConfig {
    fn default() -> Self {
        Self {
            bot_user_id: BOT_USER_ID.to_owned(),
            bot_display_name: BOT_DISPLAY_NAME.to_owned(),
            macro_placeholder: MacroPlaceholderConfig::default(),
        }
    }
}

impl Default for MacroPlaceholderConfig {
    fn default() -> Self {
        Self {
            kcal: 200,
            protein_g: 8,
            carbs_g: 25,
            fat_g: 8,
        }
    }
}
