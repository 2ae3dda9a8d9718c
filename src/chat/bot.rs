// ABOUTME: Rule-based chat bot turning slash-command messages into bot replies
// ABOUTME: Unknown commands and a bare /macro produce no reply rather than an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use vira_core::constants::chat::COMMAND_PREFIX;
use vira_core::models::{BotAction, BotCommand, ChatChannel, ChatMessage};

use super::commands::{find_command, BOT_COMMANDS};
use crate::config::engine::ChatBotConfig;
use crate::logging::AppLogger;

/// Answers slash commands posted in community channels
#[derive(Debug, Clone, Default)]
pub struct ChatBotCommandProcessor {
    config: ChatBotConfig,
}

impl ChatBotCommandProcessor {
    /// Processor with the given bot identity and placeholder values
    #[must_use]
    pub const fn new(config: ChatBotConfig) -> Self {
        Self { config }
    }

    /// The command catalog
    #[must_use]
    pub fn commands() -> &'static [BotCommand] {
        &BOT_COMMANDS
    }

    /// Reply to `text` posted in `channel`, stamped with the current time
    #[must_use]
    pub fn process(&self, text: &str, channel: ChatChannel) -> Option<ChatMessage> {
        self.process_at(text, channel, Utc::now())
    }

    /// Reply to `text` posted in `channel`, stamped with `timestamp`
    #[must_use]
    pub fn process_at(
        &self,
        text: &str,
        channel: ChatChannel,
        timestamp: DateTime<Utc>,
    ) -> Option<ChatMessage> {
        if !text.starts_with(COMMAND_PREFIX) {
            return None;
        }

        let (token, argument) = text
            .split_once(' ')
            .map_or((text, ""), |(token, rest)| (token, rest.trim()));

        let content = self.reply_content(token, argument);
        AppLogger::log_bot_command(channel, token, content.is_some());
        let content = content?;

        Some(ChatMessage {
            id: Uuid::new_v4().to_string(),
            user_id: self.config.bot_user_id.clone(),
            user_name: self.config.bot_display_name.clone(),
            content,
            channel,
            timestamp,
            reactions: BTreeMap::new(),
            is_from_bot: true,
            bot_command: Some(text.to_owned()),
        })
    }

    fn reply_content(&self, token: &str, argument: &str) -> Option<String> {
        let command = find_command(token)?;
        match command.action {
            BotAction::Help | BotAction::ScheduleConsultation => Some(command.response.to_owned()),
            BotAction::MacroLookup if argument.is_empty() => None,
            BotAction::MacroLookup => {
                let estimate = &self.config.macro_placeholder;
                Some(format!(
                    "🍽️ {argument} (porção média): ~{} kcal | Proteína: {}g | Carbs: {}g | Gordura: {}g",
                    estimate.kcal, estimate.protein_g, estimate.carbs_g, estimate.fat_g
                ))
            }
        }
    }
}
