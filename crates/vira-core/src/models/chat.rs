// ABOUTME: Community chat models consumed by the command bot
// ABOUTME: ChatChannel, ChatMessage, BotCommand, and BotAction definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Community chat channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChatChannel {
    /// Questions for coaches
    CoachCorner,
    /// Training tricks
    WorkoutHacks,
    /// Progress photos (auto-deleted by the transport after 24h)
    ProgressSelfies,
}

impl ChatChannel {
    /// All channels
    pub const ALL: [Self; 3] = [Self::CoachCorner, Self::WorkoutHacks, Self::ProgressSelfies];

    /// Channel key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoachCorner => "coach-corner",
            Self::WorkoutHacks => "workout-hacks",
            Self::ProgressSelfies => "progress-selfies",
        }
    }
}

impl fmt::Display for ChatChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatChannel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown chat channel: {s}")))
    }
}

/// A chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier
    pub id: String,
    /// Author id
    pub user_id: String,
    /// Author display name
    pub user_name: String,
    /// Message text
    pub content: String,
    /// Channel the message belongs to
    pub channel: ChatChannel,
    /// When the message was authored
    pub timestamp: DateTime<Utc>,
    /// Emoji -> ids of users who reacted
    pub reactions: BTreeMap<String, Vec<String>>,
    /// Whether the bot authored the message
    pub is_from_bot: bool,
    /// The command text this message answers, for bot replies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_command: Option<String>,
}

/// What a bot command does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotAction {
    /// List available commands
    Help,
    /// Nutrition estimate for a food
    MacroLookup,
    /// Book a short consultation
    ScheduleConsultation,
}

/// Static description of a bot command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BotCommand {
    /// Command token including the leading slash
    pub command: &'static str,
    /// What the command does
    pub description: &'static str,
    /// Reply posted for the command; a usage hint when the reply is computed
    pub response: &'static str,
    /// Action dispatched when the command is recognised
    pub action: BotAction,
}
