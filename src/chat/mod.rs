// ABOUTME: Community chat bot: command catalog and slash-command processor
// ABOUTME: Message transport and storage belong to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Command processor
pub mod bot;
/// Command catalog
pub mod commands;

pub use bot::ChatBotCommandProcessor;
pub use commands::{find_command, BOT_COMMANDS};
