// ABOUTME: Chat bot command for vira-cli
// ABOUTME: Shows the reply the bot would post for a message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vira_vida::chat::ChatBotCommandProcessor;
use vira_vida::config::engine::ChatBotConfig;
use vira_vida::errors::AppResult;
use vira_vida::models::ChatChannel;

use crate::helpers::display::emit;

/// Print the bot reply for `text`, or a note when there is none
pub fn bot(text: &str, channel: ChatChannel, config: &ChatBotConfig, json: bool) -> AppResult<()> {
    let processor = ChatBotCommandProcessor::new(config.clone());
    let reply = processor.process(text, channel);

    emit(&reply, json, |reply| match reply {
        Some(message) => println!("[{}] {}: {}", message.channel, message.user_name, message.content),
        None => {
            println!("(no reply)");
            println!("Commands:");
            for command in ChatBotCommandProcessor::commands() {
                println!("   {} - {}", command.command, command.description);
            }
        }
    })
}
