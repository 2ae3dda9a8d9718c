// ABOUTME: Static catalog of slash commands understood by the community chat bot
// ABOUTME: Each entry carries the reply text the bot posts for it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vira_core::constants::chat::{CMD_CONSULTA, CMD_HELP, CMD_MACRO};
use vira_core::models::{BotAction, BotCommand};

/// Reply to `/help`
pub const HELP_REPLY: &str = "🤖 Comandos disponíveis:\n/macro [alimento] - Informações nutricionais\n/consulta - Agendar consulta\n/help - Mostrar comandos";

/// Reply to `/consulta`
pub const CONSULTA_REPLY: &str = "📅 Consulta agendada! Você receberá o link por email em breve.";

/// Commands the bot answers
pub static BOT_COMMANDS: [BotCommand; 3] = [
    BotCommand {
        command: CMD_MACRO,
        description: "Buscar informações nutricionais",
        response: "Digite o alimento após /macro (ex: /macro pizza)",
        action: BotAction::MacroLookup,
    },
    BotCommand {
        command: CMD_HELP,
        description: "Lista de comandos disponíveis",
        response: HELP_REPLY,
        action: BotAction::Help,
    },
    BotCommand {
        command: CMD_CONSULTA,
        description: "Agendar micro-consulta de 15 min",
        response: CONSULTA_REPLY,
        action: BotAction::ScheduleConsultation,
    },
];

/// Command whose token is exactly `token`
#[must_use]
pub fn find_command(token: &str) -> Option<&'static BotCommand> {
    BOT_COMMANDS.iter().find(|command| command.command == token)
}
