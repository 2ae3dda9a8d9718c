// ABOUTME: Application-wide constants for the VIRA VIDA progression engine
// ABOUTME: Service names, energy densities, validation limits, and bot identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Library service name
    pub const VIRA_VIDA_ENGINE: &str = "vira_vida";
    /// Command-line front end
    pub const VIRA_CLI: &str = "vira-cli";
}

/// Energy density of macronutrients
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate energy density (kcal per gram)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat energy density (kcal per gram)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// WHO BMI category upper bounds (exclusive)
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_MAX: f64 = 18.5;
    /// Below this value: normal weight
    pub const NORMAL_MAX: f64 = 25.0;
    /// Below this value: overweight
    pub const OVERWEIGHT_MAX: f64 = 30.0;
}

/// Onboarding input limits
pub mod limits {
    /// Maximum goal phrase length in characters
    pub const GOAL_PHRASE_MAX_CHARS: usize = 80;
    /// Exclusive upper bound for a plausible body weight (kg)
    pub const WEIGHT_MAX_KG: f64 = 500.0;
    /// Maximum estimated plan duration (two years)
    pub const PLAN_MAX_WEEKS: u32 = 104;
}

/// Chat bot identity and command tokens
pub mod chat {
    /// User id stamped on bot-authored messages
    pub const BOT_USER_ID: &str = "bot";
    /// Display name stamped on bot-authored messages
    pub const BOT_DISPLAY_NAME: &str = "FitBot";
    /// Prefix that marks a message as a command
    pub const COMMAND_PREFIX: char = '/';
    /// Help command token
    pub const CMD_HELP: &str = "/help";
    /// Macro lookup command token
    pub const CMD_MACRO: &str = "/macro";
    /// Consultation scheduling command token
    pub const CMD_CONSULTA: &str = "/consulta";
}
