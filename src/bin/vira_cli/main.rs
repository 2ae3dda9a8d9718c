// ABOUTME: VIRA VIDA CLI - command-line front end over the progression engine library
// ABOUTME: Level lookup, badge events, daily tips, health calculators, bot replies, and table checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Level, progress, and XP to the next level
//! vira-cli level --xp 1200
//!
//! # Process a badge event for a user with 480 XP
//! vira-cli event --xp 480 --kind workouts-completed --value 30
//!
//! # Today's tip, a given date, tomorrow, or statistics
//! vira-cli tip
//! vira-cli tip --date 2025-01-15
//! vira-cli tip --next
//! vira-cli tip --stats
//!
//! # Health calculators
//! vira-cli bmi --weight 70 --height 175
//! vira-cli calories --weight 80 --height 180 --age 30 --sex male --activity moderate --goal lose
//! vira-cli macros --calories 2000 --diet keto
//!
//! # Chat bot reply
//! vira-cli bot --channel coach-corner "/macro banana"
//!
//! # Verify static tables
//! vira-cli check
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::process;
use tracing::debug;
use vira_vida::{
    config::EngineConfig,
    constants::service_names,
    errors::{AppResult, ErrorResponse},
    health::CalorieParams,
    logging::LoggingConfig,
    models::{ActivityLevel, ChatChannel, DietStyle, Sex, TipCategory, WeightGoal},
    self_check::verify_static_catalogs,
};

use commands::content::TipQuery;
use commands::progression::EventKind;

#[derive(Parser)]
#[command(
    name = "vira-cli",
    about = "VIRA VIDA progression engine CLI",
    long_about = "Command-line front end for XP levels, badges, daily tips, health calculators, and the chat bot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the level for an XP total
    Level {
        /// XP total
        #[arg(long, allow_negative_numbers = true)]
        xp: i64,
    },

    /// Process a badge event for a user
    Event {
        /// User's XP before the event
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        xp: i64,

        /// Event kind
        #[arg(long, value_enum)]
        kind: EventKind,

        /// Event payload (count, days, percent, XP, or true/false)
        #[arg(long)]
        value: String,
    },

    /// Show daily tips
    Tip {
        /// Tip for a calendar date (YYYY-MM-DD)
        #[arg(long, conflicts_with_all = ["next", "id", "category", "random", "stats"])]
        date: Option<NaiveDate>,

        /// Tomorrow's tip and the time until it is released
        #[arg(long)]
        next: bool,

        /// Tip by id
        #[arg(long)]
        id: Option<u32>,

        /// All tips in a category
        #[arg(long)]
        category: Option<TipCategory>,

        /// A random tip
        #[arg(long)]
        random: bool,

        /// Catalog statistics
        #[arg(long)]
        stats: bool,
    },

    /// Body mass index
    Bmi {
        /// Weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,
    },

    /// Daily calorie target
    Calories {
        /// Weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,

        /// Age (years)
        #[arg(long)]
        age: u32,

        /// male or female
        #[arg(long)]
        sex: Sex,

        /// sedentary, light, moderate, active, or very-active
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,

        /// lose, maintain, or gain
        #[arg(long, default_value = "maintain")]
        goal: WeightGoal,

        /// Also print the macro split for this diet style
        #[arg(long)]
        diet: Option<DietStyle>,
    },

    /// Macro split for a calorie target
    Macros {
        /// Daily calories (kcal)
        #[arg(long)]
        calories: u32,

        /// keto, low-carb, vegan, carnivore, or mediterranean
        #[arg(long)]
        diet: DietStyle,
    },

    /// Reply the chat bot would post
    Bot {
        /// Channel the message is posted in
        #[arg(long, default_value = "coach-corner")]
        channel: ChatChannel,

        /// Message text, e.g. "/macro banana"
        text: String,
    },

    /// Verify the built-in level, badge, and tip tables
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    debug!(service = service_names::VIRA_CLI, "VIRA VIDA CLI");

    let json = cli.json;
    match run(cli.command, json) {
        Ok(()) => Ok(()),
        Err(error) if json => {
            eprintln!("{}", serde_json::to_string(&ErrorResponse::from(error))?);
            process::exit(1);
        }
        Err(error) => Err(error.into()),
    }
}

fn run(command: Command, json: bool) -> AppResult<()> {
    verify_static_catalogs()?;
    let config = EngineConfig::global();

    match command {
        Command::Level { xp } => commands::progression::level(xp, json)?,
        Command::Event { xp, kind, value } => commands::progression::event(xp, kind, &value, json)?,
        Command::Tip {
            date,
            next,
            id,
            category,
            random,
            stats,
        } => {
            let query = if let Some(date) = date {
                TipQuery::Date(date)
            } else if next {
                TipQuery::Next
            } else if let Some(id) = id {
                TipQuery::Id(id)
            } else if let Some(category) = category {
                TipQuery::Category(category)
            } else if random {
                TipQuery::Random
            } else if stats {
                TipQuery::Stats
            } else {
                TipQuery::Today
            };
            commands::content::tip(query, &config.content, json)?;
        }
        Command::Bmi { weight, height } => commands::health::bmi(weight, height, json)?,
        Command::Calories {
            weight,
            height,
            age,
            sex,
            activity,
            goal,
            diet,
        } => {
            let params = CalorieParams {
                weight_kg: weight,
                height_cm: height,
                age,
                sex,
                activity_level: activity,
                goal,
            };
            commands::health::calories(&params, diet, &config.health, json)?;
        }
        Command::Macros { calories, diet } => {
            commands::health::macros(calories, diet, &config.health, json)?;
        }
        Command::Bot { channel, text } => commands::chat::bot(&text, channel, &config.chat, json)?,
        Command::Check => commands::check::run(json)?,
    }

    Ok(())
}
