// ABOUTME: Level lookup and badge event commands for vira-cli
// ABOUTME: Parses raw XP and event payloads before handing them to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::ValueEnum;
use std::str::FromStr;
use tracing::info;
use vira_vida::errors::{AppError, AppResult};
use vira_vida::formatters::format_xp;
use vira_vida::gamification::{
    badge_definition, validate_xp, BadgeEvent, GamificationEngine, ProgressionEngine,
};
use vira_vida::models::UserProgress;

use crate::helpers::display::{display_level, emit};

/// Badge event kinds accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventKind {
    /// Consecutive days with a weight entry
    WeightLoggedStreak,
    /// Percentage of body weight lost
    WeightLossPercent,
    /// Chat tips posted
    ChatTipsPosted,
    /// Workouts completed
    WorkoutsCompleted,
    /// Activity streak in days
    StreakReached,
    /// Weight goal reached (true/false)
    GoalAchieved,
    /// Current XP total
    XpMilestone,
    /// People helped
    PeopleHelped,
}

impl EventKind {
    fn to_event(self, value: &str) -> AppResult<BadgeEvent> {
        Ok(match self {
            Self::WeightLoggedStreak => BadgeEvent::WeightLoggedStreak(parse(value)?),
            Self::WeightLossPercent => BadgeEvent::WeightLossPercent(parse(value)?),
            Self::ChatTipsPosted => BadgeEvent::ChatTipsPosted(parse(value)?),
            Self::WorkoutsCompleted => BadgeEvent::WorkoutsCompleted(parse(value)?),
            Self::StreakReached => BadgeEvent::StreakReached(parse(value)?),
            Self::GoalAchieved => BadgeEvent::GoalAchieved(parse(value)?),
            Self::XpMilestone => BadgeEvent::XpMilestone(parse(value)?),
            Self::PeopleHelped => BadgeEvent::PeopleHelped(parse(value)?),
        })
    }
}

fn parse<T: FromStr>(value: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_input(format!("Invalid event value: {value}")))
}

/// Show the level for an XP total
pub fn level(raw_xp: i64, json: bool) -> AppResult<()> {
    let xp = validate_xp(raw_xp)?;
    let info = ProgressionEngine::default().level_info(xp)?;
    emit(&info, json, display_level)
}

/// Process one badge event for a user holding `raw_xp` and no badges
pub fn event(raw_xp: i64, kind: EventKind, value: &str, json: bool) -> AppResult<()> {
    let xp = validate_xp(raw_xp)?;
    let event = kind.to_event(value)?;
    info!(event = ?event, user.xp = xp, "Processing badge event");

    let engine = GamificationEngine::default();
    let outcome = engine.record_event(&UserProgress::with_xp(xp), event)?;

    emit(&outcome, json, |outcome| {
        if outcome.is_empty() {
            println!("No new badges");
            return;
        }
        for &id in &outcome.awarded {
            let badge = badge_definition(id);
            println!(
                "{} {} ({:?}) +{} XP - {}",
                badge.icon, badge.name, badge.rarity, badge.xp_reward, badge.description
            );
        }
        println!("Total: {}", format_xp(outcome.progress.xp));
        if let Some(level_up) = &outcome.level_up {
            println!(
                "Level up! {} -> {} ({})",
                level_up.from, level_up.to, level_up.name
            );
        }
    })
}
