// ABOUTME: Badge eligibility rules mapping observed events to newly earned badges
// ABOUTME: Thresholds are inclusive and badges already earned are never returned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use vira_core::models::{BadgeId, EarnedBadges};

/// Consecutive days of weight logging for `ferro`
pub const WEIGHT_LOG_STREAK_DAYS: u32 = 7;
/// Percentage of body weight lost for `agua_pescoco`
pub const WEIGHT_LOSS_PERCENT: f64 = 2.0;
/// Useful chat tips posted for `helper`
pub const CHAT_TIPS_POSTED: u32 = 3;
/// Completed workouts for `grao_areia`
pub const WORKOUTS_GRAO_AREIA: u32 = 30;
/// Completed workouts for `warrior`
pub const WORKOUTS_WARRIOR: u32 = 100;
/// Streak length for `disciplinado`
pub const STREAK_DISCIPLINADO_DAYS: u32 = 30;
/// People helped for `mentor`
pub const PEOPLE_HELPED_MENTOR: u32 = 10;
/// XP total for `guru`
pub const XP_GURU: u64 = 1000;
/// XP total for `legend`
pub const XP_LEGEND: u64 = 5000;

/// An observed fact that may unlock badges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BadgeEvent {
    /// Current consecutive days with a weight entry
    WeightLoggedStreak(u32),
    /// Percentage of body weight lost over the tracking window
    WeightLossPercent(f64),
    /// Number of chat tips the user has posted
    ChatTipsPosted(u32),
    /// Total workouts completed
    WorkoutsCompleted(u32),
    /// Current activity streak in days
    StreakReached(u32),
    /// Whether the user reached their weight goal
    GoalAchieved(bool),
    /// Current XP total
    XpMilestone(u64),
    /// Number of community members the user has helped
    PeopleHelped(u32),
}

impl BadgeEvent {
    /// Badges this event can unlock, paired with whether the payload meets
    /// each threshold, in catalog order
    fn rules(self) -> Vec<(BadgeId, bool)> {
        match self {
            Self::WeightLoggedStreak(days) => {
                vec![(BadgeId::Ferro, days >= WEIGHT_LOG_STREAK_DAYS)]
            }
            Self::WeightLossPercent(percent) => {
                vec![(BadgeId::AguaPescoco, percent >= WEIGHT_LOSS_PERCENT)]
            }
            Self::ChatTipsPosted(count) => vec![(BadgeId::Helper, count >= CHAT_TIPS_POSTED)],
            Self::WorkoutsCompleted(count) => vec![
                (BadgeId::GraoAreia, count >= WORKOUTS_GRAO_AREIA),
                (BadgeId::Warrior, count >= WORKOUTS_WARRIOR),
            ],
            Self::StreakReached(days) => {
                vec![(BadgeId::Disciplinado, days >= STREAK_DISCIPLINADO_DAYS)]
            }
            Self::PeopleHelped(count) => vec![(BadgeId::Mentor, count >= PEOPLE_HELPED_MENTOR)],
            Self::GoalAchieved(reached) => vec![(BadgeId::Transformer, reached)],
            Self::XpMilestone(xp) => vec![
                (BadgeId::Guru, xp >= XP_GURU),
                (BadgeId::Legend, xp >= XP_LEGEND),
            ],
        }
    }

    /// Badges this event is able to unlock, regardless of payload
    #[must_use]
    pub fn candidates(self) -> Vec<BadgeId> {
        self.rules().into_iter().map(|(id, _)| id).collect()
    }
}

/// Decides which badges an event newly earns
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeEvaluator;

impl BadgeEvaluator {
    /// Badges unlocked by `event` that are not already in `current`
    ///
    /// Pure: the same inputs always give the same output.
    #[must_use]
    pub fn evaluate(current: &EarnedBadges, event: BadgeEvent) -> Vec<BadgeId> {
        event
            .rules()
            .into_iter()
            .filter(|&(id, met)| met && !current.contains(id))
            .map(|(id, _)| id)
            .collect()
    }
}
