// ABOUTME: Badge identifiers, rarity tiers, and badge metadata definitions
// ABOUTME: BadgeId is a closed enumeration so the catalog can be a fixed-size table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Identifier of an achievement badge
///
/// Declaration order is the catalog order; `index()` is stable and dense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeId {
    /// Logged weight 7 days in a row
    Ferro,
    /// Lost 2% of body weight
    AguaPescoco,
    /// Posted 3 useful tips in chat
    Helper,
    /// Completed 30 workouts
    GraoAreia,
    /// Reached a 30-day streak
    Disciplinado,
    /// Helped 10 people
    Mentor,
    /// Reached the weight goal
    Transformer,
    /// Completed 100 workouts
    Warrior,
    /// Reached 1000 XP
    Guru,
    /// Reached 5000 XP
    Legend,
}

impl BadgeId {
    /// Number of badge identifiers
    pub const COUNT: usize = 10;

    /// Every identifier in catalog order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Ferro,
        Self::AguaPescoco,
        Self::Helper,
        Self::GraoAreia,
        Self::Disciplinado,
        Self::Mentor,
        Self::Transformer,
        Self::Warrior,
        Self::Guru,
        Self::Legend,
    ];

    /// Dense slot index of this identifier
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Storage key for this badge
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ferro => "ferro",
            Self::AguaPescoco => "agua_pescoco",
            Self::Helper => "helper",
            Self::GraoAreia => "grao_areia",
            Self::Disciplinado => "disciplinado",
            Self::Mentor => "mentor",
            Self::Transformer => "transformer",
            Self::Warrior => "warrior",
            Self::Guru => "guru",
            Self::Legend => "legend",
        }
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown badge id: {s}")))
    }
}

/// Badge rarity tier, ordered from most to least common
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    /// Common badge
    Common,
    /// Rare badge
    Rare,
    /// Epic badge
    Epic,
    /// Legendary badge
    Legendary,
}

/// Static metadata for one badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeDefinition {
    /// Badge identifier
    pub id: BadgeId,
    /// Display name
    pub name: &'static str,
    /// What the user did to earn it
    pub description: &'static str,
    /// XP granted when the badge is first earned
    pub xp_reward: u64,
    /// Rarity tier
    pub rarity: Rarity,
    /// Icon token rendered by the client
    pub icon: &'static str,
}
