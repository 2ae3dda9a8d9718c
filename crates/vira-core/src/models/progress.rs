// ABOUTME: User progression snapshot with XP, earned badges, and streak
// ABOUTME: EarnedBadges is a fixed-size slot map keyed by BadgeId
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::badge::BadgeId;

/// Badges a user has earned, with the instant each one was earned
///
/// One slot per [`BadgeId`]. Serialises as a map of badge key to timestamp,
/// which is the shape the persistence layer stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<BadgeId, DateTime<Utc>>",
    into = "BTreeMap<BadgeId, DateTime<Utc>>"
)]
pub struct EarnedBadges {
    slots: [Option<DateTime<Utc>>; BadgeId::COUNT],
}

impl EarnedBadges {
    /// Empty badge set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` has been earned
    #[must_use]
    pub const fn contains(&self, id: BadgeId) -> bool {
        self.slots[id.index()].is_some()
    }

    /// When `id` was earned, if it was
    #[must_use]
    pub const fn earned_at(&self, id: BadgeId) -> Option<DateTime<Utc>> {
        self.slots[id.index()]
    }

    /// Record `id` as earned at `at`
    ///
    /// Returns `false` and keeps the original timestamp if the badge was
    /// already earned.
    pub fn insert(&mut self, id: BadgeId, at: DateTime<Utc>) -> bool {
        let slot = &mut self.slots[id.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(at);
        true
    }

    /// Number of earned badges
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no badge has been earned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Earned badges in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (BadgeId, DateTime<Utc>)> + '_ {
        BadgeId::ALL
            .into_iter()
            .filter_map(|id| self.slots[id.index()].map(|at| (id, at)))
    }
}

impl From<BTreeMap<BadgeId, DateTime<Utc>>> for EarnedBadges {
    fn from(map: BTreeMap<BadgeId, DateTime<Utc>>) -> Self {
        let mut badges = Self::default();
        for (id, at) in map {
            badges.slots[id.index()] = Some(at);
        }
        badges
    }
}

impl From<EarnedBadges> for BTreeMap<BadgeId, DateTime<Utc>> {
    fn from(badges: EarnedBadges) -> Self {
        badges.iter().collect()
    }
}

impl FromIterator<(BadgeId, DateTime<Utc>)> for EarnedBadges {
    fn from_iter<I: IntoIterator<Item = (BadgeId, DateTime<Utc>)>>(iter: I) -> Self {
        let mut badges = Self::default();
        for (id, at) in iter {
            badges.insert(id, at);
        }
        badges
    }
}

/// The slice of a user record the progression engine reads and rewrites
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Accumulated experience points
    pub xp: u64,
    /// Earned badges; entries are never removed
    pub badges: EarnedBadges,
    /// Consecutive qualifying days, maintained by the logging subsystem
    pub streak_days: u32,
}

impl UserProgress {
    /// Snapshot with the given XP, no badges, and no streak
    #[must_use]
    pub fn with_xp(xp: u64) -> Self {
        Self {
            xp,
            ..Self::default()
        }
    }
}
