// ABOUTME: Applies newly earned badges to a user snapshot and sums their XP rewards
// ABOUTME: Returns a fresh snapshot; the caller's snapshot is never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use vira_core::errors::AppResult;
use vira_core::models::{BadgeId, UserProgress};

use super::catalog::BadgeCatalog;

/// Records badges on a user snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct AwardProcessor {
    catalog: BadgeCatalog,
}

impl AwardProcessor {
    /// Build a processor over `catalog` after validating it
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the catalog is malformed
    pub fn new(catalog: BadgeCatalog) -> AppResult<Self> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    /// Catalog rewards are read from
    #[must_use]
    pub const fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    /// Apply `ids`, stamping each newly earned badge with the current time
    #[must_use]
    pub fn apply(&self, user: &UserProgress, ids: &[BadgeId]) -> (UserProgress, u64) {
        self.apply_at(user, ids, Utc::now())
    }

    /// Apply `ids`, stamping each newly earned badge with `earned_at`
    ///
    /// Ids the user already holds and repeats within `ids` are skipped and
    /// contribute no XP.
    #[must_use]
    pub fn apply_at(
        &self,
        user: &UserProgress,
        ids: &[BadgeId],
        earned_at: DateTime<Utc>,
    ) -> (UserProgress, u64) {
        let mut updated = user.clone();
        let mut xp_gained: u64 = 0;

        for &id in ids {
            if updated.badges.insert(id, earned_at) {
                xp_gained = xp_gained.saturating_add(self.catalog.xp_reward(id));
            }
        }

        updated.xp = updated.xp.saturating_add(xp_gained);
        (updated, xp_gained)
    }
}
