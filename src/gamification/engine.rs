// ABOUTME: Orchestrates badge evaluation, awarding, and level resolution for one event
// ABOUTME: Reports level changes and emits structured logs for every award
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use vira_core::errors::AppResult;
use vira_core::models::{BadgeId, UserProgress};

use super::awards::AwardProcessor;
use super::catalog::BadgeCatalog;
use super::evaluator::{BadgeEvaluator, BadgeEvent};
use super::levels::LevelTable;
use super::progression::ProgressionEngine;
use crate::logging::AppLogger;

/// A change of level caused by an award
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelUp {
    /// Level before the award
    pub from: u32,
    /// Level after the award
    pub to: u32,
    /// Name of the new level
    pub name: &'static str,
}

/// Result of processing one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardOutcome {
    /// Snapshot after the award
    pub progress: UserProgress,
    /// Badges newly earned, in catalog order
    pub awarded: Vec<BadgeId>,
    /// XP added by the awarded badges
    pub xp_gained: u64,
    /// Set when the award moved the user to a higher level
    pub level_up: Option<LevelUp>,
}

impl AwardOutcome {
    /// Whether the event changed anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.awarded.is_empty()
    }
}

/// Event-driven progression pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct GamificationEngine {
    progression: ProgressionEngine,
    awards: AwardProcessor,
}

impl GamificationEngine {
    /// Build an engine over custom tables, validating both
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if either table is malformed
    pub fn new(levels: LevelTable, badges: BadgeCatalog) -> AppResult<Self> {
        Ok(Self {
            progression: ProgressionEngine::new(levels)?,
            awards: AwardProcessor::new(badges)?,
        })
    }

    /// Progression engine used for level resolution
    #[must_use]
    pub const fn progression(&self) -> &ProgressionEngine {
        &self.progression
    }

    /// Process `event` for `user` at the current time
    ///
    /// # Errors
    ///
    /// Propagates level resolution errors
    pub fn record_event(&self, user: &UserProgress, event: BadgeEvent) -> AppResult<AwardOutcome> {
        self.record_event_at(user, event, Utc::now())
    }

    /// Process `event` for `user`, stamping awards with `earned_at`
    ///
    /// # Errors
    ///
    /// Propagates level resolution errors
    pub fn record_event_at(
        &self,
        user: &UserProgress,
        event: BadgeEvent,
        earned_at: DateTime<Utc>,
    ) -> AppResult<AwardOutcome> {
        let awarded = BadgeEvaluator::evaluate(&user.badges, event);
        if awarded.is_empty() {
            debug!(event = ?event, user.xp = user.xp, "Event unlocked no badges");
            return Ok(AwardOutcome {
                progress: user.clone(),
                awarded,
                xp_gained: 0,
                level_up: None,
            });
        }

        let before = self.progression.resolve_level(user.xp)?;
        let (progress, xp_gained) = self.awards.apply_at(user, &awarded, earned_at);

        for &id in &awarded {
            AppLogger::log_badge_awarded(id, self.awards.catalog().xp_reward(id), progress.xp);
        }

        let after = self.progression.resolve_level(progress.xp)?;
        let level_up = (after.level > before.level).then(|| {
            AppLogger::log_level_up(before.level, after.level, after.name, progress.xp);
            LevelUp {
                from: before.level,
                to: after.level,
                name: after.name,
            }
        });

        Ok(AwardOutcome {
            progress,
            awarded,
            xp_gained,
            level_up,
        })
    }
}
