// ABOUTME: XP to level resolution, progress percentage, and XP remaining to the next level
// ABOUTME: Pure functions over a validated LevelTable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use vira_core::errors::{AppError, AppResult};
use vira_core::models::LevelDefinition;

use super::levels::LevelTable;

/// Everything a dashboard needs to render a user's level
#[derive(Debug, Clone, Serialize)]
pub struct LevelInfo {
    /// XP the snapshot was computed for
    pub xp: u64,
    /// Current level
    pub level: &'static LevelDefinition,
    /// Percentage of the current level completed, in `[0, 100]`
    pub progress_percent: f64,
    /// XP still needed to reach the next level, 0 at the top level
    pub xp_to_next_level: u64,
    /// Name of the next level, `None` at the top level
    pub next_level_name: Option<&'static str>,
}

/// Maps XP totals onto the level table
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressionEngine {
    table: LevelTable,
}

impl ProgressionEngine {
    /// Build an engine over `table` after checking that its ranges tile all XP values
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the table is malformed
    pub fn new(table: LevelTable) -> AppResult<Self> {
        table.validate()?;
        Ok(Self { table })
    }

    /// The level table this engine resolves against
    #[must_use]
    pub const fn table(&self) -> LevelTable {
        self.table
    }

    /// Level whose range contains `xp`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when no level, or more than one level,
    /// contains `xp`. Neither can happen with a validated table.
    pub fn resolve_level(&self, xp: u64) -> AppResult<&'static LevelDefinition> {
        let mut matching = self.table.levels().iter().filter(|level| level.contains(xp));
        match (matching.next(), matching.next()) {
            (Some(level), None) => Ok(level),
            (None, _) => Err(AppError::config_invalid(format!(
                "No level covers {xp} XP"
            ))),
            (Some(first), Some(second)) => Err(AppError::config_invalid(format!(
                "Levels {} and {} both cover {xp} XP",
                first.level, second.level
            ))),
        }
    }

    /// XP still needed to leave the current level, 0 at the top level
    ///
    /// # Errors
    ///
    /// Propagates [`Self::resolve_level`] errors
    pub fn xp_to_next_level(&self, xp: u64) -> AppResult<u64> {
        let level = self.resolve_level(xp)?;
        Ok(level.max_xp.map_or(0, |max| max.saturating_sub(xp)))
    }

    /// Percentage of the current level completed
    ///
    /// Linear between `min_xp` and `max_xp`, clamped to `[0, 100]`. The top
    /// level always reports 100.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::resolve_level`] errors
    pub fn progress_fraction(&self, xp: u64) -> AppResult<f64> {
        let level = self.resolve_level(xp)?;
        Ok(Self::progress_within(level, xp))
    }

    /// Level, progress, remaining XP, and next level name in one lookup
    ///
    /// # Errors
    ///
    /// Propagates [`Self::resolve_level`] errors
    pub fn level_info(&self, xp: u64) -> AppResult<LevelInfo> {
        let level = self.resolve_level(xp)?;
        Ok(LevelInfo {
            xp,
            level,
            progress_percent: Self::progress_within(level, xp),
            xp_to_next_level: level.max_xp.map_or(0, |max| max.saturating_sub(xp)),
            next_level_name: self.table.next_after(level).map(|next| next.name),
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn progress_within(level: &LevelDefinition, xp: u64) -> f64 {
        let Some(max) = level.max_xp else {
            return 100.0;
        };
        let span = max.saturating_sub(level.min_xp);
        if span == 0 {
            return 100.0;
        }
        let earned = xp.saturating_sub(level.min_xp);
        (earned as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Convert raw XP input into an XP total
///
/// # Errors
///
/// Returns an `InvalidInput` error for negative values
pub fn validate_xp(raw: i64) -> AppResult<u64> {
    u64::try_from(raw)
        .map_err(|_| AppError::invalid_input(format!("XP cannot be negative: {raw}")))
}
