// ABOUTME: Startup verification of the static level, badge, and tip tables
// ABOUTME: Fails fast with ConfigInvalid so a bad table never reaches user data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use vira_core::errors::AppResult;

use crate::content::DailyContentRotator;
use crate::gamification::{BadgeCatalog, LevelTable};
use crate::logging::AppLogger;

/// Sizes of the verified tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    /// Levels in the level table
    pub levels: usize,
    /// Badges in the catalog
    pub badges: usize,
    /// Daily tips
    pub tips: usize,
}

/// Validate the built-in tables
///
/// # Errors
///
/// Returns the first `ConfigInvalid` error found
pub fn verify_static_catalogs() -> AppResult<CatalogSummary> {
    verify_catalogs(
        LevelTable::default(),
        BadgeCatalog::default(),
        DailyContentRotator::default(),
    )
}

/// Validate a given set of tables
///
/// # Errors
///
/// Returns the first `ConfigInvalid` error found
pub fn verify_catalogs(
    levels: LevelTable,
    badges: BadgeCatalog,
    tips: DailyContentRotator,
) -> AppResult<CatalogSummary> {
    levels.validate()?;
    badges.validate()?;
    tips.validate()?;

    let summary = CatalogSummary {
        levels: levels.len(),
        badges: badges.definitions().len(),
        tips: tips.tips().len(),
    };
    AppLogger::log_catalog_check(summary.levels, summary.badges, summary.tips);
    Ok(summary)
}
