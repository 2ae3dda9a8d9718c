// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging setup, fixed timestamps, and user snapshot builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `vira_vida`

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::env;
use std::sync::Once;
use tracing::Level;
use vira_vida::config::EngineConfig;
use vira_vida::models::{BadgeId, EarnedBadges, UserProgress};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Validated default engine configuration
pub fn default_config() -> EngineConfig<true> {
    EngineConfig::defaults()
}

/// A fixed instant used to stamp awards
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
}

/// Local civil date helper
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Local civil date-time helper
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

/// User with `xp` and the given badges already earned at [`fixed_time`]
pub fn user_with_badges(xp: u64, badges: &[BadgeId]) -> UserProgress {
    UserProgress {
        xp,
        badges: badges.iter().map(|&id| (id, fixed_time())).collect::<EarnedBadges>(),
        streak_days: 0,
    }
}
