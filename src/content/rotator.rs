// ABOUTME: Deterministic date-to-tip rotation with category filter, lookup, and random pick
// ABOUTME: Also computes catalog statistics and the countdown to the next daily release
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::Serialize;
use vira_core::errors::{AppError, AppResult};
use vira_core::models::{DailyTip, TipCategory};

use super::clock::Clock;
use super::tips::DAILY_TIPS;
use crate::config::engine::ContentConfig;

/// Catalog statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipsStats {
    /// Number of tips
    pub total: usize,
    /// Tips per category; categories with no tips are omitted
    pub categories: BTreeMap<TipCategory, usize>,
    /// Tips with a call-to-action label
    pub with_cta: usize,
    /// Tips with an image
    pub with_image: usize,
}

/// Time left until the next tip is released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    /// Whole hours
    pub hours: i64,
    /// Remaining whole minutes
    pub minutes: i64,
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Picks the tip of the day from a fixed catalog
#[derive(Debug, Clone, Copy)]
pub struct DailyContentRotator {
    tips: &'static [DailyTip],
}

impl Default for DailyContentRotator {
    fn default() -> Self {
        Self { tips: &DAILY_TIPS }
    }
}

impl DailyContentRotator {
    /// Build a rotator over `tips`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the catalog is empty or its ids are
    /// not dense from 1 in slice order
    pub fn new(tips: &'static [DailyTip]) -> AppResult<Self> {
        let rotator = Self { tips };
        rotator.validate()?;
        Ok(rotator)
    }

    /// Check the catalog shape
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the catalog is empty or its ids are
    /// not dense from 1 in slice order
    pub fn validate(&self) -> AppResult<()> {
        if self.tips.is_empty() {
            return Err(AppError::config_invalid("Tip catalog is empty"));
        }
        for (expected, tip) in (1_u32..).zip(self.tips) {
            if tip.id != expected {
                return Err(AppError::config_invalid(format!(
                    "Tip catalog out of order: expected id {expected}, found {}",
                    tip.id
                ))
                .with_resource_id(tip.id.to_string()));
            }
        }
        Ok(())
    }

    /// All tips in id order
    #[must_use]
    pub const fn tips(&self) -> &'static [DailyTip] {
        self.tips
    }

    /// Tip for a calendar date
    ///
    /// Day-of-year 1 maps to the first tip and the catalog wraps around, so the
    /// same date always yields the same tip.
    #[must_use]
    pub fn tip_for_date(&self, date: NaiveDate) -> &'static DailyTip {
        let day_index = date.ordinal0() as usize;
        &self.tips[day_index % self.tips.len()]
    }

    /// Tip for today according to `clock`
    #[must_use]
    pub fn today_tip(&self, clock: &dyn Clock) -> &'static DailyTip {
        self.tip_for_date(clock.today())
    }

    /// Tip for tomorrow according to `clock`
    ///
    /// # Errors
    ///
    /// Returns an error if tomorrow falls outside the supported calendar
    pub fn next_tip(&self, clock: &dyn Clock) -> AppResult<&'static DailyTip> {
        let tomorrow = clock
            .today()
            .succ_opt()
            .ok_or_else(|| AppError::out_of_range("No calendar date after today"))?;
        Ok(self.tip_for_date(tomorrow))
    }

    /// Tips in `category`, in id order
    #[must_use]
    pub fn tips_by_category(&self, category: TipCategory) -> Vec<&'static DailyTip> {
        self.tips
            .iter()
            .filter(|tip| tip.category == category)
            .collect()
    }

    /// Tip with the given id
    #[must_use]
    pub fn tip_by_id(&self, id: u32) -> Option<&'static DailyTip> {
        self.tips.iter().find(|tip| tip.id == id)
    }

    /// Uniformly random tip
    #[must_use]
    pub fn random_tip(&self) -> &'static DailyTip {
        self.random_tip_with(&mut rand::thread_rng())
    }

    /// Uniformly random tip drawn from `rng`
    pub fn random_tip_with<R: Rng>(&self, rng: &mut R) -> &'static DailyTip {
        &self.tips[rng.gen_range(0..self.tips.len())]
    }

    /// Catalog statistics
    #[must_use]
    pub fn tips_stats(&self) -> TipsStats {
        let mut categories = BTreeMap::new();
        for tip in self.tips {
            *categories.entry(tip.category).or_insert(0) += 1;
        }

        TipsStats {
            total: self.tips.len(),
            categories,
            with_cta: self.tips.iter().filter(|tip| tip.action_cta.is_some()).count(),
            with_image: self.tips.iter().filter(|tip| tip.image_url.is_some()).count(),
        }
    }
}

/// Countdown from `now` to tomorrow's release time
///
/// The target is always the release time on the day after `now`, even when
/// today's release has not happened yet.
///
/// # Errors
///
/// Returns an error if the configured release time is not a valid time of day
/// or tomorrow falls outside the supported calendar
pub fn time_until_next_tip(now: NaiveDateTime, config: &ContentConfig) -> AppResult<Countdown> {
    let release = now
        .date()
        .succ_opt()
        .and_then(|tomorrow| tomorrow.and_hms_opt(config.release_hour, config.release_minute, 0))
        .ok_or_else(|| {
            AppError::out_of_range(format!(
                "Invalid tip release time {:02}:{:02}",
                config.release_hour, config.release_minute
            ))
        })?;

    let remaining = release - now;
    Ok(Countdown {
        hours: remaining.num_hours(),
        minutes: remaining.num_minutes() % 60,
    })
}
