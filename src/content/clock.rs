// ABOUTME: Injectable wall clock used for calendar-based content selection
// ABOUTME: SystemClock reads local civil time, FixedClock pins it; calendar-day helpers build on it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current local civil time
pub trait Clock: Send + Sync {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Current local date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The host's local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Whether `date` is the clock's current local date
#[must_use]
pub fn is_today(date: NaiveDate, clock: &impl Clock) -> bool {
    date == clock.today()
}

/// Whole calendar days between two dates, in either order
#[must_use]
pub fn days_between(first: NaiveDate, second: NaiveDate) -> u64 {
    second.signed_duration_since(first).num_days().unsigned_abs()
}

/// Percentage of a seven-day week elapsed since `start`, capped at 100
#[must_use]
pub fn week_progress(start: NaiveDate, clock: &impl Clock) -> f64 {
    let days = days_between(start, clock.today()).min(7);
    days as f64 / 7.0 * 100.0
}
