// ABOUTME: Daily content: the static tip catalog and the date-based rotator
// ABOUTME: Selection is deterministic for a given date; the clock is injected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Wall clock abstraction
pub mod clock;
/// Tip selection
pub mod rotator;
/// Tip catalog
pub mod tips;

pub use clock::{days_between, is_today, week_progress, Clock, FixedClock, SystemClock};
pub use rotator::{time_until_next_tip, Countdown, DailyContentRotator, TipsStats};
pub use tips::DAILY_TIPS;
