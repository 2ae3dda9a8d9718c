// ABOUTME: Display strings for XP totals, body weight, and streak lengths
// ABOUTME: Output is Portuguese to match the rest of the app copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// XP total, abbreviated with `k` from 1000 up
///
/// `950` renders as `"950 XP"`, `1500` as `"1.5k XP"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_xp(xp: u64) -> String {
    if xp >= 1000 {
        format!("{:.1}k XP", xp as f64 / 1000.0)
    } else {
        format!("{xp} XP")
    }
}

/// Body weight with one decimal, e.g. `"72.5 kg"`
#[must_use]
pub fn format_weight(weight_kg: f64) -> String {
    format!("{weight_kg:.1} kg")
}

/// Streak length in days
#[must_use]
pub fn format_streak(days: u32) -> String {
    if days == 1 {
        "1 dia".to_owned()
    } else {
        format!("{days} dias")
    }
}
