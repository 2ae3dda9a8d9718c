// ABOUTME: Output formatting helpers for vira-cli
// ABOUTME: Renders results either as human-readable text or as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use vira_vida::errors::AppResult;
use vira_vida::formatters::format_xp;
use vira_vida::gamification::LevelInfo;
use vira_vida::models::DailyTip;

/// Print `value` as JSON when `json` is set, otherwise run `human`
pub fn emit<T: Serialize>(value: &T, json: bool, human: impl FnOnce(&T)) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human(value);
    }
    Ok(())
}

/// Display a level summary
pub fn display_level(info: &LevelInfo) {
    println!("{}", "=".repeat(60));
    println!(
        "Level {} - {} ({})",
        info.level.level,
        info.level.name,
        format_xp(info.xp)
    );
    println!("{}", "=".repeat(60));
    println!("   Progress: {:.1}%", info.progress_percent);
    match info.next_level_name {
        Some(next) => println!("   {} XP to {next}", info.xp_to_next_level),
        None => println!("   Max level reached"),
    }
    if !info.level.perks.is_empty() {
        println!("   Perks: {}", info.level.perks.join(", "));
    }
    if !info.level.avatar_unlocks.is_empty() {
        println!("   Avatars: {}", info.level.avatar_unlocks.join(", "));
    }
}

/// Display a single tip
pub fn display_tip(tip: &DailyTip) {
    println!("#{} [{}] {}", tip.id, tip.category, tip.title);
    println!("   {}", tip.body);
    if let Some(cta) = tip.action_cta {
        println!("   -> {cta}");
    }
}
