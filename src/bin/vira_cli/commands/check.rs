// ABOUTME: Static table verification command for vira-cli
// ABOUTME: Validates levels, badges, tips, and the loaded engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vira_vida::config::EngineConfig;
use vira_vida::errors::AppResult;
use vira_vida::self_check::verify_static_catalogs;

use crate::helpers::display::emit;

/// Verify every built-in table and the environment configuration
pub fn run(json: bool) -> AppResult<()> {
    let summary = verify_static_catalogs()?;
    EngineConfig::load()?;

    emit(&summary, json, |summary| {
        println!("Static tables OK");
        println!("   Levels: {}", summary.levels);
        println!("   Badges: {}", summary.badges);
        println!("   Tips:   {}", summary.tips);
        println!("Engine configuration OK");
    })
}
