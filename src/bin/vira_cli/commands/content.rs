// ABOUTME: Daily tip commands for vira-cli
// ABOUTME: Today, date, next, id, category, random, and statistics views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde_json::json;
use vira_vida::config::engine::ContentConfig;
use vira_vida::content::{time_until_next_tip, Clock, DailyContentRotator, SystemClock};
use vira_vida::errors::{AppError, AppResult};
use vira_vida::models::TipCategory;

use crate::helpers::display::{display_tip, emit};

/// Which tips to show
#[derive(Debug, Clone, Copy)]
pub enum TipQuery {
    /// Today's tip
    Today,
    /// Tip for a date
    Date(NaiveDate),
    /// Tomorrow's tip with release countdown
    Next,
    /// Tip by id
    Id(u32),
    /// Tips in a category
    Category(TipCategory),
    /// Random tip
    Random,
    /// Catalog statistics
    Stats,
}

/// Run a tip query
pub fn tip(query: TipQuery, config: &ContentConfig, json: bool) -> AppResult<()> {
    let rotator = DailyContentRotator::default();
    let clock = SystemClock;

    match query {
        TipQuery::Today => emit(rotator.today_tip(&clock), json, display_tip),
        TipQuery::Date(date) => emit(rotator.tip_for_date(date), json, display_tip),
        TipQuery::Next => {
            let tip = rotator.next_tip(&clock)?;
            let countdown = time_until_next_tip(clock.now(), config)?;
            let output = json!({ "tip": tip, "releases_in": countdown.to_string() });
            emit(&output, json, |_| {
                display_tip(tip);
                println!("   Releases in {countdown}");
            })
        }
        TipQuery::Id(id) => {
            let tip = rotator
                .tip_by_id(id)
                .ok_or_else(|| AppError::not_found(format!("Tip {id}")))?;
            emit(tip, json, display_tip)
        }
        TipQuery::Category(category) => {
            let tips = rotator.tips_by_category(category);
            emit(&tips, json, |tips| {
                for tip in tips {
                    display_tip(tip);
                }
            })
        }
        TipQuery::Random => emit(rotator.random_tip(), json, display_tip),
        TipQuery::Stats => {
            let stats = rotator.tips_stats();
            emit(&stats, json, |stats| {
                println!("Total tips: {}", stats.total);
                for (category, count) in &stats.categories {
                    println!("   {category}: {count}");
                }
                println!("With call to action: {}", stats.with_cta);
                println!("With image: {}", stats.with_image);
            })
        }
    }
}
