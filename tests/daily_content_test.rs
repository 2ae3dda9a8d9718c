// ABOUTME: Tests for the daily tip rotation, lookups, statistics, and release countdown
// ABOUTME: Uses fixed dates and FixedClock so every expectation is deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use rand::{rngs::StdRng, SeedableRng};
use vira_vida::config::engine::ContentConfig;
use vira_vida::content::{time_until_next_tip, DailyContentRotator, FixedClock, DAILY_TIPS};
use vira_vida::errors::ErrorCode;
use vira_vida::models::{DailyTip, TipCategory};

mod common;

// ============================================================================
// DATE ROTATION
// ============================================================================

#[test]
fn test_first_day_of_year_is_first_tip() {
    common::init_test_logging();
    let rotator = DailyContentRotator::default();

    assert_eq!(rotator.tip_for_date(common::date(2025, 1, 1)).id, 1);
    assert_eq!(rotator.tip_for_date(common::date(2025, 1, 2)).id, 2);
}

#[test]
fn test_rotation_wraps_around_catalog() {
    let rotator = DailyContentRotator::default();
    let len = DAILY_TIPS.len();
    assert_eq!(len, 40);

    // Day 40 is the last tip, day 41 starts over
    assert_eq!(rotator.tip_for_date(common::date(2025, 2, 9)).id, 40);
    assert_eq!(rotator.tip_for_date(common::date(2025, 2, 10)).id, 1);

    // Day 365 -> index 364 % 40 = 4, day 366 in a leap year -> index 5
    assert_eq!(rotator.tip_for_date(common::date(2025, 12, 31)).id, 5);
    assert_eq!(rotator.tip_for_date(common::date(2024, 12, 31)).id, 6);
}

#[test]
fn test_non_leap_year_cycles_tips_in_order() {
    let rotator = DailyContentRotator::default();
    let len = DAILY_TIPS.len();
    let mut date = common::date(2025, 1, 1);

    for day in 0..365 {
        let expected = u32::try_from(day % len + 1).unwrap();
        assert_eq!(rotator.tip_for_date(date).id, expected, "{date}");
        date = date.succ_opt().unwrap();
    }
    assert_eq!(date, common::date(2026, 1, 1));
}

#[test]
fn test_same_date_always_same_tip() {
    let rotator = DailyContentRotator::default();
    let date = common::date(2025, 7, 19);

    let first = rotator.tip_for_date(date);
    for _ in 0..10 {
        assert_eq!(rotator.tip_for_date(date), first);
    }
}

#[test]
fn test_today_and_next_follow_the_clock() {
    let rotator = DailyContentRotator::default();
    let clock = FixedClock(common::datetime(2025, 1, 1, 23, 59));

    assert_eq!(rotator.today_tip(&clock).id, 1);
    assert_eq!(rotator.next_tip(&clock).unwrap().id, 2);

    let new_year_eve = FixedClock(common::datetime(2025, 12, 31, 12, 0));
    assert_eq!(rotator.next_tip(&new_year_eve).unwrap().id, 1);
}

// ============================================================================
// LOOKUPS
// ============================================================================

#[test]
fn test_tips_by_category_is_stable_filter() {
    let rotator = DailyContentRotator::default();

    let nutrition = rotator.tips_by_category(TipCategory::Nutrition);
    assert_eq!(nutrition.len(), 13);
    assert!(nutrition.iter().all(|tip| tip.category == TipCategory::Nutrition));
    assert!(nutrition.windows(2).all(|pair| pair[0].id < pair[1].id));

    let total: usize = TipCategory::ALL
        .into_iter()
        .map(|category| rotator.tips_by_category(category).len())
        .sum();
    assert_eq!(total, DAILY_TIPS.len());
}

#[test]
fn test_tip_by_id() {
    let rotator = DailyContentRotator::default();

    let tip = rotator.tip_by_id(1).unwrap();
    assert_eq!(tip.title, "Água gelada queima 30 kcal extra ao dia");
    assert_eq!(tip.category, TipCategory::Nutrition);
    assert_eq!(tip.action_cta, Some("Beber agora"));

    assert!(rotator.tip_by_id(0).is_none());
    assert!(rotator.tip_by_id(41).is_none());
}

#[test]
fn test_random_tip_comes_from_catalog() {
    let rotator = DailyContentRotator::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let tip = rotator.random_tip_with(&mut rng);
        assert!(rotator.tip_by_id(tip.id).is_some());
    }
    assert!(rotator.tip_by_id(rotator.random_tip().id).is_some());
}

#[test]
fn test_tips_stats() {
    let stats = DailyContentRotator::default().tips_stats();

    assert_eq!(stats.total, 40);
    assert_eq!(stats.categories.get(&TipCategory::Nutrition), Some(&13));
    assert_eq!(stats.categories.get(&TipCategory::Workout), Some(&9));
    assert_eq!(stats.categories.get(&TipCategory::Mindset), Some(&9));
    assert_eq!(stats.categories.get(&TipCategory::Recovery), Some(&9));
    assert_eq!(stats.with_cta, 40);
    assert_eq!(stats.with_image, 0);
}

// ============================================================================
// RELEASE COUNTDOWN
// ============================================================================

#[test]
fn test_countdown_to_tomorrow_release() {
    let config = ContentConfig::default();

    let countdown = time_until_next_tip(common::datetime(2025, 3, 14, 22, 0), &config).unwrap();
    assert_eq!((countdown.hours, countdown.minutes), (8, 30));
    assert_eq!(countdown.to_string(), "8h 30m");
}

#[test]
fn test_countdown_targets_tomorrow_even_before_todays_release() {
    let config = ContentConfig::default();

    let countdown = time_until_next_tip(common::datetime(2025, 3, 14, 1, 15), &config).unwrap();
    assert_eq!(countdown.to_string(), "29h 15m");
}

#[test]
fn test_countdown_rejects_invalid_release_time() {
    let config = ContentConfig {
        release_hour: 25,
        release_minute: 0,
    };

    let error = time_until_next_tip(common::datetime(2025, 3, 14, 1, 15), &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

// ============================================================================
// CATALOG VALIDATION
// ============================================================================

static MISORDERED_TIPS: [DailyTip; 2] = [
    DailyTip {
        id: 2,
        title: "Segunda",
        body: "",
        action_cta: None,
        category: TipCategory::Workout,
        image_url: None,
    },
    DailyTip {
        id: 1,
        title: "Primeira",
        body: "",
        action_cta: None,
        category: TipCategory::Workout,
        image_url: None,
    },
];

#[test]
fn test_default_catalog_is_dense_and_ordered() {
    DailyContentRotator::default().validate().unwrap();
    for (index, tip) in DAILY_TIPS.iter().enumerate() {
        assert_eq!(tip.id as usize, index + 1);
    }
}

#[test]
fn test_misordered_catalog_is_rejected() {
    let error = DailyContentRotator::new(&MISORDERED_TIPS).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    let error = DailyContentRotator::new(&[]).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
