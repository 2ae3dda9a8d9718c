// ABOUTME: Tests for display formatters, onboarding validators, and the static table self-check
// ABOUTME: Covers boundary values for each validator and Portuguese pluralisation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vira_vida::errors::ErrorCode;
use vira_vida::formatters::{format_streak, format_weight, format_xp};
use vira_vida::self_check::verify_static_catalogs;
use vira_vida::validation::{validate_goal_phrase, validate_weeks, validate_weight};

mod common;

// ============================================================================
// FORMATTERS
// ============================================================================

#[test]
fn test_format_xp() {
    common::init_test_logging();

    assert_eq!(format_xp(0), "0 XP");
    assert_eq!(format_xp(999), "999 XP");
    assert_eq!(format_xp(1000), "1.0k XP");
    assert_eq!(format_xp(1500), "1.5k XP");
    assert_eq!(format_xp(12_300), "12.3k XP");
}

#[test]
fn test_format_weight() {
    assert_eq!(format_weight(72.0), "72.0 kg");
    assert_eq!(format_weight(68.44), "68.4 kg");
}

#[test]
fn test_format_streak() {
    assert_eq!(format_streak(0), "0 dias");
    assert_eq!(format_streak(1), "1 dia");
    assert_eq!(format_streak(30), "30 dias");
}

// ============================================================================
// VALIDATORS
// ============================================================================

#[test]
fn test_goal_phrase_length() {
    assert!(validate_goal_phrase("Perder 10 kg até o verão").is_ok());
    assert!(validate_goal_phrase(&"á".repeat(80)).is_ok());

    assert_eq!(
        validate_goal_phrase("").unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        validate_goal_phrase(&"a".repeat(81)).unwrap_err().code,
        ErrorCode::InvalidInput
    );
}

#[test]
fn test_weight_bounds_are_exclusive() {
    assert!(validate_weight(0.1).is_ok());
    assert!(validate_weight(499.9).is_ok());
    assert!(validate_weight(0.0).is_err());
    assert!(validate_weight(500.0).is_err());
    assert!(validate_weight(-5.0).is_err());
}

#[test]
fn test_weeks_bounds() {
    assert!(validate_weeks(1).is_ok());
    assert!(validate_weeks(104).is_ok());
    assert!(validate_weeks(0).is_err());
    assert!(validate_weeks(105).is_err());
}

// ============================================================================
// SELF-CHECK
// ============================================================================

#[test]
fn test_static_catalogs_pass_self_check() {
    let summary = verify_static_catalogs().unwrap();

    assert_eq!(summary.levels, 5);
    assert_eq!(summary.badges, 10);
    assert_eq!(summary.tips, 40);
}
