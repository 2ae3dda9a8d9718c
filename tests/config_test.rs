// ABOUTME: Tests for engine configuration defaults, validation, and environment overrides
// ABOUTME: Environment-mutating tests run serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use vira_vida::config::engine::{ConfigError, MacroRatio};
use vira_vida::config::EngineConfig;
use vira_vida::errors::{AppError, ErrorCode};

mod common;

const OVERRIDE_VARS: [&str; 6] = [
    "VIRA_ACTIVITY_FACTOR_MODERATE",
    "VIRA_CALORIE_DEFICIT_KCAL",
    "VIRA_BOT_USER_ID",
    "VIRA_BOT_DISPLAY_NAME",
    "VIRA_TIP_RELEASE_HOUR",
    "VIRA_TIP_RELEASE_MINUTE",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// DEFAULTS & VALIDATION
// ============================================================================

#[test]
fn test_defaults_are_valid() {
    common::init_test_logging();

    let config = EngineConfig::<false>::default().validate().unwrap();
    assert!((config.health.activity_factors.moderate - 1.55).abs() < f64::EPSILON);
    assert!((config.health.goal_adjustments.lose_deficit_kcal - 500.0).abs() < f64::EPSILON);
    assert_eq!(config.chat.bot_user_id, "bot");
    assert_eq!(config.chat.bot_display_name, "FitBot");
    assert_eq!(
        (config.content.release_hour, config.content.release_minute),
        (6, 30)
    );
}

#[test]
fn test_descending_activity_factors_are_rejected() {
    let mut config = EngineConfig::<false>::default();
    config.health.activity_factors.light = 1.6;

    let error = config.validate().unwrap_err();
    assert!(matches!(error, ConfigError::InvalidRange(_)), "{error}");
}

#[test]
fn test_macro_ratios_must_sum_to_one() {
    let mut config = EngineConfig::<false>::default();
    config.health.macro_ratios.vegan = MacroRatio {
        protein: 0.2,
        carbs: 0.6,
        fat: 0.3,
    };

    let error = config.validate().unwrap_err();
    assert!(matches!(error, ConfigError::InvalidWeights(_)), "{error}");
}

#[test]
fn test_blank_bot_identity_is_rejected() {
    let mut config = EngineConfig::<false>::default();
    config.chat.bot_display_name = "  ".to_owned();

    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_release_time_is_rejected() {
    let mut config = EngineConfig::<false>::default();
    config.content.release_minute = 60;

    let error = config.validate().unwrap_err();
    assert!(matches!(error, ConfigError::ValueOutOfRange(_)), "{error}");
}

#[test]
fn test_deserialized_config_must_be_validated() {
    let mut value = serde_json::to_value(EngineConfig::defaults()).unwrap();
    value["content"]["release_hour"] = serde_json::json!(24);

    let config: EngineConfig = serde_json::from_value(value).unwrap();
    assert_eq!(config.content.release_hour, 24);

    let error = config.validate().unwrap_err();
    assert!(matches!(error, ConfigError::ValueOutOfRange(_)), "{error}");
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::InvalidWeights("bad").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("bad"));
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_overrides();
    env::set_var("VIRA_ACTIVITY_FACTOR_MODERATE", "1.5");
    env::set_var("VIRA_CALORIE_DEFICIT_KCAL", "400");
    env::set_var("VIRA_BOT_DISPLAY_NAME", "Coach Bot");
    env::set_var("VIRA_TIP_RELEASE_HOUR", "7");

    let config = EngineConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert!((config.health.activity_factors.moderate - 1.5).abs() < f64::EPSILON);
    assert!((config.health.goal_adjustments.lose_deficit_kcal - 400.0).abs() < f64::EPSILON);
    assert_eq!(config.chat.bot_display_name, "Coach Bot");
    assert_eq!(config.content.release_hour, 7);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("VIRA_TIP_RELEASE_MINUTE", "half past");

    let result = EngineConfig::load();
    clear_overrides();

    let error = result.unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)), "{error}");
    assert!(error.to_string().contains("VIRA_TIP_RELEASE_MINUTE"));
}

#[test]
#[serial]
fn test_override_breaking_validation_is_rejected() {
    clear_overrides();
    env::set_var("VIRA_ACTIVITY_FACTOR_MODERATE", "3.0");

    let result = EngineConfig::load();
    clear_overrides();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_global_config_is_cached() {
    clear_overrides();

    let first: *const EngineConfig<true> = EngineConfig::global();
    let second: *const EngineConfig<true> = EngineConfig::global();
    assert_eq!(first, second);
}
