// ABOUTME: Tests for BMI, BMR, daily calorie target, and macro split calculations
// ABOUTME: Hand-computed reference values for each formula plus input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Health calculator test suite
//!
//! Reference values are computed by hand from the default coefficients:
//! - male BMR `88.362 + 13.397w + 4.799h - 5.677a`
//! - female BMR `447.593 + 9.247w + 3.098h - 4.330a`
//! - macro grams use 4/4/9 kcal per gram

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vira_vida::errors::ErrorCode;
use vira_vida::health::{bmi, bmi_category, calculate_bmr, calorie_goal, macros, CalorieParams};
use vira_vida::models::{ActivityLevel, BmiCategory, DietStyle, MacroSplit, Sex, WeightGoal};

mod common;

fn male_reference(goal: WeightGoal) -> CalorieParams {
    CalorieParams {
        weight_kg: 80.0,
        height_cm: 180.0,
        age: 30,
        sex: Sex::Male,
        activity_level: ActivityLevel::Moderate,
        goal,
    }
}

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_typical_adult() {
    common::init_test_logging();

    let value = bmi(70.0, 175.0).unwrap();
    assert!((value - 22.86).abs() < 0.01, "got {value}");
    assert_eq!(bmi_category(value), BmiCategory::Normal);
}

#[test]
fn test_bmi_categories() {
    assert_eq!(bmi_category(bmi(50.0, 175.0).unwrap()), BmiCategory::Underweight);
    assert_eq!(bmi_category(bmi(85.0, 175.0).unwrap()), BmiCategory::Overweight);
    assert_eq!(bmi_category(bmi(110.0, 175.0).unwrap()), BmiCategory::Obese);
}

#[test]
fn test_bmi_rejects_non_positive_inputs() {
    assert_eq!(bmi(0.0, 175.0).unwrap_err().code, ErrorCode::InvalidInput);
    assert_eq!(bmi(70.0, 0.0).unwrap_err().code, ErrorCode::InvalidInput);
    assert_eq!(bmi(-70.0, 175.0).unwrap_err().code, ErrorCode::InvalidInput);
}

// ============================================================================
// BMR & CALORIE TARGET
// ============================================================================

#[test]
fn test_bmr_male_reference() {
    let config = common::default_config();

    // 88.362 + 1071.76 + 863.82 - 170.31 = 1853.632
    let value = calculate_bmr(80.0, 180.0, 30, Sex::Male, &config.health.bmr).unwrap();
    assert!((value - 1853.632).abs() < 0.001, "got {value}");
}

#[test]
fn test_bmr_female_reference() {
    let config = common::default_config();

    // 447.593 + 554.82 + 511.17 - 108.25 = 1405.333
    let value = calculate_bmr(60.0, 165.0, 25, Sex::Female, &config.health.bmr).unwrap();
    assert!((value - 1405.333).abs() < 0.001, "got {value}");
}

#[test]
fn test_calorie_goal_male_moderate_lose() {
    let config = common::default_config();

    // 1853.632 * 1.55 = 2873.13, minus 500
    let target = calorie_goal(&male_reference(WeightGoal::Lose), &config.health).unwrap();
    assert_eq!(target, 2373);
}

#[test]
fn test_calorie_goal_adjusts_for_goal() {
    let config = common::default_config();

    let maintain = calorie_goal(&male_reference(WeightGoal::Maintain), &config.health).unwrap();
    let gain = calorie_goal(&male_reference(WeightGoal::Gain), &config.health).unwrap();
    assert_eq!(maintain, 2873);
    assert_eq!(gain, 3173);
}

#[test]
fn test_calorie_goal_female_sedentary() {
    let config = common::default_config();
    let params = CalorieParams {
        weight_kg: 60.0,
        height_cm: 165.0,
        age: 25,
        sex: Sex::Female,
        activity_level: ActivityLevel::Sedentary,
        goal: WeightGoal::Maintain,
    };

    // 1405.333 * 1.2 = 1686.4
    assert_eq!(calorie_goal(&params, &config.health).unwrap(), 1686);
}

#[test]
fn test_calorie_goal_increases_with_activity() {
    let config = common::default_config();
    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    let targets: Vec<u32> = levels
        .into_iter()
        .map(|activity_level| {
            let params = CalorieParams {
                activity_level,
                ..male_reference(WeightGoal::Maintain)
            };
            calorie_goal(&params, &config.health).unwrap()
        })
        .collect();

    assert!(targets.windows(2).all(|pair| pair[0] < pair[1]), "{targets:?}");
}

#[test]
fn test_calorie_goal_rejects_invalid_inputs() {
    let config = common::default_config();

    let zero_age = CalorieParams {
        age: 0,
        ..male_reference(WeightGoal::Maintain)
    };
    let zero_weight = CalorieParams {
        weight_kg: 0.0,
        ..male_reference(WeightGoal::Maintain)
    };
    let negative_height = CalorieParams {
        height_cm: -180.0,
        ..male_reference(WeightGoal::Maintain)
    };

    for params in [zero_age, zero_weight, negative_height] {
        let error = calorie_goal(&params, &config.health).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput, "{params:?}");
    }
}

#[test]
fn test_calorie_goal_rejects_non_positive_target() {
    let config = common::default_config();
    let params = CalorieParams {
        weight_kg: 1.0,
        height_cm: 1.0,
        age: 120,
        sex: Sex::Male,
        activity_level: ActivityLevel::Sedentary,
        goal: WeightGoal::Lose,
    };

    let error = calorie_goal(&params, &config.health).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
fn test_macros_per_diet_style() {
    let config = common::default_config();
    let ratios = &config.health.macro_ratios;

    let cases = [
        (DietStyle::Keto, 2000, (125, 25, 156)),
        (DietStyle::LowCarb, 2400, (180, 120, 133)),
        (DietStyle::Vegan, 2000, (75, 300, 56)),
        (DietStyle::Carnivore, 2000, (175, 25, 133)),
        (DietStyle::Mediterranean, 2000, (100, 225, 78)),
    ];

    for (style, calories, (protein, carbs, fat)) in cases {
        assert_eq!(
            macros(calories, style, ratios),
            MacroSplit {
                protein_grams: protein,
                carbs_grams: carbs,
                fat_grams: fat,
            },
            "{style}"
        );
    }
}

#[test]
fn test_macros_zero_calories() {
    let config = common::default_config();

    let split = macros(0, DietStyle::Keto, &config.health.macro_ratios);
    assert_eq!(split.protein_grams + split.carbs_grams + split.fat_grams, 0);
}

#[test]
fn test_diet_style_parsing() {
    assert_eq!("low-carb".parse::<DietStyle>().unwrap(), DietStyle::LowCarb);
    assert_eq!("low_carb".parse::<DietStyle>().unwrap(), DietStyle::LowCarb);
    assert_eq!("KETO".parse::<DietStyle>().unwrap(), DietStyle::Keto);
    assert!("paleo".parse::<DietStyle>().is_err());
}
