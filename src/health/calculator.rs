// ABOUTME: BMI, BMR, daily calorie target, and macronutrient split calculations
// ABOUTME: Coefficients and ratios come from HealthMetricsConfig so they can be tuned per deployment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health calculators
//!
//! # References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global
//!   epidemic. *WHO Technical Report Series* 894.
//!
//! The onboarding flow labels the calorie target "Mifflin-St Jeor"; the default
//! coefficients are the revised Harris-Benedict ones. Both are
//! `constant + w*weight + h*height - a*age`, so switching is a config change.

use serde::{Deserialize, Serialize};
use vira_core::constants::{bmi as bmi_bands, energy};
use vira_core::errors::{AppError, AppResult};
use vira_core::models::{ActivityLevel, BmiCategory, DietStyle, MacroSplit, Sex, WeightGoal};

use crate::config::engine::{BmrConfig, HealthMetricsConfig, MacroRatiosConfig};

/// Inputs for the daily calorie target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieParams {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight objective
    pub goal: WeightGoal,
}

/// Body mass index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2
///
/// # Errors
///
/// Returns an error if weight or height is not a positive number
pub fn bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    check_positive("Weight", weight_kg)?;
    check_positive("Height", height_cm)?;

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// WHO band for a BMI value
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < bmi_bands::UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < bmi_bands::NORMAL_MAX {
        BmiCategory::Normal
    } else if bmi < bmi_bands::OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal metabolic rate (kcal/day)
///
/// Formula: BMR = constant + (w x `weight_kg`) + (h x `height_cm`) - (a x age)
///
/// # Errors
///
/// Returns an error if weight or height is not positive or age is zero
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    check_positive("Weight", weight_kg)?;
    check_positive("Height", height_cm)?;
    if age == 0 {
        return Err(AppError::invalid_input("Age must be at least 1 year"));
    }

    let coefficients = config.for_sex(sex);
    let weight_component = coefficients.weight_coef * weight_kg;
    let height_component = coefficients.height_coef * height_cm;
    let age_component = coefficients.age_coef * f64::from(age);

    Ok(coefficients.constant + weight_component + height_component - age_component)
}

/// Daily calorie target (kcal/day)
///
/// BMR x activity factor, adjusted for the weight goal and rounded once at
/// the end.
///
/// # Errors
///
/// Returns an error if the inputs are invalid or the adjusted target is not
/// positive
pub fn calorie_goal(params: &CalorieParams, config: &HealthMetricsConfig) -> AppResult<u32> {
    let bmr = calculate_bmr(
        params.weight_kg,
        params.height_cm,
        params.age,
        params.sex,
        &config.bmr,
    )?;
    let tdee = bmr * config.activity_factors.factor(params.activity_level);

    let adjustment = match params.goal {
        WeightGoal::Lose => -config.goal_adjustments.lose_deficit_kcal,
        WeightGoal::Maintain => 0.0,
        WeightGoal::Gain => config.goal_adjustments.gain_surplus_kcal,
    };

    let target = (tdee + adjustment).round();
    if !target.is_finite() || target <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Calorie target must be positive, got {target} kcal"
        )));
    }
    if target > f64::from(u32::MAX) {
        return Err(AppError::out_of_range(format!(
            "Calorie target {target} kcal is out of range"
        )));
    }

    Ok(float_to_u32(target))
}

/// Macronutrient grams for a calorie target and diet style
///
/// Each macro gets its share of `calories` and is converted with 4/4/9 kcal
/// per gram, rounded independently, so the grams need not add back up to the
/// exact target.
#[must_use]
pub fn macros(calories: u32, style: DietStyle, config: &MacroRatiosConfig) -> MacroSplit {
    let ratio = config.for_style(style);
    let kcal = f64::from(calories);

    MacroSplit {
        protein_grams: float_to_u32((kcal * ratio.protein / energy::PROTEIN_KCAL_PER_G).round()),
        carbs_grams: float_to_u32((kcal * ratio.carbs / energy::CARBS_KCAL_PER_G).round()),
        fat_grams: float_to_u32((kcal * ratio.fat / energy::FAT_KCAL_PER_G).round()),
    }
}

fn check_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

// Callers round and range-check first
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_to_u32(value: f64) -> u32 {
    value.clamp(0.0, f64::from(u32::MAX)) as u32
}
