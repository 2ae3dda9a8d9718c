// ABOUTME: Onboarding input validation for goal phrase, body weight, and plan length
// ABOUTME: Each validator returns InvalidInput with a message suitable for the form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vira_core::constants::limits::{GOAL_PHRASE_MAX_CHARS, PLAN_MAX_WEEKS, WEIGHT_MAX_KG};
use vira_core::errors::{AppError, AppResult};

/// Goal phrase must be non-empty and at most 80 characters
///
/// # Errors
///
/// Returns an `InvalidInput` error when the phrase is empty or too long
pub fn validate_goal_phrase(phrase: &str) -> AppResult<()> {
    let length = phrase.chars().count();
    if length == 0 {
        return Err(AppError::invalid_input("Goal phrase must not be empty"));
    }
    if length > GOAL_PHRASE_MAX_CHARS {
        return Err(AppError::invalid_input(format!(
            "Goal phrase must be at most {GOAL_PHRASE_MAX_CHARS} characters, got {length}"
        )));
    }
    Ok(())
}

/// Weight must lie strictly between 0 and 500 kg
///
/// # Errors
///
/// Returns an `InvalidInput` error outside that range
pub fn validate_weight(weight_kg: f64) -> AppResult<()> {
    if weight_kg > 0.0 && weight_kg < WEIGHT_MAX_KG {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Weight must be between 0 and {WEIGHT_MAX_KG} kg, got {weight_kg}"
        )))
    }
}

/// Plan length must be 1 to 104 weeks
///
/// # Errors
///
/// Returns an `InvalidInput` error outside that range
pub fn validate_weeks(weeks: u32) -> AppResult<()> {
    if (1..=PLAN_MAX_WEEKS).contains(&weeks) {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Plan length must be between 1 and {PLAN_MAX_WEEKS} weeks, got {weeks}"
        )))
    }
}
