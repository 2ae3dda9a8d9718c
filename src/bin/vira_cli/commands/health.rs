// ABOUTME: Health calculator commands for vira-cli
// ABOUTME: BMI with WHO band, daily calorie target, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::json;
use vira_vida::config::engine::HealthMetricsConfig;
use vira_vida::errors::AppResult;
use vira_vida::health::{self, CalorieParams};
use vira_vida::models::{DietStyle, MacroSplit};

use crate::helpers::display::emit;

fn print_macros(split: &MacroSplit, style: DietStyle) {
    println!(
        "{style}: protein {}g | carbs {}g | fat {}g",
        split.protein_grams, split.carbs_grams, split.fat_grams
    );
}

/// Body mass index with its WHO band
pub fn bmi(weight_kg: f64, height_cm: f64, json: bool) -> AppResult<()> {
    let value = health::bmi(weight_kg, height_cm)?;
    let category = health::bmi_category(value);
    let output = json!({ "bmi": value, "category": category });
    emit(&output, json, |_| println!("BMI {value:.2} ({category:?})"))
}

/// Daily calorie target, optionally with a macro split
pub fn calories(
    params: &CalorieParams,
    diet: Option<DietStyle>,
    config: &HealthMetricsConfig,
    json: bool,
) -> AppResult<()> {
    let target = health::calorie_goal(params, config)?;
    let split = diet.map(|style| (style, health::macros(target, style, &config.macro_ratios)));

    let output = json!({
        "calories": target,
        "diet": split.map(|(style, _)| style),
        "macros": split.map(|(_, macros)| macros),
    });
    emit(&output, json, |_| {
        println!("Daily target: {target} kcal");
        if let Some((style, macros)) = &split {
            print_macros(macros, *style);
        }
    })
}

/// Macro split for a calorie target
pub fn macros(
    calories: u32,
    diet: DietStyle,
    config: &HealthMetricsConfig,
    json: bool,
) -> AppResult<()> {
    let split = health::macros(calories, diet, &config.macro_ratios);
    emit(&split, json, |split| print_macros(split, diet))
}
