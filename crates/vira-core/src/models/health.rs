// ABOUTME: Biometric and diet models used by the health calculators
// ABOUTME: Sex, ActivityLevel, WeightGoal, DietStyle, MacroSplit, and BmiCategory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Biological sex used by the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Unknown sex: {other}"))),
        }
    }
}

/// Self-reported activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    Moderate,
    /// 6-7 days/week
    Active,
    /// Hard training twice a day
    VeryActive,
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: {other}"
            ))),
        }
    }
}

/// Body weight objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl FromStr for WeightGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_input(format!("Unknown goal: {other}"))),
        }
    }
}

/// Diet style chosen during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietStyle {
    /// Very low carb, high fat
    #[serde(rename = "keto")]
    Keto,
    /// Reduced carbohydrate
    #[serde(rename = "low-carb")]
    LowCarb,
    /// Plant based
    #[serde(rename = "vegan")]
    Vegan,
    /// Animal products only
    #[serde(rename = "carnivore")]
    Carnivore,
    /// Mediterranean pattern
    #[serde(rename = "mediterranean")]
    Mediterranean,
}

impl DietStyle {
    /// All diet styles
    pub const ALL: [Self; 5] = [
        Self::Keto,
        Self::LowCarb,
        Self::Vegan,
        Self::Carnivore,
        Self::Mediterranean,
    ];

    /// Storage key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keto => "keto",
            Self::LowCarb => "low-carb",
            Self::Vegan => "vegan",
            Self::Carnivore => "carnivore",
            Self::Mediterranean => "mediterranean",
        }
    }
}

impl fmt::Display for DietStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown diet style: {s}")))
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein (g)
    pub protein_grams: u32,
    /// Carbohydrates (g)
    pub carbs_grams: u32,
    /// Fat (g)
    pub fat_grams: u32,
}

/// WHO body mass index band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to below 25
    Normal,
    /// BMI 25 to below 30
    Overweight,
    /// BMI 30 and above
    Obese,
}
