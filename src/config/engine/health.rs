// ABOUTME: Health metrics configuration for BMR, TDEE, goal adjustment, and macro ratios
// ABOUTME: Defaults reproduce the fixed coefficient tables used by the onboarding flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Metrics Configuration
//!
//! # References
//!
//! - BMR: Roza & Shizgal (1984) revised coefficients, labelled "Mifflin-St Jeor"
//!   throughout the product
//! - Activity factors: `McArdle` et al. (2010), Exercise Physiology

use serde::{Deserialize, Serialize};
use vira_core::models::{ActivityLevel, DietStyle, Sex};

use super::error::ConfigError;

/// Health calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthMetricsConfig {
    /// BMR equation coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment per weight goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Macro ratios per diet style
    pub macro_ratios: MacroRatiosConfig,
}

/// Sex-specific BMR coefficients: `constant + w*weight + h*height - a*age`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrCoefficients {
    /// Constant term (kcal)
    pub constant: f64,
    /// Weight coefficient (kcal/kg)
    pub weight_coef: f64,
    /// Height coefficient (kcal/cm)
    pub height_coef: f64,
    /// Age coefficient (kcal/year), subtracted
    pub age_coef: f64,
}

/// BMR configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male coefficients (88.362, 13.397, 4.799, 5.677)
    pub male: BmrCoefficients,
    /// Female coefficients (447.593, 9.247, 3.098, 4.330)
    pub female: BmrCoefficients,
}

impl BmrConfig {
    /// Coefficients for `sex`
    #[must_use]
    pub const fn for_sex(&self, sex: Sex) -> &BmrCoefficients {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for `level`
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Calorie adjustment applied to TDEE per weight goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Deficit for weight loss (kcal): 500
    pub lose_deficit_kcal: f64,
    /// Surplus for weight gain (kcal): 300
    pub gain_surplus_kcal: f64,
}

/// Share of daily calories per macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Protein share (0-1)
    pub protein: f64,
    /// Carbohydrate share (0-1)
    pub carbs: f64,
    /// Fat share (0-1)
    pub fat: f64,
}

impl MacroRatio {
    const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Macro ratios per diet style
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatiosConfig {
    /// Keto: 25/5/70
    pub keto: MacroRatio,
    /// Low-carb: 30/20/50
    pub low_carb: MacroRatio,
    /// Vegan: 15/60/25
    pub vegan: MacroRatio,
    /// Carnivore: 35/5/60
    pub carnivore: MacroRatio,
    /// Mediterranean: 20/45/35
    pub mediterranean: MacroRatio,
}

impl MacroRatiosConfig {
    /// Ratio for `style`
    #[must_use]
    pub const fn for_style(&self, style: DietStyle) -> &MacroRatio {
        match style {
            DietStyle::Keto => &self.keto,
            DietStyle::LowCarb => &self.low_carb,
            DietStyle::Vegan => &self.vegan,
            DietStyle::Carnivore => &self.carnivore,
            DietStyle::Mediterranean => &self.mediterranean,
        }
    }
}

impl HealthMetricsConfig {
    /// Validate coefficient signs, factor ordering, and ratio sums
    ///
    /// # Errors
    ///
    /// Returns an error if any section is inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        for coefficients in [&self.bmr.male, &self.bmr.female] {
            if coefficients.weight_coef <= 0.0 || coefficients.height_coef <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "BMR weight and height coefficients must be positive",
                ));
            }
            if coefficients.age_coef < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "BMR age coefficient must not be negative",
                ));
            }
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if self.goal_adjustments.lose_deficit_kcal < 0.0
            || self.goal_adjustments.gain_surplus_kcal < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Goal adjustments must not be negative",
            ));
        }

        for style in DietStyle::ALL {
            let ratio = self.macro_ratios.for_style(style);
            if ratio.protein < 0.0 || ratio.carbs < 0.0 || ratio.fat < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Macro ratios must not be negative",
                ));
            }
            if (ratio.sum() - 1.0).abs() > 0.001 {
                return Err(ConfigError::InvalidWeights(
                    "Macro ratios must sum to 1.0 for every diet style",
                ));
            }
        }

        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male: BmrCoefficients {
                constant: 88.362,
                weight_coef: 13.397,
                height_coef: 4.799,
                age_coef: 5.677,
            },
            female: BmrCoefficients {
                constant: 447.593,
                weight_coef: 9.247,
                height_coef: 3.098,
                age_coef: 4.330,
            },
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_deficit_kcal: 500.0,
            gain_surplus_kcal: 300.0,
        }
    }
}

impl Default for MacroRatiosConfig {
    fn default() -> Self {
        Self {
            keto: MacroRatio::new(0.25, 0.05, 0.70),
            low_carb: MacroRatio::new(0.30, 0.20, 0.50),
            vegan: MacroRatio::new(0.15, 0.60, 0.25),
            carnivore: MacroRatio::new(0.35, 0.05, 0.60),
            mediterranean: MacroRatio::new(0.20, 0.45, 0.35),
        }
    }
}
