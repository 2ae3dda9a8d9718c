// ABOUTME: Stateless health metric calculators used during onboarding and on the dashboard
// ABOUTME: Re-exports BMI, calorie target, and macro split functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// BMI, BMR, calorie target, and macro split
pub mod calculator;

pub use calculator::{bmi, bmi_category, calculate_bmr, calorie_goal, macros, CalorieParams};
