// ABOUTME: Daily tip content model and tip categories
// ABOUTME: Tips are static catalog entries selected by date, never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Category a daily tip belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    /// Food and hydration
    Nutrition,
    /// Training
    Workout,
    /// Motivation and habits
    Mindset,
    /// Sleep and rest
    Recovery,
}

impl TipCategory {
    /// All categories
    pub const ALL: [Self; 4] = [
        Self::Nutrition,
        Self::Workout,
        Self::Mindset,
        Self::Recovery,
    ];

    /// Storage key for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nutrition => "nutrition",
            Self::Workout => "workout",
            Self::Mindset => "mindset",
            Self::Recovery => "recovery",
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown tip category: {s}")))
    }
}

/// A daily tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTip {
    /// Dense identifier starting at 1
    pub id: u32,
    /// Headline
    pub title: &'static str,
    /// Body text
    pub body: &'static str,
    /// Optional call-to-action button label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_cta: Option<&'static str>,
    /// Category
    pub category: TipCategory,
    /// Optional illustration reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<&'static str>,
}
