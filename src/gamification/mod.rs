// ABOUTME: Gamification layer: levels, badges, eligibility rules, and awarding
// ABOUTME: Static tables plus pure engines that read and rewrite user progress snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Gamification
//!
//! Data flows one way: an observed [`BadgeEvent`] goes through
//! [`BadgeEvaluator::evaluate`], the resulting ids go through
//! [`AwardProcessor::apply`], and the new XP total is mapped to a level by
//! [`ProgressionEngine`]. [`GamificationEngine`] runs the whole pipeline for
//! one event.

/// Award application
pub mod awards;
/// Badge catalog
pub mod catalog;
/// Event orchestration
pub mod engine;
/// Eligibility rules
pub mod evaluator;
/// Level table
pub mod levels;
/// XP to level mapping
pub mod progression;

pub use awards::AwardProcessor;
pub use catalog::{badge_definition, BadgeCatalog, BADGES};
pub use engine::{AwardOutcome, GamificationEngine, LevelUp};
pub use evaluator::{BadgeEvaluator, BadgeEvent};
pub use levels::{LevelTable, LEVELS};
pub use progression::{validate_xp, LevelInfo, ProgressionEngine};
