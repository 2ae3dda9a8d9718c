// ABOUTME: Core data models for the VIRA VIDA progression engine
// ABOUTME: Re-exports badge, level, progress, content, chat, and health types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value types shared by every engine component. None of them own references
//! to each other: relations are expressed by identifier lookup into the static
//! tables (`BadgeId` into the badge catalog, tip id into the tip catalog).
//!
//! Static catalog entries (`LevelDefinition`, `BadgeDefinition`, `DailyTip`,
//! `BotCommand`) borrow `'static` strings so the tables can live in constants
//! and are only `Serialize`.

mod badge;
mod chat;
mod content;
mod health;
mod level;
mod progress;

// Gamification
pub use badge::{BadgeDefinition, BadgeId, Rarity};
pub use level::LevelDefinition;
pub use progress::{EarnedBadges, UserProgress};

// Content
pub use content::{DailyTip, TipCategory};

// Chat
pub use chat::{BotAction, BotCommand, ChatChannel, ChatMessage};

// Health
pub use health::{ActivityLevel, BmiCategory, DietStyle, MacroSplit, Sex, WeightGoal};
