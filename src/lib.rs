// ABOUTME: Main library entry point for the VIRA VIDA progression engine
// ABOUTME: XP levels, badges, health calculators, daily tips, and the community chat bot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VIRA VIDA
//!
//! Rule core of the VIRA VIDA fitness community app. Everything here is
//! synchronous and side-effect free apart from logging; persistence, chat
//! transport, and rendering belong to the caller.
//!
//! ## Architecture
//!
//! - **Gamification**: level table, badge catalog, eligibility rules, awarding
//! - **Health**: BMI, calorie target, macro split
//! - **Content**: date-based daily tip rotation
//! - **Chat**: slash-command bot
//! - **Config**: validated, environment-overridable engine settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vira_vida::gamification::{BadgeEvent, GamificationEngine};
//! use vira_vida::errors::AppResult;
//! use vira_vida::models::UserProgress;
//!
//! fn main() -> AppResult<()> {
//!     let engine = GamificationEngine::default();
//!     let user = UserProgress::with_xp(480);
//!
//!     let outcome = engine.record_event(&user, BadgeEvent::WorkoutsCompleted(30))?;
//!     if let Some(level_up) = outcome.level_up {
//!         println!("Level up: {}", level_up.name);
//!     }
//!     Ok(())
//! }
//! ```

/// Community chat bot
pub mod chat;

/// Engine configuration
pub mod config;

/// Daily tip rotation
pub mod content;

/// Display formatting for XP, weight, and streaks
pub mod formatters;

/// XP, levels, and badges
pub mod gamification;

/// Health metric calculators
pub mod health;

/// Structured logging setup
pub mod logging;

/// Static table verification
pub mod self_check;

/// Onboarding input validation
pub mod validation;

pub use vira_core::{constants, errors, models};
