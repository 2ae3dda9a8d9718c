// ABOUTME: Configuration management module for the progression engine
// ABOUTME: Environment-driven configuration with typed, validated sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (health, chat, content)
pub mod engine;

pub use engine::{ConfigError, EngineConfig};
