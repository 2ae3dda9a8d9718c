// ABOUTME: Daily content configuration for the tip release schedule
// ABOUTME: A new tip is announced every day at the configured local time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Daily tip schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Local hour the next tip is released (0-23)
    pub release_hour: u32,
    /// Local minute the next tip is released (0-59)
    pub release_minute: u32,
}

impl ContentConfig {
    /// Validate the release time
    ///
    /// # Errors
    ///
    /// Returns an error if the hour or minute is out of range
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.release_hour > 23 || self.release_minute > 59 {
            return Err(ConfigError::ValueOutOfRange(
                "Tip release time must be a valid HH:MM",
            ));
        }
        Ok(())
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            release_hour: 6,
            release_minute: 30,
        }
    }
}
