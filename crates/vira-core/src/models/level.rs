// ABOUTME: Level definition model mapping an XP range to a named tier
// ABOUTME: The last level of a table carries an unbounded upper limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// One tier of the level table
///
/// The range `[min_xp, max_xp]` is inclusive on both ends. `max_xp == None`
/// means the level is the last one and has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelDefinition {
    /// 1-based level number
    pub level: u32,
    /// Display name
    pub name: &'static str,
    /// Lowest XP belonging to this level
    pub min_xp: u64,
    /// Highest XP belonging to this level, `None` if unbounded
    pub max_xp: Option<u64>,
    /// Perks unlocked at this level
    pub perks: &'static [&'static str],
    /// Cosmetic avatar identifiers unlocked at this level
    pub avatar_unlocks: &'static [&'static str],
}

impl LevelDefinition {
    /// Whether `xp` falls inside this level's range
    #[must_use]
    pub fn contains(&self, xp: u64) -> bool {
        match self.max_xp {
            Some(max) => (self.min_xp..=max).contains(&xp),
            None => xp >= self.min_xp,
        }
    }

    /// Whether this is the unbounded top level
    #[must_use]
    pub const fn is_max_level(&self) -> bool {
        self.max_xp.is_none()
    }
}
