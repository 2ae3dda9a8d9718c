// ABOUTME: Static level table mapping XP ranges to named tiers, perks, and avatar unlocks
// ABOUTME: LevelTable wraps a slice of levels and checks that the ranges tile all XP values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vira_core::errors::{AppError, AppResult};
use vira_core::models::LevelDefinition;

/// Default level table
pub static LEVELS: [LevelDefinition; 5] = [
    LevelDefinition {
        level: 1,
        name: "Iniciante",
        min_xp: 0,
        max_xp: Some(500),
        perks: &["Acesso básico", "1 plano de treino"],
        avatar_unlocks: &["avatar_basic_1", "avatar_basic_2"],
    },
    LevelDefinition {
        level: 2,
        name: "Disciplinado",
        min_xp: 501,
        max_xp: Some(1500),
        perks: &["2 planos de treino", "Mood tracker"],
        avatar_unlocks: &["avatar_fit_1", "avatar_fit_2", "avatar_fit_3"],
    },
    LevelDefinition {
        level: 3,
        name: "Guerreiro",
        min_xp: 1501,
        max_xp: Some(3000),
        perks: &["Planos ilimitados", "Chat premium"],
        avatar_unlocks: &["avatar_warrior_1", "avatar_warrior_2"],
    },
    LevelDefinition {
        level: 4,
        name: "Mestre",
        min_xp: 3001,
        max_xp: Some(5000),
        perks: &["Mentor de outros", "Desafios exclusivos"],
        avatar_unlocks: &["avatar_master_1", "avatar_master_2"],
    },
    LevelDefinition {
        level: 5,
        name: "Lenda",
        min_xp: 5001,
        max_xp: None,
        perks: &["Acesso total", "Criação de desafios"],
        avatar_unlocks: &["avatar_legend_1", "avatar_legend_2", "avatar_legend_3"],
    },
];

/// An ordered table of levels
#[derive(Debug, Clone, Copy)]
pub struct LevelTable {
    levels: &'static [LevelDefinition],
}

impl Default for LevelTable {
    fn default() -> Self {
        Self { levels: &LEVELS }
    }
}

impl LevelTable {
    /// Wrap an arbitrary level slice; call [`Self::validate`] before trusting it
    #[must_use]
    pub const fn new(levels: &'static [LevelDefinition]) -> Self {
        Self { levels }
    }

    /// Levels in ascending order
    #[must_use]
    pub const fn levels(&self) -> &'static [LevelDefinition] {
        self.levels
    }

    /// Number of levels
    #[must_use]
    pub const fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the table has no levels
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level following `level`, if any
    #[must_use]
    pub fn next_after(&self, level: &LevelDefinition) -> Option<&'static LevelDefinition> {
        let position = self.levels.iter().position(|l| l.level == level.level)?;
        self.levels.get(position + 1)
    }

    /// Check that the ranges tile the non-negative integers
    ///
    /// The first level starts at 0, each level starts right after the previous
    /// one ends, and only the last level is unbounded.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error describing the first gap, overlap, or
    /// misplaced unbounded level.
    pub fn validate(&self) -> AppResult<()> {
        let Some(first) = self.levels.first() else {
            return Err(AppError::config_invalid("Level table is empty"));
        };
        if first.min_xp != 0 {
            return Err(
                AppError::config_invalid("First level must start at 0 XP")
                    .with_resource_id(first.level.to_string()),
            );
        }

        let last_index = self.levels.len() - 1;
        for (index, level) in self.levels.iter().enumerate() {
            match level.max_xp {
                None if index != last_index => {
                    return Err(AppError::config_invalid(format!(
                        "Level {} is unbounded but is not the last level",
                        level.level
                    ))
                    .with_resource_id(level.level.to_string()));
                }
                Some(_) if index == last_index => {
                    return Err(AppError::config_invalid(
                        "Last level must have an unbounded upper limit",
                    )
                    .with_resource_id(level.level.to_string()));
                }
                Some(max) if max < level.min_xp => {
                    return Err(AppError::config_invalid(format!(
                        "Level {} has max_xp {max} below min_xp {}",
                        level.level, level.min_xp
                    ))
                    .with_resource_id(level.level.to_string()));
                }
                _ => {}
            }

            if let (Some(max), Some(next)) = (level.max_xp, self.levels.get(index + 1)) {
                if max.checked_add(1) != Some(next.min_xp) {
                    let kind = if next.min_xp <= max { "overlaps" } else { "leaves a gap after" };
                    return Err(AppError::config_invalid(format!(
                        "Level {} {kind} level {} (max_xp {max}, next min_xp {})",
                        next.level, level.level, next.min_xp
                    ))
                    .with_resource_id(next.level.to_string()));
                }
            }
        }

        Ok(())
    }
}
