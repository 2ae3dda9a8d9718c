// ABOUTME: Static badge catalog with names, descriptions, XP rewards, and rarity
// ABOUTME: Entries are stored in BadgeId order so lookup is a direct index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use vira_core::errors::{AppError, AppResult};
use vira_core::models::{BadgeDefinition, BadgeId, Rarity};

/// Default badge catalog, indexed by [`BadgeId::index`]
pub static BADGES: [BadgeDefinition; BadgeId::COUNT] = [
    BadgeDefinition {
        id: BadgeId::Ferro,
        name: "Ferro",
        description: "Registrou peso por 7 dias seguidos",
        xp_reward: 50,
        rarity: Rarity::Common,
        icon: "⚖️",
    },
    BadgeDefinition {
        id: BadgeId::AguaPescoco,
        name: "Água no Pescoço",
        description: "Perdeu 2% do peso em 7 dias",
        xp_reward: 75,
        rarity: Rarity::Rare,
        icon: "💧",
    },
    BadgeDefinition {
        id: BadgeId::Helper,
        name: "Helper",
        description: "Postou 3 dicas úteis no chat",
        xp_reward: 100,
        rarity: Rarity::Rare,
        icon: "🤝",
    },
    BadgeDefinition {
        id: BadgeId::GraoAreia,
        name: "Grão de Areia",
        description: "Completou 30 treinos",
        xp_reward: 150,
        rarity: Rarity::Epic,
        icon: "🥋",
    },
    BadgeDefinition {
        id: BadgeId::Disciplinado,
        name: "Disciplinado",
        description: "30 dias de streak",
        xp_reward: 200,
        rarity: Rarity::Epic,
        icon: "🔥",
    },
    BadgeDefinition {
        id: BadgeId::Mentor,
        name: "Mentor",
        description: "Ajudou 10 pessoas",
        xp_reward: 300,
        rarity: Rarity::Epic,
        icon: "👨‍🏫",
    },
    BadgeDefinition {
        id: BadgeId::Transformer,
        name: "Transformer",
        description: "Alcançou sua meta de peso",
        xp_reward: 500,
        rarity: Rarity::Legendary,
        icon: "🦋",
    },
    BadgeDefinition {
        id: BadgeId::Warrior,
        name: "Warrior",
        description: "Completou 100 treinos",
        xp_reward: 400,
        rarity: Rarity::Legendary,
        icon: "⚔️",
    },
    BadgeDefinition {
        id: BadgeId::Guru,
        name: "Guru",
        description: "Alcançou 1000 XP",
        xp_reward: 100,
        rarity: Rarity::Epic,
        icon: "🧘‍♂️",
    },
    BadgeDefinition {
        id: BadgeId::Legend,
        name: "Legend",
        description: "Alcançou 5000 XP",
        xp_reward: 500,
        rarity: Rarity::Legendary,
        icon: "👑",
    },
];

/// Definition of `id` in the default catalog
#[must_use]
pub fn badge_definition(id: BadgeId) -> &'static BadgeDefinition {
    &BADGES[id.index()]
}

/// A badge catalog laid out in [`BadgeId`] order
#[derive(Debug, Clone, Copy)]
pub struct BadgeCatalog {
    badges: &'static [BadgeDefinition],
}

impl Default for BadgeCatalog {
    fn default() -> Self {
        Self { badges: &BADGES }
    }
}

impl BadgeCatalog {
    /// Wrap an arbitrary badge slice; call [`Self::validate`] before trusting it
    #[must_use]
    pub const fn new(badges: &'static [BadgeDefinition]) -> Self {
        Self { badges }
    }

    /// All definitions in catalog order
    #[must_use]
    pub const fn definitions(&self) -> &'static [BadgeDefinition] {
        self.badges
    }

    /// Definition for `id`
    #[must_use]
    pub fn get(&self, id: BadgeId) -> Option<&'static BadgeDefinition> {
        self.badges.get(id.index()).filter(|badge| badge.id == id)
    }

    /// XP reward for `id`, zero if the catalog has no entry for it
    #[must_use]
    pub fn xp_reward(&self, id: BadgeId) -> u64 {
        self.get(id).map_or(0, |badge| badge.xp_reward)
    }

    /// Definitions of a given rarity, in catalog order
    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &'static BadgeDefinition> {
        self.badges.iter().filter(move |badge| badge.rarity == rarity)
    }

    /// Check that every identifier appears exactly once, in slot order, with a
    /// positive reward
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error for duplicates, missing or misordered
    /// entries, and zero rewards.
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(self.badges.len());
        for badge in self.badges {
            if !seen.insert(badge.id) {
                return Err(AppError::config_invalid(format!(
                    "Duplicate badge id in catalog: {}",
                    badge.id
                ))
                .with_resource_id(badge.id.as_str()));
            }
            if badge.xp_reward == 0 {
                return Err(AppError::config_invalid(format!(
                    "Badge {} must grant a positive XP reward",
                    badge.id
                ))
                .with_resource_id(badge.id.as_str()));
            }
        }

        if self.badges.len() != BadgeId::COUNT {
            return Err(AppError::config_invalid(format!(
                "Badge catalog has {} entries, expected {}",
                self.badges.len(),
                BadgeId::COUNT
            )));
        }

        for (slot, badge) in self.badges.iter().enumerate() {
            if badge.id.index() != slot {
                return Err(AppError::config_invalid(format!(
                    "Badge {} is stored at slot {slot}, expected slot {}",
                    badge.id,
                    badge.id.index()
                ))
                .with_resource_id(badge.id.as_str()));
            }
        }

        Ok(())
    }
}
