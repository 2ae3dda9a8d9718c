// ABOUTME: Tests for XP to level resolution, progress percentage, and level table validation
// ABOUTME: Covers boundary XP values, monotonic progress, and malformed tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vira_vida::errors::ErrorCode;
use vira_vida::gamification::{validate_xp, LevelTable, ProgressionEngine, LEVELS};
use vira_vida::models::LevelDefinition;

mod common;

// ============================================================================
// LEVEL RESOLUTION
// ============================================================================

#[test]
fn test_zero_xp_is_first_level() {
    common::init_test_logging();
    let engine = ProgressionEngine::default();

    let level = engine.resolve_level(0).unwrap();
    assert_eq!(level.level, 1);
    assert_eq!(level.name, "Iniciante");
    assert!(engine.progress_fraction(0).unwrap().abs() < f64::EPSILON);
    assert_eq!(engine.xp_to_next_level(0).unwrap(), 500);
}

#[test]
fn test_level_upper_bound_is_inclusive() {
    let engine = ProgressionEngine::default();

    let level = engine.resolve_level(500).unwrap();
    assert_eq!(level.level, 1);
    assert!((engine.progress_fraction(500).unwrap() - 100.0).abs() < f64::EPSILON);
    assert_eq!(engine.xp_to_next_level(500).unwrap(), 0);

    assert_eq!(engine.resolve_level(501).unwrap().name, "Disciplinado");
}

#[test]
fn test_top_level_is_unbounded() {
    let engine = ProgressionEngine::default();

    let level = engine.resolve_level(5001).unwrap();
    assert_eq!(level.level, 5);
    assert_eq!(level.name, "Lenda");
    assert!(level.is_max_level());
    assert!((engine.progress_fraction(5001).unwrap() - 100.0).abs() < f64::EPSILON);
    assert_eq!(engine.xp_to_next_level(5001).unwrap(), 0);

    assert_eq!(engine.resolve_level(u64::MAX).unwrap().level, 5);
}

#[test]
fn test_every_boundary_maps_to_expected_level() {
    let engine = ProgressionEngine::default();
    let cases = [
        (0, 1),
        (500, 1),
        (501, 2),
        (1500, 2),
        (1501, 3),
        (3000, 3),
        (3001, 4),
        (5000, 4),
        (5001, 5),
    ];
    for (xp, expected) in cases {
        assert_eq!(engine.resolve_level(xp).unwrap().level, expected, "xp {xp}");
    }
}

#[test]
fn test_progress_midway_through_level() {
    let engine = ProgressionEngine::default();

    // Guerreiro spans 1501..=3000, so 2250 is (749 / 1499) of the way
    let progress = engine.progress_fraction(2250).unwrap();
    assert!((progress - 49.97).abs() < 0.01, "got {progress}");
    assert_eq!(engine.xp_to_next_level(2250).unwrap(), 750);
}

#[test]
fn test_progress_is_monotonic_within_each_level() {
    let engine = ProgressionEngine::default();

    for level in &LEVELS {
        let upper = level.max_xp.unwrap_or(level.min_xp + 1000);
        let mut previous = -1.0;
        for xp in level.min_xp..=upper {
            let progress = engine.progress_fraction(xp).unwrap();
            assert!((0.0..=100.0).contains(&progress));
            assert!(progress >= previous, "progress dropped at {xp}");
            previous = progress;
        }
    }
}

#[test]
fn test_level_info_bundles_next_level() {
    let engine = ProgressionEngine::default();

    let info = engine.level_info(1200).unwrap();
    assert_eq!(info.level.name, "Disciplinado");
    assert_eq!(info.xp_to_next_level, 300);
    assert_eq!(info.next_level_name, Some("Guerreiro"));

    let top = engine.level_info(9000).unwrap();
    assert_eq!(top.next_level_name, None);
    assert_eq!(top.xp_to_next_level, 0);
}

#[test]
fn test_negative_xp_is_rejected() {
    let error = validate_xp(-1).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(validate_xp(42).unwrap(), 42);
}

// ============================================================================
// LEVEL TABLE VALIDATION
// ============================================================================

static GAP_TABLE: [LevelDefinition; 2] = [
    LevelDefinition {
        level: 1,
        name: "A",
        min_xp: 0,
        max_xp: Some(100),
        perks: &[],
        avatar_unlocks: &[],
    },
    LevelDefinition {
        level: 2,
        name: "B",
        min_xp: 150,
        max_xp: None,
        perks: &[],
        avatar_unlocks: &[],
    },
];

static OVERLAP_TABLE: [LevelDefinition; 2] = [
    LevelDefinition {
        level: 1,
        name: "A",
        min_xp: 0,
        max_xp: Some(100),
        perks: &[],
        avatar_unlocks: &[],
    },
    LevelDefinition {
        level: 2,
        name: "B",
        min_xp: 90,
        max_xp: None,
        perks: &[],
        avatar_unlocks: &[],
    },
];

static BOUNDED_LAST_TABLE: [LevelDefinition; 1] = [LevelDefinition {
    level: 1,
    name: "A",
    min_xp: 0,
    max_xp: Some(100),
    perks: &[],
    avatar_unlocks: &[],
}];

static LATE_START_TABLE: [LevelDefinition; 1] = [LevelDefinition {
    level: 1,
    name: "A",
    min_xp: 10,
    max_xp: None,
    perks: &[],
    avatar_unlocks: &[],
}];

#[test]
fn test_default_table_is_valid() {
    LevelTable::default().validate().unwrap();
    assert_eq!(LevelTable::default().len(), 5);
}

#[test]
fn test_table_with_gap_is_rejected() {
    let error = ProgressionEngine::new(LevelTable::new(&GAP_TABLE)).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("gap"), "{}", error.message);
}

#[test]
fn test_table_with_overlap_is_rejected() {
    let error = ProgressionEngine::new(LevelTable::new(&OVERLAP_TABLE)).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("overlaps"), "{}", error.message);
}

#[test]
fn test_table_with_bounded_last_level_is_rejected() {
    let error = LevelTable::new(&BOUNDED_LAST_TABLE).validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_table_not_starting_at_zero_is_rejected() {
    let error = LevelTable::new(&LATE_START_TABLE).validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_empty_table_is_rejected() {
    let error = LevelTable::new(&[]).validate().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
