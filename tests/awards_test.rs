// ABOUTME: Tests for awarding badges and the event-driven gamification engine
// ABOUTME: XP summation, duplicate handling, snapshot immutability, and level-up reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Duration;
use vira_vida::errors::ErrorCode;
use vira_vida::gamification::{
    AwardProcessor, BadgeCatalog, BadgeEvent, GamificationEngine, LevelTable, LevelUp, BADGES,
};
use vira_vida::models::{BadgeId, UserProgress};

mod common;

// ============================================================================
// AWARD PROCESSOR
// ============================================================================

#[test]
fn test_apply_empty_is_identity() {
    common::init_test_logging();
    let user = common::user_with_badges(320, &[BadgeId::Ferro]);

    let (updated, gained) = AwardProcessor::default().apply(&user, &[]);
    assert_eq!(updated, user);
    assert_eq!(gained, 0);
}

#[test]
fn test_apply_sums_rewards_and_stamps_time() {
    let user = UserProgress::with_xp(100);
    let at = common::fixed_time();

    let (updated, gained) =
        AwardProcessor::default().apply_at(&user, &[BadgeId::GraoAreia, BadgeId::Warrior], at);

    assert_eq!(gained, 550);
    assert_eq!(updated.xp, 650);
    assert_eq!(updated.badges.earned_at(BadgeId::GraoAreia), Some(at));
    assert_eq!(updated.badges.earned_at(BadgeId::Warrior), Some(at));
    assert_eq!(updated.badges.len(), 2);
}

#[test]
fn test_apply_skips_already_earned_and_repeats() {
    let user = common::user_with_badges(50, &[BadgeId::Ferro]);
    let original = user.badges.earned_at(BadgeId::Ferro);
    let later = common::fixed_time() + Duration::days(3);

    let (updated, gained) = AwardProcessor::default().apply_at(
        &user,
        &[BadgeId::Ferro, BadgeId::Helper, BadgeId::Helper],
        later,
    );

    assert_eq!(gained, 100);
    assert_eq!(updated.xp, 150);
    assert_eq!(updated.badges.earned_at(BadgeId::Ferro), original);
    assert_eq!(updated.badges.earned_at(BadgeId::Helper), Some(later));
}

#[test]
fn test_apply_does_not_mutate_input() {
    let user = UserProgress::with_xp(10);
    let before = user.clone();

    let (updated, _) = AwardProcessor::default().apply(&user, &[BadgeId::Legend]);

    assert_eq!(user, before);
    assert!(updated.badges.contains(BadgeId::Legend));
    assert!(!user.badges.contains(BadgeId::Legend));
}

// ============================================================================
// GAMIFICATION ENGINE
// ============================================================================

#[test]
fn test_engine_reports_level_up() {
    let engine = GamificationEngine::default();
    let user = UserProgress::with_xp(400);

    let outcome = engine
        .record_event_at(&user, BadgeEvent::WorkoutsCompleted(30), common::fixed_time())
        .unwrap();

    assert_eq!(outcome.awarded, vec![BadgeId::GraoAreia]);
    assert_eq!(outcome.xp_gained, 150);
    assert_eq!(outcome.progress.xp, 550);
    assert_eq!(
        outcome.level_up,
        Some(LevelUp {
            from: 1,
            to: 2,
            name: "Disciplinado",
        })
    );
}

#[test]
fn test_engine_without_level_change() {
    let engine = GamificationEngine::default();
    let user = UserProgress::with_xp(0);

    let outcome = engine
        .record_event(&user, BadgeEvent::WeightLoggedStreak(7))
        .unwrap();

    assert_eq!(outcome.awarded, vec![BadgeId::Ferro]);
    assert_eq!(outcome.progress.xp, 50);
    assert!(outcome.level_up.is_none());
}

#[test]
fn test_engine_repeated_event_changes_nothing() {
    let engine = GamificationEngine::default();
    let user = common::user_with_badges(700, &[BadgeId::Helper]);

    let outcome = engine
        .record_event(&user, BadgeEvent::ChatTipsPosted(50))
        .unwrap();

    assert!(outcome.is_empty());
    assert_eq!(outcome.progress, user);
    assert_eq!(outcome.xp_gained, 0);
}

#[test]
fn test_engine_reaches_top_level() {
    let engine = GamificationEngine::default();
    let user = UserProgress::with_xp(4950);

    let outcome = engine
        .record_event(&user, BadgeEvent::XpMilestone(4950))
        .unwrap();

    assert_eq!(outcome.awarded, vec![BadgeId::Guru]);
    let level_up = outcome.level_up.unwrap();
    assert_eq!((level_up.from, level_up.to), (4, 5));
    assert_eq!(level_up.name, "Lenda");
    assert_eq!(outcome.progress.xp, 5050);
}

#[test]
fn test_engine_over_custom_tables_is_validated() {
    let engine = GamificationEngine::new(LevelTable::default(), BadgeCatalog::default()).unwrap();
    let outcome = engine
        .record_event(&UserProgress::with_xp(400), BadgeEvent::WorkoutsCompleted(30))
        .unwrap();
    assert_eq!(outcome.progress.xp, 550);

    let error = GamificationEngine::new(LevelTable::new(&[]), BadgeCatalog::default()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    let error =
        GamificationEngine::new(LevelTable::default(), BadgeCatalog::new(&BADGES[..3])).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
