// ABOUTME: Integration tests for the merged daily pain trend
// ABOUTME: Covers same-day averaging across sources, window bounds, ordering and skipped records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{daily_log_on, day, exercise_log_on, reference_day};
use physio_evolution::{
    compute_pain_trend, DailyLog, ExerciseLog, Mood, PainTrendDirection,
};

#[test]
fn test_same_day_samples_are_averaged() {
    let daily = vec![daily_log_on(10, 4)];
    let exercise = vec![exercise_log_on(10).with_pain(6)];

    let trend = compute_pain_trend(&daily, &exercise, 30, reference_day());

    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].date, day(2026, 10, 10));
    assert_eq!(trend[0].label, "10/10");
    assert!((trend[0].value - 5.0).abs() < f64::EPSILON);
    assert_eq!(trend[0].sample_count, 2);
}

#[test]
fn test_exercise_logs_without_pain_contribute_nothing() {
    let trend = compute_pain_trend(&[], &[exercise_log_on(12)], 30, reference_day());
    assert!(trend.is_empty());
}

#[test]
fn test_no_samples_yields_empty_trend() {
    assert!(compute_pain_trend(&[], &[], 30, reference_day()).is_empty());
}

#[test]
fn test_window_bounds_are_inclusive() {
    // Window of 30 days ending 2026-10-15 starts 2026-09-15
    let daily = vec![
        DailyLog::new("2026-09-14", 9, 3, 3, Mood::Sad),
        DailyLog::new("2026-09-15", 7, 3, 3, Mood::Sad),
        daily_log_on(15, 2),
        daily_log_on(16, 1),
    ];

    let trend = compute_pain_trend(&daily, &[], 30, reference_day());

    let dates: Vec<_> = trend.iter().map(|point| point.date).collect();
    assert_eq!(dates, vec![day(2026, 9, 15), reference_day()]);
}

#[test]
fn test_trend_is_sorted_with_unique_days() {
    let daily = vec![daily_log_on(14, 3), daily_log_on(2, 8), daily_log_on(9, 5), daily_log_on(2, 6)];
    let exercise = vec![
        exercise_log_on(9).with_pain(4),
        exercise_log_on(14).with_pain(2),
        exercise_log_on(5).with_pain(7),
    ];

    let trend = compute_pain_trend(&daily, &exercise, 30, reference_day());

    assert!(trend.windows(2).all(|pair| pair[0].date < pair[1].date));
    assert_eq!(trend.len(), 4);
    assert!((trend[0].value - 7.0).abs() < f64::EPSILON);
    assert_eq!(trend[0].sample_count, 2);
}

#[test]
fn test_malformed_records_are_skipped() {
    let daily = vec![
        DailyLog::new("yesterday", 5, 3, 3, Mood::Neutral),
        DailyLog::new(common::october(11), 14, 3, 3, Mood::Neutral),
        daily_log_on(12, 4),
    ];
    let exercise = vec![
        ExerciseLog::new("rx-1", "2026-13-40").with_pain(3),
        exercise_log_on(12).with_pain(-2),
        exercise_log_on(12).with_pain(6),
    ];

    let trend = compute_pain_trend(&daily, &exercise, 30, reference_day());

    assert_eq!(trend.len(), 1);
    assert!((trend[0].value - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_direction_follows_first_and_last_day() {
    let improving = compute_pain_trend(
        &[daily_log_on(1, 8), daily_log_on(14, 3)],
        &[],
        30,
        reference_day(),
    );
    assert_eq!(
        PainTrendDirection::from_points(&improving),
        Some(PainTrendDirection::Improving)
    );

    let single = compute_pain_trend(&[daily_log_on(14, 3)], &[], 30, reference_day());
    assert_eq!(PainTrendDirection::from_points(&single), None);
}

#[test]
fn test_unbounded_window_covers_all_history() {
    let daily = vec![DailyLog::new("1999-12-31", 8, 2, 2, Mood::Sad), daily_log_on(14, 3)];

    let trend = compute_pain_trend(&daily, &[], u32::MAX, reference_day());

    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].date, day(1999, 12, 31));
}

#[test]
fn test_pain_trend_is_idempotent() {
    let daily = vec![daily_log_on(3, 6), daily_log_on(10, 4)];
    let exercise = vec![exercise_log_on(10).with_pain(6)];
    assert_eq!(
        compute_pain_trend(&daily, &exercise, 30, reference_day()),
        compute_pain_trend(&daily, &exercise, 30, reference_day())
    );
}
