// ABOUTME: Evolution analytics engine over per-patient clinical record collections
// ABOUTME: Adherence calendar, merged pain trend, goal, wellness and protocol progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Evolution Intelligence
//!
//! Pure, synchronous calculations that turn a patient's prescriptions,
//! exercise logs, daily logs and goals into display-ready summaries. Every
//! calculation takes its reference day explicitly; nothing here reads the
//! clock, caches results, or fails on a malformed individual record.
//!
//! The free functions at the crate root use default settings (UTC calendar
//! days, Portuguese day labels). Build the calculators from an
//! [`EvolutionConfig`] for clinic-specific settings.

/// Trailing 7-day adherence and calendar
pub mod adherence;
/// Analytics configuration
pub mod config;
/// Goal progress ratios and schedule status
pub mod goal_progress;
/// Merged pain trend
pub mod pain_trend;
/// Prescription period progress
pub mod protocol_progress;
/// Daily self-report summary
pub mod wellness;

pub use adherence::{AdherenceCalculator, AdherenceSummary, DayAdherence, DayStatus};
pub use config::{ConfigError, EvolutionConfig};
pub use goal_progress::{progress_percent, GoalProgress, GoalStatus, GoalTracker};
pub use pain_trend::{PainTrendCalculator, PainTrendDirection, PainTrendPoint};
pub use protocol_progress::{ProtocolPhase, ProtocolProgress, ProtocolTracker};
pub use wellness::{MoodDistribution, WellnessAnalyzer, WellnessSummary};

use chrono::{NaiveDate, Offset, Utc};
use evolution_core::dates::DayLabels;
use evolution_core::models::{DailyLog, ExerciseLog, Prescription, TherapistGoal};

/// Adherence over the 7 days ending at `reference_date`, UTC calendar days
#[must_use]
pub fn compute_adherence(
    prescriptions: &[Prescription],
    exercise_logs: &[ExerciseLog],
    reference_date: NaiveDate,
) -> AdherenceSummary {
    AdherenceCalculator::new(Utc.fix(), DayLabels::default()).compute(
        prescriptions,
        exercise_logs,
        reference_date,
    )
}

/// Pain trend over `[reference_date - window_days, reference_date]`, UTC calendar days
#[must_use]
pub fn compute_pain_trend(
    daily_logs: &[DailyLog],
    exercise_logs: &[ExerciseLog],
    window_days: u32,
    reference_date: NaiveDate,
) -> Vec<PainTrendPoint> {
    PainTrendCalculator::new(Utc.fix(), window_days).compute(daily_logs, exercise_logs, reference_date)
}

/// Goal progress percentage; 0 for a zero target
#[must_use]
pub fn compute_goal_progress(goal: &TherapistGoal) -> f64 {
    progress_percent(goal)
}

/// Round to one decimal place for display
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
