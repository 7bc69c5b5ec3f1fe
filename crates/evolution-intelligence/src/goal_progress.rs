// ABOUTME: Treatment goal progress ratios and schedule status
// ABOUTME: Guards zero targets, keeps overachievement above 100%, compares against elapsed time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal progress tracking
//!
//! `progress_percent` is the display ratio `current / target * 100`. A zero or
//! non-finite target yields 0 so no NaN or infinity ever reaches a progress
//! bar. Values above 100 are kept: overachievement is meaningful.

use crate::config::EvolutionConfig;
use crate::round_to_tenth;
use chrono::{FixedOffset, NaiveDate};
use evolution_core::constants::goals::{ACHIEVED_PERCENT, DEFAULT_PROGRESS_TOLERANCE_PERCENT};
use evolution_core::models::TherapistGoal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Progress of a goal as a display percentage (one decimal, floor 0, no ceiling)
#[must_use]
pub fn progress_percent(goal: &TherapistGoal) -> f64 {
    let (current, target) = (goal.current_value, goal.target_value);
    if target == 0.0 || !target.is_finite() || !current.is_finite() {
        return 0.0;
    }
    let percent = current / target * 100.0;
    if percent.is_finite() {
        round_to_tenth(percent.max(0.0))
    } else {
        0.0
    }
}

/// Where a goal stands relative to its schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalStatus {
    /// Target reached or exceeded
    Achieved,
    /// Progress keeps pace with elapsed time (within tolerance)
    OnTrack,
    /// Progress lags elapsed time by more than the tolerance
    Behind,
    /// Goal period has not begun
    NotStarted,
    /// Target date passed without reaching the target
    Overdue,
}

/// Progress report for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Goal identifier
    pub goal_id: String,
    /// Goal description
    pub description: String,
    /// Unit of the goal values
    pub unit: String,
    /// `current / target * 100`, one decimal
    pub progress_percent: f64,
    /// Value still missing to reach the target (never negative)
    pub remaining_value: f64,
    /// Share of the goal period elapsed, `None` without a valid period
    pub time_elapsed_percent: Option<f64>,
    /// Schedule status
    pub status: GoalStatus,
}

/// Assesses goals against their schedule
#[derive(Debug, Clone)]
pub struct GoalTracker {
    offset: FixedOffset,
    tolerance_percent: f64,
}

impl Default for GoalTracker {
    fn default() -> Self {
        Self::new(EvolutionConfig::default().offset(), DEFAULT_PROGRESS_TOLERANCE_PERCENT)
    }
}

impl GoalTracker {
    /// Create a tracker for a clinic offset and on-track tolerance
    #[must_use]
    pub const fn new(offset: FixedOffset, tolerance_percent: f64) -> Self {
        Self {
            offset,
            tolerance_percent,
        }
    }

    /// Create a tracker from shared configuration
    #[must_use]
    pub fn from_config(config: &EvolutionConfig) -> Self {
        Self::new(config.offset(), config.goal_tolerance_percent)
    }

    /// Assess one goal on `reference_date`
    #[must_use]
    pub fn assess(&self, goal: &TherapistGoal, reference_date: NaiveDate) -> GoalProgress {
        let progress = progress_percent(goal);
        let remaining_value = remaining_value(goal);

        let period = goal
            .period(&self.offset)
            .map_err(|issue| {
                debug!(goal_id = %goal.id, %issue, "goal has no usable period");
            })
            .ok();

        let time_elapsed_percent =
            period.map(|(start, target)| elapsed_percent(start, target, reference_date));

        let status = if progress >= ACHIEVED_PERCENT {
            GoalStatus::Achieved
        } else if let Some((start, target)) = period {
            self.scheduled_status(progress, start, target, reference_date)
        } else {
            GoalStatus::OnTrack
        };

        GoalProgress {
            goal_id: goal.id.clone(),
            description: goal.description.clone(),
            unit: goal.unit.clone(),
            progress_percent: progress,
            remaining_value,
            time_elapsed_percent,
            status,
        }
    }

    /// Assess every goal, preserving input order
    #[must_use]
    pub fn assess_all(&self, goals: &[TherapistGoal], reference_date: NaiveDate) -> Vec<GoalProgress> {
        goals
            .iter()
            .map(|goal| self.assess(goal, reference_date))
            .collect()
    }

    fn scheduled_status(
        &self,
        progress: f64,
        start: NaiveDate,
        target: NaiveDate,
        reference_date: NaiveDate,
    ) -> GoalStatus {
        if reference_date < start {
            return GoalStatus::NotStarted;
        }
        if reference_date > target {
            return GoalStatus::Overdue;
        }
        let expected = elapsed_percent(start, target, reference_date);
        if progress >= expected - self.tolerance_percent {
            GoalStatus::OnTrack
        } else {
            GoalStatus::Behind
        }
    }
}

fn remaining_value(goal: &TherapistGoal) -> f64 {
    let remaining = goal.target_value - goal.current_value;
    if remaining.is_finite() {
        remaining.max(0.0)
    } else {
        0.0
    }
}

/// Share of `[start, target]` elapsed on `reference_date`, clamped to 0-100
fn elapsed_percent(start: NaiveDate, target: NaiveDate, reference_date: NaiveDate) -> f64 {
    let total = (target - start).num_days();
    if total <= 0 {
        return if reference_date >= start { 100.0 } else { 0.0 };
    }
    let elapsed = (reference_date - start).num_days().clamp(0, total);
    round_to_tenth(elapsed as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_and_non_finite_targets_yield_zero() {
        for (target, current) in [(0.0, 12.0), (0.0, 0.0), (f64::NAN, 1.0), (10.0, f64::INFINITY)] {
            let goal = TherapistGoal::new("g", "u", target, current);
            let percent = progress_percent(&goal);
            assert!(percent.abs() < f64::EPSILON, "{target}/{current} gave {percent}");
        }
    }

    #[test]
    fn test_overachievement_is_not_clamped() {
        let goal = TherapistGoal::new("Knee flexion", "degrees", 10.0, 12.0);
        assert!((progress_percent(&goal) - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_ratio_floors_at_zero() {
        let goal = TherapistGoal::new("Walk", "m", 100.0, -5.0);
        assert!(progress_percent(&goal).abs() < f64::EPSILON);
    }

    #[test]
    fn test_elapsed_percent() {
        let start = day(2026, 10, 1);
        let target = day(2026, 10, 11);
        assert!((elapsed_percent(start, target, day(2026, 10, 6)) - 50.0).abs() < f64::EPSILON);
        assert!(elapsed_percent(start, target, day(2026, 9, 1)).abs() < f64::EPSILON);
        assert!((elapsed_percent(start, target, day(2026, 12, 1)) - 100.0).abs() < f64::EPSILON);
        assert!((elapsed_percent(start, start, start) - 100.0).abs() < f64::EPSILON);
    }
}
