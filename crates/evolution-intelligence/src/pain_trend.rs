// ABOUTME: Pain trend merging daily self-reports and post-exercise pain per calendar day
// ABOUTME: Same-day samples from both sources are averaged, never overwritten
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::EvolutionConfig;
use chrono::{Days, FixedOffset, NaiveDate};
use evolution_core::dates::chart_label;
use evolution_core::models::{DailyLog, ExerciseLog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Pain change (points on the 0-10 scale) below which the trend is stable
const STABLE_PAIN_CHANGE: f64 = 1.0;

/// One day of the pain trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PainTrendPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Chart axis label (dd/mm)
    pub label: String,
    /// Mean of all pain samples on the day
    pub value: f64,
    /// Samples averaged into `value`
    pub sample_count: u32,
}

/// Direction of the pain trend between its first and last day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PainTrendDirection {
    /// Pain dropped by at least one point
    Improving,
    /// Pain changed by less than one point
    Stable,
    /// Pain rose by at least one point
    Worsening,
}

impl PainTrendDirection {
    /// Classify a trend series, `None` with fewer than two days
    #[must_use]
    pub fn from_points(points: &[PainTrendPoint]) -> Option<Self> {
        let (first, last) = match points {
            [first, .., last] => (first, last),
            _ => return None,
        };
        let change = last.value - first.value;
        Some(if change <= -STABLE_PAIN_CHANGE {
            Self::Improving
        } else if change >= STABLE_PAIN_CHANGE {
            Self::Worsening
        } else {
            Self::Stable
        })
    }
}

#[derive(Default)]
struct DayAccumulator {
    sum: f64,
    count: u32,
}

/// Calculator for the merged pain trend
#[derive(Debug, Clone)]
pub struct PainTrendCalculator {
    offset: FixedOffset,
    window_days: u32,
}

impl Default for PainTrendCalculator {
    fn default() -> Self {
        Self::from_config(&EvolutionConfig::default())
    }
}

impl PainTrendCalculator {
    /// Create a calculator for a clinic offset and look-back window
    #[must_use]
    pub const fn new(offset: FixedOffset, window_days: u32) -> Self {
        Self {
            offset,
            window_days,
        }
    }

    /// Create a calculator from shared configuration
    #[must_use]
    pub fn from_config(config: &EvolutionConfig) -> Self {
        Self::new(config.offset(), config.pain_trend_window_days)
    }

    /// Compute the pain trend over `[reference - window, reference]` inclusive
    ///
    /// Returns days in ascending order with unique dates; empty when no
    /// sample falls in the window.
    #[must_use]
    pub fn compute(
        &self,
        daily_logs: &[DailyLog],
        exercise_logs: &[ExerciseLog],
        reference_date: NaiveDate,
    ) -> Vec<PainTrendPoint> {
        let window_start = reference_date
            .checked_sub_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MIN);
        let in_window = |day: &NaiveDate| (window_start..=reference_date).contains(day);

        let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
        let mut skipped = 0_usize;

        for log in daily_logs {
            match log.calendar_day(&self.offset).and_then(|day| Ok((day, log.pain()?))) {
                Ok((day, pain)) if in_window(&day) => {
                    let entry = days.entry(day).or_default();
                    entry.sum += f64::from(pain);
                    entry.count += 1;
                }
                Ok(_) => {}
                Err(issue) => {
                    skipped += 1;
                    debug!(log_id = %log.id, %issue, "skipping daily log pain sample");
                }
            }
        }

        for log in exercise_logs {
            match log.calendar_day(&self.offset).and_then(|day| Ok((day, log.pain()?))) {
                Ok((day, Some(pain))) if in_window(&day) => {
                    let entry = days.entry(day).or_default();
                    entry.sum += f64::from(pain);
                    entry.count += 1;
                }
                Ok(_) => {}
                Err(issue) => {
                    skipped += 1;
                    debug!(log_id = %log.id, prescription_id = %log.prescription_id, %issue, "skipping exercise pain sample");
                }
            }
        }

        debug!(
            days = days.len(),
            skipped,
            window_days = self.window_days,
            "computed pain trend"
        );

        days.into_iter()
            .map(|(date, acc)| PainTrendPoint {
                date,
                label: chart_label(date),
                value: acc.sum / f64::from(acc.count),
                sample_count: acc.count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};
    use evolution_core::models::Mood;

    fn point(value: f64) -> PainTrendPoint {
        PainTrendPoint {
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            label: "01/10".to_owned(),
            value,
            sample_count: 1,
        }
    }

    #[test]
    fn test_direction_needs_two_days() {
        assert_eq!(PainTrendDirection::from_points(&[]), None);
        assert_eq!(PainTrendDirection::from_points(&[point(5.0)]), None);
    }

    #[test]
    fn test_direction_thresholds() {
        assert_eq!(
            PainTrendDirection::from_points(&[point(7.0), point(4.0), point(5.5)]),
            Some(PainTrendDirection::Improving)
        );
        assert_eq!(
            PainTrendDirection::from_points(&[point(3.0), point(3.5)]),
            Some(PainTrendDirection::Stable)
        );
        assert_eq!(
            PainTrendDirection::from_points(&[point(3.0), point(4.0)]),
            Some(PainTrendDirection::Worsening)
        );
    }

    #[test]
    fn test_window_longer_than_calendar_does_not_overflow() {
        let reference = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let daily = vec![DailyLog::new("2026-10-10", 4, 3, 3, Mood::Neutral)];
        let exercise = vec![ExerciseLog::new("rx-1", "1990-01-01").with_pain(6)];

        let calculator = PainTrendCalculator::new(Utc.fix(), u32::MAX);
        let trend = calculator.compute(&daily, &exercise, reference);
        assert_eq!(trend.len(), 2);

        let at_calendar_start = calculator.compute(&daily, &exercise, NaiveDate::MIN);
        assert!(at_calendar_start.is_empty());
    }
}
