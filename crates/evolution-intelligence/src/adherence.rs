// ABOUTME: Exercise adherence over the trailing 7-day window ending at the reference day
// ABOUTME: Produces the adherence percentage and a day-by-day logged/missed/future calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adherence calculation
//!
//! A day counts as adhered when at least one exercise log falls on it. Any
//! active prescription means one expected session per day, regardless of the
//! prescription's written frequency.

use crate::config::EvolutionConfig;
use crate::round_to_tenth;
use chrono::{Days, FixedOffset, NaiveDate};
use evolution_core::constants::windows::ADHERENCE_WINDOW_DAYS;
use evolution_core::dates::DayLabels;
use evolution_core::models::{ExerciseLog, Prescription};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Status of one calendar day in the adherence calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// At least one exercise was logged
    Logged,
    /// No exercise was logged
    Missed,
    /// Day is after the reference day
    Future,
}

/// One entry of the adherence calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAdherence {
    /// Calendar day
    pub date: NaiveDate,
    /// Abbreviated weekday label
    pub day_label: String,
    /// Logged, missed or future
    pub status: DayStatus,
}

/// Adherence over the trailing window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdherenceSummary {
    /// Share of window days with at least one log (0-100, one decimal)
    pub adherence_rate: f64,
    /// Chronological calendar, empty when nothing is prescribed
    pub weekly_status: Vec<DayAdherence>,
    /// Window days with at least one log
    pub days_logged: u32,
}

impl AdherenceSummary {
    /// Summary reported when the patient has no prescriptions
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            adherence_rate: 0.0,
            weekly_status: Vec::new(),
            days_logged: 0,
        }
    }
}

/// Calculator for the trailing-window adherence
#[derive(Debug, Clone)]
pub struct AdherenceCalculator {
    offset: FixedOffset,
    day_labels: DayLabels,
}

impl Default for AdherenceCalculator {
    fn default() -> Self {
        Self::from_config(&EvolutionConfig::default())
    }
}

impl AdherenceCalculator {
    /// Create a calculator for a clinic offset and label language
    #[must_use]
    pub const fn new(offset: FixedOffset, day_labels: DayLabels) -> Self {
        Self { offset, day_labels }
    }

    /// Create a calculator from shared configuration
    #[must_use]
    pub fn from_config(config: &EvolutionConfig) -> Self {
        Self::new(config.offset(), config.day_labels)
    }

    /// Compute adherence for the 7 days ending at `reference_date` inclusive
    ///
    /// Logs are not filtered by patient or prescription; the caller passes
    /// only the patient's logs. Logs with malformed dates are skipped.
    #[must_use]
    pub fn compute(
        &self,
        prescriptions: &[Prescription],
        exercise_logs: &[ExerciseLog],
        reference_date: NaiveDate,
    ) -> AdherenceSummary {
        if prescriptions.is_empty() {
            debug!("no prescriptions, adherence not tracked");
            return AdherenceSummary::empty();
        }

        let logged_days = self.logged_days(exercise_logs);

        let weekly_status: Vec<DayAdherence> = window_days(reference_date)
            .map(|date| DayAdherence {
                date,
                day_label: self.day_labels.label(date),
                status: day_status(date, reference_date, &logged_days),
            })
            .collect();

        let days_logged = weekly_status
            .iter()
            .filter(|day| day.status == DayStatus::Logged)
            .count() as u32;
        let adherence_rate =
            round_to_tenth(f64::from(days_logged) / f64::from(ADHERENCE_WINDOW_DAYS) * 100.0);

        debug!(
            prescriptions = prescriptions.len(),
            logs = exercise_logs.len(),
            days_logged,
            adherence_rate,
            "computed adherence"
        );

        AdherenceSummary {
            adherence_rate,
            weekly_status,
            days_logged,
        }
    }

    /// Calendar days holding at least one log
    fn logged_days(&self, exercise_logs: &[ExerciseLog]) -> HashSet<NaiveDate> {
        let mut days = HashSet::with_capacity(exercise_logs.len());
        for log in exercise_logs {
            match log.calendar_day(&self.offset) {
                Ok(day) => {
                    days.insert(day);
                }
                Err(issue) => {
                    debug!(log_id = %log.id, prescription_id = %log.prescription_id, %issue, "skipping exercise log");
                }
            }
        }
        days
    }
}

/// The adherence window, oldest day first; days before the calendar start are dropped
fn window_days(reference_date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let span = u64::from(ADHERENCE_WINDOW_DAYS) - 1;
    (0..=span)
        .rev()
        .filter_map(move |days_back| reference_date.checked_sub_days(Days::new(days_back)))
}

fn day_status(date: NaiveDate, reference_date: NaiveDate, logged: &HashSet<NaiveDate>) -> DayStatus {
    if date > reference_date {
        DayStatus::Future
    } else if logged.contains(&date) {
        DayStatus::Logged
    } else {
        DayStatus::Missed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_is_chronological_and_ends_at_reference() {
        let days: Vec<NaiveDate> = window_days(day(2026, 10, 17)).collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], day(2026, 10, 11));
        assert_eq!(days[6], day(2026, 10, 17));
    }

    #[test]
    fn test_day_status_precedence() {
        let reference = day(2026, 10, 17);
        let logged: HashSet<NaiveDate> = [day(2026, 10, 18), day(2026, 10, 16)].into();
        assert_eq!(day_status(day(2026, 10, 18), reference, &logged), DayStatus::Future);
        assert_eq!(day_status(day(2026, 10, 16), reference, &logged), DayStatus::Logged);
        assert_eq!(day_status(day(2026, 10, 15), reference, &logged), DayStatus::Missed);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DayStatus::Logged).unwrap(), "\"logged\"");
    }

    #[test]
    fn test_window_at_calendar_start_is_truncated() {
        let days: Vec<NaiveDate> = window_days(NaiveDate::MIN).collect();
        assert_eq!(days, vec![NaiveDate::MIN]);
    }
}
