// ABOUTME: Protocol-phase progress of each prescription across its treatment period
// ABOUTME: Classifies prescriptions as upcoming, active, ongoing or completed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::EvolutionConfig;
use crate::round_to_tenth;
use chrono::{FixedOffset, NaiveDate};
use evolution_core::dates::inclusive_days;
use evolution_core::models::Prescription;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Phase of a prescription on the reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolPhase {
    /// Starts after the reference day
    Upcoming,
    /// Running, with a known end date
    Active,
    /// Running, open-ended
    Ongoing,
    /// Ended before the reference day
    Completed,
}

/// Progress of one prescription through its period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolProgress {
    /// Prescription identifier
    pub prescription_id: String,
    /// Prescribed exercise
    pub exercise_id: String,
    /// Phase on the reference day
    pub phase: ProtocolPhase,
    /// First day of the period
    pub start_date: NaiveDate,
    /// Last day of the period, if closed
    pub end_date: Option<NaiveDate>,
    /// Days of the period already lived, reference day included
    pub days_elapsed: i64,
    /// Share of the period elapsed (one decimal), `None` when open-ended
    pub progress_percent: Option<f64>,
}

/// Tracks prescriptions through their treatment periods
#[derive(Debug, Clone)]
pub struct ProtocolTracker {
    offset: FixedOffset,
}

impl Default for ProtocolTracker {
    fn default() -> Self {
        Self::from_config(&EvolutionConfig::default())
    }
}

impl ProtocolTracker {
    /// Create a tracker for a clinic offset
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Create a tracker from shared configuration
    #[must_use]
    pub fn from_config(config: &EvolutionConfig) -> Self {
        Self::new(config.offset())
    }

    /// Progress of every prescription with a usable period, in input order
    #[must_use]
    pub fn compute(
        &self,
        prescriptions: &[Prescription],
        reference_date: NaiveDate,
    ) -> Vec<ProtocolProgress> {
        prescriptions
            .iter()
            .filter_map(|prescription| match prescription.period(&self.offset) {
                Ok((start, end)) => Some(progress_for(prescription, start, end, reference_date)),
                Err(issue) => {
                    debug!(prescription_id = %prescription.id, %issue, "skipping prescription period");
                    None
                }
            })
            .collect()
    }
}

fn progress_for(
    prescription: &Prescription,
    start: NaiveDate,
    end: Option<NaiveDate>,
    reference_date: NaiveDate,
) -> ProtocolProgress {
    let (phase, days_elapsed, progress_percent) = if reference_date < start {
        (ProtocolPhase::Upcoming, 0, end.map(|_| 0.0))
    } else {
        match end {
            Some(end) if reference_date > end => {
                (ProtocolPhase::Completed, inclusive_days(start, end), Some(100.0))
            }
            Some(end) => {
                let elapsed = inclusive_days(start, reference_date);
                let total = inclusive_days(start, end);
                let percent = round_to_tenth((elapsed as f64 / total as f64 * 100.0).min(100.0));
                (ProtocolPhase::Active, elapsed, Some(percent))
            }
            None => (
                ProtocolPhase::Ongoing,
                inclusive_days(start, reference_date),
                None,
            ),
        }
    };

    ProtocolProgress {
        prescription_id: prescription.id.clone(),
        exercise_id: prescription.exercise_id.clone(),
        phase,
        start_date: start,
        end_date: end,
        days_elapsed,
        progress_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_phases() {
        let rx = Prescription::new("rx", "squat", "2026-10-05");

        let upcoming = progress_for(&rx, day(10), Some(day(19)), day(5));
        assert_eq!(upcoming.phase, ProtocolPhase::Upcoming);
        assert_eq!(upcoming.progress_percent, Some(0.0));
        assert_eq!(upcoming.days_elapsed, 0);

        let active = progress_for(&rx, day(10), Some(day(19)), day(14));
        assert_eq!(active.phase, ProtocolPhase::Active);
        assert_eq!(active.days_elapsed, 5);
        assert_eq!(active.progress_percent, Some(50.0));

        let last_day = progress_for(&rx, day(10), Some(day(19)), day(19));
        assert_eq!(last_day.phase, ProtocolPhase::Active);
        assert_eq!(last_day.progress_percent, Some(100.0));

        let completed = progress_for(&rx, day(10), Some(day(19)), day(25));
        assert_eq!(completed.phase, ProtocolPhase::Completed);
        assert_eq!(completed.days_elapsed, 10);

        let ongoing = progress_for(&rx, day(10), None, day(12));
        assert_eq!(ongoing.phase, ProtocolPhase::Ongoing);
        assert_eq!(ongoing.days_elapsed, 3);
        assert_eq!(ongoing.progress_percent, None);
    }
}
