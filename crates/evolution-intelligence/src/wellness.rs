// ABOUTME: Wellness summary of daily self-reports over a trailing window
// ABOUTME: Averages pain, energy and sleep quality and tallies the mood distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::EvolutionConfig;
use crate::round_to_tenth;
use chrono::{Days, FixedOffset, NaiveDate};
use evolution_core::errors::RecordIssue;
use evolution_core::models::{DailyLog, Mood};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Count of daily logs per mood
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodDistribution {
    /// Sad reports
    pub sad: u32,
    /// Neutral reports
    pub neutral: u32,
    /// Happy reports
    pub happy: u32,
}

impl MoodDistribution {
    fn record(&mut self, mood: Mood) {
        match mood {
            Mood::Sad => self.sad += 1,
            Mood::Neutral => self.neutral += 1,
            Mood::Happy => self.happy += 1,
        }
    }

    /// Most reported mood, ties resolved toward the better mood
    #[must_use]
    pub fn predominant(&self) -> Option<Mood> {
        [
            (Mood::Happy, self.happy),
            (Mood::Neutral, self.neutral),
            (Mood::Sad, self.sad),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .fold(None, |best: Option<(Mood, u32)>, (mood, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((mood, count)),
        })
        .map(|(mood, _)| mood)
    }
}

/// Daily self-report summary over the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessSummary {
    /// Logs dated inside the window with at least one valid field
    pub log_count: u32,
    /// Mean pain (0-10), one decimal
    pub average_pain: Option<f64>,
    /// Mean energy (1-5), one decimal
    pub average_energy: Option<f64>,
    /// Mean sleep quality (1-5), one decimal
    pub average_sleep_quality: Option<f64>,
    /// Mood tallies
    pub mood_distribution: MoodDistribution,
    /// Most recent day with a counted log
    pub latest_log_date: Option<NaiveDate>,
}

#[derive(Default)]
struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    /// Add a sample; returns whether it was valid
    fn push(&mut self, sample: Result<u8, RecordIssue>, log_id: &str) -> bool {
        match sample {
            Ok(value) => {
                self.sum += f64::from(value);
                self.count += 1;
                true
            }
            Err(issue) => {
                debug!(log_id, %issue, "excluding daily log field");
                false
            }
        }
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| round_to_tenth(self.sum / f64::from(self.count)))
    }
}

/// Summarizes daily self-reports
#[derive(Debug, Clone)]
pub struct WellnessAnalyzer {
    offset: FixedOffset,
    window_days: u32,
}

impl Default for WellnessAnalyzer {
    fn default() -> Self {
        Self::from_config(&EvolutionConfig::default())
    }
}

impl WellnessAnalyzer {
    /// Create an analyzer for a clinic offset and look-back window
    #[must_use]
    pub const fn new(offset: FixedOffset, window_days: u32) -> Self {
        Self {
            offset,
            window_days,
        }
    }

    /// Create an analyzer from shared configuration
    #[must_use]
    pub fn from_config(config: &EvolutionConfig) -> Self {
        Self::new(config.offset(), config.wellness_window_days)
    }

    /// Summarize logs dated in `[reference - window, reference]` inclusive
    ///
    /// Logs with malformed dates are skipped entirely; an out-of-range field
    /// only drops out of its own average.
    #[must_use]
    pub fn summarize(&self, daily_logs: &[DailyLog], reference_date: NaiveDate) -> WellnessSummary {
        let window_start = reference_date
            .checked_sub_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MIN);

        let mut log_count = 0_u32;
        let mut pain = Mean::default();
        let mut energy = Mean::default();
        let mut sleep = Mean::default();
        let mut mood_distribution = MoodDistribution::default();
        let mut latest_log_date: Option<NaiveDate> = None;

        for log in daily_logs {
            let day = match log.calendar_day(&self.offset) {
                Ok(day) => day,
                Err(issue) => {
                    debug!(log_id = %log.id, %issue, "skipping daily log");
                    continue;
                }
            };
            if !(window_start..=reference_date).contains(&day) {
                continue;
            }

            let pain_ok = pain.push(log.pain(), &log.id);
            let energy_ok = energy.push(log.energy(), &log.id);
            let sleep_ok = sleep.push(log.sleep(), &log.id);
            let mood_ok = match log.mood() {
                Ok(mood) => {
                    mood_distribution.record(mood);
                    true
                }
                Err(issue) => {
                    debug!(log_id = %log.id, %issue, "excluding daily log mood");
                    false
                }
            };

            if pain_ok || energy_ok || sleep_ok || mood_ok {
                log_count += 1;
                latest_log_date = latest_log_date.max(Some(day));
            } else {
                debug!(log_id = %log.id, "daily log has no valid field");
            }
        }

        debug!(log_count, window_days = self.window_days, "summarized wellness");

        WellnessSummary {
            log_count,
            average_pain: pain.value(),
            average_energy: energy.value(),
            average_sleep_quality: sleep.value(),
            mood_distribution,
            latest_log_date,
        }
    }
}
