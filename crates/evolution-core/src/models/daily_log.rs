// ABOUTME: Daily symptom self-report independent of exercise sessions
// ABOUTME: Pain, energy, sleep quality and mood with lazy range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::check_scale;
use crate::constants::scales::{
    ENERGY_MAX, ENERGY_MIN, PAIN_MAX, PAIN_MIN, SLEEP_MAX, SLEEP_MIN,
};
use crate::dates::parse_calendar_day;
use crate::errors::RecordIssue;
use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Self-reported mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Sad
    Sad,
    /// Neutral
    Neutral,
    /// Happy
    Happy,
}

impl FromStr for Mood {
    type Err = RecordIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sad" | "triste" => Ok(Self::Sad),
            "neutral" | "neutro" => Ok(Self::Neutral),
            "happy" | "feliz" => Ok(Self::Happy),
            _ => Err(RecordIssue::UnknownMood(s.to_owned())),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sad => "sad",
            Self::Neutral => "neutral",
            Self::Happy => "happy",
        };
        f.write_str(label)
    }
}

/// A daily symptom self-report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Log identifier
    #[serde(default)]
    pub id: String,
    /// Patient who reported
    #[serde(default)]
    pub patient_id: String,
    /// Day the report refers to
    pub date: String,
    /// Pain level (0-10)
    pub pain_level: i64,
    /// Energy level (1-5)
    pub energy_level: i64,
    /// Sleep quality (1-5)
    pub sleep_quality: i64,
    /// Mood label (sad, neutral, happy)
    pub mood: String,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyLog {
    /// Create a daily report
    pub fn new(
        date: impl Into<String>,
        pain_level: i64,
        energy_level: i64,
        sleep_quality: i64,
        mood: Mood,
    ) -> Self {
        Self {
            id: String::new(),
            patient_id: String::new(),
            date: date.into(),
            pain_level,
            energy_level,
            sleep_quality,
            mood: mood.to_string(),
            notes: None,
        }
    }

    /// Set the log identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach free-text notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Local calendar day of the report
    ///
    /// # Errors
    ///
    /// Returns a [`RecordIssue`] when the date is missing or malformed.
    pub fn calendar_day(&self, offset: &FixedOffset) -> Result<NaiveDate, RecordIssue> {
        parse_calendar_day(&self.date, offset)
    }

    /// Validated pain level
    ///
    /// # Errors
    ///
    /// Returns a [`RecordIssue`] when outside 0-10.
    pub fn pain(&self) -> Result<u8, RecordIssue> {
        check_scale("painLevel", self.pain_level, PAIN_MIN, PAIN_MAX)
    }

    /// Validated energy level
    ///
    /// # Errors
    ///
    /// Returns a [`RecordIssue`] when outside 1-5.
    pub fn energy(&self) -> Result<u8, RecordIssue> {
        check_scale("energyLevel", self.energy_level, ENERGY_MIN, ENERGY_MAX)
    }

    /// Validated sleep quality
    ///
    /// # Errors
    ///
    /// Returns a [`RecordIssue`] when outside 1-5.
    pub fn sleep(&self) -> Result<u8, RecordIssue> {
        check_scale("sleepQuality", self.sleep_quality, SLEEP_MIN, SLEEP_MAX)
    }

    /// Parsed mood
    ///
    /// # Errors
    ///
    /// Returns a [`RecordIssue`] for labels outside sad/neutral/happy.
    pub fn mood(&self) -> Result<Mood, RecordIssue> {
        self.mood.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_validation() {
        let log = DailyLog::new("2026-10-10", 4, 3, 5, Mood::Happy);
        assert_eq!(log.pain(), Ok(4));
        assert_eq!(log.energy(), Ok(3));
        assert_eq!(log.sleep(), Ok(5));
        assert_eq!(log.mood(), Ok(Mood::Happy));

        let bad = DailyLog {
            energy_level: 0,
            sleep_quality: 6,
            pain_level: -1,
            ..log
        };
        assert!(bad.pain().is_err());
        assert!(bad.energy().is_err());
        assert!(bad.sleep().is_err());
    }

    #[test]
    fn test_mood_parsing_accepts_portuguese_labels() {
        assert_eq!("Feliz".parse::<Mood>(), Ok(Mood::Happy));
        assert_eq!(" neutral ".parse::<Mood>(), Ok(Mood::Neutral));
        assert_eq!(
            "angry".parse::<Mood>(),
            Err(RecordIssue::UnknownMood("angry".to_owned()))
        );
    }
}
