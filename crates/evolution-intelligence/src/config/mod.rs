// ABOUTME: Analytics configuration: look-back windows, clinic UTC offset, goal tolerance
// ABOUTME: Defaults from domain constants with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use chrono::{FixedOffset, Offset, Utc};
use evolution_core::constants::{date_formats, goals, windows};
use evolution_core::dates::DayLabels;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Settings shared by all evolution calculators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionConfig {
    /// Days looked back by the pain trend (reference day excluded from the count)
    pub pain_trend_window_days: u32,
    /// Days looked back by the wellness summary
    pub wellness_window_days: u32,
    /// Clinic offset from UTC in minutes, defines the local calendar day
    pub utc_offset_minutes: i32,
    /// Points below time-based expected progress still counted as on track
    pub goal_tolerance_percent: f64,
    /// Language of the adherence calendar labels
    pub day_labels: DayLabels,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            pain_trend_window_days: windows::DEFAULT_PAIN_TREND_WINDOW_DAYS,
            wellness_window_days: windows::DEFAULT_WELLNESS_WINDOW_DAYS,
            utc_offset_minutes: 0,
            goal_tolerance_percent: goals::DEFAULT_PROGRESS_TOLERANCE_PERCENT,
            day_labels: DayLabels::default(),
        }
    }
}

impl EvolutionConfig {
    /// Load configuration from environment, falling back to defaults for
    /// unset or unparseable variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pain_trend_window_days: env_or(
                "EVOLUTION_PAIN_TREND_WINDOW_DAYS",
                defaults.pain_trend_window_days,
            ),
            wellness_window_days: env_or(
                "EVOLUTION_WELLNESS_WINDOW_DAYS",
                defaults.wellness_window_days,
            ),
            utc_offset_minutes: env_or("EVOLUTION_UTC_OFFSET_MINUTES", defaults.utc_offset_minutes),
            goal_tolerance_percent: env_or(
                "EVOLUTION_GOAL_TOLERANCE_PERCENT",
                defaults.goal_tolerance_percent,
            ),
            day_labels: env_or("EVOLUTION_DAY_LABELS", defaults.day_labels),
        }
    }

    /// Load from environment and validate
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a loaded setting is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Validate ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for windows outside 1-365 days, an
    /// offset beyond ±14 hours, or a tolerance outside 0-100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window_range = 1..=windows::MAX_WINDOW_DAYS;
        if !window_range.contains(&self.pain_trend_window_days) {
            return Err(ConfigError::InvalidRange(
                "pain trend window must be between 1 and 365 days",
            ));
        }
        if !window_range.contains(&self.wellness_window_days) {
            return Err(ConfigError::InvalidRange(
                "wellness window must be between 1 and 365 days",
            ));
        }
        if self.utc_offset_minutes.abs() > date_formats::MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::InvalidRange(
                "UTC offset must be within ±14 hours",
            ));
        }
        if !(0.0..=100.0).contains(&self.goal_tolerance_percent) {
            return Err(ConfigError::InvalidRange(
                "goal tolerance must be between 0 and 100 percent",
            ));
        }
        Ok(())
    }

    /// Clinic offset, UTC when the configured minutes are not representable
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    /// Set the clinic offset
    #[must_use]
    pub const fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Set the pain trend window
    #[must_use]
    pub const fn with_pain_trend_window_days(mut self, days: u32) -> Self {
        self.pain_trend_window_days = days;
        self
    }

    /// Set the calendar label language
    #[must_use]
    pub const fn with_day_labels(mut self, day_labels: DayLabels) -> Self {
        self.day_labels = day_labels;
        self
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "EVOLUTION_PAIN_TREND_WINDOW_DAYS",
        "EVOLUTION_WELLNESS_WINDOW_DAYS",
        "EVOLUTION_UTC_OFFSET_MINUTES",
        "EVOLUTION_GOAL_TOLERANCE_PERCENT",
        "EVOLUTION_DAY_LABELS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = EvolutionConfig::default();
        assert_eq!(config.pain_trend_window_days, 30);
        assert!(config.validate().is_ok());
        assert_eq!(config.offset(), Utc.fix());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides_and_fallbacks() {
        clear_env();
        env::set_var("EVOLUTION_PAIN_TREND_WINDOW_DAYS", "14");
        env::set_var("EVOLUTION_UTC_OFFSET_MINUTES", "-180");
        env::set_var("EVOLUTION_DAY_LABELS", "en");
        env::set_var("EVOLUTION_GOAL_TOLERANCE_PERCENT", "not-a-number");

        let config = EvolutionConfig::from_env();
        assert_eq!(config.pain_trend_window_days, 14);
        assert_eq!(config.utc_offset_minutes, -180);
        assert_eq!(config.day_labels, DayLabels::En);
        assert!((config.goal_tolerance_percent - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.offset().local_minus_utc(), -3 * 3600);

        clear_env();
    }

    #[test]
    fn test_validation_rejects_out_of_range_settings() {
        let base = EvolutionConfig::default();
        assert!(base.clone().with_pain_trend_window_days(0).validate().is_err());
        assert!(base
            .clone()
            .with_utc_offset_minutes(15 * 60)
            .validate()
            .is_err());
        let tolerance = EvolutionConfig {
            goal_tolerance_percent: 150.0,
            ..base
        };
        assert_eq!(
            tolerance.validate(),
            Err(ConfigError::InvalidRange(
                "goal tolerance must be between 0 and 100 percent"
            ))
        );
    }
}
