// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Clinical scale ranges, analysis windows, and accepted date formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain.

/// Closed ranges of the self-reported clinical scales
pub mod scales {
    /// Lowest pain level on the numeric rating scale
    pub const PAIN_MIN: i64 = 0;
    /// Highest pain level on the numeric rating scale
    pub const PAIN_MAX: i64 = 10;
    /// Lowest energy level
    pub const ENERGY_MIN: i64 = 1;
    /// Highest energy level
    pub const ENERGY_MAX: i64 = 5;
    /// Lowest sleep quality
    pub const SLEEP_MIN: i64 = 1;
    /// Highest sleep quality
    pub const SLEEP_MAX: i64 = 5;
}

/// Analysis windows (calendar days)
pub mod windows {
    /// Days in the trailing adherence window, reference day included
    pub const ADHERENCE_WINDOW_DAYS: u32 = 7;
    /// Default look-back for the pain trend
    pub const DEFAULT_PAIN_TREND_WINDOW_DAYS: u32 = 30;
    /// Default look-back for the wellness summary
    pub const DEFAULT_WELLNESS_WINDOW_DAYS: u32 = 30;
    /// Largest configurable look-back
    pub const MAX_WINDOW_DAYS: u32 = 365;
}

/// Goal tracking thresholds
pub mod goals {
    /// Points below time-based expected progress still counted as on track
    pub const DEFAULT_PROGRESS_TOLERANCE_PERCENT: f64 = 10.0;
    /// Progress at which a goal counts as achieved
    pub const ACHIEVED_PERCENT: f64 = 100.0;
}

/// Date parsing and display formats
pub mod date_formats {
    /// Plain calendar date
    pub const DATE: &str = "%Y-%m-%d";
    /// Naive timestamps, `T` or space separated, optional fractional seconds
    pub const NAIVE_DATETIMES: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    /// Chart axis label (day/month)
    pub const CHART_LABEL: &str = "%d/%m";
    /// Largest accepted clinic offset from UTC, in minutes
    pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the logging setup
    pub const PHYSIO_EVOLUTION: &str = "physio-evolution";
}
