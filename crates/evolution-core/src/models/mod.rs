// ABOUTME: Clinical record models consumed by the evolution analytics
// ABOUTME: Re-exports prescriptions, exercise logs, daily logs and therapist goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records as delivered by the clinic's data-access layer, already
//! filtered to a single patient by the caller. Dates stay as the raw strings
//! received and numeric scales stay as received integers: validation happens
//! lazily through the accessor methods so that one bad record can be skipped
//! without rejecting the whole payload.
//!
//! - `Prescription`: an exercise assigned to a patient
//! - `ExerciseLog`: one recorded performance of a prescribed exercise
//! - `DailyLog`: a daily symptom self-report
//! - `TherapistGoal`: a clinician-defined measurable target

mod daily_log;
mod exercise_log;
mod goal;
mod prescription;

pub use daily_log::{DailyLog, Mood};
pub use exercise_log::ExerciseLog;
pub use goal::TherapistGoal;
pub use prescription::Prescription;

use crate::errors::RecordIssue;

/// Validate an integer scale value against its closed range
pub(crate) fn check_scale(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<u8, RecordIssue> {
    if (min..=max).contains(&value) {
        // Safe: every clinical scale fits in 0..=10
        Ok(value as u8)
    } else {
        Err(RecordIssue::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
