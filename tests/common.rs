// ABOUTME: Shared fixtures for the evolution analytics integration tests
// ABOUTME: Builds prescriptions, logs and goals around a fixed reference day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test fixtures for `physio_evolution`

use chrono::NaiveDate;
use physio_evolution::{
    DailyLog, ExerciseLog, Mood, PatientEvolutionInput, Prescription, TherapistGoal,
};

/// Reference day used across tests (a Thursday)
pub fn reference_day() -> NaiveDate {
    day(2026, 10, 15)
}

pub fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap()
}

/// `YYYY-MM-DD` string for a day of October 2026
pub fn october(dom: u32) -> String {
    format!("2026-10-{dom:02}")
}

/// Open-ended prescription started at the beginning of September 2026
pub fn prescription() -> Prescription {
    Prescription::new("rx-1", "squat", "2026-09-01")
        .for_patient("patient-1")
        .with_volume(3, 12)
        .with_frequency("diário")
}

/// Exercise log at 09:30 local time on a day of October 2026
pub fn exercise_log_on(dom: u32) -> ExerciseLog {
    ExerciseLog::new("rx-1", format!("2026-10-{dom:02}T09:30:00")).with_id(format!("ex-{dom}"))
}

pub fn daily_log_on(dom: u32, pain: i64) -> DailyLog {
    DailyLog::new(october(dom), pain, 3, 3, Mood::Neutral).with_id(format!("daily-{dom}"))
}

pub fn goal(target: f64, current: f64) -> TherapistGoal {
    TherapistGoal::new("Knee flexion", "degrees", target, current)
        .with_id("goal-1")
        .with_period("2026-10-01", "2026-10-31")
}

/// A realistic patient: exercises on three recent days, pain easing over the month
pub fn patient_input() -> PatientEvolutionInput {
    PatientEvolutionInput {
        prescriptions: vec![prescription()],
        exercise_logs: vec![
            exercise_log_on(10).with_pain(6),
            exercise_log_on(13),
            exercise_log_on(15).with_pain(2),
        ],
        daily_logs: vec![
            daily_log_on(1, 8),
            daily_log_on(10, 4),
            daily_log_on(14, 3),
        ],
        goals: vec![goal(120.0, 90.0)],
    }
}
