// ABOUTME: Benchmark fixtures generating a patient's clinical records
// ABOUTME: Deterministic data so measurements are reproducible across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for realistic per-patient record volumes.

use chrono::{Duration, NaiveDate};
use physio_evolution::{
    DailyLog, ExerciseLog, Mood, PatientEvolutionInput, Prescription, TherapistGoal,
};

/// Predefined record volumes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RecordBatchSize {
    /// A few weeks of treatment
    Small,
    /// A typical patient
    Medium,
    /// A long-running chronic patient
    Large,
}

impl RecordBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 150,
            Self::Large => 1000,
        }
    }
}

/// Reference day all generated records lead up to
#[must_use]
pub fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap_or_default()
}

/// Generate one patient's records, one exercise log and one daily log per entry
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_patient(size: RecordBatchSize) -> PatientEvolutionInput {
    let count = size.count();
    let reference = reference_day();

    let prescriptions = vec![
        Prescription::new("bench_rx_0", "squat", "2026-01-05"),
        Prescription::new("bench_rx_1", "bridge", "2026-06-01").with_end_date("2026-12-01"),
    ];

    let exercise_logs = (0..count)
        .map(|index| {
            let day = reference - Duration::days((index % 90) as i64);
            let log = ExerciseLog::new(
                format!("bench_rx_{}", index % 2),
                format!("{}T{:02}:15:00", day.format("%Y-%m-%d"), 7 + index % 12),
            )
            .with_id(format!("bench_ex_{index}"));
            if index % 3 == 0 {
                log.with_pain((index % 11) as i64)
            } else {
                log
            }
        })
        .collect();

    let daily_logs = (0..count)
        .map(|index| {
            let day = reference - Duration::days((index % 120) as i64);
            let mood = match index % 3 {
                0 => Mood::Sad,
                1 => Mood::Neutral,
                _ => Mood::Happy,
            };
            DailyLog::new(
                day.format("%Y-%m-%d").to_string(),
                (index % 11) as i64,
                1 + (index % 5) as i64,
                1 + ((index + 2) % 5) as i64,
                mood,
            )
            .with_id(format!("bench_daily_{index}"))
        })
        .collect();

    let goals = (0..5_i32)
        .map(|index| {
            TherapistGoal::new("Range of motion", "degrees", 120.0, f64::from(index) * 25.0)
                .with_id(format!("bench_goal_{index}"))
                .with_period("2026-09-01", "2026-12-01")
        })
        .collect();

    PatientEvolutionInput {
        prescriptions,
        exercise_logs,
        daily_logs,
        goals,
    }
}
