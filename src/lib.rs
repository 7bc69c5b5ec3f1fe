// ABOUTME: Main library entry point for the physiotherapy patient evolution analytics
// ABOUTME: Exposes the evolution calculator facade, JSON input boundary and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Physio Evolution
//!
//! Analytics behind a patient's "evolution" view in a physiotherapy practice:
//! how consistently prescribed exercises are performed, how self-reported
//! pain moves over time, and how far therapist goals and treatment protocols
//! have progressed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use physio_evolution::{EvolutionCalculator, PatientEvolutionInput};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let calculator = EvolutionCalculator::from_env()?;
//! let input = PatientEvolutionInput::from_json(
//!     r#"{"prescriptions":[],"exerciseLogs":[],"dailyLogs":[],"goals":[]}"#,
//! )?;
//! let report = calculator.report_today(&input);
//! assert_eq!(report.adherence.adherence_rate, 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **evolution-core**: record models, calendar days, error types
//! - **evolution-intelligence**: the pure calculators
//! - **this crate**: configuration-driven facade, JSON boundary, logging

/// Evolution calculator facade and combined report
pub mod calculator;

/// JSON input boundary
pub mod input;

/// Structured logging setup
pub mod logging;

pub use calculator::{EvolutionCalculator, EvolutionReport};
pub use input::PatientEvolutionInput;
pub use logging::{LogFormat, LoggingConfig};

pub use evolution_core::dates::{parse_calendar_day, DayLabels};
pub use evolution_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, RecordIssue};
pub use evolution_core::models::{DailyLog, ExerciseLog, Mood, Prescription, TherapistGoal};
pub use evolution_intelligence::{
    compute_adherence, compute_goal_progress, compute_pain_trend, AdherenceCalculator,
    AdherenceSummary, ConfigError, DayAdherence, DayStatus, EvolutionConfig, GoalProgress,
    GoalStatus, GoalTracker, MoodDistribution, PainTrendCalculator, PainTrendDirection,
    PainTrendPoint, ProtocolPhase, ProtocolProgress, ProtocolTracker, WellnessAnalyzer,
    WellnessSummary,
};
