// ABOUTME: Evolution calculator facade combining all analytics under one configuration
// ABOUTME: Resolves "today" from the clinic offset only at this outermost call site
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Evolution Calculator
//!
//! Every method taking a `reference_date` is a pure function of its
//! arguments. The `*_today` variants read the clock once, in the configured
//! clinic offset, and delegate.

use crate::input::PatientEvolutionInput;
use chrono::{NaiveDate, Utc};
use evolution_core::errors::AppResult;
use evolution_core::models::{DailyLog, ExerciseLog, Prescription, TherapistGoal};
use evolution_intelligence::{
    AdherenceCalculator, AdherenceSummary, ConfigError, EvolutionConfig, GoalProgress,
    GoalTracker, PainTrendCalculator, PainTrendDirection, PainTrendPoint, ProtocolProgress,
    ProtocolTracker, WellnessAnalyzer, WellnessSummary,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

/// Everything the evolution tab displays for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionReport {
    /// Day the report was computed for
    pub reference_date: NaiveDate,
    /// Trailing 7-day adherence
    pub adherence: AdherenceSummary,
    /// Merged daily pain trend
    pub pain_trend: Vec<PainTrendPoint>,
    /// Direction of the pain trend, `None` with fewer than two days
    pub pain_trend_direction: Option<PainTrendDirection>,
    /// Progress per therapist goal, input order
    pub goals: Vec<GoalProgress>,
    /// Daily self-report summary
    pub wellness: WellnessSummary,
    /// Progress per prescription period, input order
    pub protocols: Vec<ProtocolProgress>,
}

/// Facade over the evolution analytics
#[derive(Debug, Clone)]
pub struct EvolutionCalculator {
    config: EvolutionConfig,
    adherence: AdherenceCalculator,
    pain_trend: PainTrendCalculator,
    goals: GoalTracker,
    wellness: WellnessAnalyzer,
    protocols: ProtocolTracker,
}

impl Default for EvolutionCalculator {
    fn default() -> Self {
        Self::build(EvolutionConfig::default())
    }
}

impl EvolutionCalculator {
    /// Create a calculator from validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a setting is out of range
    pub fn new(config: EvolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a calculator from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a loaded setting is out of range
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::build(EvolutionConfig::load()?))
    }

    fn build(config: EvolutionConfig) -> Self {
        Self {
            adherence: AdherenceCalculator::from_config(&config),
            pain_trend: PainTrendCalculator::from_config(&config),
            goals: GoalTracker::from_config(&config),
            wellness: WellnessAnalyzer::from_config(&config),
            protocols: ProtocolTracker::from_config(&config),
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Current calendar day in the clinic's offset
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.config.offset()).date_naive()
    }

    /// Adherence over the 7 days ending at `reference_date`
    #[must_use]
    pub fn adherence(
        &self,
        prescriptions: &[Prescription],
        exercise_logs: &[ExerciseLog],
        reference_date: NaiveDate,
    ) -> AdherenceSummary {
        self.adherence
            .compute(prescriptions, exercise_logs, reference_date)
    }

    /// Adherence over the 7 days ending today
    #[must_use]
    pub fn adherence_today(
        &self,
        prescriptions: &[Prescription],
        exercise_logs: &[ExerciseLog],
    ) -> AdherenceSummary {
        self.adherence(prescriptions, exercise_logs, self.today())
    }

    /// Pain trend over the configured window ending at `reference_date`
    #[must_use]
    pub fn pain_trend(
        &self,
        daily_logs: &[DailyLog],
        exercise_logs: &[ExerciseLog],
        reference_date: NaiveDate,
    ) -> Vec<PainTrendPoint> {
        self.pain_trend
            .compute(daily_logs, exercise_logs, reference_date)
    }

    /// Pain trend over the configured window ending today
    #[must_use]
    pub fn pain_trend_today(
        &self,
        daily_logs: &[DailyLog],
        exercise_logs: &[ExerciseLog],
    ) -> Vec<PainTrendPoint> {
        self.pain_trend(daily_logs, exercise_logs, self.today())
    }

    /// Progress and schedule status of one goal on `reference_date`
    #[must_use]
    pub fn goal_progress(&self, goal: &TherapistGoal, reference_date: NaiveDate) -> GoalProgress {
        self.goals.assess(goal, reference_date)
    }

    /// Daily self-report summary over the configured window
    #[must_use]
    pub fn wellness(&self, daily_logs: &[DailyLog], reference_date: NaiveDate) -> WellnessSummary {
        self.wellness.summarize(daily_logs, reference_date)
    }

    /// Period progress of every prescription
    #[must_use]
    pub fn protocols(
        &self,
        prescriptions: &[Prescription],
        reference_date: NaiveDate,
    ) -> Vec<ProtocolProgress> {
        self.protocols.compute(prescriptions, reference_date)
    }

    /// Full report for one patient on `reference_date`
    #[must_use]
    pub fn report(&self, input: &PatientEvolutionInput, reference_date: NaiveDate) -> EvolutionReport {
        let span = info_span!("evolution_report", %reference_date);
        let _guard = span.enter();

        let pain_trend = self.pain_trend(&input.daily_logs, &input.exercise_logs, reference_date);
        let report = EvolutionReport {
            reference_date,
            adherence: self.adherence(&input.prescriptions, &input.exercise_logs, reference_date),
            pain_trend_direction: PainTrendDirection::from_points(&pain_trend),
            pain_trend,
            goals: self.goals.assess_all(&input.goals, reference_date),
            wellness: self.wellness(&input.daily_logs, reference_date),
            protocols: self.protocols(&input.prescriptions, reference_date),
        };

        debug!(
            adherence_rate = report.adherence.adherence_rate,
            pain_days = report.pain_trend.len(),
            goals = report.goals.len(),
            protocols = report.protocols.len(),
            "built evolution report"
        );
        report
    }

    /// Full report for one patient today
    #[must_use]
    pub fn report_today(&self, input: &PatientEvolutionInput) -> EvolutionReport {
        self.report(input, self.today())
    }

    /// Parse a JSON payload and build its report
    ///
    /// # Errors
    ///
    /// Returns an error when the payload is malformed or misses a required
    /// collection; malformed individual records never fail the call
    pub fn report_from_json(&self, json: &str, reference_date: NaiveDate) -> AppResult<EvolutionReport> {
        let input = PatientEvolutionInput::from_json(json)?;
        Ok(self.report(&input, reference_date))
    }
}
