// ABOUTME: Exercise prescription record with its treatment period
// ABOUTME: Multiple prescriptions may be active concurrently for one patient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dates::parse_calendar_day;
use crate::errors::RecordIssue;
use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// An exercise assigned to a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    /// Prescription identifier
    pub id: String,
    /// Patient the prescription belongs to
    #[serde(default)]
    pub patient_id: String,
    /// Exercise being prescribed
    pub exercise_id: String,
    /// Sets per session
    #[serde(default)]
    pub sets: u32,
    /// Repetitions per set
    #[serde(default)]
    pub reps: u32,
    /// Free-text frequency as written by the therapist (e.g. "3x por semana")
    #[serde(default)]
    pub frequency: String,
    /// First day of the prescription
    pub start_date: String,
    /// Last day of the prescription, open-ended when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Prescription {
    /// Create an open-ended prescription
    pub fn new(
        id: impl Into<String>,
        exercise_id: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            patient_id: String::new(),
            exercise_id: exercise_id.into(),
            sets: 0,
            reps: 0,
            frequency: String::new(),
            start_date: start_date.into(),
            end_date: None,
        }
    }

    /// Set the owning patient
    #[must_use]
    pub fn for_patient(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = patient_id.into();
        self
    }

    /// Set sets and repetitions
    #[must_use]
    pub const fn with_volume(mut self, sets: u32, reps: u32) -> Self {
        self.sets = sets;
        self.reps = reps;
        self
    }

    /// Set the free-text frequency
    #[must_use]
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Close the prescription on the given day
    #[must_use]
    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Treatment period as local calendar days
    ///
    /// # Errors
    ///
    /// Returns a [`RecordIssue`] when either date is malformed or the end
    /// date precedes the start date.
    pub fn period(
        &self,
        offset: &FixedOffset,
    ) -> Result<(NaiveDate, Option<NaiveDate>), RecordIssue> {
        let start = parse_calendar_day(&self.start_date, offset)?;
        let end = self
            .end_date
            .as_deref()
            .map(|raw| parse_calendar_day(raw, offset))
            .transpose()?;

        match end {
            Some(end) if end < start => Err(RecordIssue::InvertedPeriod {
                start: start.to_string(),
                end: end.to_string(),
            }),
            _ => Ok((start, end)),
        }
    }
}
