// ABOUTME: Clinician-defined measurable treatment goal
// ABOUTME: Target and current values with the period the goal should be reached in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dates::parse_calendar_day;
use crate::errors::RecordIssue;
use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A measurable treatment target set by the therapist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistGoal {
    /// Goal identifier
    #[serde(default)]
    pub id: String,
    /// Patient the goal belongs to
    #[serde(default)]
    pub patient_id: String,
    /// What the goal measures (e.g. "Knee flexion")
    pub description: String,
    /// Unit of the values (e.g. "degrees")
    #[serde(default)]
    pub unit: String,
    /// Value that completes the goal
    pub target_value: f64,
    /// Latest measured value
    pub current_value: f64,
    /// Day the goal was set
    #[serde(default)]
    pub start_date: String,
    /// Day the goal should be reached by
    #[serde(default)]
    pub target_date: String,
}

impl TherapistGoal {
    /// Create a goal
    pub fn new(
        description: impl Into<String>,
        unit: impl Into<String>,
        target_value: f64,
        current_value: f64,
    ) -> Self {
        Self {
            id: String::new(),
            patient_id: String::new(),
            description: description.into(),
            unit: unit.into(),
            target_value,
            current_value,
            start_date: String::new(),
            target_date: String::new(),
        }
    }

    /// Set the goal identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the period the goal should be reached in
    #[must_use]
    pub fn with_period(
        mut self,
        start_date: impl Into<String>,
        target_date: impl Into<String>,
    ) -> Self {
        self.start_date = start_date.into();
        self.target_date = target_date.into();
        self
    }

    /// Goal period as local calendar days
    ///
    /// # Errors
    ///
    /// Returns a [`RecordIssue`] when either date is missing or malformed, or
    /// the target date precedes the start date.
    pub fn period(&self, offset: &FixedOffset) -> Result<(NaiveDate, NaiveDate), RecordIssue> {
        let start = parse_calendar_day(&self.start_date, offset)?;
        let target = parse_calendar_day(&self.target_date, offset)?;
        if target < start {
            return Err(RecordIssue::InvertedPeriod {
                start: start.to_string(),
                end: target.to_string(),
            });
        }
        Ok((start, target))
    }
}
