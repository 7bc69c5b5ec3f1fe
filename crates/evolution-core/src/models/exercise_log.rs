// ABOUTME: Recorded performance of a prescribed exercise
// ABOUTME: Carries the session timestamp and an optional self-reported pain level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::check_scale;
use crate::constants::scales::{PAIN_MAX, PAIN_MIN};
use crate::dates::parse_calendar_day;
use crate::errors::RecordIssue;
use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single recorded performance of a prescribed exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    /// Log identifier
    #[serde(default)]
    pub id: String,
    /// Prescription the session belongs to
    pub prescription_id: String,
    /// Patient who performed the session
    #[serde(default)]
    pub patient_id: String,
    /// When the session was performed
    #[serde(alias = "completedAt", alias = "date")]
    pub performed_at: String,
    /// Pain reported after the session (0-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_level: Option<i64>,
}

impl ExerciseLog {
    /// Create a log without a pain report
    pub fn new(prescription_id: impl Into<String>, performed_at: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            prescription_id: prescription_id.into(),
            patient_id: String::new(),
            performed_at: performed_at.into(),
            pain_level: None,
        }
    }

    /// Set the log identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the self-reported pain level
    #[must_use]
    pub const fn with_pain(mut self, pain_level: i64) -> Self {
        self.pain_level = Some(pain_level);
        self
    }

    /// Local calendar day the session was performed on
    ///
    /// # Errors
    ///
    /// Returns a [`RecordIssue`] when the timestamp is missing or malformed.
    pub fn calendar_day(&self, offset: &FixedOffset) -> Result<NaiveDate, RecordIssue> {
        parse_calendar_day(&self.performed_at, offset)
    }

    /// Validated pain sample, `Ok(None)` when the patient reported none
    ///
    /// # Errors
    ///
    /// Returns a [`RecordIssue`] when the pain level is outside 0-10.
    pub fn pain(&self) -> Result<Option<u8>, RecordIssue> {
        self.pain_level
            .map(|level| check_scale("painLevel", level, PAIN_MIN, PAIN_MAX))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pain_validation() {
        let log = ExerciseLog::new("rx-1", "2026-10-10");
        assert_eq!(log.pain(), Ok(None));
        assert_eq!(log.clone().with_pain(7).pain(), Ok(Some(7)));
        assert!(matches!(
            log.with_pain(11).pain(),
            Err(RecordIssue::OutOfRange { value: 11, .. })
        ));
    }

    #[test]
    fn test_deserializes_source_field_aliases() {
        let log: ExerciseLog = serde_json::from_str(
            r#"{"prescriptionId":"rx-1","completedAt":"2026-10-10T09:00:00Z","painLevel":3}"#,
        )
        .unwrap();
        assert_eq!(log.performed_at, "2026-10-10T09:00:00Z");
        assert_eq!(log.pain_level, Some(3));
    }
}
