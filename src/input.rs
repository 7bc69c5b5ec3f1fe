// ABOUTME: JSON input boundary for a patient's evolution records
// ABOUTME: Rejects payloads missing a required collection and skips records that cannot be decoded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use evolution_core::errors::{AppError, AppResult};
use evolution_core::models::{DailyLog, ExerciseLog, Prescription, TherapistGoal};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// One patient's records, already filtered to that patient by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientEvolutionInput {
    /// Exercise prescriptions
    pub prescriptions: Vec<Prescription>,
    /// Recorded exercise sessions
    pub exercise_logs: Vec<ExerciseLog>,
    /// Daily symptom self-reports
    pub daily_logs: Vec<DailyLog>,
    /// Therapist goals
    pub goals: Vec<TherapistGoal>,
}

impl PatientEvolutionInput {
    /// Parse a payload from JSON text
    ///
    /// # Errors
    ///
    /// - `MISSING_REQUIRED_FIELD` when a collection is absent or `null`
    /// - `INVALID_FORMAT` for malformed JSON, a non-object payload, or a
    ///   collection that is not an array
    ///
    /// Individual records that cannot be decoded are skipped.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a payload from an already decoded JSON value
    ///
    /// # Errors
    ///
    /// Same as [`PatientEvolutionInput::from_json`].
    pub fn from_value(value: Value) -> AppResult<Self> {
        let Value::Object(mut fields) = value else {
            return Err(AppError::invalid_format(
                "patient evolution payload must be a JSON object",
            ));
        };

        Ok(Self {
            prescriptions: decode_collection(&mut fields, "prescriptions")?,
            exercise_logs: decode_collection(&mut fields, "exerciseLogs")?,
            daily_logs: decode_collection(&mut fields, "dailyLogs")?,
            goals: decode_collection(&mut fields, "goals")?,
        })
    }
}

/// Decode a required collection record by record, skipping undecodable records
fn decode_collection<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    name: &'static str,
) -> AppResult<Vec<T>> {
    let records = match fields.remove(name) {
        None | Some(Value::Null) => {
            warn!(field = name, "rejecting evolution payload without required collection");
            return Err(AppError::missing_field(name));
        }
        Some(Value::Array(records)) => records,
        Some(_) => {
            return Err(AppError::invalid_format(format!(
                "`{name}` must be an array of records"
            )));
        }
    };

    let total = records.len();
    let decoded: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(record) => Some(record),
            Err(error) => {
                debug!(collection = name, index, %error, "skipping undecodable record");
                None
            }
        })
        .collect();

    if decoded.len() < total {
        debug!(
            collection = name,
            skipped = total - decoded.len(),
            "decoded collection with skipped records"
        );
    }
    Ok(decoded)
}
