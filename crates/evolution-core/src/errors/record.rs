// ABOUTME: Per-record data-quality issues that cause a record or sample to be skipped
// ABOUTME: Never surfaced to callers as failures; logged with the record reference instead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Why an individual record (or one of its samples) was left out of an aggregate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordIssue {
    /// Date string matched none of the accepted formats
    #[error("malformed date `{0}`")]
    MalformedDate(String),

    /// Date string was empty
    #[error("missing date")]
    MissingDate,

    /// Integer scale value outside its closed range
    #[error("{field} {value} outside {min}..={max}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Value received
        value: i64,
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
    },

    /// Mood label not in the accepted set
    #[error("unknown mood `{0}`")]
    UnknownMood(String),

    /// End date precedes start date
    #[error("end date {end} precedes start date {start}")]
    InvertedPeriod {
        /// Parsed start date
        start: String,
        /// Parsed end date
        end: String,
    },
}
