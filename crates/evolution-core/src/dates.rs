// ABOUTME: Calendar-day parsing for the date strings delivered by the data-access layer
// ABOUTME: Reduces timestamps to local calendar days and renders day labels for charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calendar-day handling
//!
//! Every "same day" comparison in the analytics happens on the local calendar
//! day of the clinic, never on 24-hour windows. RFC 3339 timestamps carry an
//! offset and are converted into the clinic's offset first; naive timestamps
//! and plain dates are taken as already local.

use crate::constants::date_formats;
use crate::errors::RecordIssue;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parse a record date into the clinic-local calendar day
///
/// # Errors
///
/// Returns a [`RecordIssue`] when the string is empty or matches none of the
/// accepted formats. Callers skip the record.
pub fn parse_calendar_day(raw: &str, offset: &FixedOffset) -> Result<NaiveDate, RecordIssue> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RecordIssue::MissingDate);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(offset).date_naive());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, date_formats::DATE) {
        return Ok(date);
    }

    date_formats::NAIVE_DATETIMES
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|timestamp| timestamp.date())
        .ok_or_else(|| RecordIssue::MalformedDate(raw.to_owned()))
}

/// Inclusive day count between two calendar days (`from` and `to` both count)
#[must_use]
pub fn inclusive_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}

/// Short `dd/mm` label used on chart axes
#[must_use]
pub fn chart_label(date: NaiveDate) -> String {
    date.format(date_formats::CHART_LABEL).to_string()
}

/// Language of the weekday labels in the adherence calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DayLabels {
    /// Brazilian Portuguese abbreviations (Seg, Ter, ...)
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English abbreviations (Mon, Tue, ...)
    #[serde(rename = "en")]
    En,
}

impl DayLabels {
    /// Abbreviated weekday name for a calendar day
    #[must_use]
    pub const fn weekday_label(self, weekday: Weekday) -> &'static str {
        match self {
            Self::PtBr => match weekday {
                Weekday::Mon => "Seg",
                Weekday::Tue => "Ter",
                Weekday::Wed => "Qua",
                Weekday::Thu => "Qui",
                Weekday::Fri => "Sex",
                Weekday::Sat => "Sáb",
                Weekday::Sun => "Dom",
            },
            Self::En => match weekday {
                Weekday::Mon => "Mon",
                Weekday::Tue => "Tue",
                Weekday::Wed => "Wed",
                Weekday::Thu => "Thu",
                Weekday::Fri => "Fri",
                Weekday::Sat => "Sat",
                Weekday::Sun => "Sun",
            },
        }
    }

    /// Label for a calendar day
    #[must_use]
    pub fn label(self, date: NaiveDate) -> String {
        self.weekday_label(date.weekday()).to_owned()
    }
}

impl FromStr for DayLabels {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Self::PtBr),
            "en" | "en-us" | "en_us" => Ok(Self::En),
            other => Err(format!("unsupported day label language `{other}`")),
        }
    }
}
