// ABOUTME: Core types and constants for the patient evolution analytics
// ABOUTME: Foundation crate with error handling, clinical record models, and calendar days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Evolution Core
//!
//! Foundation crate providing shared types and constants for the patient
//! evolution analytics. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the per-record `RecordIssue`
//! - **constants**: Clinical scale ranges, analysis windows, date formats
//! - **dates**: Local calendar-day parsing and day labels
//! - **models**: Prescriptions, exercise logs, daily logs, therapist goals

/// Unified error handling with standard error codes
pub mod errors;

/// Constants organized by domain
pub mod constants;

/// Calendar-day parsing and labels
pub mod dates;

/// Clinical record models
pub mod models;
