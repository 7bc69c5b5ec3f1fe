// ABOUTME: Common benchmark utilities for the evolution analytics benchmarks
// ABOUTME: Provides deterministic patient record generators for Criterion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities.

pub mod fixtures;
