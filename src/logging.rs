// ABOUTME: Structured logging setup for applications embedding the evolution analytics
// ABOUTME: Builds an env-filtered tracing subscriber with json, pretty or compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup
//!
//! The calculators emit `tracing` events (skipped records, per-computation
//! summaries). Embedding applications that already install a subscriber need
//! nothing from here; standalone callers and tests can install one with
//! [`LoggingConfig::init`].

use anyhow::{anyhow, Result};
use evolution_core::constants::service_names;
use std::env;
use std::io;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose events follow the configured level
const LOG_TARGETS: [&str; 3] = ["physio_evolution", "evolution_intelligence", "evolution_core"];

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human readable output
    #[default]
    Pretty,
    /// Single-line output without targets or locations
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format `{other}`")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level directive applied to the analytics crates
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Emit source file and line
    pub include_location: bool,
    /// Emit thread ids and names
    pub include_thread: bool,
    /// Reported in the startup event
    pub service_name: String,
    /// Reported in the startup event
    pub service_version: String,
    /// Deployment environment; `production` turns on location and thread output
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.into(),
            format: LogFormat::default(),
            include_location: false,
            include_thread: false,
            service_name: service_names::PHYSIO_EVOLUTION.into(),
            service_version: env!("CARGO_PKG_VERSION").into(),
            environment: DEFAULT_ENVIRONMENT.into(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_THREAD`, `SERVICE_NAME` and `SERVICE_VERSION`
    ///
    /// Unknown formats fall back to pretty output.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.format),
            include_location: production || env::var_os("LOG_INCLUDE_LOCATION").is_some(),
            include_thread: production || env::var_os("LOG_INCLUDE_THREAD").is_some(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: env::var("SERVICE_VERSION").unwrap_or(defaults.service_version),
            environment,
        }
    }

    /// `RUST_LOG` when set, plus a directive per analytics crate at `level`
    ///
    /// A `level` that is not a single level (e.g. `warn,hyper=debug`) gives
    /// the analytics crates the default level, never a global directive.
    fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new);

        LOG_TARGETS.iter().fold(base, |filter, target| {
            let directive: Result<Directive, _> = format!("{target}={}", self.level)
                .parse()
                .or_else(|_| format!("{target}={DEFAULT_LEVEL}").parse());
            match directive {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let json = (self.format == LogFormat::Json).then(|| {
            fmt::layer()
                .json()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_thread_ids(self.include_thread)
                .with_thread_names(self.include_thread)
                .with_writer(io::stdout)
        });
        let pretty = (self.format == LogFormat::Pretty).then(|| {
            fmt::layer()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_thread_ids(self.include_thread)
                .with_thread_names(self.include_thread)
                .with_writer(io::stdout)
        });
        let compact = (self.format == LogFormat::Compact).then(|| {
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stdout)
        });

        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(json)
            .with(pretty)
            .with(compact)
            .try_init()
            .map_err(|e| anyhow!("tracing subscriber already installed: {e}"))?;

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.format = ?self.format,
            "evolution analytics logging ready"
        );
        Ok(())
    }
}
