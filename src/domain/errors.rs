// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core error definitions for the backup test fixtures.
//!
//! This module provides a centralized `FixtureError` enum and a `Result` type
//! used by configuration loading, metrics parsing and the fake job monitor.
//! Building a fixture never fails; only the consumers of fixtures do.

use thiserror::Error;

/// Error types encountered while loading, parsing or checking fixtures.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid metric for step {step}: {reason}")]
    MetricError { step: String, reason: String },

    #[error("No metrics registered for job: {0}")]
    JobNotFound(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<serde_json::Error> for FixtureError {
    fn from(e: serde_json::Error) -> Self {
        FixtureError::SerializationError(e.to_string())
    }
}

impl From<serde_yaml::Error> for FixtureError {
    fn from(e: serde_yaml::Error) -> Self {
        FixtureError::SerializationError(e.to_string())
    }
}

/// A specialized Result type for the backup test fixtures.
pub type Result<T> = std::result::Result<T, FixtureError>;
